//! Per-binding configuration.

/// What a binding does when it is populated a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RebindPolicy {
  /// The new service silently replaces the old one.
  #[default]
  Replace,
  /// The second population fails with `BindingError::AlreadyBound`.
  Reject,
}

/// Options for a [`Binding`](crate::Binding) or
/// [`DeferredBinding`](crate::DeferredBinding).
///
/// All constructors are `const` so options can be supplied to a binding
/// declared as a `static`.
///
/// With the `serde` feature enabled, options can be read from the same
/// configuration files the rest of an application uses:
///
/// ```yaml
/// rebind: reject
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Options {
  pub rebind: RebindPolicy,
}

impl Options {
  pub const fn new() -> Self {
    Self {
      rebind: RebindPolicy::Replace,
    }
  }

  /// Sets the rebind policy.
  pub const fn rebind(self, policy: RebindPolicy) -> Self {
    Self {
      rebind: policy,
      ..self
    }
  }
}
