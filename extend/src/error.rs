use thiserror::Error;

/// Returns the name used to identify a capability in errors and log events.
pub(crate) fn capability_name<S: ?Sized>() -> &'static str {
  std::any::type_name::<S>()
}

/// Errors raised while populating a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindingError {
  /// The provider could not produce an instance of the capability.
  #[error("capability not registered: {capability}")]
  NotRegistered { capability: &'static str },

  /// The binding is already populated and its policy forbids replacing it.
  #[error("capability already bound: {capability}")]
  AlreadyBound { capability: &'static str },
}

impl BindingError {
  pub(crate) fn not_registered<S: ?Sized>() -> Self {
    BindingError::NotRegistered {
      capability: capability_name::<S>(),
    }
  }

  pub(crate) fn already_bound<S: ?Sized>() -> Self {
    BindingError::AlreadyBound {
      capability: capability_name::<S>(),
    }
  }

  /// The type name of the capability involved.
  pub fn capability(&self) -> &'static str {
    match self {
      BindingError::NotRegistered { capability } | BindingError::AlreadyBound { capability } => {
        *capability
      }
    }
  }
}

/// An augmentation function was called before its binding was populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("augmentation called before initialization: {capability}")]
pub struct UninitializedBindingError {
  capability: &'static str,
}

impl UninitializedBindingError {
  pub(crate) fn new<S: ?Sized>() -> Self {
    Self {
      capability: capability_name::<S>(),
    }
  }

  /// The type name of the capability that was not bound.
  pub fn capability(&self) -> &'static str {
    self.capability
  }
}

/// The main error type for `fibre_extend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Binding(#[from] BindingError),

  #[error(transparent)]
  Uninitialized(#[from] UninitializedBindingError),
}

/// A specialized `Result` type for `fibre_extend` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
