//! The eager registry cell.

use crate::error::{capability_name, BindingError, UninitializedBindingError};
use crate::options::{Options, RebindPolicy};
use crate::provider::Resolve;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A process-wide slot holding the service that augmentation functions
/// delegate to.
///
/// The capability is resolved once, inside [`initialize`](Binding::initialize),
/// and the resolved `Arc<S>` is stored. Every read goes through the lock, so a
/// call that happens after `initialize` returns always sees the binding.
///
/// `Binding::new` is `const`, which lets a binding be declared as a plain
/// `static`:
///
/// ```
/// use fibre_extend::{from_fn, Binding};
/// use std::sync::Arc;
///
/// trait Clock: Send + Sync {
///   fn now(&self) -> u64;
/// }
/// struct Fixed;
/// impl Clock for Fixed {
///   fn now(&self) -> u64 {
///     1_700_000_000
///   }
/// }
///
/// static CLOCK: Binding<dyn Clock> = Binding::new();
///
/// fn main() {
///   assert!(CLOCK.with(|c| c.now()).is_err());
///
///   CLOCK
///     .initialize(&from_fn(|| Some(Arc::new(Fixed) as Arc<dyn Clock>)))
///     .unwrap();
///   assert_eq!(CLOCK.with(|c| c.now()).unwrap(), 1_700_000_000);
/// }
/// ```
pub struct Binding<S: ?Sized> {
  slot: RwLock<Option<Arc<S>>>,
  options: Options,
}

impl<S: ?Sized> Binding<S> {
  /// Creates an empty binding with default options.
  pub const fn new() -> Self {
    Self::with_options(Options::new())
  }

  /// Creates an empty binding with the given options.
  pub const fn with_options(options: Options) -> Self {
    Self {
      slot: parking_lot::const_rwlock(None),
      options,
    }
  }

  /// Resolves the capability from `provider` and stores it.
  ///
  /// Fails with [`BindingError::NotRegistered`] if the provider has nothing
  /// for `S`. On failure the binding is left exactly as it was.
  pub fn initialize<P>(&self, provider: &P) -> Result<(), BindingError>
  where
    P: Resolve<S> + ?Sized,
  {
    // Resolve outside the lock; factories may call back into augmentation functions.
    let service = provider.resolve().ok_or_else(|| {
      let err = BindingError::not_registered::<S>();
      tracing::warn!(capability = err.capability(), "provider could not resolve capability");
      err
    })?;
    self.bind(service)
  }

  /// Stores an already resolved service.
  pub fn bind(&self, service: Arc<S>) -> Result<(), BindingError> {
    install::<S, _>(&self.slot, service, self.options)
  }

  /// Returns the bound service.
  pub fn get(&self) -> Result<Arc<S>, UninitializedBindingError> {
    match self.slot.read().as_ref() {
      Some(service) => Ok(Arc::clone(service)),
      None => {
        tracing::trace!(capability = capability_name::<S>(), "binding read before initialization");
        Err(UninitializedBindingError::new::<S>())
      }
    }
  }

  /// Calls `f` with the bound service and returns its result unchanged.
  ///
  /// The lock is released before `f` runs.
  pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R, UninitializedBindingError> {
    let service = self.get()?;
    Ok(f(&service))
  }

  pub fn is_bound(&self) -> bool {
    self.slot.read().is_some()
  }

  pub fn options(&self) -> Options {
    self.options
  }
}

impl<S: ?Sized> Default for Binding<S> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: ?Sized> fmt::Debug for Binding<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Binding")
      .field("capability", &capability_name::<S>())
      .field("bound", &self.is_bound())
      .field("options", &self.options)
      .finish()
  }
}

/// Writes `value` into `slot` according to the rebind policy.
///
/// `S` only names the capability in errors and log events.
pub(crate) fn install<S: ?Sized, T>(
  slot: &RwLock<Option<T>>,
  value: T,
  options: Options,
) -> Result<(), BindingError> {
  let capability = capability_name::<S>();
  let mut guard = slot.write();

  if guard.is_some() && options.rebind == RebindPolicy::Reject {
    drop(guard);
    tracing::warn!(capability, "rejected attempt to rebind capability");
    return Err(BindingError::already_bound::<S>());
  }

  let previous = guard.replace(value);
  drop(guard);

  if previous.is_some() {
    tracing::warn!(capability, "replaced existing capability binding");
  } else {
    tracing::debug!(capability, "capability bound");
  }
  // The old value is dropped here, outside the lock.
  drop(previous);
  Ok(())
}
