//! The deferred registry cell.

use crate::binding::install;
use crate::error::{capability_name, BindingError, Error, Result, UninitializedBindingError};
use crate::options::Options;
use crate::provider::Resolve;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A binding that stores the provider instead of the service.
///
/// Resolution happens on every read, so registrations made in the container
/// after [`initialize`](DeferredBinding::initialize) are picked up, and a
/// missing registration is reported at call time as
/// [`Error::Binding`] rather than during bootstrap.
///
/// Use [`Binding`](crate::Binding) unless late registration is actually
/// needed.
pub struct DeferredBinding<S: ?Sized + 'static> {
  slot: RwLock<Option<Arc<dyn Resolve<S> + Send + Sync>>>,
  options: Options,
}

impl<S: ?Sized + 'static> DeferredBinding<S> {
  pub const fn new() -> Self {
    Self::with_options(Options::new())
  }

  pub const fn with_options(options: Options) -> Self {
    Self {
      slot: parking_lot::const_rwlock(None),
      options,
    }
  }

  /// Stores `provider` for later resolution.
  ///
  /// Only fails under [`RebindPolicy::Reject`](crate::RebindPolicy::Reject)
  /// when a provider is already stored.
  pub fn initialize<P>(&self, provider: P) -> Result<(), BindingError>
  where
    P: Resolve<S> + Send + Sync + 'static,
  {
    let provider: Arc<dyn Resolve<S> + Send + Sync> = Arc::new(provider);
    install::<S, _>(&self.slot, provider, self.options)
  }

  /// Resolves the capability from the stored provider.
  pub fn get(&self) -> Result<Arc<S>> {
    let provider = self.slot.read().as_ref().map(Arc::clone).ok_or_else(|| {
      tracing::trace!(capability = capability_name::<S>(), "deferred binding read before initialization");
      UninitializedBindingError::new::<S>()
    })?;

    provider.resolve().ok_or_else(|| {
      let err = BindingError::not_registered::<S>();
      tracing::warn!(capability = err.capability(), "deferred provider could not resolve capability");
      Error::from(err)
    })
  }

  /// Calls `f` with a freshly resolved service.
  pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R> {
    let service = self.get()?;
    Ok(f(&service))
  }

  /// Whether a provider is stored. Says nothing about whether it can resolve.
  pub fn is_bound(&self) -> bool {
    self.slot.read().is_some()
  }

  pub fn options(&self) -> Options {
    self.options
  }
}

impl<S: ?Sized + 'static> Default for DeferredBinding<S> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: ?Sized + 'static> fmt::Debug for DeferredBinding<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DeferredBinding")
      .field("capability", &capability_name::<S>())
      .field("bound", &self.is_bound())
      .field("options", &self.options)
      .finish()
  }
}
