//! Capability-resolving providers.
//!
//! A binding only needs one thing from a container: "give me an instance of
//! `S`, or tell me there is none". That is the [`Resolve`] trait. It is
//! implemented for the Fibre IoC [`Container`] so a container built during
//! bootstrap can be handed straight to `initialize`.

use fibre_ioc::Container;
use std::any::Any;
use std::sync::Arc;

/// Something that can produce an instance of the capability `S`.
pub trait Resolve<S: ?Sized> {
  /// Produces an instance, or `None` if nothing is registered for `S`.
  fn resolve(&self) -> Option<Arc<S>>;
}

// --- Container ---

impl<S: ?Sized + Any + Send + Sync> Resolve<S> for Container {
  fn resolve(&self) -> Option<Arc<S>> {
    self.get::<S>(None)
  }
}

/// Resolves a named registration from a [`Container`].
///
/// # Examples
///
/// ```
/// use fibre_extend::{Binding, Named};
/// use fibre_ioc::Container;
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
/// struct German;
/// impl Greeter for German {
///   fn greet(&self) -> String {
///     "Hallo!".to_string()
///   }
/// }
///
/// let container = Container::new();
/// container.add_singleton_trait_with_name::<dyn Greeter>("german", || Arc::new(German));
///
/// let greeter: Binding<dyn Greeter> = Binding::new();
/// greeter.initialize(&Named::new(&container, "german")).unwrap();
/// assert_eq!(greeter.with(|g| g.greet()).unwrap(), "Hallo!");
/// ```
#[derive(Clone, Copy)]
pub struct Named<'a> {
  container: &'a Container,
  name: &'a str,
}

impl<'a> Named<'a> {
  pub fn new(container: &'a Container, name: &'a str) -> Self {
    Self { container, name }
  }
}

impl<S: ?Sized + Any + Send + Sync> Resolve<S> for Named<'_> {
  fn resolve(&self) -> Option<Arc<S>> {
    self.container.get::<S>(Some(self.name))
  }
}

// --- Closures ---

/// A provider backed by a closure. Created with [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Wraps a closure as a provider.
///
/// ```
/// use fibre_extend::{from_fn, Binding};
/// use std::sync::Arc;
///
/// let answer: Binding<u32> = Binding::new();
/// answer.initialize(&from_fn(|| Some(Arc::new(42u32)))).unwrap();
/// assert_eq!(*answer.get().unwrap(), 42);
/// ```
pub fn from_fn<S, F>(f: F) -> FromFn<F>
where
  S: ?Sized,
  F: Fn() -> Option<Arc<S>>,
{
  FromFn(f)
}

impl<S, F> Resolve<S> for FromFn<F>
where
  S: ?Sized,
  F: Fn() -> Option<Arc<S>>,
{
  fn resolve(&self) -> Option<Arc<S>> {
    (self.0)()
  }
}

// --- Forwarding ---

impl<S: ?Sized, P: Resolve<S> + ?Sized> Resolve<S> for &P {
  fn resolve(&self) -> Option<Arc<S>> {
    (**self).resolve()
  }
}

impl<S: ?Sized, P: Resolve<S> + ?Sized> Resolve<S> for Arc<P> {
  fn resolve(&self) -> Option<Arc<S>> {
    (**self).resolve()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  trait Shape: Send + Sync {
    fn sides(&self) -> u32;
  }

  struct Square;
  impl Shape for Square {
    fn sides(&self) -> u32 {
      4
    }
  }

  #[test]
  fn container_resolves_trait_registrations() {
    let container = Container::new();
    assert!(Resolve::<dyn Shape>::resolve(&container).is_none());

    container.add_singleton_trait::<dyn Shape>(|| Arc::new(Square));
    let shape: Arc<dyn Shape> = container.resolve().unwrap();
    assert_eq!(shape.sides(), 4);
  }

  #[test]
  fn named_only_sees_its_own_registration() {
    let container = Container::new();
    container.add_singleton_trait_with_name::<dyn Shape>("square", || Arc::new(Square));

    let square: Option<Arc<dyn Shape>> = Named::new(&container, "square").resolve();
    let missing: Option<Arc<dyn Shape>> = Named::new(&container, "circle").resolve();
    let unnamed: Option<Arc<dyn Shape>> = container.resolve();

    assert_eq!(square.map(|s| s.sides()), Some(4));
    assert!(missing.is_none());
    assert!(unnamed.is_none());
  }

  #[test]
  fn forwarding_impls_delegate() {
    let provider = Arc::new(from_fn(|| Some(Arc::new(Square) as Arc<dyn Shape>)));
    let via_arc: Option<Arc<dyn Shape>> = provider.resolve();
    let via_ref: Option<Arc<dyn Shape>> = (&provider).resolve();
    assert!(via_arc.is_some());
    assert!(via_ref.is_some());
  }
}
