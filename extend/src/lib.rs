//! # Fibre Extend
//!
//! Process-wide service bindings for extension functions.
//!
//! Extension functions (free functions, or extension traits layered on top of
//! them) often need a service that normally lives in an IoC container. Rather
//! than passing the container to every call site, Fibre Extend binds the
//! service once during bootstrap and lets the functions reach it through a
//! static [`Binding`].
//!
//! ## Core Concepts
//!
//! - **Binding**: a `static` cell holding the resolved service. It starts
//!   empty and is populated by [`Binding::initialize`].
//! - **Provider**: anything implementing [`Resolve`], most commonly a
//!   `fibre_ioc::Container`.
//! - **Facade**: the [`facade!`] macro declares a binding plus one function per
//!   service operation. Each function checks the binding on every call and
//!   fails with [`UninitializedBindingError`] if bootstrap has not run.
//! - **Deferred bindings**: [`DeferredBinding`] stores the provider and
//!   resolves on every call instead.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_extend::facade;
//! use fibre_ioc::global;
//! use std::sync::Arc;
//!
//! #[derive(Debug, PartialEq)]
//! struct Sample {
//!   name: String,
//!   value: i32,
//! }
//!
//! trait Enhancer: Send + Sync {
//!   fn enhance(&self, sample: &Sample) -> Sample;
//! }
//!
//! struct Uppercase;
//! impl Enhancer for Uppercase {
//!   fn enhance(&self, sample: &Sample) -> Sample {
//!     Sample {
//!       name: sample.name.to_uppercase(),
//!       value: sample.value.wrapping_mul(2),
//!     }
//!   }
//! }
//!
//! facade! {
//!   static ENHANCER: Binding<dyn Enhancer>;
//!
//!   fn enhance(sample: &Sample) -> Sample => enhance;
//! }
//!
//! fn main() {
//!   // Bootstrap: register the service and bind it once.
//!   global().add_singleton_trait::<dyn Enhancer>(|| Arc::new(Uppercase));
//!   ENHANCER.initialize(global()).unwrap();
//!
//!   // Anywhere else in the application.
//!   let sample = Sample { name: "test".to_string(), value: 42 };
//!   let enhanced = enhance(&sample).unwrap();
//!   assert_eq!(enhanced, Sample { name: "TEST".to_string(), value: 84 });
//! }
//! ```

mod binding;
mod deferred;
mod error;
mod macros;
mod options;
mod provider;

pub use binding::Binding;
pub use deferred::DeferredBinding;
pub use error::{BindingError, Error, Result, UninitializedBindingError};
pub use options::{Options, RebindPolicy};
pub use provider::{from_fn, FromFn, Named, Resolve};
