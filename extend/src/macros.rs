//! Public macros for declaring augmentation functions.

/// Declares a static [`Binding`](crate::Binding) or
/// [`DeferredBinding`](crate::DeferredBinding) together with free functions
/// that delegate to the bound service.
///
/// Each generated function checks the binding on every call, forwards its
/// arguments to the named method of the service and returns the result
/// unchanged. If the binding has not been initialized the function returns
/// [`UninitializedBindingError`](crate::UninitializedBindingError).
///
/// Declaring `static NAME: DeferredBinding<..>` instead generates functions
/// returning `Result<_, fibre_extend::Error>`, since a deferred binding can
/// also fail to resolve at call time.
///
/// The syntax for each function is
/// `fn name(args..) -> ReturnType => service_method;`.
/// An optional `= options` after the binding type sets its
/// [`Options`](crate::Options).
///
/// # Examples
///
/// ```
/// use fibre_extend::facade;
/// use fibre_ioc::Container;
/// use std::sync::Arc;
///
/// #[derive(Debug, PartialEq)]
/// struct Money {
///   cents: i64,
/// }
///
/// trait Tax: Send + Sync {
///   fn apply(&self, amount: &Money, rate: i64) -> Money;
/// }
///
/// struct FlatTax;
/// impl Tax for FlatTax {
///   fn apply(&self, amount: &Money, rate: i64) -> Money {
///     Money { cents: amount.cents + amount.cents * rate / 100 }
///   }
/// }
///
/// facade! {
///   static TAX: Binding<dyn Tax>;
///
///   /// Adds tax to an amount.
///   fn with_tax(amount: &Money, rate: i64) -> Money => apply;
/// }
///
/// fn main() {
///   let price = Money { cents: 1000 };
///   assert!(with_tax(&price, 20).is_err());
///
///   let container = Container::new();
///   container.add_singleton_trait::<dyn Tax>(|| Arc::new(FlatTax));
///   TAX.initialize(&container).unwrap();
///
///   assert_eq!(with_tax(&price, 20).unwrap(), Money { cents: 1200 });
/// }
/// ```
#[macro_export]
macro_rules! facade {
  (@new) => {
    $crate::Binding::new()
  };

  (@new $options:expr) => {
    $crate::Binding::with_options($options)
  };

  (@new_deferred) => {
    $crate::DeferredBinding::new()
  };

  (@new_deferred $options:expr) => {
    $crate::DeferredBinding::with_options($options)
  };

  (
    $(#[$cell_meta:meta])*
    $cell_vis:vis static $cell:ident: DeferredBinding<$service:ty> $(= $options:expr)?;

    $(
      $(#[$fn_meta:meta])*
      $fn_vis:vis fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) -> $ret:ty => $method:ident;
    )*
  ) => {
    $(#[$cell_meta])*
    $cell_vis static $cell: $crate::DeferredBinding<$service> =
      $crate::facade!(@new_deferred $($options)?);

    $(
      $(#[$fn_meta])*
      $fn_vis fn $name($($arg: $arg_ty),*) -> ::core::result::Result<$ret, $crate::Error> {
        $cell.with(|service| service.$method($($arg),*))
      }
    )*
  };

  (
    $(#[$cell_meta:meta])*
    $cell_vis:vis static $cell:ident: Binding<$service:ty> $(= $options:expr)?;

    $(
      $(#[$fn_meta:meta])*
      $fn_vis:vis fn $name:ident($($arg:ident: $arg_ty:ty),* $(,)?) -> $ret:ty => $method:ident;
    )*
  ) => {
    $(#[$cell_meta])*
    $cell_vis static $cell: $crate::Binding<$service> = $crate::facade!(@new $($options)?);

    $(
      $(#[$fn_meta])*
      $fn_vis fn $name($($arg: $arg_ty),*) -> ::core::result::Result<$ret, $crate::UninitializedBindingError> {
        $cell.with(|service| service.$method($($arg),*))
      }
    )*
  };
}
