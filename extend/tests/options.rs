use fibre_extend::{Binding, Options, RebindPolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_default_policy_is_replace() {
  assert_eq!(Options::default(), Options::new());
  assert_eq!(Options::new().rebind, RebindPolicy::Replace);

  let binding: Binding<str> = Binding::new();
  assert_eq!(binding.options().rebind, RebindPolicy::Replace);
}

#[test]
fn test_options_from_yaml() {
  let options: Options = serde_yaml::from_str("rebind: reject").unwrap();
  assert_eq!(options, Options::new().rebind(RebindPolicy::Reject));

  // Missing fields fall back to defaults.
  let options: Options = serde_yaml::from_str("{}").unwrap();
  assert_eq!(options, Options::default());
}

#[test]
fn test_unknown_fields_are_rejected() {
  let result = serde_yaml::from_str::<Options>("rebind: replace\nretries: 3");
  assert!(result.is_err());
}

#[test]
fn test_unknown_policy_is_rejected() {
  let result = serde_yaml::from_str::<Options>("rebind: sometimes");
  assert!(result.is_err());
}

#[test]
fn test_options_round_trip_through_binding() {
  let options: Options = serde_yaml::from_str("rebind: reject").unwrap();
  let binding: Binding<str> = Binding::with_options(options);
  assert_eq!(binding.options().rebind, RebindPolicy::Reject);
}
