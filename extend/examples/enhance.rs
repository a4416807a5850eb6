use fibre_extend::{facade, Error};
use fibre_ioc::global;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// 1. The plain data type being extended.
#[derive(Debug)]
struct Sample {
  name: String,
  value: i32,
}

// 2. The service abstraction and its implementation.
trait Enhancer: Send + Sync {
  fn enhance(&self, sample: &Sample) -> Sample;
}

struct UppercaseEnhancer;
impl Enhancer for UppercaseEnhancer {
  fn enhance(&self, sample: &Sample) -> Sample {
    Sample {
      name: sample.name.to_uppercase(),
      value: sample.value.wrapping_mul(2),
    }
  }
}

// 3. The binding and the function that delegates to it.
facade! {
  static ENHANCER: Binding<dyn Enhancer>;

  fn enhance(sample: &Sample) -> Sample => enhance;
}

// 4. Method syntax on top of the free function.
trait SampleExt {
  fn enhance(&self) -> Result<Sample, fibre_extend::UninitializedBindingError>;
}

impl SampleExt for Sample {
  fn enhance(&self) -> Result<Sample, fibre_extend::UninitializedBindingError> {
    enhance(self)
  }
}

fn main() -> Result<(), Error> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let sample = Sample {
    name: "test".to_string(),
    value: 42,
  };

  // --- Before bootstrap ---
  match sample.enhance() {
    Ok(_) => unreachable!("binding has not been initialized"),
    Err(err) => println!("Before bootstrap: {}", err),
  }

  // --- Bootstrap ---
  global().add_singleton_trait::<dyn Enhancer>(|| Arc::new(UppercaseEnhancer));
  ENHANCER.initialize(global())?;

  // --- Usage ---
  let enhanced = sample.enhance()?;
  println!("Original: {:?}", sample);
  println!("Enhanced: {:?}", enhanced);
  Ok(())
}
