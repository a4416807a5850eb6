#![allow(dead_code)]

use std::sync::Arc;

// --- Test Fixtures ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
  pub name: String,
  pub value: i32,
}

impl Sample {
  pub fn new(name: &str, value: i32) -> Self {
    Self {
      name: name.to_string(),
      value,
    }
  }
}

// The capability must be Send + Sync to live in a static binding.
pub trait Enhancer: Send + Sync {
  fn enhance(&self, sample: &Sample) -> Sample;

  fn label(&self, sample: &Sample, prefix: &str) -> String {
    format!("{}{}", prefix, sample.name)
  }
}

/// Uppercases the name and doubles the value, wrapping on overflow.
pub struct UppercaseEnhancer;

impl Enhancer for UppercaseEnhancer {
  fn enhance(&self, sample: &Sample) -> Sample {
    Sample {
      name: sample.name.to_uppercase(),
      value: sample.value.wrapping_mul(2),
    }
  }
}

/// An alternative implementation used to observe rebinding.
pub struct ReversingEnhancer;

impl Enhancer for ReversingEnhancer {
  fn enhance(&self, sample: &Sample) -> Sample {
    Sample {
      name: sample.name.chars().rev().collect(),
      value: sample.value.wrapping_neg(),
    }
  }
}

pub fn uppercase() -> Arc<dyn Enhancer> {
  Arc::new(UppercaseEnhancer)
}

pub fn reversing() -> Arc<dyn Enhancer> {
  Arc::new(ReversingEnhancer)
}
