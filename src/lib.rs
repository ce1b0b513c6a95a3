pub mod classifiers;
pub mod core;
pub mod prediction;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
