mod scripted_driver;
mod stub_classifier;

pub use scripted_driver::ScriptedDriver;
pub use stub_classifier::StubClassifier;
