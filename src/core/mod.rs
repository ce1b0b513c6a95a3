mod disease;

pub use disease::Disease;
