pub mod chain;
pub mod params;

pub use chain::*;
pub use params::*;
