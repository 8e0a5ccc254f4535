pub mod config_file;
pub mod error;
pub mod flags;
pub mod manager;

pub use error::{ArgsError, Result};
pub use flags::{ArgFlags, OptionsCategory};
pub use manager::{ArgDescription, ArgsManager};
