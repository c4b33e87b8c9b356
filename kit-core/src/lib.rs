pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod user_paths;

pub use error::{KitError, Result};
