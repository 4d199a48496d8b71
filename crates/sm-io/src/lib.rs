pub mod display;
pub mod error;
pub mod generate;
pub mod loader;

pub use error::{IoError, Result};
pub use loader::{load_matrices, load_pair, parse_matrices};
