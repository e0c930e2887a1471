pub mod color;
pub mod config;
pub mod error;
pub mod page;
pub mod preview;

pub use error::{Error, Result};
