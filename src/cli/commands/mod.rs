//! CLI command implementations

pub mod cache;
pub mod config;
pub mod resolve;

pub use cache::{clear, compact, path, show};
pub use config::execute as config;
pub use resolve::{locate, resolve};
