//! Error types

mod config;
mod parse;

pub use config::*;
pub use parse::*;
