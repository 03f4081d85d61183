#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod services;
pub mod tools;
pub mod types;

mod macros;

pub use engine::*;
pub use error::*;
pub use types::*;
