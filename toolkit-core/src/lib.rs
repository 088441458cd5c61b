//! Core library for the `toolkit` CLI.
//!
//! This crate defines:
//! - Arithmetic, to-do, contact and unit-conversion handlers
//! - Abstraction over weather providers, with an offline mock
//! - In-process configuration and the shared error type
//!
//! It does no terminal I/O; `toolkit-cli` parses arguments and prints the
//! outcomes returned here.

pub mod arithmetic;
pub mod config;
pub mod contact;
pub mod convert;
pub mod error;
pub mod model;
pub mod provider;
pub mod todo;

pub use arithmetic::{Calculation, Operation};
pub use config::{Config, WeatherSettings};
pub use contact::{ContactAction, ContactCommand, ContactOutcome};
pub use convert::{Conversion, Quantity};
pub use error::ToolError;
pub use model::{WeatherReport, WeatherRequest};
pub use provider::{ProviderId, WeatherProvider};
pub use todo::{TodoAction, TodoCommand, TodoOutcome};
