//! Core library for the `amap-weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The Amap weather client and its transport abstraction
//! - Shared domain models (report detail level, output format, reports)
//!
//! It is used by `amap-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod transport;

pub use client::{WEATHER_URL, WeatherClient};
pub use config::Config;
pub use error::Error;
pub use model::{Extensions, Output, WeatherReport};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError, TransportOptions};
