//! Synchronous client core for the devops bootcamp API.
//!
//! # Overview
//! A typed REST client for two resource families, engineers and devs, plus
//! the one relationship write that attaches an engineer to a dev. On top of
//! it sit the resource lifecycle handlers a provider plugin drives.
//!
//! # Design
//! - `BootcampClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; a `Transport` does the I/O.
//! - `Api` composes the two and is the explicit client value passed to every
//!   consumer. There is no global client.
//! - Engineers and devs share one generic implementation through the
//!   `Resource` trait and satisfy the `Crud` contract.
//! - Everything blocks; one request per call, 10 second deadline, no retries.

pub mod api;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod logging;
pub mod transport;
pub mod types;

pub use api::{Api, Crud, Resources};
pub use client::BootcampClient;
pub use config::{Config, ProviderConfig};
pub use error::{ApiError, ConfigError, ResourceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use lifecycle::{DevModel, DevResource, EngineerModel, EngineerResource};
pub use transport::{UreqTransport, DEFAULT_TIMEOUT};
pub use types::{Dev, Engineer, EngineerPayload, Resource};
