//! Blocking client for the Mighty Networks admin REST API.
//!
//! # Overview
//! Every call goes through one `Gateway`, which sends exactly one HTTP
//! request and folds the outcome into a `NormalizedResult`
//! (`{ok, data, message}`). HTTP errors and network failures never surface
//! as `Err` or panics; only invalid configuration does.
//!
//! # Design
//! - `GatewayConfig` is validated once and shared read-only.
//! - The gateway prepares an `HttpRequest` as plain data and hands it to a
//!   `Transport`; `HttpTransport` (reqwest) is the default and tests swap in
//!   their own.
//! - Resource bindings (`client.spaces()`, `client.members()`, ...) only
//!   build paths, queries and bodies.
//! - Domain records in `types` mirror the upstream JSON and are opt-in via
//!   `NormalizedResult::parse`.
//!
//! ```no_run
//! use mighty_core::MightyClient;
//!
//! let client = MightyClient::new("your_api_token")?;
//! let spaces = client.spaces().list(12345);
//! if spaces.ok {
//!     println!("{}", spaces.data);
//! } else {
//!     eprintln!("{}", spaces.message);
//! }
//! # Ok::<(), mighty_core::ConfigError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod request;
pub mod resources;
pub mod result;
pub mod transport;
pub mod types;

pub use client::MightyClient;
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use error::{ApiError, ConfigError, RequestError, TransportError};
pub use gateway::Gateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestBody};
pub use request::{Fields, FileAttachment, OutboundRequest, QueryValue};
pub use resources::Page;
pub use result::{FailureKind, NormalizedResult};
pub use transport::{HttpTransport, Transport};
pub use types::{Badge, CustomField, Event, Member, PaginatedResponse, Plan, Post, Space};
