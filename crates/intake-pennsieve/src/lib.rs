#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultPennsieveClient, PennsieveClient};

// Configuration
pub use config::PennsieveClientConfig;

// Errors
pub use error::{PennsieveError, PennsieveResult};

// HTTP backend seam
pub use http::{HttpBackend, HttpMethod, HttpRequest, HttpResponse, ReqwestBackend};
