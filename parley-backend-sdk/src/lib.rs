//! Typed client for the research/analysis backend.
//!
//! The backend runs the actual LLM-driven analysis and interview simulation;
//! this crate only speaks its HTTP contract. `ResearchBackend` is the seam
//! that workflows and the gateway program against; `HttpResearchBackend` is
//! the reqwest implementation.

pub mod client;
pub mod error;
pub mod http;

pub use client::ResearchBackend;
pub use error::BackendError;
pub use http::{HttpResearchBackend, RawResponse, DEFAULT_BASE_URL};
