//! HTTP client setup, request construction and the sequential request loop.
mod client;
mod request;
mod runner;


pub use client::{ClientSettings, build_client};
pub use request::{RequestBody, RequestDescriptor};
pub use runner::{RunPlan, run_requests};
