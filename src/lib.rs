//! Core library for the `resptime` CLI.
//!
//! The binary measures HTTP response delay by sending one request repeatedly and
//! timing each round trip. This crate holds its building blocks: CLI argument
//! types, config file handling, session persistence, request construction and the
//! sequential request loop, and the summary/export reporting. The CLI is the
//! primary interface; library APIs may change with it.
pub mod args;
pub mod config;
mod entry;
pub mod error;
pub mod http;
mod logger;
pub mod report;
pub mod session;

pub use entry::run;
