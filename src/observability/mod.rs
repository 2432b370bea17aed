//! Structured logging setup.
//!
//! The library only emits `tracing` spans and events; nothing is printed
//! unless the host installs a subscriber. [`init_tracing`] installs one that
//! writes human-readable lines to stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use facetkit::observability::init_tracing;
//! use facetkit::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("facetkit initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup

mod init;

pub use init::{env_filter, init_tracing};
