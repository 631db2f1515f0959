//! Relaytext Core
//!
//! This crate provides the error type and the injectable logger
//! capability shared by the relaytext crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`RelayError`] - Error types
//! - [`Logger`] - Diagnostic sink passed into components at construction
//! - [`LogLogger`], [`NullLogger`] - Stock logger implementations

pub mod error;
pub mod logger;

pub use error::{RelayError, Result};
pub use logger::{LogLogger, Logger, NullLogger};
