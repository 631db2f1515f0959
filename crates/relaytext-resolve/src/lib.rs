//! Relaytext Resolve
//!
//! Forward (name to address) and reverse (address to name) lookups that
//! never fail towards the caller. Every failure degrades to returning the
//! input unchanged, after a note to the injected [`Logger`].
//!
//! # Overview
//!
//! - [`Resolver`] - DNS access seam, implemented by [`SystemResolver`]
//! - [`HostResolver`] - Input checks, outcome classification and logging
//! - [`LookupOutcome`] - What a lookup ended in, for callers that care
//!
//! # Example
//!
//! ```
//! use relaytext_core::NullLogger;
//! use relaytext_resolve::HostResolver;
//!
//! let resolver = HostResolver::new(NullLogger);
//! assert_eq!(resolver.resolve_host("127.0.0.1"), "127.0.0.1");
//! assert_eq!(resolver.resolve_host("not.an.ip"), "not.an.ip");
//! ```
//!
//! [`Logger`]: relaytext_core::Logger

pub mod error;
pub mod host;
pub mod outcome;
pub mod system;

pub use error::ResolveError;
pub use host::HostResolver;
pub use outcome::{LookupOutcome, SkipReason};
pub use system::{Resolver, SystemResolver};
