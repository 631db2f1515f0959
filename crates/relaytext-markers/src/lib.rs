//! Relaytext Markers
//!
//! This crate handles the `§`-prefixed color markers embedded in game
//! chat text: removing them outright, or rewriting them into ANSI color
//! codes wrapped in a markdown `ansi` fenced block.
//!
//! # Overview
//!
//! - [`codes`] - Marker syntax and escape constants
//! - [`table`] - The immutable marker code table
//! - [`strip`] - Marker and separator removal
//! - [`translate`] - Marker to ANSI rewriting and markdown wrapping
//!
//! # Example
//!
//! ```
//! use relaytext_markers::{mark_filter, strip};
//!
//! assert_eq!(strip("§cHello §lWorld", true), "Hello World");
//! assert_eq!(mark_filter("§chi"), "```ansi\n[31mhi\n```");
//! ```

pub mod codes;
pub mod strip;
pub mod table;
pub mod translate;

pub use codes::*;
pub use strip::strip;
pub use table::{AnsiColor, MarkerCode, MarkerKind};
pub use translate::{color_ansi, mark_filter, Translator};
