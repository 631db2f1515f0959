//! Relaytext - chat text and host helpers for game relays.
//!
//! [`Text`] bundles the four helpers a relay needs when forwarding game
//! chat to a markdown chat service:
//!
//! - stripping `§` color markers ([`Text::strip`])
//! - rewriting them as ANSI colors in an `ansi` code block ([`Text::mark_filter`])
//! - resolving between addresses and hostnames ([`Text::resolve_host`], [`Text::resolve_ip`])
//! - a UTC timestamp ([`Text::time_now`])
//!
//! # Example
//!
//! ```
//! use relaytext::{NullLogger, Text};
//!
//! let text = Text::new(NullLogger);
//! assert_eq!(text.strip("§cHello §lWorld", true), "Hello World");
//! assert_eq!(text.mark_filter("§chi"), "```ansi\n[31mhi\n```");
//! assert_eq!(text.resolve_host("127.0.0.1"), "127.0.0.1");
//! ```

pub mod clock;

pub use relaytext_config::{Config, ConfigOverride, LoggingConfig, MarkersConfig};
pub use relaytext_core::{LogLogger, Logger, NullLogger, RelayError, Result};
pub use relaytext_markers::{AnsiColor, MarkerCode, MarkerKind, Translator};
pub use relaytext_resolve::{
    HostResolver, LookupOutcome, ResolveError, Resolver, SkipReason, SystemResolver,
};

/// Text utilities sharing one logger.
///
/// Stateless apart from the injected logger and resolver; every method
/// is safe to call from several threads at once. The resolver methods
/// block on network I/O.
#[derive(Debug, Clone)]
pub struct Text<L, R = SystemResolver> {
    translator: Translator,
    trim: bool,
    hosts: HostResolver<L, R>,
}

impl<L: Logger> Text<L> {
    /// Utilities with the default translator and the system resolver.
    pub fn new(logger: L) -> Self {
        Self::with_resolver(logger, SystemResolver)
    }

    /// Utilities configured from a loaded [`Config`].
    pub fn from_config(logger: L, config: &Config) -> Self {
        Self::new(logger).with_markers(&config.markers)
    }
}

impl<L: Logger, R: Resolver> Text<L, R> {
    /// Utilities with a custom [`Resolver`].
    pub fn with_resolver(logger: L, resolver: R) -> Self {
        Self {
            translator: Translator::new(),
            trim: true,
            hosts: HostResolver::with_resolver(logger, resolver),
        }
    }

    /// Replace the translator, e.g. with [`Translator::real_ansi`].
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    /// Apply marker settings: escape prefix and default trimming.
    pub fn with_markers(mut self, markers: &MarkersConfig) -> Self {
        self.translator = markers.translator();
        self.trim = markers.trim;
        self
    }

    /// The translator in use.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The injected logger.
    pub fn logger(&self) -> &L {
        self.hosts.logger()
    }

    /// Remove color markers and `|`, optionally trim, then defuse `@`.
    pub fn strip(&self, text: &str, trim: bool) -> String {
        relaytext_markers::strip(text, trim)
    }

    /// [`Text::strip`] with the configured trim setting (default true).
    pub fn strip_default(&self, text: &str) -> String {
        self.strip(text, self.trim)
    }

    /// Rewrite color markers as ANSI codes.
    pub fn color_ansi(&self, text: &str) -> String {
        self.translator.color_ansi(text)
    }

    /// Rewrite color markers as ANSI codes inside an `ansi` fenced block.
    pub fn mark_filter(&self, text: &str) -> String {
        self.translator.mark_filter(text)
    }

    /// Reverse lookup falling back to `ip`.
    pub fn resolve_host(&self, ip: &str) -> String {
        self.hosts.resolve_host(ip)
    }

    /// Forward lookup falling back to `host`.
    pub fn resolve_ip(&self, host: &str) -> String {
        self.hosts.resolve_ip(host)
    }

    /// The underlying host resolver, for outcome-level access.
    pub fn hosts(&self) -> &HostResolver<L, R> {
        &self.hosts
    }

    /// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
    pub fn time_now(&self) -> String {
        clock::time_now()
    }
}
