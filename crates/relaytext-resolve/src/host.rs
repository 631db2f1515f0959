//! Host resolution with logged fallbacks.

use std::net::IpAddr;

use relaytext_core::Logger;

use crate::error::ResolveError;
use crate::outcome::{LookupOutcome, SkipReason};
use crate::system::{Resolver, SystemResolver};

/// Address answered without a lookup.
pub const LOOPBACK: &str = "127.0.0.1";

/// Resolves between hostnames and addresses, falling back to the input.
///
/// The logger receives an info line for every expected miss and an
/// error line, with full detail, for anything unexpected.
#[derive(Debug, Clone)]
pub struct HostResolver<L, R = SystemResolver> {
    logger: L,
    resolver: R,
}

impl<L: Logger> HostResolver<L> {
    /// Resolver backed by the platform resolver.
    pub fn new(logger: L) -> Self {
        Self::with_resolver(logger, SystemResolver)
    }
}

impl<L: Logger, R: Resolver> HostResolver<L, R> {
    /// Resolver backed by a custom [`Resolver`].
    pub fn with_resolver(logger: L, resolver: R) -> Self {
        Self { logger, resolver }
    }

    /// The injected logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Reverse lookup returning the raw outcome. Nothing is logged.
    pub fn reverse_outcome(&self, ip: &str) -> LookupOutcome {
        if !looks_like_address(ip) {
            return LookupOutcome::Skipped(SkipReason::NotAnAddress);
        }
        if ip == LOOPBACK {
            return LookupOutcome::Skipped(SkipReason::Loopback);
        }

        // Dotted digits that still fail to parse (`999.1.1.1`) cannot
        // have a record.
        let addr: IpAddr = match ip.parse() {
            Ok(addr) => addr,
            Err(e) => return LookupOutcome::NotFound(format!("{}: {}", ip, e)),
        };

        match self.resolver.reverse(addr) {
            Ok(name) if name.is_empty() || name == ip => LookupOutcome::NoName,
            Ok(name) => LookupOutcome::Resolved(name),
            Err(ResolveError::NotFound(detail)) => LookupOutcome::NotFound(detail),
            Err(ResolveError::Other(detail)) => LookupOutcome::Failed(detail),
        }
    }

    /// Forward lookup returning the raw outcome. Nothing is logged.
    ///
    /// The first IPv4 address wins. A host with only IPv6 addresses
    /// counts as not found.
    pub fn forward_outcome(&self, host: &str) -> LookupOutcome {
        match self.resolver.forward(host) {
            Ok(addrs) => match addrs.iter().find(|addr| addr.is_ipv4()) {
                Some(addr) => LookupOutcome::Resolved(addr.to_string()),
                None => LookupOutcome::NotFound(format!("no IPv4 address for {}", host)),
            },
            Err(ResolveError::NotFound(detail)) => LookupOutcome::NotFound(detail),
            Err(ResolveError::Other(detail)) => LookupOutcome::Failed(detail),
        }
    }

    /// Resolve an IP address to its hostname.
    ///
    /// Returns `ip` unchanged when it is not a dotted numeric address,
    /// when it is `127.0.0.1`, or when the lookup yields nothing.
    pub fn resolve_host(&self, ip: &str) -> String {
        let outcome = self.reverse_outcome(ip);
        match &outcome {
            LookupOutcome::Resolved(_) | LookupOutcome::Skipped(SkipReason::Loopback) => {}
            LookupOutcome::Skipped(SkipReason::NotAnAddress) => {
                self.logger.info(&format!("{} is not an IP address", ip));
            }
            LookupOutcome::NoName => {
                self.logger.info(&format!("{} has no hostname, host is offline", ip));
            }
            LookupOutcome::NotFound(detail) => {
                self.logger.info(&format!("IP address {} not found: {}", ip, detail));
            }
            LookupOutcome::Failed(detail) => {
                self.logger.error(&format!("reverse lookup of {} failed: {}", ip, detail));
            }
        }
        outcome.resolved_or(ip)
    }

    /// Resolve a hostname to an IP address.
    ///
    /// Returns `host` unchanged when the lookup fails.
    pub fn resolve_ip(&self, host: &str) -> String {
        let outcome = self.forward_outcome(host);
        match &outcome {
            LookupOutcome::NotFound(detail) => {
                self.logger.info(&format!("hostname {} not found: {}", host, detail));
            }
            LookupOutcome::Failed(detail) => {
                self.logger.error(&format!("forward lookup of {} failed: {}", host, detail));
            }
            _ => {}
        }
        outcome.resolved_or(host)
    }
}

/// True when `ip` with every `.` removed is a non-empty run of numerals.
fn looks_like_address(ip: &str) -> bool {
    let mut digits = ip.chars().filter(|c| *c != '.').peekable();
    digits.peek().is_some() && digits.all(char::is_numeric)
}
