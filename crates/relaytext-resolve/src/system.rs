//! DNS access through the platform resolver.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::error::ResolveError;

/// Single-attempt forward and reverse lookups.
///
/// Implementations block for as long as the underlying mechanism takes
/// and never retry.
pub trait Resolver: Send + Sync {
    /// Resolve an address to its primary hostname.
    fn reverse(&self, addr: IpAddr) -> Result<String, ResolveError>;

    /// Resolve a hostname to its addresses, in resolver order.
    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn reverse(&self, addr: IpAddr) -> Result<String, ResolveError> {
        (**self).reverse(addr)
    }

    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        (**self).forward(host)
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn reverse(&self, addr: IpAddr) -> Result<String, ResolveError> {
        (**self).reverse(addr)
    }

    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        (**self).forward(host)
    }
}

/// Uses `getnameinfo`/`getaddrinfo`, honoring the hosts file and the
/// system resolver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn reverse(&self, addr: IpAddr) -> Result<String, ResolveError> {
        // Flags 0: when no name exists the numeric form comes back
        // instead of an error.
        let (name, _service) = dns_lookup::getnameinfo(&SocketAddr::new(addr, 0), 0)?;
        Ok(name)
    }

    fn forward(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let infos = dns_lookup::getaddrinfo(Some(host), None, None)?;

        let mut addrs = Vec::new();
        for info in infos {
            let info = info.map_err(|e| ResolveError::Other(e.to_string()))?;
            let ip = info.sockaddr.ip();
            // One entry per socket type comes back for the same address.
            if !addrs.contains(&ip) {
                addrs.push(ip);
            }
        }
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_numeric_host() {
        // Numeric hosts never hit the network.
        let addrs = SystemResolver.forward("127.0.0.1").unwrap();
        assert_eq!(addrs, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[test]
    fn test_forward_invalid_tld() {
        let err = SystemResolver
            .forward("nonexistent.invalid.hostname.test")
            .unwrap_err();
        assert!(!err.detail().is_empty());
    }

    #[test]
    fn test_forward_through_reference() {
        let resolver = SystemResolver;
        let by_ref: &dyn Resolver = &resolver;
        assert!(by_ref.forward("127.0.0.1").is_ok());
    }
}
