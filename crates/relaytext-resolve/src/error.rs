//! Lookup failure kinds.

use thiserror::Error;

/// Why a single lookup attempt failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The name or address has no record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything else: resolver unreachable, system error, bad input.
    #[error("lookup failed: {0}")]
    Other(String),
}

impl ResolveError {
    /// Whether this is the expected "no such record" kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound(_))
    }

    /// The detail message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            ResolveError::NotFound(detail) | ResolveError::Other(detail) => detail,
        }
    }
}

impl From<dns_lookup::LookupError> for ResolveError {
    fn from(err: dns_lookup::LookupError) -> Self {
        use dns_lookup::LookupErrorKind;

        let kind = err.kind();
        let detail = std::io::Error::from(err).to_string();
        match kind {
            // Resolver answers (`EAI_*`) all mean the name has no usable record.
            LookupErrorKind::Again
            | LookupErrorKind::Badflags
            | LookupErrorKind::NoName
            | LookupErrorKind::NoData
            | LookupErrorKind::Fail
            | LookupErrorKind::Family
            | LookupErrorKind::Socktype
            | LookupErrorKind::Service
            | LookupErrorKind::Memory => ResolveError::NotFound(detail),
            // `System`, `IO` (e.g. an interior NUL) and `Unknown`.
            _ => ResolveError::Other(detail),
        }
    }
}
