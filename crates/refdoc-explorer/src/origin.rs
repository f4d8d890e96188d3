//! Execution context origin.

use std::fmt;
use std::str::FromStr;

use crate::error::ExplorerError;

/// Scheme and host (with optional port) the page is served from.
///
/// Passed explicitly to the resolver instead of being read from ambient
/// state, so resolution stays a pure function of its inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
}

impl Origin {
    /// Create an origin from its parts.
    ///
    /// The scheme must be `http` or `https` (case-insensitive). The host may
    /// carry a port but no path, query or fragment.
    pub fn new(scheme: &str, host: &str) -> Result<Self, ExplorerError> {
        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ExplorerError::InvalidOrigin(format!(
                "unsupported scheme '{scheme}', expected http or https"
            )));
        }
        if host.is_empty() {
            return Err(ExplorerError::InvalidOrigin("host cannot be empty".to_owned()));
        }
        if host
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
        {
            return Err(ExplorerError::InvalidOrigin(format!(
                "host '{host}' must not contain a path, query, fragment or whitespace"
            )));
        }

        // A colon inside brackets belongs to an IPv6 literal, not a port
        let (hostname, port) = match host.rsplit_once(':') {
            Some((hostname, port)) if !port.contains(']') => (hostname, Some(port)),
            _ => (host, None),
        };
        if hostname.is_empty() {
            return Err(ExplorerError::InvalidOrigin(format!(
                "host '{host}' is missing a host name"
            )));
        }
        if let Some(port) = port
            && port.parse::<u16>().is_err()
        {
            return Err(ExplorerError::InvalidOrigin(format!(
                "port '{port}' in host '{host}' is not a number between 0 and 65535"
            )));
        }

        Ok(Self {
            scheme,
            host: host.to_owned(),
        })
    }

    /// Parse `scheme://host[:port]`. A single trailing `/` is ignored.
    pub fn parse(origin: &str) -> Result<Self, ExplorerError> {
        let (scheme, rest) = origin.split_once("://").ok_or_else(|| {
            ExplorerError::InvalidOrigin(format!("'{origin}' is missing a scheme"))
        })?;
        let host = rest.strip_suffix('/').unwrap_or(rest);
        Self::new(scheme, host)
    }

    /// Lowercase scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host with optional port.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

impl FromStr for Origin {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
