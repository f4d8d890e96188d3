//! Description document URL strategies.

use serde::Deserialize;

use crate::error::ExplorerError;
use crate::origin::Origin;

/// Path the API server publishes its description document at.
pub const DEFAULT_DESCRIPTION_PATH: &str = "/explorer/swagger.json";

/// Where the API description document lives.
///
/// Deserializes from a table tagged by `source`, which is how the
/// `[explorer]` section of `refdoc.toml` is read:
///
/// ```toml
/// source = "host_relative"
/// path = "/explorer/swagger.json"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DescriptionSource {
    /// Fixed absolute URL known at build time.
    Static {
        /// Absolute `http://` or `https://` URL with a host.
        url: String,
    },
    /// Path resolved against the page origin at load time.
    HostRelative {
        /// Absolute path starting with `/`.
        #[serde(default = "default_path")]
        path: String,
    },
}

fn default_path() -> String {
    DEFAULT_DESCRIPTION_PATH.to_owned()
}

impl Default for DescriptionSource {
    /// Host-relative with [`DEFAULT_DESCRIPTION_PATH`]. The deployment host
    /// is not known at build time.
    fn default() -> Self {
        Self::HostRelative {
            path: default_path(),
        }
    }
}

impl DescriptionSource {
    /// Check that this source yields an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        match self {
            Self::Static { url } => {
                if url.is_empty() {
                    return Err(ExplorerError::InvalidSource(
                        "static url cannot be empty".to_owned(),
                    ));
                }
                let Some((scheme, rest)) = url.split_once("://") else {
                    return Err(ExplorerError::InvalidSource(format!(
                        "static url '{url}' must start with http:// or https://"
                    )));
                };
                let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
                Origin::new(scheme, authority).map_err(|err| {
                    ExplorerError::InvalidSource(format!("static url '{url}': {err}"))
                })?;
            }
            Self::HostRelative { path } => {
                if !path.starts_with('/') {
                    return Err(ExplorerError::InvalidSource(format!(
                        "host-relative path '{path}' must start with '/'"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve the description URL for a page served from `origin`.
    ///
    /// Static sources ignore the origin.
    #[must_use]
    pub fn resolve(&self, origin: &Origin) -> String {
        match self {
            Self::Static { url } => url.clone(),
            Self::HostRelative { path } => format!("{origin}{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localhost() -> Origin {
        Origin::parse("http://localhost:8383").unwrap()
    }

    #[test]
    fn test_host_relative_resolves_against_origin() {
        let source = DescriptionSource::default();

        assert_eq!(
            source.resolve(&localhost()),
            "http://localhost:8383/explorer/swagger.json"
        );
    }

    #[test]
    fn test_host_relative_follows_origin() {
        let source = DescriptionSource::default();
        let origin = Origin::parse("https://nanocl.example.com").unwrap();

        assert_eq!(
            source.resolve(&origin),
            "https://nanocl.example.com/explorer/swagger.json"
        );
    }

    #[test]
    fn test_static_ignores_origin() {
        let source = DescriptionSource::Static {
            url: "http://localhost:8383/explorer/swagger.json".to_owned(),
        };
        let elsewhere = Origin::parse("https://docs.example.com:9443").unwrap();

        assert_eq!(
            source.resolve(&elsewhere),
            "http://localhost:8383/explorer/swagger.json"
        );
        assert_eq!(source.resolve(&localhost()), source.resolve(&elsewhere));
    }

    #[test]
    fn test_validate_static_requires_http_url() {
        let source = DescriptionSource::Static {
            url: "localhost:8383/explorer/swagger.json".to_owned(),
        };

        let err = source.validate().unwrap_err();

        assert!(matches!(err, ExplorerError::InvalidSource(_)));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_validate_static_requires_host() {
        for url in ["http://", "https:///explorer/swagger.json", "http://:8383/swagger.json"] {
            let source = DescriptionSource::Static { url: url.to_owned() };

            let err = source.validate().unwrap_err();

            assert!(
                matches!(err, ExplorerError::InvalidSource(_)),
                "Expected InvalidSource for '{url}', got {err:?}"
            );
        }
    }

    #[test]
    fn test_validate_static_rejects_other_scheme() {
        let source = DescriptionSource::Static {
            url: "ftp://localhost/swagger.json".to_owned(),
        };

        let err = source.validate().unwrap_err();

        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_validate_static_accepts_query() {
        let source = DescriptionSource::Static {
            url: "https://docs.example.com:9443?spec=swagger.json".to_owned(),
        };

        assert!(source.validate().is_ok());
    }

    #[test]
    fn test_validate_static_empty_url() {
        let source = DescriptionSource::Static { url: String::new() };

        assert!(source.validate().unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_validate_host_relative_requires_leading_slash() {
        let source = DescriptionSource::HostRelative {
            path: "explorer/swagger.json".to_owned(),
        };

        let err = source.validate().unwrap_err();

        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_deserialize_static() {
        let toml = r#"
source = "static"
url = "http://localhost:8383/explorer/swagger.json"
"#;
        let source: DescriptionSource = toml::from_str(toml).unwrap();

        assert_eq!(
            source,
            DescriptionSource::Static {
                url: "http://localhost:8383/explorer/swagger.json".to_owned()
            }
        );
    }

    #[test]
    fn test_deserialize_host_relative_default_path() {
        let source: DescriptionSource = toml::from_str(r#"source = "host_relative""#).unwrap();

        assert_eq!(source, DescriptionSource::default());
    }
}
