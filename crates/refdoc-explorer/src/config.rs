//! Parameters handed to the API explorer widget factory.

use serde::Serialize;

use crate::error::ExplorerError;
use crate::origin::Origin;
use crate::source::DescriptionSource;

/// DOM element the widget mounts into.
pub const DOM_TARGET_ID: &str = "#swagger-ui";

/// Layout variant registered by the widget's standalone preset.
pub const LAYOUT: &str = "BaseLayout";

/// Whether the widget updates the page URL as operations are expanded.
pub const DEEP_LINKING: bool = true;

/// Presets passed through to the widget registry.
pub const PRESETS: [CapabilityToken; 2] = [
    CapabilityToken::new("SwaggerUIBundle.presets.apis"),
    CapabilityToken::new("SwaggerUIStandalonePreset"),
];

/// Plugins passed through to the widget registry.
pub const PLUGINS: [CapabilityToken; 1] =
    [CapabilityToken::new("SwaggerUIBundle.plugins.DownloadUrl")];

/// Opaque name of a preset or plugin in the widget's own registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CapabilityToken(&'static str);

impl CapabilityToken {
    /// Wrap a registry name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Configuration object passed to the widget factory.
///
/// Built fresh on every page load. Serializes with the widget's option names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorerConfig {
    /// Fully-qualified URL of the API description document.
    #[serde(rename = "url")]
    pub description_url: String,
    /// DOM mount point.
    #[serde(rename = "dom_id")]
    pub dom_target_id: &'static str,
    /// Deep linking flag.
    #[serde(rename = "deepLinking")]
    pub deep_linking: bool,
    /// Widget presets.
    pub presets: Vec<CapabilityToken>,
    /// Widget plugins.
    pub plugins: Vec<CapabilityToken>,
    /// Layout variant name.
    pub layout: &'static str,
}

impl ExplorerConfig {
    /// Resolve the description URL and attach the fixed presentation options.
    pub fn resolve(source: &DescriptionSource, origin: &Origin) -> Result<Self, ExplorerError> {
        source.validate()?;
        Ok(Self::with_description_url(source.resolve(origin)))
    }

    fn with_description_url(description_url: String) -> Self {
        Self {
            description_url,
            dom_target_id: DOM_TARGET_ID,
            deep_linking: DEEP_LINKING,
            presets: PRESETS.to_vec(),
            plugins: PLUGINS.to_vec(),
            layout: LAYOUT,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn localhost() -> Origin {
        Origin::parse("http://localhost:8383").unwrap()
    }

    #[test]
    fn test_resolve_host_relative() {
        let config = ExplorerConfig::resolve(&DescriptionSource::default(), &localhost()).unwrap();

        assert_eq!(
            config.description_url,
            "http://localhost:8383/explorer/swagger.json"
        );
        assert_eq!(config.dom_target_id, "#swagger-ui");
        assert!(config.deep_linking);
        assert_eq!(config.layout, "BaseLayout");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let source = DescriptionSource::default();

        let first = ExplorerConfig::resolve(&source, &localhost()).unwrap();
        let second = ExplorerConfig::resolve(&source, &localhost()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_rejects_invalid_source() {
        let source = DescriptionSource::Static {
            url: "swagger.json".to_owned(),
        };

        let result = ExplorerConfig::resolve(&source, &localhost());

        assert!(matches!(result, Err(ExplorerError::InvalidSource(_))));
    }

    #[test]
    fn test_serializes_widget_option_names() {
        let config = ExplorerConfig::resolve(&DescriptionSource::default(), &localhost()).unwrap();

        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "url": "http://localhost:8383/explorer/swagger.json",
                "dom_id": "#swagger-ui",
                "deepLinking": true,
                "presets": ["SwaggerUIBundle.presets.apis", "SwaggerUIStandalonePreset"],
                "plugins": ["SwaggerUIBundle.plugins.DownloadUrl"],
                "layout": "BaseLayout"
            })
        );
    }

    #[test]
    fn test_capability_tokens_are_opaque_names() {
        let names: Vec<_> = PRESETS.iter().copied().map(CapabilityToken::name).collect();

        assert_eq!(
            names,
            vec!["SwaggerUIBundle.presets.apis", "SwaggerUIStandalonePreset"]
        );
    }
}
