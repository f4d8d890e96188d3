//! API explorer bootstrap for refdoc.
//!
//! Computes the URL of the API description document when a page loads and
//! hands it, with the fixed presentation options, to an externally provided
//! widget factory.
//!
//! The description URL comes from a [`DescriptionSource`]:
//! - [`DescriptionSource::Static`]: a fixed absolute URL known at build time
//! - [`DescriptionSource::HostRelative`]: `<origin><path>`, resolved against
//!   the [`Origin`] the page is served from, so one artifact works on any host
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), refdoc_explorer::ExplorerError> {
//! use refdoc_explorer::{DescriptionSource, ExplorerBootstrap, ExplorerConfig, Origin, UiSlot};
//!
//! static UI: UiSlot<String> = UiSlot::new();
//!
//! let bootstrap = ExplorerBootstrap::new(DescriptionSource::default())
//!     .with_factory(|config: &ExplorerConfig| config.description_url.clone());
//!
//! let origin = Origin::parse("http://localhost:8383")?;
//! bootstrap.on_load(&origin, &UI)?;
//!
//! assert_eq!(
//!     UI.get().as_deref().map(String::as_str),
//!     Some("http://localhost:8383/explorer/swagger.json")
//! );
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod config;
mod error;
mod origin;
mod source;

pub use bootstrap::{ExplorerBootstrap, UiSlot, WidgetFactory};
pub use config::{
    CapabilityToken, DEEP_LINKING, DOM_TARGET_ID, ExplorerConfig, LAYOUT, PLUGINS, PRESETS,
};
pub use error::ExplorerError;
pub use origin::Origin;
pub use source::{DEFAULT_DESCRIPTION_PATH, DescriptionSource};
