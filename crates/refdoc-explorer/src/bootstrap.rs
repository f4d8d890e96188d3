//! Page-load initialization of the API explorer widget.
//!
//! [`ExplorerBootstrap::on_load`] runs once per page load. It builds a fresh
//! [`ExplorerConfig`], passes it synchronously to the attached
//! [`WidgetFactory`] and stores the returned handle in a [`UiSlot`].

use std::sync::{Arc, RwLock};

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::origin::Origin;
use crate::source::DescriptionSource;

/// Name reported when no widget factory is attached.
const FACTORY_NAME: &str = "SwaggerUIBundle";

/// Externally provided constructor for the explorer widget.
pub trait WidgetFactory {
    /// Handle to the created widget instance.
    type Handle;

    /// Create a widget instance from `config`.
    fn create(&self, config: &ExplorerConfig) -> Self::Handle;
}

impl<F, H> WidgetFactory for F
where
    F: Fn(&ExplorerConfig) -> H,
{
    type Handle = H;

    fn create(&self, config: &ExplorerConfig) -> H {
        self(config)
    }
}

/// Process-wide slot holding the last created widget handle.
///
/// Empty until the first successful load, then overwritten by every later
/// load (last writer wins). Only [`ExplorerBootstrap`] writes to it.
///
/// ```
/// use refdoc_explorer::UiSlot;
///
/// static UI: UiSlot<u32> = UiSlot::new();
/// assert!(!UI.is_set());
/// ```
#[derive(Debug)]
pub struct UiSlot<H> {
    handle: RwLock<Option<Arc<H>>>,
}

impl<H> UiSlot<H> {
    /// Create an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Last stored handle, if any.
    #[must_use]
    pub fn get(&self) -> Option<Arc<H>> {
        self.handle.read().unwrap().clone()
    }

    /// Whether a handle has been stored.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.handle.read().unwrap().is_some()
    }

    fn store(&self, handle: H) -> Arc<H> {
        let handle = Arc::new(handle);
        *self.handle.write().unwrap() = Some(Arc::clone(&handle));
        handle
    }
}

impl<H> Default for UiSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot explorer initialization bound to a description source.
#[derive(Debug)]
pub struct ExplorerBootstrap<F> {
    source: DescriptionSource,
    factory: Option<F>,
}

impl<F: WidgetFactory> ExplorerBootstrap<F> {
    /// Create a bootstrap with no factory attached yet.
    #[must_use]
    pub fn new(source: DescriptionSource) -> Self {
        Self {
            source,
            factory: None,
        }
    }

    /// Attach the widget factory.
    #[must_use]
    pub fn with_factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Description source this bootstrap resolves.
    #[must_use]
    pub fn source(&self) -> &DescriptionSource {
        &self.source
    }

    /// Initialize the explorer for a page served from `origin`.
    ///
    /// # Errors
    ///
    /// - [`ExplorerError::DependencyMissing`] if no factory is attached
    /// - [`ExplorerError::InvalidSource`] if the source cannot produce a URL
    ///
    /// On error the slot is left untouched.
    pub fn on_load(
        &self,
        origin: &Origin,
        slot: &UiSlot<F::Handle>,
    ) -> Result<Arc<F::Handle>, ExplorerError> {
        let factory = self
            .factory
            .as_ref()
            .ok_or_else(|| ExplorerError::DependencyMissing(FACTORY_NAME.to_owned()))?;

        let config = ExplorerConfig::resolve(&self.source, origin)?;
        tracing::info!(origin = %origin, url = %config.description_url, "Initializing API explorer");

        let handle = factory.create(&config);
        Ok(slot.store(handle))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn localhost() -> Origin {
        Origin::parse("http://localhost:8383").unwrap()
    }

    /// Factory that records every config it receives.
    struct RecordingFactory {
        calls: Rc<RefCell<Vec<ExplorerConfig>>>,
    }

    impl RecordingFactory {
        fn new() -> (Self, Rc<RefCell<Vec<ExplorerConfig>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let factory = Self {
                calls: Rc::clone(&calls),
            };
            (factory, calls)
        }
    }

    impl WidgetFactory for RecordingFactory {
        type Handle = usize;

        fn create(&self, config: &ExplorerConfig) -> usize {
            let mut calls = self.calls.borrow_mut();
            calls.push(config.clone());
            calls.len()
        }
    }

    #[test]
    fn test_on_load_stores_handle() {
        let slot = UiSlot::new();
        let bootstrap = ExplorerBootstrap::new(DescriptionSource::default())
            .with_factory(|config: &ExplorerConfig| config.description_url.clone());

        let handle = bootstrap.on_load(&localhost(), &slot).unwrap();

        assert_eq!(*handle, "http://localhost:8383/explorer/swagger.json");
        assert!(Arc::ptr_eq(&handle, &slot.get().unwrap()));
    }

    #[test]
    fn test_on_load_passes_resolved_config_to_factory() {
        let (factory, calls) = RecordingFactory::new();
        let slot = UiSlot::new();
        let bootstrap = ExplorerBootstrap::new(DescriptionSource::Static {
            url: "http://localhost:8383/explorer/swagger.json".to_owned(),
        })
        .with_factory(factory);

        bootstrap
            .on_load(&Origin::parse("https://docs.example.com").unwrap(), &slot)
            .unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].description_url,
            "http://localhost:8383/explorer/swagger.json"
        );
        assert_eq!(calls[0].dom_target_id, "#swagger-ui");
    }

    #[test]
    fn test_second_load_overwrites_slot() {
        let (factory, calls) = RecordingFactory::new();
        let slot = UiSlot::new();
        let bootstrap =
            ExplorerBootstrap::new(DescriptionSource::default()).with_factory(factory);

        bootstrap.on_load(&localhost(), &slot).unwrap();
        bootstrap.on_load(&localhost(), &slot).unwrap();

        assert_eq!(slot.get().as_deref(), Some(&2));
        let calls = calls.borrow();
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_missing_factory_leaves_slot_unset() {
        let slot: UiSlot<String> = UiSlot::new();
        let bootstrap: ExplorerBootstrap<fn(&ExplorerConfig) -> String> =
            ExplorerBootstrap::new(DescriptionSource::default());

        let err = bootstrap.on_load(&localhost(), &slot).unwrap_err();

        assert!(matches!(err, ExplorerError::DependencyMissing(_)));
        assert!(err.to_string().contains("SwaggerUIBundle"));
        assert!(!slot.is_set());
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_invalid_source_leaves_slot_unset() {
        let slot = UiSlot::new();
        let bootstrap = ExplorerBootstrap::new(DescriptionSource::HostRelative {
            path: "swagger.json".to_owned(),
        })
        .with_factory(|_: &ExplorerConfig| ());

        let err = bootstrap.on_load(&localhost(), &slot).unwrap_err();

        assert!(matches!(err, ExplorerError::InvalidSource(_)));
        assert!(!slot.is_set());
    }

    #[test]
    fn test_static_slot() {
        static UI: UiSlot<String> = UiSlot::new();
        let bootstrap = ExplorerBootstrap::new(DescriptionSource::default())
            .with_factory(|config: &ExplorerConfig| config.layout.to_owned());

        bootstrap.on_load(&localhost(), &UI).unwrap();

        assert_eq!(UI.get().as_deref().map(String::as_str), Some("BaseLayout"));
    }
}
