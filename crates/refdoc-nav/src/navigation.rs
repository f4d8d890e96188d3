//! Routes, header links and the exported navigation bundle.
//!
//! [`NavigationBuilder`] collects routes bottom-up and validates everything
//! once in [`NavigationBuilder::build`]. A [`Navigation`] that exists is
//! therefore always well-formed:
//!
//! - every node has a non-empty `name` and `url`
//! - a depth-first walk of each route tree reaches every node exactly once
//! - route paths are unique and start with `/`
//!
//! # Export Format
//!
//! ```json
//! {
//!   "header_links": [{ "title": "man", "url": "/man" }],
//!   "routes": { "/man": { "title": "Man", "tree": { "name": "Man", "url": "/man" } } },
//!   "home_page_blocks": []
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::NavError;
use crate::node::NavNode;

/// Opaque home page block descriptor, passed through to the renderer.
pub type HomePageBlock = serde_json::Value;

/// Top-level header link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLink {
    /// Display title.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// Binds a site path to a title and a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Route key with leading slash (e.g., `/man`).
    pub path: String,
    /// Display title.
    pub title: String,
    /// Root of this route's navigation tree. May be shared with other routes.
    pub tree: Arc<NavNode>,
}

/// Builder for [`Navigation`].
///
/// Nothing is validated until [`build`](Self::build), so routes can be added
/// in any order.
#[derive(Debug, Default)]
pub struct NavigationBuilder {
    routes: Vec<RouteEntry>,
    header_links: Vec<HeaderLink>,
    home_page_blocks: Vec<HomePageBlock>,
}

impl NavigationBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route pointing at `tree`.
    ///
    /// Pass an `Arc<NavNode>` to share one tree between several routes.
    pub fn add_route(
        &mut self,
        path: impl Into<String>,
        title: impl Into<String>,
        tree: impl Into<Arc<NavNode>>,
    ) -> &mut Self {
        self.routes.push(RouteEntry {
            path: path.into(),
            title: title.into(),
            tree: tree.into(),
        });
        self
    }

    /// Add a route keyed by the tree root's `url` and titled by its `name`.
    pub fn add_tree_route(&mut self, tree: impl Into<Arc<NavNode>>) -> &mut Self {
        let tree = tree.into();
        let path = tree.url.clone();
        let title = tree.name.clone();
        self.add_route(path, title, tree)
    }

    /// Add a header link.
    pub fn add_header_link(
        &mut self,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.header_links.push(HeaderLink {
            title: title.into(),
            url: url.into(),
        });
        self
    }

    /// Add an opaque home page block.
    pub fn add_home_page_block(&mut self, block: HomePageBlock) -> &mut Self {
        self.home_page_blocks.push(block);
        self
    }

    /// Validate and freeze the navigation.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::MalformedTree`] on the first violated invariant.
    pub fn build(self) -> Result<Navigation, NavError> {
        let mut route_index = HashMap::with_capacity(self.routes.len());
        let mut walked_trees = HashSet::new();

        for (idx, route) in self.routes.iter().enumerate() {
            validate_route_path(&route.path)?;
            if route_index.insert(route.path.clone(), idx).is_some() {
                return Err(NavError::malformed(format!(
                    "duplicate route path '{}'",
                    route.path
                )));
            }
            // Shared trees only need one walk
            if walked_trees.insert(Arc::as_ptr(&route.tree)) {
                validate_tree(&route.path, &route.tree)?;
            }
        }

        for link in &self.header_links {
            if link.title.trim().is_empty() || link.url.trim().is_empty() {
                return Err(NavError::malformed(format!(
                    "header link must have a title and url (title: '{}', url: '{}')",
                    link.title, link.url
                )));
            }
        }

        tracing::debug!(
            routes = self.routes.len(),
            header_links = self.header_links.len(),
            home_page_blocks = self.home_page_blocks.len(),
            "Navigation built"
        );

        Ok(Navigation {
            routes: self.routes,
            route_index,
            header_links: self.header_links,
            home_page_blocks: self.home_page_blocks,
        })
    }
}

fn validate_route_path(path: &str) -> Result<(), NavError> {
    if !path.starts_with('/') {
        return Err(NavError::malformed(format!(
            "route path '{path}' must start with '/'"
        )));
    }
    Ok(())
}

/// Walk one tree, checking node fields and identity.
fn validate_tree(route: &str, tree: &NavNode) -> Result<(), NavError> {
    let mut visited = HashSet::new();
    for (depth, node) in tree.walk() {
        if !visited.insert(std::ptr::from_ref(node)) {
            return Err(NavError::malformed(format!(
                "route '{route}': node '{}' reached more than once",
                node.name
            )));
        }
        if node.name.trim().is_empty() {
            return Err(NavError::malformed(format!(
                "route '{route}': node at depth {depth} linking to '{}' has an empty name",
                node.url
            )));
        }
        if node.url.trim().is_empty() {
            return Err(NavError::malformed(format!(
                "route '{route}': node '{}' at depth {depth} has an empty url",
                node.name
            )));
        }
    }
    Ok(())
}

/// Validated, immutable navigation export.
#[derive(Debug)]
pub struct Navigation {
    routes: Vec<RouteEntry>,
    route_index: HashMap<String, usize>,
    header_links: Vec<HeaderLink>,
    home_page_blocks: Vec<HomePageBlock>,
}

impl Navigation {
    /// Look up a route by path.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<&RouteEntry> {
        self.route_index.get(path).map(|&idx| &self.routes[idx])
    }

    /// Routes in insertion order.
    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Header links in display order.
    #[must_use]
    pub fn header_links(&self) -> &[HeaderLink] {
        &self.header_links
    }

    /// Home page blocks in display order.
    #[must_use]
    pub fn home_page_blocks(&self) -> &[HomePageBlock] {
        &self.home_page_blocks
    }

    /// Serialize to the renderer's JSON format.
    pub fn to_json(&self, pretty: bool) -> Result<String, NavError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl Serialize for Navigation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Export<'a> {
            header_links: &'a [HeaderLink],
            routes: Routes<'a>,
            home_page_blocks: &'a [HomePageBlock],
        }

        Export {
            header_links: &self.header_links,
            routes: Routes(&self.routes),
            home_page_blocks: &self.home_page_blocks,
        }
        .serialize(serializer)
    }
}

/// Routes serialized as a path-keyed map, keeping insertion order.
struct Routes<'a>(&'a [RouteEntry]);

impl Serialize for Routes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Page<'a> {
            title: &'a str,
            tree: &'a NavNode,
        }

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for route in self.0 {
            map.serialize_entry(
                &route.path,
                &Page {
                    title: &route.title,
                    tree: &route.tree,
                },
            )?;
        }
        map.end()
    }
}
