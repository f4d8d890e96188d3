//! Declarative navigation documents.
//!
//! Navigation is authored as TOML (or JSON) and resolved into a validated
//! [`Navigation`]. Trees can be declared once under `[trees]` and either
//! referenced by routes or spliced into another tree with `include`:
//!
//! ```toml
//! [[header_links]]
//! title = "man"
//! url = "/man"
//!
//! [routes."/man"]
//! title = "Man"
//! tree = "references"
//!
//! [trees.references]
//! name = "Man"
//! url = "/man"
//! children = [
//!   { name = "Reference documentation", url = "/references" },
//!   { include = "api" },
//! ]
//!
//! [trees.api]
//! name = "API Reference"
//! url = "/references/api"
//! ```
//!
//! Routes may share a named tree. An `include` hands the named tree to one
//! parent only: including the same tree twice, or including a tree into
//! itself or one of its ancestors, is a [`NavError::MalformedTree`]. So is a
//! named tree that no route or include uses.
//!
//! Route paths are keys of the `[routes]` table, so TOML itself rejects a
//! duplicated path at parse time ([`NavError::Toml`]). JSON keeps duplicate
//! keys and they fail validation as [`NavError::MalformedTree`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::NavError;
use crate::navigation::{HeaderLink, HomePageBlock, Navigation, NavigationBuilder};
use crate::node::NavNode;

/// Parsed navigation document, not yet validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavDocument {
    header_links: Vec<HeaderLink>,
    routes: RouteSpecs,
    home_page_blocks: Vec<HomePageBlock>,
    trees: BTreeMap<String, NodeSpec>,
}

/// Routes in document order. Duplicate keys are kept so that
/// [`NavigationBuilder::build`] can reject them.
#[derive(Debug, Default)]
struct RouteSpecs(Vec<(String, RouteSpec)>);

impl<'de> Deserialize<'de> for RouteSpecs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RouteSpecsVisitor;

        impl<'de> Visitor<'de> for RouteSpecsVisitor {
            type Value = RouteSpecs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of route paths to routes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut routes = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    routes.push(entry);
                }
                Ok(RouteSpecs(routes))
            }
        }

        deserializer.deserialize_map(RouteSpecsVisitor)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteSpec {
    title: String,
    tree: TreeSpec,
}

/// A route's tree: a name under `[trees]` or an inline node.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TreeSpec {
    Named(String),
    Inline(NodeSpec),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeSpec {
    // Missing fields are reported by validation, not by the parser
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    children: Vec<ChildSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChildSpec {
    Include(IncludeSpec),
    Node(NodeSpec),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IncludeSpec {
    include: String,
}

impl NavDocument {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a document from disk. Files ending in `.json` are parsed as JSON,
    /// everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "Loading navigation document");

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Assemble all trees bottom-up and build a validated [`Navigation`].
    pub fn resolve(&self) -> Result<Navigation, NavError> {
        let mut resolver = TreeResolver::new(&self.trees);
        let mut builder = NavigationBuilder::new();

        for link in &self.header_links {
            builder.add_header_link(link.title.as_str(), link.url.as_str());
        }

        for (path, route) in &self.routes.0 {
            let tree = match &route.tree {
                TreeSpec::Named(name) => resolver.named(name)?,
                TreeSpec::Inline(spec) => Arc::new(resolver.build_node(spec)?),
            };
            builder.add_route(path.as_str(), route.title.as_str(), tree);
        }

        if let Some(orphan) = self
            .trees
            .keys()
            .find(|name| !resolver.built.contains_key(name.as_str()))
        {
            return Err(NavError::malformed(format!(
                "tree '{orphan}' is not used by any route or include"
            )));
        }

        for block in &self.home_page_blocks {
            builder.add_home_page_block(block.clone());
        }

        tracing::debug!(
            routes = self.routes.0.len(),
            trees = self.trees.len(),
            "Navigation document resolved"
        );

        builder.build()
    }
}

/// Turns [`NodeSpec`]s into owned [`NavNode`] trees.
struct TreeResolver<'a> {
    trees: &'a BTreeMap<String, NodeSpec>,
    /// Named trees already assembled. Shared by routes.
    built: HashMap<&'a str, Arc<NavNode>>,
    /// Named trees currently being assembled, outermost first.
    in_progress: Vec<&'a str>,
    /// Named tree -> name of the node that included it.
    included_by: HashMap<&'a str, &'a str>,
}

impl<'a> TreeResolver<'a> {
    fn new(trees: &'a BTreeMap<String, NodeSpec>) -> Self {
        Self {
            trees,
            built: HashMap::new(),
            in_progress: Vec::new(),
            included_by: HashMap::new(),
        }
    }

    fn named(&mut self, name: &'a str) -> Result<Arc<NavNode>, NavError> {
        if let Some(tree) = self.built.get(name) {
            return Ok(Arc::clone(tree));
        }

        if self.in_progress.contains(&name) {
            let chain = self.in_progress.join(" -> ");
            return Err(NavError::malformed(format!(
                "tree '{name}' includes itself ({chain} -> {name})"
            )));
        }

        let trees = self.trees;
        let (key, spec) = trees
            .get_key_value(name)
            .ok_or_else(|| NavError::malformed(format!("unknown tree '{name}'")))?;

        self.in_progress.push(key);
        let node = self.build_node(spec);
        self.in_progress.pop();

        let tree = Arc::new(node?);
        self.built.insert(key, Arc::clone(&tree));
        Ok(tree)
    }

    fn build_node(&mut self, spec: &'a NodeSpec) -> Result<NavNode, NavError> {
        let mut children = Vec::with_capacity(spec.children.len());
        for child in &spec.children {
            match child {
                ChildSpec::Node(child_spec) => children.push(self.build_node(child_spec)?),
                ChildSpec::Include(IncludeSpec { include }) => {
                    if let Some(previous) = self.included_by.insert(include, &spec.name) {
                        return Err(NavError::malformed(format!(
                            "tree '{include}' is included by both '{previous}' and '{}'",
                            spec.name
                        )));
                    }
                    let subtree = self.named(include)?;
                    children.push(NavNode::clone(&subtree));
                }
            }
        }

        Ok(NavNode {
            name: spec.name.clone(),
            url: spec.url.clone(),
            children,
        })
    }
}
