//! Navigation tree model for refdoc.
//!
//! This crate provides:
//! - [`NavNode`]: One named, linkable entry of a navigation tree
//! - [`NavigationBuilder`]: Bottom-up assembly of routes, header links and
//!   home page blocks, validated once on [`build`](NavigationBuilder::build)
//! - [`Navigation`]: The immutable export consumed by the site renderer
//! - [`NavDocument`]: Declarative navigation files (TOML or JSON) with named,
//!   includable trees
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), refdoc_nav::NavError> {
//! use refdoc_nav::{NavNode, NavigationBuilder};
//!
//! let tree = NavNode::new("Man", "/man")
//!     .with_child(NavNode::new("Reference documentation", "/references"));
//!
//! let mut builder = NavigationBuilder::new();
//! builder.add_header_link("man", "/man");
//! builder.add_tree_route(tree);
//! let navigation = builder.build()?;
//!
//! assert_eq!(navigation.route("/man").unwrap().title, "Man");
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod navigation;
mod node;

pub use document::NavDocument;
pub use error::NavError;
pub use navigation::{HeaderLink, HomePageBlock, Navigation, NavigationBuilder, RouteEntry};
pub use node::{NavNode, Walk};
