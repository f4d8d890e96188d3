//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod explorer;
pub(crate) mod nav;

pub(crate) use check::CheckArgs;
pub(crate) use explorer::ExplorerArgs;
pub(crate) use nav::NavArgs;
