//! Reachability solver for [TREE](https://treecg.github.io/specification/)
//! hypermedia link traversal.
//!
//! As a link-traversal query engine walks a paginated TREE collection, every
//! fetched page announces relations: typed links describing how the values
//! behind a target page compare to a boundary value. This crate decides,
//! given the query's active `FILTER` expression, which of those targets can
//! still contribute bindings — pruning the rest of the crawl without ever
//! dropping a reachable answer. Ambiguous or malformed inputs always fall
//! back to following the link.
//!
//! The decision entry point is
//! [`classify_relations`](tree_reach_solver::classify_relations); the
//! interval algebra underneath lives in [`tree_reach_model`].

pub use tree_reach_model::*;
pub use tree_reach_solver::*;
