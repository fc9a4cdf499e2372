//! `sw-graph` — the point graph the walker moves across.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`site`]    | `SiteKind`, `Behavior`, `Redirect`                            |
//! | [`point`]   | `Point`, `NeighborLink`                                       |
//! | [`graph`]   | `PointGraph` trait — the one capability the walker needs      |
//! | [`lattice`] | `Lattice` — implicit rectangular grid, O(1) neighbours        |
//! | [`map`]     | `PointMap` + `PointMapBuilder` — explicit adjacency + R-tree  |
//! | [`level`]   | `LevelData` — persisted region geometry (JSON)                |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                                |
//!
//! Both graph variants share the same redirect / block / destination /
//! default semantics; only neighbour discovery and the editor's behavior
//! cycle differ.

pub mod error;
pub mod graph;
pub mod lattice;
pub mod level;
pub mod map;
pub mod point;
pub mod site;


pub use error::{GraphError, GraphResult};
pub use graph::PointGraph;
pub use lattice::{CellOverride, Lattice, LatticeConfig};
pub use level::{EdgeData, LevelData, NormPos, RegionData};
pub use map::{PointMap, PointMapBuilder, Region};
pub use point::{NeighborLink, Point};
pub use site::{Behavior, Redirect, SiteKind};
