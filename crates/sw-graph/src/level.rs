//! Persisted level geometry.
//!
//! The on-disk format (JSON) is:
//!
//! ```json
//! {
//!   "boundaryVertices": { "b0": { "x": 0.0, "y": 0.0 }, ... },
//!   "diagramVertices":  { "v0": { "x": 0.4, "y": 0.5 }, ... },
//!   "regions": [
//!     { "siteIdentifier": "s0",
//!       "edges": [ { "vertexIdentifier0": "b0", "vertexIdentifier1": "v0" } ] }
//!   ]
//! }
//! ```
//!
//! Positions are normalized to `[0, 1]` and scaled by the viewport when the
//! graph is built.  Reading the file is the caller's job.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::GraphResult;

/// A normalized vertex position.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormPos {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    pub vertex_identifier0: String,
    pub vertex_identifier1: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionData {
    #[serde(default)]
    pub site_identifier: String,
    pub edges:           Vec<EdgeData>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    #[serde(default)]
    pub boundary_vertices: BTreeMap<String, NormPos>,
    #[serde(default)]
    pub diagram_vertices:  BTreeMap<String, NormPos>,
    #[serde(default)]
    pub regions:           Vec<RegionData>,
}

impl LevelData {
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> GraphResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Boundary vertices followed by diagram vertices, each in id order.
    pub fn vertices(&self) -> impl Iterator<Item = (&str, &NormPos)> + '_ {
        self.boundary_vertices
            .iter()
            .chain(self.diagram_vertices.iter())
            .map(|(id, pos)| (id.as_str(), pos))
    }
}
