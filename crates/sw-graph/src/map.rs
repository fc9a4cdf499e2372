//! Loaded region graph (graph variant) and its builder.
//!
//! # Data layout
//!
//! Points live in a `Vec` indexed by insertion order; `index` maps a
//! [`PointId`] to that slot.  `adjacency[i]` holds the outgoing
//! [`NeighborLink`]s of point `i` in edge-insertion order.  Edges are always
//! symmetric in existence, but each direction carries its own bearing.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps screen coordinates to the nearest point, so
//! an editor click can be translated into a point id.

use std::collections::{HashMap, HashSet, VecDeque};

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use sw_core::{PointId, Vec2, Viewport};

use crate::{
    Behavior, GraphError, GraphResult, LevelData, NeighborLink, Point, PointGraph, Redirect,
    SiteKind,
};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct PointEntry {
    point: [f32; 2], // [x, y]
    idx:   usize,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Region ────────────────────────────────────────────────────────────────────

/// A region boundary kept for reference after the adjacency is built.
#[derive(Clone, Debug)]
pub struct Region {
    pub site:  String,
    pub edges: Vec<(PointId, PointId)>,
}

impl Region {
    pub fn touches(&self, id: &PointId) -> bool {
        self.edges.iter().any(|(a, b)| a == id || b == id)
    }
}

// ── PointMap ──────────────────────────────────────────────────────────────────

/// Explicit-adjacency point graph.  Build with [`PointMapBuilder`] or
/// [`PointMap::from_level`].
pub struct PointMap {
    points:      Vec<Point<PointId>>,
    index:       HashMap<PointId, usize>,
    adjacency:   Vec<Vec<NeighborLink<PointId>>>,
    regions:     Vec<Region>,
    spatial_idx: RTree<PointEntry>,
}

impl PointMap {
    /// Scale a level's normalized vertices to `viewport` and build the graph.
    ///
    /// `overrides` assigns non-default behaviors by point id; unknown ids
    /// are an error.
    pub fn from_level(
        level:     &LevelData,
        viewport:  Viewport,
        overrides: &HashMap<PointId, SiteKind>,
    ) -> GraphResult<Self> {
        let mut b = PointMapBuilder::new();

        for (id, pos) in level.vertices() {
            b.add_point(id, Vec2::new(pos.x * viewport.width, pos.y * viewport.height))?;
        }
        for region in &level.regions {
            let mut edges = Vec::with_capacity(region.edges.len());
            for e in &region.edges {
                let (u, v) = (PointId::new(&e.vertex_identifier0), PointId::new(&e.vertex_identifier1));
                b.add_edge(&u, &v)?;
                edges.push((u, v));
            }
            b.add_region(Region { site: region.site_identifier.clone(), edges });
        }
        for (id, &kind) in overrides {
            b.set_kind(id, kind)?;
        }

        Ok(b.build())
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of directed links (twice the number of undirected edges).
    pub fn link_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point<PointId>> + '_ {
        self.points.iter()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Sites of every region whose boundary passes through `id`.
    pub fn regions_of(&self, id: &PointId) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|r| r.touches(id))
            .map(|r| r.site.as_str())
            .collect()
    }

    fn slot(&self, at: &PointId) -> GraphResult<usize> {
        self.index
            .get(at)
            .copied()
            .ok_or_else(|| GraphError::UnknownPoint(at.to_string()))
    }

    /// Neighbours of `at` sorted ascending by bearing, as redirect exits.
    fn exits_by_bearing(&self, slot: usize) -> VecDeque<PointId> {
        let mut links: Vec<&NeighborLink<PointId>> = self.adjacency[slot].iter().collect();
        links.sort_by(|a, b| a.bearing.total_cmp(&b.bearing));
        links.into_iter().map(|l| l.location.clone()).collect()
    }

    fn redirect_behavior(&self, slot: usize) -> Behavior<PointId> {
        let exits = self.exits_by_bearing(slot);
        if exits.is_empty() {
            Behavior::Default
        } else {
            Behavior::Redirect(Redirect::Exits(exits))
        }
    }
}

impl PointGraph for PointMap {
    type Location = PointId;

    fn point(&self, at: &PointId) -> GraphResult<&Point<PointId>> {
        let slot = self.slot(at)?;
        Ok(&self.points[slot])
    }

    fn point_mut(&mut self, at: &PointId) -> GraphResult<&mut Point<PointId>> {
        let slot = self.slot(at)?;
        Ok(&mut self.points[slot])
    }

    fn neighbors_of(&self, at: &PointId) -> GraphResult<Vec<NeighborLink<PointId>>> {
        let slot = self.slot(at)?;
        Ok(self.adjacency[slot].clone())
    }

    fn point_at(&self, pos: Vec2) -> Option<PointId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| self.points[e.idx].location.clone())
    }

    fn redirect_exit(&self, at: &PointId) -> GraphResult<Option<NeighborLink<PointId>>> {
        let slot = self.slot(at)?;
        let Behavior::Redirect(Redirect::Exits(exits)) = self.points[slot].behavior() else {
            return Ok(None);
        };
        Ok(exits.front().and_then(|front| {
            self.adjacency[slot]
                .iter()
                .find(|l| &l.location == front)
                .cloned()
        }))
    }

    /// Default → Block → Redirect(first exit) → … → Redirect(last exit) → Default.
    fn cycle_behavior(&mut self, at: &PointId) -> GraphResult<SiteKind> {
        let slot = self.slot(at)?;
        let next = match self.points[slot].behavior().kind() {
            SiteKind::Destination => return Ok(SiteKind::Destination),
            SiteKind::Default => Behavior::Block,
            SiteKind::Block => self.redirect_behavior(slot),
            SiteKind::Redirect => {
                self.points[slot].consume_exit();
                self.points[slot].behavior().clone()
            }
            _ => Behavior::Default,
        };
        let kind = next.kind();
        self.points[slot].set_behavior(next);
        tracing::debug!(point = %at, %kind, "map behavior cycled");
        Ok(kind)
    }

    fn destination_count(&self) -> usize {
        self.points.iter().filter(|p| p.behavior().is_destination()).count()
    }
}

// ── PointMapBuilder ───────────────────────────────────────────────────────────

/// Construct a [`PointMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sw_core::{PointId, Vec2};
/// use sw_graph::{PointGraph, PointMapBuilder};
///
/// let mut b = PointMapBuilder::new();
/// let a = PointId::new("a");
/// let c = PointId::new("c");
/// b.add_point(a.clone(), Vec2::new(0.0, 0.0)).unwrap();
/// b.add_point(c.clone(), Vec2::new(10.0, 0.0)).unwrap();
/// assert!(b.add_edge(&a, &c).unwrap());
/// assert!(!b.add_edge(&c, &a).unwrap()); // already recorded
/// let map = b.build();
/// assert_eq!(map.link_count(), 2);
/// assert_eq!(map.neighbors_of(&c).unwrap()[0].location, a);
/// ```
pub struct PointMapBuilder {
    points:  Vec<(PointId, Vec2, SiteKind)>,
    index:   HashMap<PointId, usize>,
    edges:   Vec<(usize, usize)>,
    seen:    HashSet<(usize, usize)>,
    regions: Vec<Region>,
}

impl PointMapBuilder {
    pub fn new() -> Self {
        Self {
            points:  Vec::new(),
            index:   HashMap::new(),
            edges:   Vec::new(),
            seen:    HashSet::new(),
            regions: Vec::new(),
        }
    }

    /// Add a point with `Default` behavior.
    pub fn add_point(&mut self, id: impl Into<PointId>, pos: Vec2) -> GraphResult<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicatePoint(id.to_string()));
        }
        self.index.insert(id.clone(), self.points.len());
        self.points.push((id, pos, SiteKind::Default));
        Ok(())
    }

    /// Assign the initial behavior of a point added earlier.
    pub fn set_kind(&mut self, id: &PointId, kind: SiteKind) -> GraphResult<()> {
        let slot = *self
            .index
            .get(id)
            .ok_or_else(|| GraphError::UnknownPoint(id.to_string()))?;
        self.points[slot].2 = kind;
        Ok(())
    }

    /// Record the undirected edge `u – v`.
    ///
    /// Idempotent: returns `false` (and records nothing) if `u – v` or
    /// `v – u` is already present, or if `u == v`.
    pub fn add_edge(&mut self, u: &PointId, v: &PointId) -> GraphResult<bool> {
        let su = self.endpoint(u, v)?;
        let sv = self.endpoint(v, u)?;
        if su == sv {
            return Ok(false);
        }
        let key = (su.min(sv), su.max(sv));
        if !self.seen.insert(key) {
            return Ok(false);
        }
        self.edges.push((su, sv));
        Ok(true)
    }

    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn point_count(&self) -> usize { self.points.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    fn endpoint(&self, id: &PointId, other: &PointId) -> GraphResult<usize> {
        self.index.get(id).copied().ok_or_else(|| GraphError::UnknownEdgeEndpoint {
            edge: format!("{id}-{other}"),
            id:   id.to_string(),
        })
    }

    /// Consume the builder and produce a [`PointMap`].
    ///
    /// Redirect overrides are expanded into exit queues once the adjacency
    /// is known.
    pub fn build(self) -> PointMap {
        let mut adjacency: Vec<Vec<NeighborLink<PointId>>> = vec![Vec::new(); self.points.len()];
        for &(u, v) in &self.edges {
            let (ref uid, upos, _) = self.points[u];
            let (ref vid, vpos, _) = self.points[v];
            adjacency[u].push(NeighborLink::between(upos, vid.clone(), vpos));
            adjacency[v].push(NeighborLink::between(vpos, uid.clone(), upos));
        }

        let entries: Vec<PointEntry> = self
            .points
            .iter()
            .enumerate()
            .map(|(idx, (_, pos, _))| PointEntry { point: [pos.x, pos.y], idx })
            .collect();

        let mut map = PointMap {
            points: Vec::with_capacity(self.points.len()),
            index: self.index,
            adjacency,
            regions: self.regions,
            spatial_idx: RTree::bulk_load(entries),
        };

        let mut redirects = Vec::new();
        for (slot, (id, pos, kind)) in self.points.into_iter().enumerate() {
            let behavior = match kind {
                SiteKind::Default     => Behavior::Default,
                SiteKind::Destination => Behavior::Destination,
                SiteKind::Block       => Behavior::Block,
                _ => {
                    redirects.push(slot);
                    Behavior::Default
                }
            };
            map.points.push(Point::new(id, pos, behavior));
        }
        for slot in redirects {
            let behavior = map.redirect_behavior(slot);
            map.points[slot].set_behavior(behavior);
        }

        map
    }
}

impl Default for PointMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
