//! The campus model: buildings, walkways and route queries.

use crate::config::CampusConfig;
use crate::error::{CampusError, Result};
use crate::parser::{self, CampusBuilding, CampusPath};
use crate::point::Point;
use log::{debug, info, warn};
use pathgraph::{Graph, Path};
use std::collections::BTreeMap;

/// Walkway graph plus the building directory used to resolve route queries.
///
/// Every walkway segment becomes a directed edge weighted by its distance.
/// Buildings are looked up by short name and routed from their map location.
pub struct CampusMap {
    buildings: BTreeMap<String, CampusBuilding>,
    graph: Graph<Point, f64>,
}

impl CampusMap {
    /// Load buildings and walkways from the files named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an I/O or parse error from either file, or a graph error if a
    /// walkway cannot be inserted.
    pub fn load(config: &CampusConfig) -> Result<Self> {
        let buildings_path = config.buildings_path();
        let paths_path = config.paths_path();
        info!(
            "Loading campus map from {} and {}",
            buildings_path.display(),
            paths_path.display()
        );

        let buildings = parser::parse_campus_buildings(&buildings_path)?;
        let paths = parser::parse_campus_paths(&paths_path)?;
        Self::from_records(buildings, paths)
    }

    /// Build a map from already parsed records.
    ///
    /// A repeated building short name replaces the earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Graph`] if a walkway cannot be inserted.
    pub fn from_records(buildings: Vec<CampusBuilding>, paths: Vec<CampusPath>) -> Result<Self> {
        let mut graph = Graph::with_capacity(paths.len());
        for segment in &paths {
            let (start, end) = (segment.start(), segment.end());
            graph.add_node(start);
            graph.add_node(end);
            graph.add_edge(start, end, segment.distance)?;
        }

        let mut directory = BTreeMap::new();
        for building in buildings {
            if let Some(previous) = directory.insert(building.short_name.clone(), building) {
                warn!("Duplicate building short name {}", previous.short_name);
            }
        }

        info!(
            "Campus map ready: {} buildings, {} locations, {} walkway edges",
            directory.len(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(Self {
            buildings: directory,
            graph,
        })
    }

    /// True if a building with this short name is on the map.
    pub fn short_name_exists(&self, short_name: &str) -> bool {
        self.buildings.contains_key(short_name)
    }

    /// Long name for a building short name.
    pub fn long_name_for_short(&self, short_name: &str) -> Option<&str> {
        self.buildings
            .get(short_name)
            .map(|building| building.long_name.as_str())
    }

    /// Every building, short name to long name, sorted by short name.
    pub fn building_names(&self) -> BTreeMap<&str, &str> {
        self.buildings
            .iter()
            .map(|(short, building)| (short.as_str(), building.long_name.as_str()))
            .collect()
    }

    /// Full record for a building.
    pub fn building(&self, short_name: &str) -> Option<&CampusBuilding> {
        self.buildings.get(short_name)
    }

    /// The walkway graph.
    pub fn graph(&self) -> &Graph<Point, f64> {
        &self.graph
    }

    /// Shortest walking route between two buildings.
    ///
    /// Asking for a route from a building to itself yields an empty path.
    ///
    /// # Errors
    ///
    /// - [`CampusError::UnknownBuilding`] if either short name is not on the map.
    /// - [`CampusError::NoPath`] if no walkway sequence connects them.
    pub fn find_shortest_path(&self, start: &str, end: &str) -> Result<Path<Point, f64>> {
        let from = self.location_of(start)?;
        let to = self.location_of(end)?;
        debug!("Routing {start} {from} -> {end} {to}");

        let edges = self
            .graph
            .shortest_weighted_path(&from, &to)
            .ok_or_else(|| CampusError::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            })?;

        Ok(Path::from_edges(from, &edges)?)
    }

    /// Shortest route serialized as JSON.
    ///
    /// The body is `{"start": {x, y}, "cost": total, "steps": [{"location": {x, y},
    /// "cost": cumulative}, ...]}`.
    ///
    /// # Errors
    ///
    /// Same as [`CampusMap::find_shortest_path`], plus [`CampusError::Json`].
    pub fn route_json(&self, start: &str, end: &str) -> Result<String> {
        let path = self.find_shortest_path(start, end)?;
        Ok(serde_json::to_string(&path)?)
    }

    /// Building directory (short name to long name) serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CampusError::Json`] if serialization fails.
    pub fn buildings_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.building_names())?)
    }

    fn location_of(&self, short_name: &str) -> Result<Point> {
        self.buildings
            .get(short_name)
            .map(CampusBuilding::location)
            .ok_or_else(|| CampusError::UnknownBuilding {
                short_name: short_name.to_string(),
            })
    }
}
