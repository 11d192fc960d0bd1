//! # pathgraph-campus
//!
//! Campus route finding and script-driven conformance testing built on
//! [`pathgraph`].
//!
//! - [`parser`]: CSV readers for buildings and walkway segments
//! - [`CampusMap`]: resolves building short names to map locations and answers
//!   shortest-route queries, including the JSON bodies a route endpoint returns
//! - [`script`]: a line-oriented command driver whose canonical output pins down
//!   node ordering, child ordering and three-decimal weight formatting
//!
//! ## Example
//!
//! ```rust
//! use pathgraph_campus::parser::{CampusBuilding, CampusPath};
//! use pathgraph_campus::CampusMap;
//!
//! let buildings = vec![
//!     CampusBuilding { short_name: "A".into(), long_name: "Alpha Hall".into(), x: 0.0, y: 0.0 },
//!     CampusBuilding { short_name: "B".into(), long_name: "Beta Hall".into(), x: 3.0, y: 4.0 },
//! ];
//! let paths = vec![CampusPath { x1: 0.0, y1: 0.0, x2: 3.0, y2: 4.0, distance: 5.0 }];
//!
//! let map = CampusMap::from_records(buildings, paths).unwrap();
//! let route = map.find_shortest_path("A", "B").unwrap();
//! assert_eq!(route.cost(), 5.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod campus_map;
pub mod config;
pub mod error;
pub mod parser;
pub mod point;
pub mod script;

pub use campus_map::CampusMap;
pub use config::CampusConfig;
pub use error::{CampusError, Result};
pub use point::Point;
pub use script::{run_script, ScriptDriver, ScriptError};
