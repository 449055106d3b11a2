//! # worldmesh-rs
//!
//! Hierarchical world grid square mesh codes: bucket WGS84 positions into
//! nested rectangular cells from 80 km down to 100-125 m, decode a code
//! back to its cell extent, and measure cells on the ellipsoid.
//!
//! There are three main entry points.
//!
//! ### 1. Function-level encoding and decoding
//!
//! ```
//! use worldmesh_rs::{meshcode_to_bounds, point_to_meshcode};
//!
//! # fn main() -> Result<(), worldmesh_rs::MeshError> {
//! let code = point_to_meshcode(&(139.671488, 35.590676), 3)?;
//! assert_eq!(code, 2053393503);
//!
//! let bounds = meshcode_to_bounds(code, false)?;
//! assert!(bounds.contains(&(139.671488, 35.590676)));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `MeshCell` - Single Cell Operations
//!
//! ```
//! use worldmesh_rs::MeshCell;
//!
//! # fn main() -> Result<(), worldmesh_rs::MeshError> {
//! let cell = MeshCell::from_point(&(139.671488, 35.590676), 6)?;
//! println!("{}", cell.code);
//! let metrics = cell.metrics()?;
//! println!("{} m2", metrics.area);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `MeshGrid` - Collections of Cells
//!
//! ```
//! use worldmesh_rs::MeshGrid;
//! use geo_types::point;
//!
//! let grid = MeshGrid::builder()
//!     .level(3)
//!     .extent(139.6, 35.5, 139.7, 35.6)
//!     .build();
//!
//! let pt = point! { x: 139.671488, y: 35.590676 };
//! if let Some(cell) = grid.get_cell_at(&pt) {
//!     println!("{}", cell.code);
//! }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{MeshCell, MeshGrid, MeshGridBuilder};
pub use self::core::{
    CellMetrics, LAT_WIDTHS, LEVEL_DIGITS, LONG_WIDTHS, MAX_LEVEL, MeshBounds, Quadrant,
    WGS84_A, WGS84_B, WGS84_F, bounds_to_metrics, meshcode_to_bounds, meshcode_to_metrics,
    meshcode_to_ne, meshcode_to_nw, meshcode_to_se, meshcode_to_sw, point_to_meshcode,
    point_to_meshcode_ex100, vincenty_distance,
};
pub use util::{Coordinate, MeshError, truncate_coord};

pub use geo_types;
