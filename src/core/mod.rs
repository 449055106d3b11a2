pub mod bounds;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod geodesy;
pub mod quadrant;

pub use bounds::MeshBounds;
pub use constants::{
    EX100_LAT_WIDTH, EX100_LONG_WIDTH, LAT_WIDTHS, LEVEL_DIGITS, LONG_WIDTHS, MAX_LEVEL,
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE, WGS84_A, WGS84_B, WGS84_F,
};
pub use decode::{
    meshcode_to_bounds, meshcode_to_ne, meshcode_to_nw, meshcode_to_se, meshcode_to_sw,
};
pub use encode::{point_to_meshcode, point_to_meshcode_ex100};
pub use geodesy::{CellMetrics, bounds_to_metrics, meshcode_to_metrics, vincenty_distance};
pub use quadrant::Quadrant;
