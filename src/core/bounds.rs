use crate::util::coord::Coordinate;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Decoded extent of a mesh cell.
///
/// `(lat0, long0)` is the north-west corner and `(lat1, long1)` the
/// south-east corner, so `lat0 >= lat1` and `long1 >= long0` always hold.
/// Corner values carry the truncation formatting of the mesh code contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshBounds {
    pub lat0: f64,
    pub long0: f64,
    pub lat1: f64,
    pub long1: f64,
}

impl MeshBounds {
    /// North-west corner.
    pub fn nw(&self) -> Point<f64> {
        Point::new(self.long0, self.lat0)
    }

    /// South-west corner.
    pub fn sw(&self) -> Point<f64> {
        Point::new(self.long0, self.lat1)
    }

    /// North-east corner.
    pub fn ne(&self) -> Point<f64> {
        Point::new(self.long1, self.lat0)
    }

    /// South-east corner.
    pub fn se(&self) -> Point<f64> {
        Point::new(self.long1, self.lat1)
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.long0 + self.long1) / 2.0,
            (self.lat0 + self.lat1) / 2.0,
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.lat0 - self.lat1
    }

    pub fn long_span(&self) -> f64 {
        self.long1 - self.long0
    }

    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        let (lon, lat) = (coord.x(), coord.y());
        lat <= self.lat0 && lat >= self.lat1 && lon >= self.long0 && lon <= self.long1
    }
}
