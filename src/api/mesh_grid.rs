use crate::api::cell::MeshCell;
use crate::core::bounds::MeshBounds;
use crate::core::constants::{LAT_WIDTHS, LONG_WIDTHS, MAX_LEVEL};
use crate::core::encode::point_to_meshcode;
use crate::core::geodesy::CellMetrics;
use crate::util::error::MeshError;
use geo_types::{Point, Rect};
use rayon::prelude::*;
use std::collections::HashSet;

/// All mesh cells at one level whose extents intersect a geographic
/// window.
#[derive(Debug, Clone)]
pub struct MeshGrid {
    cells: Vec<MeshCell>,
    level: u8,
}

impl MeshGrid {
    pub fn builder() -> MeshGridBuilder {
        MeshGridBuilder::new()
    }

    pub fn from_extent(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64, level: u8) -> Self {
        let cells = generate_cells_for_extent(min_lon, min_lat, max_lon, max_lat, level);
        Self { cells, level }
    }

    pub fn from_rect(rect: &Rect<f64>, level: u8) -> Self {
        Self::from_extent(
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            level,
        )
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[MeshCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeshCell> {
        self.cells.iter()
    }

    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&MeshCell> {
        let code = point_to_meshcode(point, self.level).ok()?;
        self.cells.iter().find(|cell| cell.code == code)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&MeshCell>
    where
        F: Fn(&MeshCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    pub fn to_bounds(&self) -> Vec<MeshBounds> {
        self.cells.iter().map(|cell| cell.bounds).collect()
    }

    /// Vincenty metrics for every cell, evaluated in parallel.
    pub fn metrics(&self) -> Result<Vec<CellMetrics>, MeshError> {
        self.cells.par_iter().map(|cell| cell.metrics()).collect()
    }
}

#[derive(Debug, Default)]
pub struct MeshGridBuilder {
    level: Option<u8>,
    min_lon: Option<f64>,
    min_lat: Option<f64>,
    max_lon: Option<f64>,
    max_lat: Option<f64>,
}

impl MeshGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn extent(mut self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        self.min_lon = Some(min_lon);
        self.min_lat = Some(min_lat);
        self.max_lon = Some(max_lon);
        self.max_lat = Some(max_lat);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_lon = Some(rect.min().x);
        self.min_lat = Some(rect.min().y);
        self.max_lon = Some(rect.max().x);
        self.max_lat = Some(rect.max().y);
        self
    }

    pub fn build(self) -> MeshGrid {
        let level = self.level.expect("level must be set");
        let min_lon = self.min_lon.expect("extent must be set");
        let min_lat = self.min_lat.expect("extent must be set");
        let max_lon = self.max_lon.expect("extent must be set");
        let max_lat = self.max_lat.expect("extent must be set");

        MeshGrid::from_extent(min_lon, min_lat, max_lon, max_lat, level)
    }
}

fn generate_cells_for_extent(
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
    level: u8,
) -> Vec<MeshCell> {
    if level < 1 || level > MAX_LEVEL {
        return Vec::new();
    }
    if max_lat < min_lat || max_lon < min_lon {
        return Vec::new();
    }

    let idx = (level - 1) as usize;
    let dlat = LAT_WIDTHS[idx];
    let dlong = LONG_WIDTHS[idx];

    // stepping one cell width from any phase visits every cell band the
    // window touches; clamping the last sample keeps it inside the window
    let rows = ((max_lat - min_lat) / dlat).ceil() as i64 + 1;
    let cols = ((max_lon - min_lon) / dlong).ceil() as i64 + 1;

    let mut seen = HashSet::new();
    let mut cells = Vec::new();
    for i in 0..rows {
        let lat = (min_lat + i as f64 * dlat).min(max_lat);
        for j in 0..cols {
            let lon = (min_lon + j as f64 * dlong).min(max_lon);
            let Ok(cell) = MeshCell::from_point(&(lon, lat), level) else {
                continue;
            };
            if seen.insert(cell.code) {
                cells.push(cell);
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{coord, point};

    #[test]
    fn test_mesh_grid_from_extent() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 3);
        assert!(!grid.is_empty());
        assert_eq!(grid.level(), 3);

        for cell in grid.iter() {
            assert_eq!(cell.level, 3);
        }
    }

    #[test]
    fn test_mesh_grid_from_rect() {
        let rect = Rect::new(
            coord! { x: 139.6, y: 35.5 },
            coord! { x: 139.7, y: 35.6 },
        );
        let grid = MeshGrid::from_rect(&rect, 3);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_mesh_grid_builder() {
        let grid = MeshGrid::builder()
            .level(3)
            .extent(139.6, 35.5, 139.7, 35.6)
            .build();

        assert!(!grid.is_empty());
        assert_eq!(grid.level(), 3);
    }

    #[test]
    fn test_get_cell_at() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 3);
        let pt = point! { x: 139.671488, y: 35.590676 };

        let cell = grid.get_cell_at(&pt);
        assert!(cell.is_some());
        assert_eq!(cell.unwrap().code, 2053393503);
        assert!(cell.unwrap().bounds.contains(&pt));
    }

    #[test]
    fn test_codes_are_unique() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 3);
        let mut codes: Vec<u64> = grid.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), grid.len());
    }

    #[test]
    fn test_grid_spanning_the_equator() {
        let grid = MeshGrid::from_extent(0.0, -0.01, 0.01, 0.01, 3);
        assert!(grid.iter().any(|c| c.code.to_string().starts_with('1')));
        assert!(grid.iter().any(|c| c.code.to_string().starts_with('5')));
    }

    #[test]
    fn test_filter_cells() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 3);
        let eastern = grid.filter(|cell| cell.bounds.long0 > 139.65);
        assert!(!eastern.is_empty());
        assert!(eastern.len() < grid.len());
    }

    #[test]
    fn test_batch_metrics() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 2);
        let metrics = grid.metrics().unwrap();
        assert_eq!(metrics.len(), grid.len());
        for m in metrics {
            assert!(m.w1 > 0.0 && m.w2 > 0.0 && m.h > 0.0 && m.area > 0.0);
        }
    }

    #[test]
    fn test_invalid_level_yields_empty_grid() {
        let grid = MeshGrid::from_extent(139.6, 35.5, 139.7, 35.6, 7);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_inverted_extent_yields_empty_grid() {
        let grid = MeshGrid::from_extent(139.7, 35.6, 139.6, 35.5, 3);
        assert!(grid.is_empty());
    }
}
