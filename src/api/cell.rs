use crate::core::bounds::MeshBounds;
use crate::core::constants::{LEVEL_DIGITS, MAX_LEVEL};
use crate::core::decode::meshcode_to_bounds;
use crate::core::encode::{point_to_meshcode, point_to_meshcode_ex100};
use crate::core::geodesy::{CellMetrics, bounds_to_metrics};
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A mesh cell: a code together with its level and decoded extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshCell {
    pub code: u64,
    pub level: u8,
    pub extended: bool,
    pub bounds: MeshBounds,
}

impl MeshCell {
    /// Create a MeshCell from a position at the given level (1-6)
    ///
    /// # Example
    /// ```
    /// use worldmesh_rs::MeshCell;
    ///
    /// # fn main() -> Result<(), worldmesh_rs::MeshError> {
    /// let cell = MeshCell::from_point(&(139.671488, 35.590676), 3)?;
    /// assert_eq!(cell.code, 2053393503);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point<C: Coordinate>(coord: &C, level: u8) -> Result<Self, MeshError> {
        let code = point_to_meshcode(coord, level)?;
        let bounds = meshcode_to_bounds(code, false)?;
        Ok(Self {
            code,
            level,
            extended: false,
            bounds,
        })
    }

    /// Create a MeshCell on the extended 100 m track from a position
    pub fn from_point_ex100<C: Coordinate>(coord: &C) -> Result<Self, MeshError> {
        let code = point_to_meshcode_ex100(coord);
        let bounds = meshcode_to_bounds(code, true)?;
        Ok(Self {
            code,
            level: MAX_LEVEL,
            extended: true,
            bounds,
        })
    }

    /// Create a MeshCell from a standard-track mesh code; the level is
    /// taken from the digit count
    ///
    /// # Example
    /// ```
    /// use worldmesh_rs::MeshCell;
    ///
    /// # fn main() -> Result<(), worldmesh_rs::MeshError> {
    /// let cell = MeshCell::from_code(2053393503)?;
    /// assert_eq!(cell.level, 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: u64) -> Result<Self, MeshError> {
        let n = code.to_string().len();
        let level = LEVEL_DIGITS
            .iter()
            .position(|&digits| digits == n)
            .ok_or(MeshError::InvalidCodeLength(n))? as u8
            + 1;
        let bounds = meshcode_to_bounds(code, false)?;
        Ok(Self {
            code,
            level,
            extended: false,
            bounds,
        })
    }

    /// Create a MeshCell from an extended 100 m mesh code (13 digits)
    pub fn from_code_ex100(code: u64) -> Result<Self, MeshError> {
        let n = code.to_string().len();
        if n != 13 {
            return Err(MeshError::InvalidCodeLength(n));
        }
        let bounds = meshcode_to_bounds(code, true)?;
        Ok(Self {
            code,
            level: MAX_LEVEL,
            extended: true,
            bounds,
        })
    }

    pub fn nw(&self) -> Point<f64> {
        self.bounds.nw()
    }

    pub fn sw(&self) -> Point<f64> {
        self.bounds.sw()
    }

    pub fn ne(&self) -> Point<f64> {
        self.bounds.ne()
    }

    pub fn se(&self) -> Point<f64> {
        self.bounds.se()
    }

    pub fn center(&self) -> Point<f64> {
        self.bounds.center()
    }

    /// Edge lengths and trapezoid area of the cell on the WGS84 ellipsoid.
    pub fn metrics(&self) -> Result<CellMetrics, MeshError> {
        bounds_to_metrics(&self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point() -> Result<(), MeshError> {
        let cell = MeshCell::from_point(&(139.671488, 35.590676), 3)?;

        assert_eq!(cell.code, 2053393503);
        assert_eq!(cell.level, 3);
        assert!(!cell.extended);
        assert!(cell.bounds.contains(&(139.671488, 35.590676)));
        Ok(())
    }

    #[test]
    fn test_from_point_and_from_code_agree() -> Result<(), MeshError> {
        for level in 1..=6 {
            let direct = MeshCell::from_point(&(151.2093, -33.8688), level)?;
            let restored = MeshCell::from_code(direct.code)?;
            assert_eq!(direct, restored);
        }
        Ok(())
    }

    #[test]
    fn test_from_code_derives_level() -> Result<(), MeshError> {
        assert_eq!(MeshCell::from_code(205339)?.level, 1);
        assert_eq!(MeshCell::from_code(20533935)?.level, 2);
        assert_eq!(MeshCell::from_code(2053393503)?.level, 3);
        assert_eq!(MeshCell::from_code(20533935034)?.level, 4);
        assert_eq!(MeshCell::from_code(205339350343)?.level, 5);
        assert_eq!(MeshCell::from_code(2053393503434)?.level, 6);
        Ok(())
    }

    #[test]
    fn test_ex100_round_trip() -> Result<(), MeshError> {
        let cell = MeshCell::from_point_ex100(&(139.671488, 35.590676))?;
        assert_eq!(cell.code, 2053393503432);
        assert!(cell.extended);
        assert!(cell.bounds.contains(&(139.671488, 35.590676)));

        let restored = MeshCell::from_code_ex100(cell.code)?;
        assert_eq!(cell, restored);
        Ok(())
    }

    #[test]
    fn test_from_code_rejects_bad_lengths() {
        assert_eq!(
            MeshCell::from_code(12345),
            Err(MeshError::InvalidCodeLength(5))
        );
        assert_eq!(
            MeshCell::from_code_ex100(2053393503),
            Err(MeshError::InvalidCodeLength(10))
        );
    }

    #[test]
    fn test_corners_and_center() -> Result<(), MeshError> {
        let cell = MeshCell::from_code(1000000000111)?;
        assert_eq!(cell.nw(), Point::new(0.0, 0.0010416));
        assert_eq!(cell.se(), Point::new(0.0015625, 0.0));
        assert!(cell.bounds.contains(&cell.center()));
        Ok(())
    }

    #[test]
    fn test_metrics() -> Result<(), MeshError> {
        let m = MeshCell::from_code(2053393503434)?.metrics()?;
        assert!(m.w1 > 0.0 && m.w2 > 0.0 && m.h > 0.0 && m.area > 0.0);
        Ok(())
    }
}
