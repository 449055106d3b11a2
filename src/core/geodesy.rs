use crate::core::bounds::MeshBounds;
use crate::core::constants::{
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE, WGS84_A, WGS84_B, WGS84_F,
};
use crate::core::decode::meshcode_to_bounds;
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Physical size of a mesh cell on the WGS84 ellipsoid.
///
/// `w1` and `w2` are the north and south edge lengths and `h` the west
/// edge length, in metres. `area` is the trapezoid approximation
/// `(w1 + w2) / 2 * h` in square metres, not an ellipsoidal surface
/// integral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellMetrics {
    pub w1: f64,
    pub w2: f64,
    pub h: f64,
    pub area: f64,
}

/// Geodesic distance in metres between two positions on the WGS84
/// ellipsoid, by Vincenty's inverse formulae (1975).
///
/// Coincident points return 0.0. Near-antipodal pairs make the iteration
/// oscillate; it is cut off after a bounded number of passes with
/// [`MeshError::NonConvergence`].
pub fn vincenty_distance<C1, C2>(p1: &C1, p2: &C2) -> Result<f64, MeshError>
where
    C1: Coordinate,
    C2: Coordinate,
{
    let (lat1, lon1) = (p1.y(), p1.x());
    let (lat2, lon2) = (p2.y(), p2.x());

    let l = (lon1 - lon2) / 180.0 * PI;
    let u1 = ((1.0 - WGS84_F) * (lat1 / 180.0 * PI).tan()).atan();
    let u2 = ((1.0 - WGS84_F) * (lat2 / 180.0 * PI).tan()).atan();

    let mut lambda = l;
    let mut dlambda = 10.0f64;
    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos2_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;
    let mut c = 0.0;

    let mut iterations = 0u32;
    while dlambda.abs() > VINCENTY_TOLERANCE {
        iterations += 1;
        if iterations > VINCENTY_MAX_ITERATIONS {
            return Err(MeshError::NonConvergence);
        }
        let cs = u2.cos() * lambda.sin();
        let cscc = u1.cos() * u2.sin() - u1.sin() * u2.cos() * lambda.cos();
        sin_sigma = (cs * cs + cscc * cscc).sqrt();
        if sin_sigma == 0.0 {
            return Ok(0.0);
        }
        cos_sigma = u1.sin() * u2.sin() + u1.cos() * u2.cos() * lambda.cos();
        sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = u1.cos() * u2.cos() * lambda.sin() / sin_sigma;
        cos2_alpha = 1.0 - sin_alpha * sin_alpha;
        let lambda_next = if cos2_alpha == 0.0 {
            // equatorial geodesic: no ellipsoidal correction term
            c = 0.0;
            l + WGS84_F * sin_alpha * sigma
        } else {
            cos_2sigma_m = cos_sigma - 2.0 * u1.sin() * u2.sin() / cos2_alpha;
            c = WGS84_F / 16.0 * cos2_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos2_alpha));
            l + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)))
        };
        dlambda = lambda_next - lambda;
        lambda = lambda_next;
    }

    let (big_a, dsigma) = if c == 0.0 {
        (1.0, 0.0)
    } else {
        let u_sq = cos2_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
        let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let dsigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + 1.0 / 4.0
                    * big_b
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - 1.0 / 6.0
                            * big_b
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
        (big_a, dsigma)
    };

    Ok(WGS84_B * big_a * (sigma - dsigma))
}

/// Edge lengths and trapezoid area of a decoded cell.
///
/// `w1` spans the north edge, `w2` the south edge, `h` the west edge.
pub fn bounds_to_metrics(bounds: &MeshBounds) -> Result<CellMetrics, MeshError> {
    let w1 = vincenty_distance(&(bounds.long0, bounds.lat0), &(bounds.long1, bounds.lat0))?;
    let w2 = vincenty_distance(&(bounds.long0, bounds.lat1), &(bounds.long1, bounds.lat1))?;
    let h = vincenty_distance(&(bounds.long0, bounds.lat0), &(bounds.long0, bounds.lat1))?;
    Ok(CellMetrics {
        w1,
        w2,
        h,
        area: (w1 + w2) * h * 0.5,
    })
}

/// Edge lengths and trapezoid area of the cell a mesh code names.
pub fn meshcode_to_metrics(code: u64, extension: bool) -> Result<CellMetrics, MeshError> {
    bounds_to_metrics(&meshcode_to_bounds(code, extension)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_coincident_points_are_zero() {
        for p in [(0.0, 0.0), (139.671488, 35.590676), (-46.6333, -23.5505)] {
            assert_eq!(vincenty_distance(&p, &p), Ok(0.0));
        }
    }

    #[test]
    fn test_symmetry() {
        let a = (139.671488, 35.590676);
        let b = (135.5023, 34.6937);
        let d1 = vincenty_distance(&a, &b).unwrap();
        let d2 = vincenty_distance(&b, &a).unwrap();
        assert!(close(d1, d2, 1e-6));
    }

    #[test]
    fn test_known_distances() {
        // one tenth of a degree of longitude at 35N
        let d = vincenty_distance(&(135.0, 35.0), &(135.1, 35.0)).unwrap();
        assert!(close(d, 9128.8165832586, 1e-4), "got {}", d);

        // a degree of longitude along the equator
        let d = vincenty_distance(&(0.0, 0.0), &(1.0, 0.0)).unwrap();
        assert!(close(d, 111319.4907932232, 1e-4), "got {}", d);

        // a degree of latitude along the prime meridian
        let d = vincenty_distance(&(0.0, 0.0), &(0.0, 1.0)).unwrap();
        assert!(close(d, 110574.3885579569, 1e-4), "got {}", d);

        // Tokyo to Osaka
        let d = vincenty_distance(&(139.671488, 35.590676), &(135.5023, 34.6937)).unwrap();
        assert!(close(d, 392717.8925081624, 1e-3), "got {}", d);

        // London to New York
        let d = vincenty_distance(&(-0.1278, 51.5074), &(-74.0060, 40.7128)).unwrap();
        assert!(close(d, 5585233.578943141, 1e-2), "got {}", d);
    }

    #[test]
    fn test_near_antipodal_does_not_converge() {
        assert_eq!(
            vincenty_distance(&(0.0, 0.0), &(179.7, 0.5)),
            Err(MeshError::NonConvergence)
        );
        assert_eq!(
            vincenty_distance(&(0.0, 0.0), &(180.0, 0.0)),
            Err(MeshError::NonConvergence)
        );
    }

    #[test]
    fn test_cell_metrics_from_code() {
        let m = meshcode_to_metrics(1000000000111, false).unwrap();
        assert!(close(m.w1, 173.9367043140, 1e-4), "w1 {}", m.w1);
        assert!(close(m.w2, 173.9367043425, 1e-4), "w2 {}", m.w2);
        assert!(close(m.h, 115.1741656961, 1e-4), "h {}", m.h);
        assert!(close(m.area, 20033.0148049271, 1e-2), "area {}", m.area);

        let m = meshcode_to_metrics(2053393503434, false).unwrap();
        assert!(close(m.w1, 141.6034302926, 1e-4), "w1 {}", m.w1);
        assert!(close(m.w2, 141.6052645161, 1e-4), "w2 {}", m.w2);
        assert!(close(m.h, 115.5670196527, 1e-4), "h {}", m.h);
        assert!(close(m.area, 16364.7923993840, 1e-2), "area {}", m.area);
    }

    #[test]
    fn test_metrics_positive_for_mixed_hemispheres() {
        for code in [100000u64, 205339, 605051, 306174, 703546, 7035462560212] {
            let m = meshcode_to_metrics(code, false).unwrap();
            assert!(m.w1 > 0.0 && m.w2 > 0.0 && m.h > 0.0 && m.area > 0.0, "code {}", code);
        }
    }

    #[test]
    fn test_north_and_south_edges_differ_away_from_equator() {
        // meridians converge poleward, so the cell is a true trapezoid
        let m = meshcode_to_metrics(205339, false).unwrap();
        assert!(m.w1 < m.w2);
        let southern = meshcode_to_metrics(605051, false).unwrap();
        assert!(southern.w1 > southern.w2);
    }
}
