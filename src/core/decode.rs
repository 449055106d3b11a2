use crate::core::bounds::MeshBounds;
use crate::core::constants::{
    EX100_LAT_WIDTH, EX100_LONG_WIDTH, LAT_WIDTHS, LEVEL_DIGITS, LONG_WIDTHS,
};
use crate::core::quadrant::Quadrant;
use crate::util::error::MeshError;
use crate::util::format::truncate_coord;
use geo_types::Point;

/// Decodes a mesh code to the extent of its cell.
///
/// Parsing is length-driven: the digit count selects the level and the
/// field offsets. With `extension` set, a 13-digit code is read on the
/// extended 100 m track (3" by 4.5" terminal split) instead of the 125 m
/// quadrant track; shorter codes decode identically either way.
pub fn meshcode_to_bounds(code: u64, extension: bool) -> Result<MeshBounds, MeshError> {
    let digits = code.to_string();
    let n = digits.len();
    if !LEVEL_DIGITS.contains(&n) {
        return Err(MeshError::InvalidCodeLength(n));
    }
    let bytes = digits.as_bytes();
    let d = |i: usize| i64::from(bytes[i] - b'0');

    let quad = Quadrant::from_area_digit(bytes[0] - b'0')?;
    let (x, y, z) = (quad.x, quad.y, quad.z);

    let code12 = d(1) * 100 + d(2) * 10 + d(3);
    let code34 = d(4) * 10 + d(5);

    let mut lat0: f64;
    let mut long0: f64;
    let dlat: f64;
    let dlong: f64;

    if n == 6 {
        lat0 = (code12 - x + 1) as f64 * 2.0 / 3.0;
        long0 = ((code34 + y) + 100 * z) as f64;
        dlat = LAT_WIDTHS[0];
        dlong = LONG_WIDTHS[0];
    } else {
        lat0 = code12 as f64 * 2.0 / 3.0;
        long0 = (code34 + 100 * z) as f64;
        let code5 = d(6);
        let code6 = d(7);
        if code5 > 7 || code6 > 7 {
            return Err(MeshError::InvalidDigit(format!(
                "10km sub-block digits ({}, {}) are outside 0-7",
                code5, code6
            )));
        }
        if n == 8 {
            lat0 += (code5 - x + 1) as f64 * 2.0 / 3.0 / 8.0;
            long0 += (code6 + y) as f64 / 8.0;
            dlat = LAT_WIDTHS[1];
            dlong = LONG_WIDTHS[1];
        } else {
            lat0 += code5 as f64 * 2.0 / 3.0 / 8.0;
            long0 += code6 as f64 / 8.0;
            let code7 = d(8);
            let code8 = d(9);
            lat0 += (code7 - x + 1) as f64 * 2.0 / 3.0 / 8.0 / 10.0;
            long0 += (code8 + y) as f64 / 8.0 / 10.0;
            if n == 10 {
                dlat = LAT_WIDTHS[2];
                dlong = LONG_WIDTHS[2];
            } else if n == 13 && extension {
                let code9 = quadrant_digit(d(10), "500m")?;
                lat0 += ((code9 - 1) / 2 + 2 * x - 2) as f64 * 2.0 / 3.0 / 8.0 / 10.0 / 2.0;
                long0 += ((code9 - 1) % 2 - 2 * y) as f64 / 8.0 / 10.0 / 2.0;
                let ex10 = extended_digit(d(11))?;
                let ex11 = extended_digit(d(12))?;
                lat0 += (ex10 - x + 1) as f64 * 2.0 / 3.0 / 8.0 / 10.0 / 2.0 / 5.0;
                long0 += (ex11 + y) as f64 / 8.0 / 10.0 / 2.0 / 5.0;
                dlat = EX100_LAT_WIDTH;
                dlong = EX100_LONG_WIDTH;
            } else {
                let code9 = quadrant_digit(d(10), "500m")?;
                lat0 += ((code9 - 1) / 2 + x - 1) as f64 * 2.0 / 3.0 / 8.0 / 10.0 / 2.0;
                long0 += ((code9 - 1) % 2 - y) as f64 / 8.0 / 10.0 / 2.0;
                if n == 11 {
                    dlat = LAT_WIDTHS[3];
                    dlong = LONG_WIDTHS[3];
                } else {
                    let code10 = quadrant_digit(d(11), "250m")?;
                    lat0 += ((code10 - 1) / 2 + x - 1) as f64 * 2.0 / 3.0 / 8.0 / 10.0 / 2.0 / 2.0;
                    long0 += ((code10 - 1) % 2 - y) as f64 / 8.0 / 10.0 / 2.0 / 2.0;
                    if n == 12 {
                        dlat = LAT_WIDTHS[4];
                        dlong = LONG_WIDTHS[4];
                    } else {
                        let code11 = quadrant_digit(d(12), "125m")?;
                        lat0 += ((code11 - 1) / 2 + x - 1) as f64 * 2.0 / 3.0 / 8.0 / 10.0 / 2.0
                            / 2.0
                            / 2.0;
                        long0 += ((code11 - 1) % 2 - y) as f64 / 8.0 / 10.0 / 2.0 / 2.0 / 2.0;
                        dlat = LAT_WIDTHS[5];
                        dlong = LONG_WIDTHS[5];
                    }
                }
            }
        }
    }

    lat0 = quad.lat_sign() * lat0;
    long0 = quad.long_sign() * long0;
    Ok(MeshBounds {
        lat0: truncate_coord(lat0),
        long0: truncate_coord(long0),
        lat1: truncate_coord(lat0 - dlat),
        long1: truncate_coord(long0 + dlong),
    })
}

/// North-west corner of the cell.
pub fn meshcode_to_nw(code: u64, extension: bool) -> Result<Point<f64>, MeshError> {
    Ok(meshcode_to_bounds(code, extension)?.nw())
}

/// South-west corner of the cell.
pub fn meshcode_to_sw(code: u64, extension: bool) -> Result<Point<f64>, MeshError> {
    Ok(meshcode_to_bounds(code, extension)?.sw())
}

/// North-east corner of the cell.
pub fn meshcode_to_ne(code: u64, extension: bool) -> Result<Point<f64>, MeshError> {
    Ok(meshcode_to_bounds(code, extension)?.ne())
}

/// South-east corner of the cell.
pub fn meshcode_to_se(code: u64, extension: bool) -> Result<Point<f64>, MeshError> {
    Ok(meshcode_to_bounds(code, extension)?.se())
}

fn quadrant_digit(value: i64, field: &'static str) -> Result<i64, MeshError> {
    if (1..=4).contains(&value) {
        Ok(value)
    } else {
        Err(MeshError::InvalidDigit(format!(
            "{} quadrant digit {} is outside 1-4",
            field, value
        )))
    }
}

fn extended_digit(value: i64) -> Result<i64, MeshError> {
    if (0..=4).contains(&value) {
        Ok(value)
    } else {
        Err(MeshError::InvalidDigit(format!(
            "extended 100m digit {} is outside 0-4",
            value
        )))
    }
}
