use crate::core::constants::{LEVEL_DIGITS, MAX_LEVEL};
use crate::core::quadrant::Quadrant;
use crate::util::coord::Coordinate;
use crate::util::error::MeshError;

/// Converts a position to its mesh code at the given level (1-6).
///
/// Level 1 is the 80 km grid (6 digits), level 6 the 125 m grid
/// (13 digits). Coarser codes are leading truncations of the level 6
/// expansion.
pub fn point_to_meshcode<C: Coordinate>(coord: &C, level: u8) -> Result<u64, MeshError> {
    if level < 1 || level > MAX_LEVEL {
        return Err(MeshError::InvalidLevel(level));
    }
    let mesh = meshcode13(coord.y(), coord.x());
    let digits = LEVEL_DIGITS[(level - 1) as usize];
    Ok(mesh[..digits].parse().expect("mesh code is decimal digits"))
}

/// Converts a position to its extended 100 m mesh code (13 digits,
/// 3 arc-seconds of latitude by 4.5 arc-seconds of longitude).
///
/// The terminal digit pair replaces the 250 m and 125 m quadrant digits of
/// the standard track; the two 13-digit code families are distinct.
pub fn point_to_meshcode_ex100<C: Coordinate>(coord: &C) -> u64 {
    meshcode13_ex100(coord.y(), coord.x())
        .parse()
        .expect("mesh code is decimal digits")
}

/// Full 13-digit standard-track expansion.
///
/// The latitude index `p` is always zero-padded to 3 characters while the
/// longitude index `u` is only padded below 10; the asymmetry is part of
/// the code grammar.
fn meshcode13(latitude: f64, longitude: f64) -> String {
    let quad = Quadrant::resolve(latitude, longitude);
    let (latitude, longitude) = quad.normalize(latitude, longitude);
    let z = quad.z as f64;

    // latitude ladder: 40' blocks, /5, then 30" / 15" / 7.5" / 3.75" splits
    let p = (latitude * 60.0 / 40.0).floor();
    let a = (latitude * 60.0 / 40.0 - p) * 40.0;
    let q = (a / 5.0).floor();
    let b = (a / 5.0 - q) * 5.0;
    let r = (b * 60.0 / 30.0).floor();
    let c = (b * 60.0 / 30.0 - r) * 30.0;
    let s2u = (c / 15.0).floor();
    let d = (c / 15.0 - s2u) * 15.0;
    let s4u = (d / 7.5).floor();
    let e = (d / 7.5 - s4u) * 7.5;
    let s8u = (e / 3.75).floor();

    // longitude ladder: integer degrees, then 7.5' / 45" / 22.5" / 11.25" / 5.625"
    let u = (longitude - 100.0 * z).floor();
    let f = longitude - 100.0 * z - u;
    let v = (f * 60.0 / 7.5).floor();
    let g = (f * 60.0 / 7.5 - v) * 7.5;
    let w = (g * 60.0 / 45.0).floor();
    let h = (g * 60.0 / 45.0 - w) * 45.0;
    let s2l = (h / 22.5).floor();
    let i = (h / 22.5 - s2l) * 22.5;
    let s4l = (i / 11.25).floor();
    let j = (i / 11.25 - s4l) * 11.25;
    let s8l = (j / 5.625).floor();

    // 2x2 quadrant digits, 1-based: SW=1, SE=2, NW=3, NE=4
    let s2 = s2u as i64 * 2 + s2l as i64 + 1;
    let s4 = s4u as i64 * 2 + s4l as i64 + 1;
    let s8 = s8u as i64 * 2 + s8l as i64 + 1;

    format!(
        "{}{:03}{:02}{}{}{}{}{}{}{}",
        quad.area, p as i64, u as i64, q as i64, v as i64, r as i64, w as i64, s2, s4, s8
    )
}

/// Full 13-digit extended-track expansion: the last two ladder levels use
/// 3" latitude and 4.5" longitude splits instead of the 2x2 quadrant pair.
fn meshcode13_ex100(latitude: f64, longitude: f64) -> String {
    let quad = Quadrant::resolve(latitude, longitude);
    let (latitude, longitude) = quad.normalize(latitude, longitude);
    let z = quad.z as f64;

    let p = (latitude * 60.0 / 40.0).floor();
    let a = (latitude * 60.0 / 40.0 - p) * 40.0;
    let q = (a / 5.0).floor();
    let b = (a / 5.0 - q) * 5.0;
    let r = (b * 60.0 / 30.0).floor();
    let c = (b * 60.0 / 30.0 - r) * 30.0;
    let s2u = (c / 15.0).floor();
    let d = (c / 15.0 - s2u) * 15.0;
    let et = (d / 3.0).floor();

    let u = (longitude - 100.0 * z).floor();
    let f = longitude - 100.0 * z - u;
    let v = (f * 60.0 / 7.5).floor();
    let g = (f * 60.0 / 7.5 - v) * 7.5;
    let w = (g * 60.0 / 45.0).floor();
    let h = (g * 60.0 / 45.0 - w) * 45.0;
    let s2l = (h / 22.5).floor();
    let i = (h / 22.5 - s2l) * 22.5;
    let jt = (i / 4.5).floor();

    let s2 = s2u as i64 * 2 + s2l as i64 + 1;

    format!(
        "{}{:03}{:02}{}{}{}{}{}{}{}",
        quad.area,
        p as i64,
        u as i64,
        q as i64,
        v as i64,
        r as i64,
        w as i64,
        s2,
        et as i64,
        jt as i64
    )
}
