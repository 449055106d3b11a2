/// Truncates a decoded coordinate to the fixed character budget of the mesh
/// code contract: 11 characters when the value exceeds 100, 10 when it
/// exceeds 10, 9 otherwise. A negative value spends one character of its
/// budget on the sign. Digits are cut, never rounded.
pub fn truncate_coord(v: f64) -> f64 {
    let s = v.to_string();
    let keep = if v > 100.0 {
        11
    } else if v > 10.0 {
        10
    } else {
        9
    };
    if s.len() <= keep {
        return v;
    }
    s[..keep].parse().unwrap_or(v)
}
