use worldmesh_rs::{MeshCell, MeshError, point_to_meshcode};

fn main() -> Result<(), MeshError> {
    let lon = 139.671488;
    let lat = 35.590676;

    let cell = MeshCell::from_point(&(lon, lat), 3)?;

    println!("Lat={}, Lng={}", lat, lon);
    println!("Mesh code: {}", cell.code);
    println!(
        "NW({}, {}), SW({}, {}), NE({}, {}), SE({}, {})",
        cell.nw().x(),
        cell.nw().y(),
        cell.sw().x(),
        cell.sw().y(),
        cell.ne().x(),
        cell.ne().y(),
        cell.se().x(),
        cell.se().y()
    );

    let upper = point_to_meshcode(&(cell.ne().x(), cell.ne().y() + 0.000001), 3)?;
    println!("Upper: {}", upper);
    let lower = point_to_meshcode(&(cell.se().x(), cell.se().y() - 0.000001), 3)?;
    println!("Lower: {}", lower);
    let left = point_to_meshcode(&(cell.nw().x() - 0.000001, cell.nw().y()), 3)?;
    println!("Left: {}", left);
    let right = point_to_meshcode(&(cell.ne().x() + 0.000001, cell.ne().y()), 3)?;
    println!("Right: {}", right);

    let metrics = cell.metrics()?;
    println!(
        "W1={} m, W2={} m, H={} m, area={} m2",
        metrics.w1, metrics.w2, metrics.h, metrics.area
    );

    Ok(())
}
