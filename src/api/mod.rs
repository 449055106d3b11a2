pub mod cell;
pub mod mesh_grid;

pub use cell::MeshCell;
pub use mesh_grid::{MeshGrid, MeshGridBuilder};
