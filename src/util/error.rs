/// Error type for worldmesh-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The mesh level is outside the valid range (1-6).
    InvalidLevel(u8),
    /// The mesh code has a digit count that matches no level of the grammar.
    InvalidCodeLength(usize),
    /// A mesh code field holds a value outside its valid range.
    InvalidDigit(String),
    /// The geodesic solver did not converge within the iteration bound.
    NonConvergence,
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::InvalidLevel(level) => write!(f, "Invalid mesh level: {}", level),
            MeshError::InvalidCodeLength(n) => write!(f, "Invalid mesh code length: {} digits", n),
            MeshError::InvalidDigit(msg) => write!(f, "Invalid mesh code digit: {}", msg),
            MeshError::NonConvergence => write!(f, "Geodesic solver did not converge"),
        }
    }
}

impl std::error::Error for MeshError {}
