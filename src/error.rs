/// Error type for quadkey-rs operations.
#[derive(Debug, PartialEq)]
pub enum QuadKeyError {
    /// The zoom level is outside the valid range (0-31).
    InvalidZoomLevel(u8),
    /// The quadkey contains a digit outside 0-3 or is longer than the maximum zoom.
    InvalidQuadKey(String),
    /// A batch of quadkeys mixes lengths, and so mixes zoom levels.
    InconsistentQuadKeyLength { expected: usize, found: usize },
    /// A tile index does not fit the grid at the given zoom level.
    TileOutOfRange { x: u32, y: u32, zoom: u8 },
    /// Parallel batch inputs have different lengths.
    ShapeMismatch { expected: usize, found: usize },
}

impl QuadKeyError {
    /// Returns true for errors caused by a malformed value rather than mismatched batch shapes.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuadKeyError::InvalidZoomLevel(_)
                | QuadKeyError::InvalidQuadKey(_)
                | QuadKeyError::InconsistentQuadKeyLength { .. }
                | QuadKeyError::TileOutOfRange { .. }
        )
    }
}

impl std::fmt::Display for QuadKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadKeyError::InvalidZoomLevel(z) => write!(f, "Invalid zoom level: {}", z),
            QuadKeyError::InvalidQuadKey(qk) => write!(f, "Invalid quadkey: '{}'", qk),
            QuadKeyError::InconsistentQuadKeyLength { expected, found } => write!(
                f,
                "Inconsistent quadkey length: expected {}, found {}",
                expected, found
            ),
            QuadKeyError::TileOutOfRange { x, y, zoom } => {
                write!(f, "Tile ({}, {}) is out of range for zoom {}", x, y, zoom)
            }
            QuadKeyError::ShapeMismatch { expected, found } => {
                write!(f, "Shape mismatch: expected {} items, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for QuadKeyError {}
