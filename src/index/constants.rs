/// Edge length of a tile in pixels
pub const TILE_SIZE: u64 = 256;

/// Northern limit of the Web Mercator square, in degrees
pub const MAX_LATITUDE: f64 = 85.05112877;

/// Southern limit of the Web Mercator square, in degrees
pub const MIN_LATITUDE: f64 = -85.05112877;

pub const MAX_LONGITUDE: f64 = 180.0;

pub const MIN_LONGITUDE: f64 = -180.0;

/// Maximum zoom level (one quadkey digit per level)
pub const MAX_ZOOM_LEVEL: u8 = 31;

/// Quadkey digit for each 2-bit `(y << 1) | x` value
pub const BASE4_DIGITS: [char; 4] = ['0', '1', '2', '3'];
