use crate::error::QuadKeyError;
use crate::index::constants::{BASE4_DIGITS, MAX_ZOOM_LEVEL};
use crate::index::tiling::{
    check_zoom, clamped_pixel_tile, tile_bounds, tile_pixel_bounds, tile_xy, tiles_per_axis,
};

/// Interleaves the low `zoom` bits of `tile_x` and `tile_y`, most significant first.
///
/// Each base-4 digit is `2 * y_bit + x_bit` for one zoom level.
pub(crate) fn encode(tile_x: u32, tile_y: u32, zoom: u8) -> String {
    let mut quadkey = String::with_capacity(zoom as usize);
    for bit in (0..zoom).rev() {
        let digit = (((tile_y >> bit) & 1) << 1) | ((tile_x >> bit) & 1);
        quadkey.push(BASE4_DIGITS[digit as usize]);
    }
    quadkey
}

/// De-interleaves a quadkey into `(tile_x, tile_y)`; the zoom is its length.
pub(crate) fn decode(quadkey: &str) -> Result<(u32, u32), QuadKeyError> {
    let bytes = quadkey.as_bytes();
    if bytes.len() > MAX_ZOOM_LEVEL as usize {
        return Err(QuadKeyError::InvalidQuadKey(quadkey.to_string()));
    }

    let zoom = bytes.len();
    let mut tile_x = 0u32;
    let mut tile_y = 0u32;

    for (i, byte) in bytes.iter().enumerate() {
        let digit = match byte {
            b'0'..=b'3' => (byte - b'0') as u32,
            _ => return Err(QuadKeyError::InvalidQuadKey(quadkey.to_string())),
        };
        let bit = zoom - 1 - i;
        tile_x |= (digit & 1) << bit;
        tile_y |= ((digit >> 1) & 1) << bit;
    }

    Ok((tile_x, tile_y))
}

pub(crate) fn check_tile(tile_x: u32, tile_y: u32, zoom: u8) -> Result<(), QuadKeyError> {
    let n = tiles_per_axis(zoom);
    if tile_x as u64 >= n || tile_y as u64 >= n {
        return Err(QuadKeyError::TileOutOfRange {
            x: tile_x,
            y: tile_y,
            zoom,
        });
    }
    Ok(())
}

/// Encodes a tile as a quadkey of exactly `zoom` digits.
///
/// # Example
/// ```
/// use quadkey_rs::tile_to_quadkey;
///
/// # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
/// assert_eq!(tile_to_quadkey(3, 5, 3)?, "213");
/// assert_eq!(tile_to_quadkey(1, 1, 1)?, "3");
/// # Ok(())
/// # }
/// ```
pub fn tile_to_quadkey(tile_x: u32, tile_y: u32, zoom: u8) -> Result<String, QuadKeyError> {
    check_zoom(zoom)?;
    check_tile(tile_x, tile_y, zoom)?;
    Ok(encode(tile_x, tile_y, zoom))
}

/// Decodes a quadkey into `(tile_x, tile_y)`.
///
/// The zoom level is the quadkey's length; the empty quadkey is the root tile.
pub fn quadkey_to_tile(quadkey: &str) -> Result<(u32, u32), QuadKeyError> {
    decode(quadkey)
}

pub fn lat_lon_to_quadkey(lat: f64, lon: f64, zoom: u8) -> Result<String, QuadKeyError> {
    check_zoom(zoom)?;
    let (tile_x, tile_y) = tile_xy(lat, lon, zoom);
    Ok(encode(tile_x, tile_y, zoom))
}

/// Encodes the tile containing a global pixel.
///
/// Unlike [`pixel_to_tile`](crate::pixel_to_tile) this needs the zoom level,
/// which fixes the quadkey length. Pixels past the map edge are clamped to it.
pub fn pixel_to_quadkey(pixel_x: u64, pixel_y: u64, zoom: u8) -> Result<String, QuadKeyError> {
    check_zoom(zoom)?;
    let (tile_x, tile_y) = (
        clamped_pixel_tile(pixel_x, zoom),
        clamped_pixel_tile(pixel_y, zoom),
    );
    Ok(encode(tile_x, tile_y, zoom))
}

/// Returns a quadkey's geographic extent as `[min_lon, min_lat, max_lon, max_lat]`.
pub fn quadkey_to_lat_lon(quadkey: &str) -> Result<[f64; 4], QuadKeyError> {
    let (tile_x, tile_y) = decode(quadkey)?;
    Ok(tile_bounds(tile_x, tile_y, quadkey.len() as u8))
}

/// Returns a quadkey's pixel extent as `[min_x, min_y, max_x, max_y]`.
pub fn quadkey_to_pixel(quadkey: &str) -> Result<[u64; 4], QuadKeyError> {
    let (tile_x, tile_y) = decode(quadkey)?;
    Ok(tile_pixel_bounds(tile_x, tile_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_to_quadkey() -> Result<(), QuadKeyError> {
        assert_eq!(tile_to_quadkey(1, 1, 1)?, "3");
        assert_eq!(tile_to_quadkey(0, 0, 2)?, "00");
        assert_eq!(tile_to_quadkey(3, 3, 2)?, "33");
        assert_eq!(tile_to_quadkey(373, 166, 9)?, "121310321");
        assert_eq!(tile_to_quadkey(131, 190, 9)?, "030222231");
        Ok(())
    }

    #[test]
    fn test_quadkey_length_matches_zoom() -> Result<(), QuadKeyError> {
        assert_eq!(tile_to_quadkey(0, 0, 0)?, "");
        for zoom in 0..=MAX_ZOOM_LEVEL {
            let max = ((1u64 << zoom) - 1) as u32;
            assert_eq!(tile_to_quadkey(max, 0, zoom)?.len(), zoom as usize);
        }
        Ok(())
    }

    #[test]
    fn test_quadkey_to_tile() -> Result<(), QuadKeyError> {
        assert_eq!(quadkey_to_tile("121310321")?, (373, 166));
        assert_eq!(quadkey_to_tile("030222231")?, (131, 190));
        assert_eq!(quadkey_to_tile("213")?, (3, 5));
        assert_eq!(quadkey_to_tile("")?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_max_zoom_roundtrip() -> Result<(), QuadKeyError> {
        let max = (1u32 << 31) - 1;
        let quadkey = tile_to_quadkey(max, 12345, MAX_ZOOM_LEVEL)?;
        assert_eq!(quadkey.len(), 31);
        assert_eq!(quadkey_to_tile(&quadkey)?, (max, 12345));
        Ok(())
    }

    #[test]
    fn test_tile_out_of_range() {
        let result = tile_to_quadkey(2, 0, 1);
        assert_eq!(
            result,
            Err(QuadKeyError::TileOutOfRange { x: 2, y: 0, zoom: 1 })
        );
        assert!(tile_to_quadkey(0, 1, 0).is_err());
        assert!(tile_to_quadkey(0, 0, 32).is_err());
    }

    #[test]
    fn test_invalid_quadkey() {
        assert!(matches!(
            quadkey_to_tile("1214"),
            Err(QuadKeyError::InvalidQuadKey(_))
        ));
        assert!(quadkey_to_tile("12a").is_err());
        assert!(quadkey_to_tile("-1").is_err());
        assert!(quadkey_to_tile(&"0".repeat(32)).is_err());
        assert!(quadkey_to_tile("0١").is_err());
    }

    #[test]
    fn test_lat_lon_to_quadkey() -> Result<(), QuadKeyError> {
        assert_eq!(lat_lon_to_quadkey(53.1231276599, 82.6978699112, 9)?, "121310321");
        assert_eq!(lat_lon_to_quadkey(41.85, -87.65, 9)?, "030222231");
        Ok(())
    }

    #[test]
    fn test_pixel_to_quadkey() -> Result<(), QuadKeyError> {
        assert_eq!(pixel_to_quadkey(95645, 42622, 9)?, "121310321");
        assert_eq!(pixel_to_quadkey(33623, 48729, 9)?, "030222231");
        assert!(pixel_to_quadkey(95645, 42622, 32).is_err());
        Ok(())
    }

    #[test]
    fn test_pixel_to_quadkey_clamps_past_map_edge() -> Result<(), QuadKeyError> {
        assert_eq!(pixel_to_quadkey(511, 511, 1)?, "3");
        assert_eq!(pixel_to_quadkey(512, 600, 1)?, "3");
        assert_eq!(pixel_to_quadkey(u64::MAX, 0, 1)?, "1");
        assert_eq!(pixel_to_quadkey(95645, 42622, 8)?, "31311331");
        assert_eq!(pixel_to_quadkey(1 << 20, 1 << 20, 0)?, "");
        Ok(())
    }

    #[test]
    fn test_quadkey_to_lat_lon() -> Result<(), QuadKeyError> {
        let bounds = quadkey_to_lat_lon("121310321")?;
        let expected = [82.265625, 52.908902, 82.96875, 53.330873];
        for (got, want) in bounds.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_quadkey_to_pixel() -> Result<(), QuadKeyError> {
        assert_eq!(quadkey_to_pixel("121310321")?, [95488, 42496, 95744, 42752]);
        assert_eq!(quadkey_to_pixel("030222231")?, [33536, 48640, 33792, 48896]);
        Ok(())
    }
}
