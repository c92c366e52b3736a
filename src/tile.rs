use crate::error::QuadKeyError;
use crate::index::{
    MAX_ZOOM_LEVEL, check_tile, check_zoom, clamped_pixel_tile, decode, encode, tile_bounds,
    tile_pixel_bounds, tile_xy, unproject,
};
use std::fmt;
use std::str::FromStr;

/// A single Web Mercator tile together with its quadkey.
///
/// `x` counts eastward from the antimeridian and `y` southward from the
/// northern edge of the map; both lie in `0..2^zoom_level`.
///
/// # Example
///
/// ```
/// use quadkey_rs::Tile;
///
/// # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
/// let tile = Tile::from_lat_lon(53.1231276599, 82.6978699112, 9)?;
/// assert_eq!(tile.quadkey, "121310321");
/// assert_eq!((tile.x, tile.y), (373, 166));
///
/// let parent = tile.parent();
/// assert_eq!(parent.map(|t| t.quadkey), Some("12131032".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Base-4 quadkey, one digit per zoom level
    pub quadkey: String,
    /// Column index, west to east
    pub x: u32,
    /// Row index, north to south
    pub y: u32,
    /// Zoom level (0-31); equal to the quadkey length
    pub zoom_level: u8,
}

impl Tile {
    /// Caller guarantees `x` and `y` are in range for `zoom_level`.
    fn from_valid_xyz(x: u32, y: u32, zoom_level: u8) -> Self {
        Self {
            quadkey: encode(x, y, zoom_level),
            x,
            y,
            zoom_level,
        }
    }

    /// Create a Tile from its column, row and zoom level.
    pub fn new(x: u32, y: u32, zoom_level: u8) -> Result<Self, QuadKeyError> {
        check_zoom(zoom_level)?;
        check_tile(x, y, zoom_level)?;
        Ok(Self::from_valid_xyz(x, y, zoom_level))
    }

    /// Create a Tile from a quadkey; the zoom level is the quadkey length.
    ///
    /// # Example
    /// ```
    /// use quadkey_rs::Tile;
    ///
    /// # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
    /// let tile = Tile::from_quadkey("213")?;
    /// assert_eq!((tile.x, tile.y, tile.zoom_level), (3, 5, 3));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_quadkey(quadkey: &str) -> Result<Self, QuadKeyError> {
        let (x, y) = decode(quadkey)?;
        Ok(Self {
            quadkey: quadkey.to_string(),
            x,
            y,
            zoom_level: quadkey.len() as u8,
        })
    }

    /// Create the Tile containing a WGS84 coordinate.
    ///
    /// Out-of-range coordinates are clamped to the edge of the map.
    pub fn from_lat_lon(lat: f64, lon: f64, zoom: u8) -> Result<Self, QuadKeyError> {
        check_zoom(zoom)?;
        let (x, y) = tile_xy(lat, lon, zoom);
        Ok(Self::from_valid_xyz(x, y, zoom))
    }

    /// Create the Tile containing a global pixel at `zoom`, clamping pixels
    /// past the map edge.
    pub fn from_pixel(pixel_x: u64, pixel_y: u64, zoom: u8) -> Result<Self, QuadKeyError> {
        check_zoom(zoom)?;
        Ok(Self::from_valid_xyz(
            clamped_pixel_tile(pixel_x, zoom),
            clamped_pixel_tile(pixel_y, zoom),
            zoom,
        ))
    }

    /// Returns `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn bounds(&self) -> [f64; 4] {
        tile_bounds(self.x, self.y, self.zoom_level)
    }

    /// Returns the tile's global pixel extent `[min_x, min_y, max_x, max_y]`.
    pub fn pixel_bounds(&self) -> [u64; 4] {
        tile_pixel_bounds(self.x, self.y)
    }

    /// Returns the `(lat, lon)` of the tile center, taken at the projected midpoint.
    pub fn center(&self) -> (f64, f64) {
        let n = (1u64 << self.zoom_level) as f64;
        unproject((self.x as f64 + 0.5) / n, (self.y as f64 + 0.5) / n)
    }

    /// Returns the enclosing tile one zoom level up, or `None` at zoom 0.
    pub fn parent(&self) -> Option<Self> {
        if self.zoom_level == 0 {
            return None;
        }
        let mut quadkey = self.quadkey.clone();
        quadkey.pop();
        Some(Self {
            quadkey,
            x: self.x >> 1,
            y: self.y >> 1,
            zoom_level: self.zoom_level - 1,
        })
    }

    /// Returns the four tiles one zoom level down in quadkey digit order,
    /// or an empty Vec at the maximum zoom level.
    pub fn children(&self) -> Vec<Self> {
        if self.zoom_level >= MAX_ZOOM_LEVEL {
            return Vec::new();
        }
        (0..4u32)
            .map(|digit| {
                let x = (self.x << 1) | (digit & 1);
                let y = (self.y << 1) | (digit >> 1);
                Self::from_valid_xyz(x, y, self.zoom_level + 1)
            })
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.quadkey)
    }
}

impl FromStr for Tile {
    type Err = QuadKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_quadkey(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lat_lon() -> Result<(), QuadKeyError> {
        let tile = Tile::from_lat_lon(53.1231276599, 82.6978699112, 9)?;

        assert_eq!(tile.zoom_level, 9);
        assert_eq!(tile.quadkey, "121310321");
        assert_eq!((tile.x, tile.y), (373, 166));

        assert_eq!(Tile::from_lat_lon(41.85, -87.65, 9)?.quadkey, "030222231");
        Ok(())
    }

    #[test]
    fn test_new_validates() {
        assert!(Tile::new(1, 1, 1).is_ok());
        assert!(matches!(
            Tile::new(2, 0, 1),
            Err(QuadKeyError::TileOutOfRange { .. })
        ));
        assert!(matches!(
            Tile::new(0, 0, 32),
            Err(QuadKeyError::InvalidZoomLevel(32))
        ));
    }

    #[test]
    fn test_from_quadkey() -> Result<(), QuadKeyError> {
        let tile = Tile::from_quadkey("121310321")?;
        assert_eq!(tile, Tile::new(373, 166, 9)?);
        assert_eq!(tile.pixel_bounds(), [95488, 42496, 95744, 42752]);

        let root: Tile = "".parse()?;
        assert_eq!((root.x, root.y, root.zoom_level), (0, 0, 0));
        assert!("0124".parse::<Tile>().is_err());
        Ok(())
    }

    #[test]
    fn test_from_pixel() -> Result<(), QuadKeyError> {
        let tile = Tile::from_pixel(95645, 42622, 9)?;
        assert_eq!(tile.quadkey, "121310321");
        Ok(())
    }

    #[test]
    fn test_from_pixel_clamps_past_map_edge() -> Result<(), QuadKeyError> {
        assert_eq!(Tile::from_pixel(512, 600, 1)?, Tile::new(1, 1, 1)?);
        assert_eq!(Tile::from_pixel(u64::MAX, u64::MAX, 0)?.quadkey, "");
        assert!(Tile::from_pixel(0, 0, 32).is_err());
        Ok(())
    }

    #[test]
    fn test_bounds_and_display() -> Result<(), QuadKeyError> {
        let tile = Tile::new(1, 1, 1)?;
        assert_eq!(tile.to_string(), "3");

        let [min_lon, min_lat, max_lon, max_lat] = tile.bounds();
        assert_eq!(min_lon, 0.0);
        assert!((min_lat + 85.05112878).abs() < 1e-7);
        assert_eq!(max_lon, 180.0);
        assert!(max_lat.abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_center_inside_bounds() -> Result<(), QuadKeyError> {
        let tile = Tile::from_quadkey("121310321")?;
        let (lat, lon) = tile.center();
        let [min_lon, min_lat, max_lon, max_lat] = tile.bounds();

        assert!(lon > min_lon && lon < max_lon);
        assert!(lat > min_lat && lat < max_lat);
        assert_eq!(Tile::from_lat_lon(lat, lon, 9)?, tile);
        Ok(())
    }

    #[test]
    fn test_parent_and_children() -> Result<(), QuadKeyError> {
        let tile = Tile::from_quadkey("121310321")?;
        let parent = tile.parent().expect("zoom 9 has a parent");
        assert_eq!(parent, Tile::from_quadkey("12131032")?);

        let children = parent.children();
        assert_eq!(children.len(), 4);
        assert!(children.contains(&tile));
        for (digit, child) in children.iter().enumerate() {
            assert_eq!(child.quadkey, format!("12131032{}", digit));
            assert_eq!(child.parent().as_ref(), Some(&parent));
        }

        assert!(Tile::new(0, 0, 0)?.parent().is_none());
        assert!(Tile::new(0, 0, MAX_ZOOM_LEVEL)?.children().is_empty());
        Ok(())
    }
}
