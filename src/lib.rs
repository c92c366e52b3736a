//! # quadkey-rs
//!
//! Conversions between WGS84 coordinates, Web Mercator pixels, slippy map tiles
//! and Bing-style QuadKeys. There are three main entry points.
//!
//! ### 1. Scalar functions
//!
//! ```
//! use quadkey_rs::{lat_lon_to_quadkey, quadkey_to_tile, tile_to_lat_lon};
//!
//! # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
//! let quadkey = lat_lon_to_quadkey(53.1231276599, 82.6978699112, 9)?;
//! assert_eq!(quadkey, "121310321");
//!
//! let (x, y) = quadkey_to_tile(&quadkey)?;
//! assert_eq!((x, y), (373, 166));
//!
//! let [min_lon, min_lat, max_lon, max_lat] = tile_to_lat_lon(x, y, 9)?;
//! assert!(min_lon <= 82.6978699112 && 82.6978699112 <= max_lon);
//! assert!(min_lat <= 53.1231276599 && 53.1231276599 <= max_lat);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `batch` - Slices In, Vectors Out
//!
//! ```
//! use quadkey_rs::batch;
//!
//! # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
//! let lat = [53.1231276599, 41.85];
//! let lon = [82.6978699112, -87.65];
//! let quadkeys = batch::lat_lon_to_quadkey(&lat, &lon, 9)?;
//! assert_eq!(quadkeys, vec!["121310321", "030222231"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `Tile`
//!
//! ```
//! use quadkey_rs::Tile;
//!
//! # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
//! let tile = Tile::from_lat_lon(41.85, -87.65, 9)?;
//! println!("{} covers {:?}", tile, tile.bounds());
//!
//! for child in tile.children() {
//!     println!("{}", child);
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod error;
pub mod index;
pub mod tile;

pub use error::QuadKeyError;
pub use index::{
    MAX_LATITUDE, MAX_LONGITUDE, MAX_ZOOM_LEVEL, MIN_LATITUDE, MIN_LONGITUDE, TILE_SIZE,
    lat_lon_bounds_to_tile_range, lat_lon_to_pixel, lat_lon_to_quadkey, lat_lon_to_tile,
    pixel_to_lat_lon, pixel_to_projection, pixel_to_quadkey, pixel_to_tile, project,
    project_latitude, project_longitude, projection_to_pixel, projection_to_tile,
    quadkey_to_lat_lon, quadkey_to_pixel, quadkey_to_tile, tile_to_lat_lon, tile_to_pixel,
    tile_to_projection, tile_to_quadkey, unproject, unproject_latitude, unproject_longitude,
};
pub use tile::Tile;
