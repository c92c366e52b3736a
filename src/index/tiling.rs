use crate::error::QuadKeyError;
use crate::index::constants::{MAX_ZOOM_LEVEL, TILE_SIZE};
use crate::index::projection::{
    project_latitude, project_longitude, unproject_latitude, unproject_longitude,
};

pub(crate) fn check_zoom(zoom: u8) -> Result<(), QuadKeyError> {
    if zoom > MAX_ZOOM_LEVEL {
        return Err(QuadKeyError::InvalidZoomLevel(zoom));
    }
    Ok(())
}

/// Number of tiles along one axis at `zoom`.
#[inline]
pub(crate) fn tiles_per_axis(zoom: u8) -> u64 {
    1u64 << zoom
}

/// Number of pixels along one axis of the global raster at `zoom`.
#[inline]
pub(crate) fn map_size(zoom: u8) -> u64 {
    TILE_SIZE << zoom
}

// The helpers below assume `zoom` has already been checked.

#[inline]
pub(crate) fn tile_index(p: f64, zoom: u8) -> u32 {
    let n = tiles_per_axis(zoom);
    // `as` truncates toward zero and saturates, so p < 0 and NaN land on 0.
    ((p * n as f64) as u64).min(n - 1) as u32
}

#[inline]
pub(crate) fn pixel_index(p: f64, zoom: u8) -> u64 {
    let size = map_size(zoom);
    ((p * size as f64) as u64).min(size - 1)
}

#[inline]
pub(crate) fn pixel_fraction(p: u64, zoom: u8) -> f64 {
    let size = map_size(zoom);
    p.min(size) as f64 / size as f64
}

#[inline]
pub(crate) fn tile_fraction(t: u64, zoom: u8) -> f64 {
    t as f64 / tiles_per_axis(zoom) as f64
}

#[inline]
pub(crate) fn tile_xy(lat: f64, lon: f64, zoom: u8) -> (u32, u32) {
    (
        tile_index(project_longitude(lon), zoom),
        tile_index(project_latitude(lat), zoom),
    )
}

#[inline]
pub(crate) fn pixel_xy(lat: f64, lon: f64, zoom: u8) -> (u64, u64) {
    (
        pixel_index(project_longitude(lon), zoom),
        pixel_index(project_latitude(lat), zoom),
    )
}

/// Tile index of a pixel, with no zoom to bound it.
///
/// Pixels at or past `256 * 2^32` saturate to `u32::MAX`. No valid zoom has a
/// map that large, so only zoom-free callers like `pixel_to_tile` can see it.
#[inline]
pub(crate) fn pixel_tile(p: u64) -> u32 {
    u32::try_from(p / TILE_SIZE).unwrap_or(u32::MAX)
}

/// Tile index of a pixel clamped to the last pixel of the map at `zoom`.
#[inline]
pub(crate) fn clamped_pixel_tile(p: u64, zoom: u8) -> u32 {
    pixel_tile(p.min(map_size(zoom) - 1))
}

#[inline]
pub(crate) fn tile_pixel_bounds(tile_x: u32, tile_y: u32) -> [u64; 4] {
    let (x, y) = (tile_x as u64, tile_y as u64);
    [x * TILE_SIZE, y * TILE_SIZE, (x + 1) * TILE_SIZE, (y + 1) * TILE_SIZE]
}

#[inline]
pub(crate) fn tile_bounds(tile_x: u32, tile_y: u32, zoom: u8) -> [f64; 4] {
    let (x, y) = (tile_x as u64, tile_y as u64);
    let min_lon = unproject_longitude(tile_fraction(x, zoom));
    let max_lat = unproject_latitude(tile_fraction(y, zoom));
    let max_lon = unproject_longitude(tile_fraction(x + 1, zoom));
    let min_lat = unproject_latitude(tile_fraction(y + 1, zoom));
    [min_lon, min_lat, max_lon, max_lat]
}

#[inline]
pub(crate) fn pixel_lat_lon(pixel_x: u64, pixel_y: u64, zoom: u8) -> (f64, f64) {
    (
        unproject_latitude(pixel_fraction(pixel_y, zoom)),
        unproject_longitude(pixel_fraction(pixel_x, zoom)),
    )
}

#[inline]
pub(crate) fn bounds_tile_range(bounds: [f64; 4], zoom: u8) -> [u32; 4] {
    let [min_lon, min_lat, max_lon, max_lat] = bounds;
    // Tile y grows southward, so the north-west corner gives the minimum indices.
    let (min_x, min_y) = tile_xy(max_lat, min_lon, zoom);
    let (max_x, max_y) = tile_xy(min_lat, max_lon, zoom);
    [min_x, min_y, max_x, max_y]
}

/// Converts a projected coordinate in [0, 1] to a tile index at `zoom`.
///
/// Truncates rather than rounds. The projected edge value `1.0` maps to the
/// last tile, `2^zoom - 1`.
pub fn projection_to_tile(p: f64, zoom: u8) -> Result<u32, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(tile_index(p, zoom))
}

/// Converts a projected coordinate in [0, 1] to a global pixel index at `zoom`.
pub fn projection_to_pixel(p: f64, zoom: u8) -> Result<u64, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(pixel_index(p, zoom))
}

/// Converts a global pixel index to a projected coordinate, clamping to the map size.
pub fn pixel_to_projection(p: u64, zoom: u8) -> Result<f64, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(pixel_fraction(p, zoom))
}

/// Converts a tile index to the projected coordinate of its top/left edge.
pub fn tile_to_projection(t: u32, zoom: u8) -> Result<f64, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(tile_fraction(t as u64, zoom))
}

/// Returns the `(tile_x, tile_y)` containing a latitude/longitude at `zoom`.
///
/// # Example
/// ```
/// use quadkey_rs::lat_lon_to_tile;
///
/// # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
/// let (x, y) = lat_lon_to_tile(53.1231276599, 82.6978699112, 9)?;
/// assert_eq!((x, y), (373, 166));
/// # Ok(())
/// # }
/// ```
pub fn lat_lon_to_tile(lat: f64, lon: f64, zoom: u8) -> Result<(u32, u32), QuadKeyError> {
    check_zoom(zoom)?;
    Ok(tile_xy(lat, lon, zoom))
}

/// Returns the global `(pixel_x, pixel_y)` of a latitude/longitude at `zoom`.
pub fn lat_lon_to_pixel(lat: f64, lon: f64, zoom: u8) -> Result<(u64, u64), QuadKeyError> {
    check_zoom(zoom)?;
    Ok(pixel_xy(lat, lon, zoom))
}

/// Returns the tile containing a global pixel.
///
/// The zoom level is implied by the pixel's own scale and is not needed.
/// Pixels at or past `256 * 2^32` saturate to `u32::MAX`.
pub fn pixel_to_tile(pixel_x: u64, pixel_y: u64) -> (u32, u32) {
    (pixel_tile(pixel_x), pixel_tile(pixel_y))
}

/// Returns a tile's full pixel extent as `[min_x, min_y, max_x, max_y]`.
pub fn tile_to_pixel(tile_x: u32, tile_y: u32) -> [u64; 4] {
    tile_pixel_bounds(tile_x, tile_y)
}

/// Returns a tile's geographic extent as `[min_lon, min_lat, max_lon, max_lat]`.
///
/// The northern edge comes from `tile_y` and the southern edge from
/// `tile_y + 1`, since tile rows count southward.
pub fn tile_to_lat_lon(tile_x: u32, tile_y: u32, zoom: u8) -> Result<[f64; 4], QuadKeyError> {
    check_zoom(zoom)?;
    Ok(tile_bounds(tile_x, tile_y, zoom))
}

/// Returns the `(lat, lon)` of a global pixel at `zoom`.
pub fn pixel_to_lat_lon(pixel_x: u64, pixel_y: u64, zoom: u8) -> Result<(f64, f64), QuadKeyError> {
    check_zoom(zoom)?;
    Ok(pixel_lat_lon(pixel_x, pixel_y, zoom))
}

/// Returns the tile range `[min_x, min_y, max_x, max_y]` covering
/// `[min_lon, min_lat, max_lon, max_lat]` at `zoom`, bounds inclusive.
pub fn lat_lon_bounds_to_tile_range(bounds: [f64; 4], zoom: u8) -> Result<[u32; 4], QuadKeyError> {
    check_zoom(zoom)?;
    Ok(bounds_tile_range(bounds, zoom))
}
