//! Batch conversions over slices of coordinates.
//!
//! Every function here mirrors a scalar function from the crate root, taking
//! parallel slices and returning `Vec`s of the same length and order. Parallel
//! inputs must have equal lengths; nothing is broadcast or truncated.
//!
//! Work is spread across the rayon thread pool, and each output is collected
//! straight into a `Vec` of the final size.
//!
//! ```
//! use quadkey_rs::batch;
//!
//! # fn main() -> Result<(), quadkey_rs::QuadKeyError> {
//! let lat = [53.1231276599, 41.85];
//! let lon = [82.6978699112, -87.65];
//!
//! let quadkeys = batch::lat_lon_to_quadkey(&lat, &lon, 9)?;
//! assert_eq!(quadkeys, ["121310321", "030222231"]);
//!
//! let tiles = batch::quadkey_to_tile_tuple(&quadkeys)?;
//! assert_eq!(tiles, [[373, 166], [131, 190]]);
//! # Ok(())
//! # }
//! ```

use crate::error::QuadKeyError;
use crate::index::{
    bounds_tile_range, check_tile, check_zoom, clamped_pixel_tile, decode, encode, pixel_lat_lon,
    pixel_tile, pixel_xy, project_latitude, project_longitude, tile_bounds, tile_pixel_bounds,
    tile_xy,
};
use rayon::prelude::*;
use tracing::debug;

fn ensure_same_len(expected: usize, found: usize) -> Result<(), QuadKeyError> {
    if expected != found {
        debug!(expected, found, "rejecting batch with mismatched input lengths");
        return Err(QuadKeyError::ShapeMismatch { expected, found });
    }
    Ok(())
}

/// Returns the zoom shared by every quadkey in the batch.
///
/// An empty batch has no zoom and yields `None`.
fn batch_zoom<S: AsRef<str> + Sync>(quadkeys: &[S]) -> Result<Option<u8>, QuadKeyError> {
    let Some(first) = quadkeys.first() else {
        return Ok(None);
    };
    let expected = first.as_ref().len();

    let mismatch = quadkeys
        .par_iter()
        .map(|qk| qk.as_ref().len())
        .find_any(|&len| len != expected);
    if let Some(found) = mismatch {
        debug!(expected, found, batch = quadkeys.len(), "rejecting mixed-zoom quadkey batch");
        return Err(QuadKeyError::InconsistentQuadKeyLength { expected, found });
    }

    // Over-long keys are rejected by `decode`; the zoom is only used once they pass.
    Ok(Some(expected.min(u8::MAX as usize) as u8))
}

fn decode_all<S: AsRef<str> + Sync>(quadkeys: &[S]) -> Result<Vec<(u32, u32, u8)>, QuadKeyError> {
    let Some(zoom) = batch_zoom(quadkeys)? else {
        return Ok(Vec::new());
    };
    quadkeys
        .par_iter()
        .map(|qk| decode(qk.as_ref()).map(|(x, y)| (x, y, zoom)))
        .collect()
}

/// Projects latitudes and longitudes, returning `(x, y)` vectors.
pub fn project(lat: &[f64], lon: &[f64]) -> Result<(Vec<f64>, Vec<f64>), QuadKeyError> {
    ensure_same_len(lat.len(), lon.len())?;
    let x = lon.par_iter().map(|&lon| project_longitude(lon)).collect();
    let y = lat.par_iter().map(|&lat| project_latitude(lat)).collect();
    Ok((x, y))
}

pub fn lat_lon_to_tile(
    lat: &[f64],
    lon: &[f64],
    zoom: u8,
) -> Result<(Vec<u32>, Vec<u32>), QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(lat.len(), lon.len())?;
    Ok(lat
        .par_iter()
        .zip(lon.par_iter())
        .map(|(&lat, &lon)| tile_xy(lat, lon, zoom))
        .unzip())
}

/// Like [`lat_lon_to_tile`], but one `[tile_x, tile_y]` row per input.
pub fn lat_lon_to_tile_tuple(
    lat: &[f64],
    lon: &[f64],
    zoom: u8,
) -> Result<Vec<[u32; 2]>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(lat.len(), lon.len())?;
    Ok(lat
        .par_iter()
        .zip(lon.par_iter())
        .map(|(&lat, &lon)| {
            let (x, y) = tile_xy(lat, lon, zoom);
            [x, y]
        })
        .collect())
}

pub fn lat_lon_to_pixel(
    lat: &[f64],
    lon: &[f64],
    zoom: u8,
) -> Result<(Vec<u64>, Vec<u64>), QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(lat.len(), lon.len())?;
    Ok(lat
        .par_iter()
        .zip(lon.par_iter())
        .map(|(&lat, &lon)| pixel_xy(lat, lon, zoom))
        .unzip())
}

pub fn lat_lon_to_pixel_tuple(
    lat: &[f64],
    lon: &[f64],
    zoom: u8,
) -> Result<Vec<[u64; 2]>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(lat.len(), lon.len())?;
    Ok(lat
        .par_iter()
        .zip(lon.par_iter())
        .map(|(&lat, &lon)| {
            let (x, y) = pixel_xy(lat, lon, zoom);
            [x, y]
        })
        .collect())
}

pub fn lat_lon_to_quadkey(lat: &[f64], lon: &[f64], zoom: u8) -> Result<Vec<String>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(lat.len(), lon.len())?;
    Ok(lat
        .par_iter()
        .zip(lon.par_iter())
        .map(|(&lat, &lon)| {
            let (x, y) = tile_xy(lat, lon, zoom);
            encode(x, y, zoom)
        })
        .collect())
}

pub fn pixel_to_tile(
    pixel_x: &[u64],
    pixel_y: &[u64],
) -> Result<(Vec<u32>, Vec<u32>), QuadKeyError> {
    ensure_same_len(pixel_x.len(), pixel_y.len())?;
    let x = pixel_x.par_iter().map(|&px| pixel_tile(px)).collect();
    let y = pixel_y.par_iter().map(|&py| pixel_tile(py)).collect();
    Ok((x, y))
}

pub fn pixel_to_tile_tuple(pixel_x: &[u64], pixel_y: &[u64]) -> Result<Vec<[u32; 2]>, QuadKeyError> {
    ensure_same_len(pixel_x.len(), pixel_y.len())?;
    Ok(pixel_x
        .par_iter()
        .zip(pixel_y.par_iter())
        .map(|(&px, &py)| [pixel_tile(px), pixel_tile(py)])
        .collect())
}

/// Converts `[pixel_x, pixel_y]` rows to `[tile_x, tile_y]` rows.
pub fn pixel_tuple_to_tile_tuple(pixels: &[[u64; 2]]) -> Vec<[u32; 2]> {
    pixels
        .par_iter()
        .map(|&[px, py]| [pixel_tile(px), pixel_tile(py)])
        .collect()
}

/// Encodes the tile containing each pixel. Pixels past the map edge are clamped to it.
pub fn pixel_to_quadkey(
    pixel_x: &[u64],
    pixel_y: &[u64],
    zoom: u8,
) -> Result<Vec<String>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(pixel_x.len(), pixel_y.len())?;
    Ok(pixel_x
        .par_iter()
        .zip(pixel_y.par_iter())
        .map(|(&px, &py)| {
            encode(
                clamped_pixel_tile(px, zoom),
                clamped_pixel_tile(py, zoom),
                zoom,
            )
        })
        .collect())
}

/// Converts pixels to `(lat, lon)` vectors.
pub fn pixel_to_lat_lon(
    pixel_x: &[u64],
    pixel_y: &[u64],
    zoom: u8,
) -> Result<(Vec<f64>, Vec<f64>), QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(pixel_x.len(), pixel_y.len())?;
    Ok(pixel_x
        .par_iter()
        .zip(pixel_y.par_iter())
        .map(|(&px, &py)| pixel_lat_lon(px, py, zoom))
        .unzip())
}

/// Converts pixels to `[lat, lon]` rows.
pub fn pixel_to_lat_lon_tuple(
    pixel_x: &[u64],
    pixel_y: &[u64],
    zoom: u8,
) -> Result<Vec<[f64; 2]>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(pixel_x.len(), pixel_y.len())?;
    Ok(pixel_x
        .par_iter()
        .zip(pixel_y.par_iter())
        .map(|(&px, &py)| {
            let (lat, lon) = pixel_lat_lon(px, py, zoom);
            [lat, lon]
        })
        .collect())
}

/// Converts `[pixel_x, pixel_y]` rows to `[lat, lon]` rows.
pub fn pixel_tuple_to_lat_lon_tuple(
    pixels: &[[u64; 2]],
    zoom: u8,
) -> Result<Vec<[f64; 2]>, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(pixels
        .par_iter()
        .map(|&[px, py]| {
            let (lat, lon) = pixel_lat_lon(px, py, zoom);
            [lat, lon]
        })
        .collect())
}

/// Encodes tiles as quadkeys. Fails if any tile is outside the grid at `zoom`.
pub fn tile_to_quadkey(
    tile_x: &[u32],
    tile_y: &[u32],
    zoom: u8,
) -> Result<Vec<String>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(tile_x.len(), tile_y.len())?;
    tile_x
        .par_iter()
        .zip(tile_y.par_iter())
        .map(|(&x, &y)| {
            check_tile(x, y, zoom)?;
            Ok(encode(x, y, zoom))
        })
        .collect()
}

/// Returns `[min_lon, min_lat, max_lon, max_lat]` for each tile.
pub fn tile_to_lat_lon(
    tile_x: &[u32],
    tile_y: &[u32],
    zoom: u8,
) -> Result<Vec<[f64; 4]>, QuadKeyError> {
    check_zoom(zoom)?;
    ensure_same_len(tile_x.len(), tile_y.len())?;
    Ok(tile_x
        .par_iter()
        .zip(tile_y.par_iter())
        .map(|(&x, &y)| tile_bounds(x, y, zoom))
        .collect())
}

/// Returns `[min_x, min_y, max_x, max_y]` pixel extents for each tile.
pub fn tile_to_pixel(tile_x: &[u32], tile_y: &[u32]) -> Result<Vec<[u64; 4]>, QuadKeyError> {
    ensure_same_len(tile_x.len(), tile_y.len())?;
    Ok(tile_x
        .par_iter()
        .zip(tile_y.par_iter())
        .map(|(&x, &y)| tile_pixel_bounds(x, y))
        .collect())
}

/// Decodes quadkeys into `(tile_x, tile_y)` vectors.
///
/// Every quadkey must have the same length, since the length is the zoom.
pub fn quadkey_to_tile<S: AsRef<str> + Sync>(
    quadkeys: &[S],
) -> Result<(Vec<u32>, Vec<u32>), QuadKeyError> {
    Ok(decode_all(quadkeys)?
        .into_par_iter()
        .map(|(x, y, _)| (x, y))
        .unzip())
}

pub fn quadkey_to_tile_tuple<S: AsRef<str> + Sync>(
    quadkeys: &[S],
) -> Result<Vec<[u32; 2]>, QuadKeyError> {
    Ok(decode_all(quadkeys)?
        .into_par_iter()
        .map(|(x, y, _)| [x, y])
        .collect())
}

pub fn quadkey_to_lat_lon<S: AsRef<str> + Sync>(
    quadkeys: &[S],
) -> Result<Vec<[f64; 4]>, QuadKeyError> {
    Ok(decode_all(quadkeys)?
        .into_par_iter()
        .map(|(x, y, zoom)| tile_bounds(x, y, zoom))
        .collect())
}

pub fn quadkey_to_pixel<S: AsRef<str> + Sync>(
    quadkeys: &[S],
) -> Result<Vec<[u64; 4]>, QuadKeyError> {
    Ok(decode_all(quadkeys)?
        .into_par_iter()
        .map(|(x, y, _)| tile_pixel_bounds(x, y))
        .collect())
}

/// Returns the `[min_x, min_y, max_x, max_y]` tile range covering each
/// `[min_lon, min_lat, max_lon, max_lat]` box.
pub fn lat_lon_bounds_to_tile_range(
    bounds: &[[f64; 4]],
    zoom: u8,
) -> Result<Vec<[u32; 4]>, QuadKeyError> {
    check_zoom(zoom)?;
    Ok(bounds
        .par_iter()
        .map(|&b| bounds_tile_range(b, zoom))
        .collect())
}
