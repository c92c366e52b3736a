use crate::index::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use std::f64::consts::PI;

/// Projects a longitude onto the unit interval, clamping to [-180, 180] first.
#[inline]
pub fn project_longitude(lon: f64) -> f64 {
    0.5 + lon.clamp(MIN_LONGITUDE, MAX_LONGITUDE) / 360.0
}

/// Projects a latitude onto the unit interval using spherical Web Mercator.
///
/// The latitude is clamped to ±85.05112877° so the result never reaches the
/// poles, where the projection diverges. North is 0, south is 1.
#[inline]
pub fn project_latitude(lat: f64) -> f64 {
    let sin_y = (lat.clamp(MIN_LATITUDE, MAX_LATITUDE) * PI / 180.0).sin();
    0.5 - ((1.0 + sin_y) / (1.0 - sin_y)).ln() / (4.0 * PI)
}

/// Projects a latitude/longitude pair, returning `(x, y)` in [0, 1].
///
/// Out-of-range input saturates to the map edge instead of failing.
///
/// # Example
/// ```
/// use quadkey_rs::project;
///
/// let (x, y) = project(0.0, 0.0);
/// assert_eq!((x, y), (0.5, 0.5));
/// ```
#[inline]
pub fn project(lat: f64, lon: f64) -> (f64, f64) {
    (project_longitude(lon), project_latitude(lat))
}

#[inline]
pub fn unproject_longitude(x: f64) -> f64 {
    360.0 * (x - 0.5)
}

#[inline]
pub fn unproject_latitude(y: f64) -> f64 {
    90.0 - 360.0 * ((y - 0.5) * 2.0 * PI).exp().atan() / PI
}

/// Inverse of [`project`], returning `(lat, lon)`.
#[inline]
pub fn unproject(x: f64, y: f64) -> (f64, f64) {
    (unproject_latitude(y), unproject_longitude(x))
}
