pub mod constants;
mod projection;
mod quadkey;
mod tiling;

pub use constants::{
    BASE4_DIGITS, MAX_LATITUDE, MAX_LONGITUDE, MAX_ZOOM_LEVEL, MIN_LATITUDE, MIN_LONGITUDE,
    TILE_SIZE,
};
pub use projection::{
    project, project_latitude, project_longitude, unproject, unproject_latitude,
    unproject_longitude,
};
pub use quadkey::{
    lat_lon_to_quadkey, pixel_to_quadkey, quadkey_to_lat_lon, quadkey_to_pixel, quadkey_to_tile,
    tile_to_quadkey,
};
pub use tiling::{
    lat_lon_bounds_to_tile_range, lat_lon_to_pixel, lat_lon_to_tile, pixel_to_lat_lon,
    pixel_to_projection, pixel_to_tile, projection_to_pixel, projection_to_tile, tile_to_lat_lon,
    tile_to_pixel, tile_to_projection,
};

pub(crate) use quadkey::{check_tile, decode, encode};
pub(crate) use tiling::{
    bounds_tile_range, check_zoom, clamped_pixel_tile, pixel_lat_lon, pixel_tile, pixel_xy, tile_bounds,
    tile_pixel_bounds, tile_xy,
};
