//! Web Mercator projection helpers.
//!
//! World coordinates are in pixels of a `TILE_SIZE * 2^zoom` square with the
//! origin at the north-west corner, the convention slippy-map tiles use.

use crate::map::provider::LngLat;

pub const TILE_SIZE: f64 = 256.0;
/// Latitude where the Mercator square ends.
pub const MAX_LATITUDE: f64 = 85.051_128_78;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 18.0;

/// Side length of the world square at a zoom level.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Projects `[lng, lat]` to world pixels.
pub fn lng_lat_to_world(lng_lat: LngLat, zoom: f64) -> (f64, f64) {
    let [lng, lat] = lng_lat;
    let size = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`lng_lat_to_world`].
pub fn world_to_lng_lat(x: f64, y: f64, zoom: f64) -> LngLat {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    [lng, lat]
}

/// Screen position of a coordinate relative to the map center.
///
/// Returns the offset in points from the center of the surface.
pub fn screen_offset(lng_lat: LngLat, center: LngLat, zoom: f64) -> (f64, f64) {
    let (x, y) = lng_lat_to_world(lng_lat, zoom);
    let (cx, cy) = lng_lat_to_world(center, zoom);
    (x - cx, y - cy)
}

/// Moves the center by a screen-space drag of `(dx, dy)` points.
pub fn pan(center: LngLat, zoom: f64, dx: f64, dy: f64) -> LngLat {
    let (cx, cy) = lng_lat_to_world(center, zoom);
    let size = world_size(zoom);
    let y = (cy - dy).clamp(0.0, size);
    let [mut lng, lat] = world_to_lng_lat(cx - dx, y, zoom);
    // Wrap horizontally
    lng = (lng + 180.0).rem_euclid(360.0) - 180.0;
    [lng, lat]
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Graticule spacing in degrees that keeps lines roughly 100-200 points apart.
pub fn graticule_step(zoom: f64) -> f64 {
    let degrees_per_point = 360.0 / world_size(zoom);
    let target = degrees_per_point * 150.0;
    [0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 45.0]
        .into_iter()
        .find(|step| *step >= target)
        .unwrap_or(90.0)
}
