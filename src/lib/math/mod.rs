mod screen;

use std::f64::consts::PI;

pub use screen::*;

/// Radius of the sphere used by the Web Mercator projection (EPSG:3857).
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Ground resolution at zoom 0 for 256px tiles, in metres per pixel.
pub const RESOLUTION_AT_ZOOM_0: f64 = 156_543.033_928_040_97;

/// A geographic coordinate in degrees (EPSG:4326).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for LonLat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

fn deg2rad(deg: f64) -> f64 {
    2.0 * PI * deg / 360.0
}

fn rad2deg(rad: f64) -> f64 {
    rad * 360.0 / (2.0 * PI)
}

/// Projects a geographic coordinate into Web Mercator world space (metres).
pub fn lonlat_to_world(coordinate: LonLat) -> glm::DVec2 {
    let x = EARTH_RADIUS * deg2rad(coordinate.lon);
    let y = EARTH_RADIUS * (PI / 4.0 + deg2rad(coordinate.lat) / 2.0).tan().ln();
    glm::vec2(x, y)
}

/// Inverse of [`lonlat_to_world`].
pub fn world_to_lonlat(point: &glm::DVec2) -> LonLat {
    let lon = rad2deg(point.x / EARTH_RADIUS);
    let lat = rad2deg(2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0);
    LonLat::new(lon, lat)
}

/// Metres per pixel at the given (fractional) zoom level.
pub fn resolution_for_zoom(zoom: f64) -> f64 {
    RESOLUTION_AT_ZOOM_0 / 2f64.powf(zoom)
}
