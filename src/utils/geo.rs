// src/utils/geo.rs
use std::f64::consts::{FRAC_PI_2, PI};

/// Sphere radius used by the devices' Mercator-like x/y encoding
pub const EARTH_RADIUS_M: f64 = 6356752.3142;

const RAD_TO_DEG: f64 = 180.0 / PI;

/// Device x (Mercator easting) to longitude in degrees
pub fn x_to_longitude(x: f64) -> f64 {
    x / EARTH_RADIUS_M * RAD_TO_DEG
}

/// Device y (Mercator northing) to latitude in degrees
pub fn y_to_latitude(y: f64) -> f64 {
    (2.0 * (y / EARTH_RADIUS_M).exp().atan() - FRAC_PI_2) * RAD_TO_DEG
}
