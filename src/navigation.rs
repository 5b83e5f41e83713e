//! # Navigation Helpers
//!
//! Pure functions over decoded positions, and floating-point views of a [`Fix`].

use std::f64::consts::TAU;

use crate::Fix;

/// Mean Earth radius used for great-circle distances, in meters.
pub const EARTH_RADIUS_M: f64 = 6_372_795.0;

pub const MPH_PER_KNOT: f64 = 1.150_779_45;
pub const MPS_PER_KNOT: f64 = 0.514_444_44;
pub const KMPH_PER_KNOT: f64 = 1.852;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Great-circle distance in meters between two positions given in degrees.
///
/// ```rust
/// use nmea0183_stream::navigation::distance_between;
///
/// // One degree of latitude is a little over 111 km.
/// let d = distance_between(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111_226.3).abs() < 1.0);
/// ```
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta = (lon1 - lon2).to_radians();
    let (sdlon, cdlon) = delta.sin_cos();
    let (slat1, clat1) = lat1.to_radians().sin_cos();
    let (slat2, clat2) = lat2.to_radians().sin_cos();

    let y = ((clat1 * slat2) - (slat1 * clat2 * cdlon)).powi(2) + (clat2 * sdlon).powi(2);
    let x = (slat1 * slat2) + (clat1 * clat2 * cdlon);

    y.sqrt().atan2(x) * EARTH_RADIUS_M
}

/// Initial bearing in degrees, in `[0, 360)`, from the first position to the second.
pub fn course_to(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let mut bearing = y.atan2(x);
    if bearing < 0.0 {
        bearing += TAU;
    }

    bearing.to_degrees()
}

/// Name of the 16-point compass direction closest to `course` (degrees).
///
/// ```rust
/// use nmea0183_stream::navigation::cardinal;
///
/// assert_eq!(cardinal(0.0), "N");
/// assert_eq!(cardinal(90.0), "E");
/// assert_eq!(cardinal(350.0), "N");
/// assert_eq!(cardinal(200.0), "SSW");
/// ```
pub fn cardinal(course: f64) -> &'static str {
    let direction = ((course + 11.25) / 22.5) as i32;
    COMPASS_POINTS[direction.rem_euclid(16) as usize]
}

impl Fix {
    /// Latitude in degrees.
    pub fn latitude_degrees(&self) -> Option<f64> {
        self.latitude().map(|lat| f64::from(lat) / 1_000_000.0)
    }

    /// Longitude in degrees.
    pub fn longitude_degrees(&self) -> Option<f64> {
        self.longitude().map(|lon| f64::from(lon) / 1_000_000.0)
    }

    /// Course over ground in degrees.
    pub fn course_degrees(&self) -> Option<f64> {
        self.course().map(|course| f64::from(course) / 100.0)
    }

    pub fn hdop_value(&self) -> Option<f64> {
        self.hdop().map(|hdop| f64::from(hdop) / 100.0)
    }

    /// Speed over ground in knots.
    pub fn speed_knots(&self) -> Option<f64> {
        self.speed().map(|speed| f64::from(speed) / 100.0)
    }

    /// Speed over ground in statute miles per hour.
    pub fn speed_mph(&self) -> Option<f64> {
        self.speed_knots().map(|knots| knots * MPH_PER_KNOT)
    }

    /// Speed over ground in meters per second.
    pub fn speed_mps(&self) -> Option<f64> {
        self.speed_knots().map(|knots| knots * MPS_PER_KNOT)
    }

    /// Speed over ground in kilometers per hour.
    pub fn speed_kmph(&self) -> Option<f64> {
        self.speed_knots().map(|knots| knots * KMPH_PER_KNOT)
    }

    /// Great-circle distance in meters from this fix to `(lat, lon)` in degrees.
    pub fn distance_to(&self, lat: f64, lon: f64) -> Option<f64> {
        Some(distance_between(
            self.latitude_degrees()?,
            self.longitude_degrees()?,
            lat,
            lon,
        ))
    }

    /// Initial bearing in degrees from this fix to `(lat, lon)` in degrees.
    pub fn course_to(&self, lat: f64, lon: f64) -> Option<f64> {
        Some(course_to(
            self.latitude_degrees()?,
            self.longitude_degrees()?,
            lat,
            lon,
        ))
    }
}
