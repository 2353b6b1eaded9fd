/// Geodetic coordinates on an ellipsoid.
///
/// Latitude and longitude are in radians, height is ellipsoidal height in metres.
/// Latitude is expected to lie in [-π/2, π/2]; this is not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
    pub h: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64, h: f64) -> Self {
        Self { lat, lon, h }
    }

    /// Build from latitude/longitude in decimal degrees.
    pub fn from_degrees(lat_deg: f64, lon_deg: f64, h: f64) -> Self {
        Self {
            lat: lat_deg.to_radians(),
            lon: lon_deg.to_radians(),
            h,
        }
    }

    /// (lat, lon) in decimal degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.lat.to_degrees(), self.lon.to_degrees())
    }
}

/// Geocentric, right-handed cartesian coordinates in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Planar projected coordinates in metres. Height passes through projections untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EastingNorthing {
    pub e: f64,
    pub n: f64,
    pub h: f64,
}

impl EastingNorthing {
    pub fn new(e: f64, n: f64, h: f64) -> Self {
        Self { e, n, h }
    }
}
