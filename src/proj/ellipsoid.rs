/// Reference ellipsoid parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Semi-minor axis (metres)
    pub b: f64,
    /// Flattening: (a - b) / a
    pub f: f64,
    /// First eccentricity squared: (a² - b²) / a²
    pub e2: f64,
    /// Second eccentricity squared: e² / (1 - e²)
    pub ep2: f64,
    /// Third flattening: (a - b) / (a + b)
    pub n: f64,
}

impl Ellipsoid {
    /// Build from semi-major and semi-minor axes. Callers guarantee a >= b > 0.
    pub const fn new(a: f64, b: f64) -> Self {
        let f = (a - b) / a;
        let e2 = (a * a - b * b) / (a * a);
        let ep2 = e2 / (1.0 - e2);
        let n = (a - b) / (a + b);
        Self {
            a,
            b,
            f,
            e2,
            ep2,
            n,
        }
    }

    /// Build from semi-major axis and flattening.
    pub const fn from_flattening(a: f64, f: f64) -> Self {
        Self::new(a, a * (1.0 - f))
    }

    /// Get the first eccentricity (computed at runtime).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    /// Prime-vertical radius of curvature ν at geodetic latitude `phi`.
    pub fn prime_vertical_radius(&self, phi: f64) -> f64 {
        let s = phi.sin();
        self.a / (1.0 - self.e2 * s * s).sqrt()
    }

    /// Meridional radius of curvature ρ at geodetic latitude `phi`.
    pub fn meridional_radius(&self, phi: f64) -> f64 {
        let s = phi.sin();
        self.a * (1.0 - self.e2) / (1.0 - self.e2 * s * s).powf(1.5)
    }
}

/// Airy 1830, the ellipsoid of the OSGB36 datum.
pub const AIRY_1830: Ellipsoid = Ellipsoid::new(6_377_563.396, 6_356_256.909);
pub const WGS84: Ellipsoid = Ellipsoid::from_flattening(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::from_flattening(6_378_137.0, 1.0 / 298.257_222_101);
