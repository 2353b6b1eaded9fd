//! Transverse Mercator projection: OSGB/Redfearn series.
//!
//! Forward and inverse follow the Ordnance Survey formulation (OS guide,
//! annex C): a four-term meridional arc plus the I..VI (forward) and
//! VII..XIIA (inverse) correction terms. Accuracy degrades with distance from
//! the central meridian; there is no zone-validity check, points far outside
//! the intended zone produce large errors rather than failures.

use log::{debug, trace};

use crate::coords::{EastingNorthing, LatLon};
use crate::error::ProjError;
use crate::proj::common::meridional_arc;
use crate::proj::ellipsoid::{Ellipsoid, AIRY_1830};
use crate::proj::Projection;

/// Northing residual (metres) to which the inverse latitude iteration resolves.
const INVERSE_PRECISION_M: f64 = 0.00001;
const INVERSE_MAX_ITERATIONS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    /// Reference ellipsoid
    pub ellipsoid: Ellipsoid,
    /// True origin latitude (degrees)
    pub lat0: f64,
    /// True origin longitude, the central meridian (degrees)
    pub lon0: f64,
    /// Scale factor on the central meridian
    pub f0: f64,
    /// Easting of the true origin (metres)
    pub e0: f64,
    /// Northing of the true origin (metres)
    pub n0: f64,
}

impl TransverseMercator {
    /// Ordnance Survey National Grid on Airy 1830.
    pub const NATIONAL_GRID: TransverseMercator = TransverseMercator::new(
        AIRY_1830,
        49.0,
        -2.0,
        0.999_601_271_7,
        400_000.0,
        -100_000.0,
    );

    pub const fn new(ellipsoid: Ellipsoid, lat0: f64, lon0: f64, f0: f64, e0: f64, n0: f64) -> Self {
        Self {
            ellipsoid,
            lat0,
            lon0,
            f0,
            e0,
            n0,
        }
    }

    /// Reject parameters that make the series meaningless.
    pub fn validate(&self) -> Result<(), ProjError> {
        if !(self.f0 > 0.0 && self.f0.is_finite()) {
            return Err(ProjError::InvalidParameter(format!(
                "scale factor must be positive, got {}",
                self.f0
            )));
        }
        if !(self.ellipsoid.a >= self.ellipsoid.b && self.ellipsoid.b > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "ellipsoid axes must satisfy a >= b > 0, got a={} b={}",
                self.ellipsoid.a, self.ellipsoid.b
            )));
        }
        Ok(())
    }

    /// Transverse (ν) and meridional (ρ) radii of curvature scaled by f0, and η².
    fn radii(&self, phi: f64) -> (f64, f64, f64) {
        let nu = self.f0 * self.ellipsoid.prime_vertical_radius(phi);
        let rho = self.f0 * self.ellipsoid.meridional_radius(phi);
        (nu, rho, nu / rho - 1.0)
    }

    fn arc(&self, phi: f64) -> f64 {
        meridional_arc(&self.ellipsoid, self.f0, self.lat0.to_radians(), phi)
    }

    /// Latitude on the central meridian whose arc from the origin reaches `northing`.
    fn footpoint_latitude(&self, northing: f64) -> Result<f64, ProjError> {
        let a_f0 = self.ellipsoid.a * self.f0;
        let mut phi = self.lat0.to_radians();
        let mut m = 0.0;

        for iterations in 1..=INVERSE_MAX_ITERATIONS {
            phi += (northing - self.n0 - m) / a_f0;
            m = self.arc(phi);
            if (northing - self.n0 - m).abs() < INVERSE_PRECISION_M {
                trace!("footpoint latitude converged in {iterations} iterations");
                return Ok(phi);
            }
        }
        debug!("footpoint latitude did not converge for northing {northing}");
        Err(ProjError::NoConvergence {
            iterations: INVERSE_MAX_ITERATIONS,
        })
    }
}

impl Default for TransverseMercator {
    fn default() -> Self {
        Self::NATIONAL_GRID
    }
}

impl Projection for TransverseMercator {
    #[allow(non_snake_case)] // term names follow the OS guide
    fn forward(&self, point: LatLon) -> EastingNorthing {
        let lat = point.lat;
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (nu, rho, eta2) = self.radii(lat);

        let cos3 = cos_lat * cos_lat * cos_lat;
        let cos5 = cos3 * cos_lat * cos_lat;
        let tan2 = lat.tan() * lat.tan();
        let tan4 = tan2 * tan2;

        let I = self.arc(lat) + self.n0;
        let II = nu / 2.0 * sin_lat * cos_lat;
        let III = nu / 24.0 * sin_lat * cos3 * (5.0 - tan2 + 9.0 * eta2);
        let IIIA = nu / 720.0 * sin_lat * cos5 * (61.0 - 58.0 * tan2 + tan4);
        let IV = nu * cos_lat;
        let V = nu / 6.0 * cos3 * (nu / rho - tan2);
        let VI = nu / 120.0
            * cos5
            * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * tan2 * eta2);

        let dl = point.lon - self.lon0.to_radians();
        let dl2 = dl * dl;
        let dl3 = dl2 * dl;
        let dl4 = dl3 * dl;
        let dl5 = dl4 * dl;
        let dl6 = dl5 * dl;

        EastingNorthing {
            e: self.e0 + IV * dl + V * dl3 + VI * dl5,
            n: I + II * dl2 + III * dl4 + IIIA * dl6,
            h: point.h,
        }
    }

    #[allow(non_snake_case)]
    fn inverse(&self, point: EastingNorthing) -> Result<LatLon, ProjError> {
        if !(point.e.is_finite() && point.n.is_finite()) {
            return Err(ProjError::NonFinite(format!("({}, {})", point.e, point.n)));
        }

        let lat = self.footpoint_latitude(point.n)?;
        let (nu, rho, eta2) = self.radii(lat);

        let tan = lat.tan();
        let tan2 = tan * tan;
        let tan4 = tan2 * tan2;
        let tan6 = tan4 * tan2;
        let sec = 1.0 / lat.cos();
        let nu3 = nu * nu * nu;
        let nu5 = nu3 * nu * nu;
        let nu7 = nu5 * nu * nu;

        let VII = tan / (2.0 * rho * nu);
        let VIII = tan / (24.0 * rho * nu3) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
        let IX = tan / (720.0 * rho * nu5) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
        let X = sec / nu;
        let XI = sec / (6.0 * nu3) * (nu / rho + 2.0 * tan2);
        let XII = sec / (120.0 * nu5) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
        let XIIA = sec / (5040.0 * nu7) * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);

        let de = point.e - self.e0;
        let de2 = de * de;
        let de3 = de2 * de;
        let de4 = de3 * de;
        let de5 = de4 * de;
        let de6 = de5 * de;
        let de7 = de6 * de;

        Ok(LatLon {
            lat: lat - VII * de2 + VIII * de4 - IX * de6,
            lon: self.lon0.to_radians() + X * de - XI * de3 + XII * de5 - XIIA * de7,
            h: point.h,
        })
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

/// Project `point` with `projection`.
pub fn lat_lon_to_easting_northing(point: LatLon, projection: &TransverseMercator) -> EastingNorthing {
    projection.forward(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// OS guide worked example C.1: 52°39'27.2531"N 1°43'4.5177"E (OSGB36).
    fn worked_example() -> LatLon {
        LatLon::from_degrees(
            52.0 + 39.0 / 60.0 + 27.2531 / 3600.0,
            1.0 + 43.0 / 60.0 + 4.5177 / 3600.0,
            0.0,
        )
    }

    #[test]
    fn test_os_worked_example_forward() {
        let en = TransverseMercator::NATIONAL_GRID.forward(worked_example());
        assert_relative_eq!(en.e, 651_409.903, epsilon = 0.001);
        assert_relative_eq!(en.n, 313_177.270, epsilon = 0.001);
    }

    #[test]
    fn test_rounded_degrees_forward() {
        let en = lat_lon_to_easting_northing(
            LatLon::from_degrees(52.65757, 1.71791, 0.0),
            &TransverseMercator::NATIONAL_GRID,
        );
        assert_relative_eq!(en.e, 651_409.903, epsilon = 1.0);
        assert_relative_eq!(en.n, 313_177.270, epsilon = 1.0);
    }

    #[test]
    fn test_os_worked_example_inverse() {
        let ll = TransverseMercator::NATIONAL_GRID
            .inverse(EastingNorthing::new(651_409.903, 313_177.270, 0.0))
            .unwrap();
        let expected = worked_example();
        // 1e-8 rad is well under a metre on the ground
        assert_relative_eq!(ll.lat, expected.lat, epsilon = 1e-8);
        assert_relative_eq!(ll.lon, expected.lon, epsilon = 1e-8);
    }

    #[test]
    fn test_true_origin() {
        let tm = TransverseMercator::NATIONAL_GRID;
        let en = tm.forward(LatLon::from_degrees(49.0, -2.0, 0.0));
        assert_relative_eq!(en.e, 400_000.0, epsilon = 1e-6);
        assert_relative_eq!(en.n, -100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_height_passes_through() {
        let en = TransverseMercator::NATIONAL_GRID.forward(LatLon::from_degrees(54.0, -3.0, 321.5));
        assert_relative_eq!(en.h, 321.5);
    }

    #[test]
    fn test_roundtrip_across_gb() {
        let tm = TransverseMercator::NATIONAL_GRID;
        let cases: &[(f64, f64)] = &[
            (50.07, -5.71), // Land's End
            (51.48, 0.0),   // Greenwich
            (55.95, -3.19), // Edinburgh
            (58.64, -3.07), // John o' Groats
            (60.8, -0.8),   // Unst
            (52.2, 1.6),    // Suffolk coast
        ];
        for &(lat, lon) in cases {
            let p = LatLon::from_degrees(lat, lon, 10.0);
            let en = tm.forward(p);
            let q = tm.inverse(en).unwrap();
            assert_relative_eq!(q.lat, p.lat, epsilon = 1e-8);
            assert_relative_eq!(q.lon, p.lon, epsilon = 1e-8);
            assert_relative_eq!(q.h, p.h);
        }
    }

    #[test]
    fn test_northing_monotonic_in_latitude() {
        let tm = TransverseMercator::NATIONAL_GRID;
        for lon in [-6.0, -2.0, 1.5] {
            let mut prev = f64::NEG_INFINITY;
            let mut lat = 0.0;
            while lat <= 80.0 {
                let n = tm.forward(LatLon::from_degrees(lat, lon, 0.0)).n;
                assert!(n > prev, "northing reversed at lat {lat}, lon {lon}");
                prev = n;
                lat += 0.5;
            }
        }
    }

    #[test]
    fn test_easting_symmetric_about_central_meridian() {
        let tm = TransverseMercator::NATIONAL_GRID;
        let west = tm.forward(LatLon::from_degrees(54.0, -4.0, 0.0));
        let east = tm.forward(LatLon::from_degrees(54.0, 0.0, 0.0));
        assert_relative_eq!(west.e - tm.e0, -(east.e - tm.e0), epsilon = 1e-6);
        assert_relative_eq!(west.n, east.n, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse_rejects_non_finite() {
        let r = TransverseMercator::NATIONAL_GRID.inverse(EastingNorthing::new(f64::NAN, 0.0, 0.0));
        assert!(matches!(r, Err(ProjError::NonFinite(_))));
    }

    #[test]
    fn test_validate() {
        assert!(TransverseMercator::NATIONAL_GRID.validate().is_ok());
        let mut bad = TransverseMercator::NATIONAL_GRID;
        bad.f0 = 0.0;
        assert!(matches!(bad.validate(), Err(ProjError::InvalidParameter(_))));
        let mut bad = TransverseMercator::NATIONAL_GRID;
        bad.ellipsoid = Ellipsoid::new(6_356_256.909, 6_377_563.396);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_matches_proj4rs() {
        let tm = TransverseMercator::NATIONAL_GRID;
        let geo = proj4rs::Proj::from_proj_string("+proj=longlat +ellps=airy +no_defs").unwrap();
        let osgb = proj4rs::Proj::from_proj_string(
            "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 +y_0=-100000 +ellps=airy +units=m +no_defs",
        )
        .unwrap();

        for &(lat, lon) in &[(51.5, -0.12), (53.48, -2.24), (57.15, -2.1)] {
            let mut point = (f64::to_radians(lon), f64::to_radians(lat));
            proj4rs::transform::transform(&geo, &osgb, &mut point).unwrap();
            let en = tm.forward(LatLon::from_degrees(lat, lon, 0.0));
            assert_relative_eq!(en.e, point.0, epsilon = 0.01);
            assert_relative_eq!(en.n, point.1, epsilon = 0.01);
        }
    }
}
