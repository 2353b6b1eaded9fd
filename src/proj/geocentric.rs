//! Geodetic (lat, lon, h) <-> geocentric cartesian conversion.
//!
//! The forward direction is closed form. The inverse uses the fixed-point
//! latitude iteration from the OS guide (section B.2), with an iteration cap.

use std::f64::consts::{FRAC_PI_4, PI};

use log::{debug, trace};

use crate::coords::{Cartesian, LatLon};
use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;

/// Default distance (metres) to which the inverse iteration resolves latitude.
pub const DEFAULT_PRECISION_M: f64 = 0.001;

/// Default cap on inverse iterations. Typical inputs converge in two or three.
pub const DEFAULT_MAX_ITERATIONS: usize = 32;

/// Convert geodetic coordinates to geocentric cartesian.
pub fn lat_lon_to_cartesian(point: LatLon, ellipsoid: &Ellipsoid) -> Cartesian {
    let (sin_phi, cos_phi) = point.lat.sin_cos();
    let (sin_lam, cos_lam) = point.lon.sin_cos();

    let e2 = ellipsoid.e2;
    let nu = ellipsoid.prime_vertical_radius(point.lat);

    Cartesian {
        x: (nu + point.h) * cos_phi * cos_lam,
        y: (nu + point.h) * cos_phi * sin_lam,
        z: ((1.0 - e2) * nu + point.h) * sin_phi,
    }
}

/// Convert geocentric cartesian to geodetic coordinates with the default solver.
pub fn cartesian_to_lat_lon(point: Cartesian, ellipsoid: &Ellipsoid) -> Result<LatLon, ProjError> {
    GeocentricSolver::default().solve(point, ellipsoid)
}

/// Iterative cartesian -> geodetic solver.
#[derive(Clone, Copy, Debug)]
pub struct GeocentricSolver {
    /// Target latitude resolution, expressed as a distance in metres on the ellipsoid.
    pub precision_m: f64,
    /// Maximum number of latitude refinements before giving up.
    pub max_iterations: usize,
}

impl Default for GeocentricSolver {
    fn default() -> Self {
        Self {
            precision_m: DEFAULT_PRECISION_M,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl GeocentricSolver {
    pub fn new(precision_m: f64, max_iterations: usize) -> Self {
        Self {
            precision_m,
            max_iterations,
        }
    }

    /// Solve for (lat, lon, h) on `ellipsoid`.
    ///
    /// Returns `ProjError::NonFinite` for NaN/infinite input,
    /// `ProjError::InvalidParameter` unless `precision_m` is finite and
    /// positive, and `ProjError::NoConvergence` if latitude is not resolved
    /// within `max_iterations` refinements.
    pub fn solve(&self, point: Cartesian, ellipsoid: &Ellipsoid) -> Result<LatLon, ProjError> {
        if !(self.precision_m.is_finite() && self.precision_m > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "precision_m must be finite and positive, got {}",
                self.precision_m
            )));
        }
        if !point.is_finite() {
            return Err(ProjError::NonFinite(format!(
                "({}, {}, {})",
                point.x, point.y, point.z
            )));
        }

        // angular tolerance
        let precision = self.precision_m / ellipsoid.a;
        let e2 = ellipsoid.e2;
        let p = point.x.hypot(point.y);

        let mut phi = point.z.atan2(p * (1.0 - e2));
        // Sentinel forces at least one refinement.
        let mut phi_prev = 2.0 * PI;
        let mut nu = ellipsoid.a;
        let mut iterations = 0;

        while (phi - phi_prev).abs() > precision {
            if iterations == self.max_iterations {
                debug!(
                    "cartesian -> lat/lon did not converge after {iterations} iterations \
                     (x={}, y={}, z={})",
                    point.x, point.y, point.z
                );
                return Err(ProjError::NoConvergence { iterations });
            }
            nu = ellipsoid.prime_vertical_radius(phi);
            phi_prev = phi;
            phi = (point.z + e2 * nu * phi.sin()).atan2(p);
            iterations += 1;
        }
        trace!("cartesian -> lat/lon converged in {iterations} iterations");

        // p / cos(phi) degenerates on the polar axis
        let h = if phi.abs() > FRAC_PI_4 {
            point.z / phi.sin() - nu * (1.0 - e2)
        } else {
            p / phi.cos() - nu
        };

        Ok(LatLon {
            lat: phi,
            lon: point.y.atan2(point.x),
            h,
        })
    }
}
