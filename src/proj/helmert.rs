//! Seven-parameter Helmert datum shift (small-angle approximation).

use crate::coords::Cartesian;

/// Helmert transform parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Helmert {
    /// Translations (metres)
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// Rotations (arc-seconds)
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Scale (parts per million)
    pub s: f64,
}

impl Helmert {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(tx: f64, ty: f64, tz: f64, rx: f64, ry: f64, rz: f64, s: f64) -> Self {
        Self {
            tx,
            ty,
            tz,
            rx,
            ry,
            rz,
            s,
        }
    }

    /// Apply the transform to a geocentric point.
    pub fn transform(&self, point: Cartesian) -> Cartesian {
        let rx = (self.rx / 3600.0).to_radians();
        let ry = (self.ry / 3600.0).to_radians();
        let rz = (self.rz / 3600.0).to_radians();
        let s1 = 1.0 + self.s / 1_000_000.0;

        let Cartesian { x, y, z } = point;
        Cartesian {
            x: self.tx + x * s1 - y * rz + z * ry,
            y: self.ty + x * rz + y * s1 - z * rx,
            z: self.tz - x * ry + y * rx + z * s1,
        }
    }

    /// Approximate inverse: every parameter negated.
    ///
    /// The round trip error is second order in the parameters, about a
    /// centimetre for the WGS84/OSGB36 shift.
    pub fn inverse(&self) -> Self {
        Self {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            s: -self.s,
        }
    }
}

/// Apply `params` to `point`.
pub fn helmert_transform(point: Cartesian, params: &Helmert) -> Cartesian {
    params.transform(point)
}

/// WGS84 -> OSGB36 (OS guide, table 6.2).
pub const WGS84_TO_OSGB36: Helmert =
    Helmert::new(-446.448, 125.157, -542.060, -0.1502, -0.2470, -0.8421, 20.4894);

/// OSGB36 -> WGS84.
pub const OSGB36_TO_WGS84: Helmert =
    Helmert::new(446.448, -125.157, 542.060, 0.1502, 0.2470, 0.8421, -20.4894);
