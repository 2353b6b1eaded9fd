//! Common helpers for projection math.

use super::ellipsoid::Ellipsoid;

/// Meridional arc length from latitude `phi0` to `phi`, scaled by `f0`.
///
/// Four-term series in powers of the third flattening n, as used by the
/// Ordnance Survey (OS guide, eq. C3).
pub fn meridional_arc(ellipsoid: &Ellipsoid, f0: f64, phi0: f64, phi: f64) -> f64 {
    let n = ellipsoid.n;
    let n2 = n * n;
    let n3 = n2 * n;

    let dphi = phi - phi0;
    let sphi = phi + phi0;

    let ma = (1.0 + n + 5.0 / 4.0 * n2 + 5.0 / 4.0 * n3) * dphi;
    let mb = (3.0 * n + 3.0 * n2 + 21.0 / 8.0 * n3) * dphi.sin() * sphi.cos();
    let mc = (15.0 / 8.0 * n2 + 15.0 / 8.0 * n3) * (2.0 * dphi).sin() * (2.0 * sphi).cos();
    let md = 35.0 / 24.0 * n3 * (3.0 * dphi).sin() * (3.0 * sphi).cos();

    ellipsoid.b * f0 * (ma - mb + mc - md)
}
