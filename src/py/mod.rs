use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::wgs84_to_osgb, m)?)?;
    m.add_function(wrap_pyfunction!(transform::grid_ref, m)?)?;
    Ok(())
}
