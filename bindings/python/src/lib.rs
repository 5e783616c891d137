//! geomkit Python Bindings
//!
//! Exposes the shape model to Python as the `geomkit` extension module:
//!
//! ```python
//! from geomkit.shape import Circle, Square
//! import geomkit.geometry as gm
//!
//! gm.wrap_shapes([Circle(1.0), Square(2.0)])   # pi + 4
//! gm.maybe_make_square(False)                  # None
//! isinstance(gm.get_shape_variant(True), Circle)
//! ```
//!
//! Marshalling follows the native types: `Option` becomes `None` or an
//! instance, the variant return becomes the matching concrete class, and shape
//! arguments are borrowed so the native handle is shared rather than copied.

use std::sync::Once;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod geometry;
mod shape;


static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that writes to stderr.
///
/// `filter` is an `EnvFilter` directive such as `"geom_utils=trace"`; the
/// default is `"warn"`. Only the first successful call installs anything.
#[pyfunction]
#[pyo3(signature = (filter=None))]
fn init_tracing(filter: Option<&str>) -> PyResult<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_new(filter.unwrap_or("warn"))
        .map_err(|e| PyValueError::new_err(format!("invalid trace filter: {e}")))?;

    TRACING_INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::warn!("a global tracing subscriber was already installed");
        }
    });
    Ok(())
}

/// Build the `shape` and `geometry` submodules and register them under
/// `geomkit.*` in `sys.modules` so `import geomkit.shape` works.
#[pymodule]
fn geomkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();

    let shape_module = PyModule::new_bound(py, "shape")?;
    shape::register(&shape_module)?;
    m.add_submodule(&shape_module)?;

    let geometry_module = PyModule::new_bound(py, "geometry")?;
    geometry::register(&geometry_module)?;
    m.add_submodule(&geometry_module)?;

    let modules = py.import_bound("sys")?.getattr("modules")?;
    modules.set_item("geomkit.shape", &shape_module)?;
    modules.set_item("geomkit.geometry", &geometry_module)?;

    m.add_function(wrap_pyfunction!(init_tracing, m)?)?;
    Ok(())
}
