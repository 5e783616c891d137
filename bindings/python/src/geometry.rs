//! `geomkit.geometry`: aggregation, optional factories, variant return and
//! `CompositeShape`.

use geom_shape::{CompositeShape, Shape};
use pyo3::prelude::*;
use pyo3::PyClassInitializer;

use crate::shape::{to_python, PyCircle, PyShape, PySquare, PyTriangle};

#[pyclass(name = "CompositeShape", module = "geomkit.geometry", extends = PyShape)]
pub struct PyCompositeShape {
    composite: CompositeShape,
}

impl PyCompositeShape {
    pub(crate) fn initializer(composite: CompositeShape) -> PyClassInitializer<PyCompositeShape> {
        PyClassInitializer::from(PyShape::new(Shape::Composite(composite.clone())))
            .add_subclass(PyCompositeShape { composite })
    }
}

#[pymethods]
impl PyCompositeShape {
    #[new]
    fn py_new() -> PyClassInitializer<Self> {
        PyCompositeShape::initializer(CompositeShape::new())
    }

    /// Append `shape`. The composite shares the object; it is not copied.
    fn add(&self, shape: PyRef<'_, PyShape>) {
        self.composite.add(shape.inner.clone());
    }

    fn area(&self) -> f64 {
        self.composite.area()
    }

    /// Children in insertion order, as their concrete Python classes.
    fn children(&self, py: Python<'_>) -> PyResult<Vec<PyObject>> {
        self.composite
            .children()
            .into_iter()
            .map(|child| to_python(py, child))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.composite.len()
    }
}

/// Left-fold sum of `area()` over any finite iterable of shapes.
#[pyfunction]
fn wrap_shapes(shapes: &Bound<'_, PyAny>) -> PyResult<f64> {
    let shapes = shapes
        .iter()?
        .map(|item| item?.extract::<PyRef<'_, PyShape>>())
        .collect::<PyResult<Vec<_>>>()?;
    Ok(geom_utils::wrap_shapes(shapes.iter().map(|shape| &shape.inner)))
}

#[pyfunction]
fn maybe_make_circle(py: Python<'_>, flag: bool) -> PyResult<Option<Py<PyCircle>>> {
    geom_utils::maybe_make_circle(flag)
        .map(|h| Py::new(py, PyCircle::initializer(h)))
        .transpose()
}

#[pyfunction]
fn maybe_make_square(py: Python<'_>, flag: bool) -> PyResult<Option<Py<PySquare>>> {
    geom_utils::maybe_make_square(flag)
        .map(|h| Py::new(py, PySquare::initializer(h)))
        .transpose()
}

#[pyfunction]
fn maybe_make_triangle(py: Python<'_>, flag: bool) -> PyResult<Option<Py<PyTriangle>>> {
    geom_utils::maybe_make_triangle(flag)
        .map(|h| Py::new(py, PyTriangle::initializer(h)))
        .transpose()
}

/// A `Circle` when `flag` is true, otherwise a `Square`.
#[pyfunction]
fn get_shape_variant(py: Python<'_>, flag: bool) -> PyResult<PyObject> {
    to_python(py, Shape::from(geom_utils::get_shape_variant(flag)))
}

#[pyfunction]
fn make_composite(py: Python<'_>) -> PyResult<Py<PyCompositeShape>> {
    Py::new(py, PyCompositeShape::initializer(geom_utils::make_composite()))
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCompositeShape>()?;
    m.add_function(wrap_pyfunction!(wrap_shapes, m)?)?;
    m.add_function(wrap_pyfunction!(maybe_make_circle, m)?)?;
    m.add_function(wrap_pyfunction!(maybe_make_square, m)?)?;
    m.add_function(wrap_pyfunction!(maybe_make_triangle, m)?)?;
    m.add_function(wrap_pyfunction!(get_shape_variant, m)?)?;
    m.add_function(wrap_pyfunction!(make_composite, m)?)?;
    Ok(())
}
