//! `geomkit.shape`: the `Shape` base class and the three primitive shapes.
//!
//! Every Python shape object holds a clone of the native handle in its base
//! `Shape` part, so passing the object back into native code shares the same
//! allocation instead of copying it.

use geom_shape::{Circle, Heap, Shape, Square, Triangle};
use pyo3::prelude::*;
use pyo3::PyClassInitializer;

use crate::geometry::PyCompositeShape;

/// Base class of every shape. Not constructible from Python.
#[pyclass(name = "Shape", module = "geomkit.shape", subclass)]
pub struct PyShape {
    pub(crate) inner: Shape,
}

impl PyShape {
    pub(crate) fn new(inner: Shape) -> Self {
        PyShape { inner }
    }
}

#[pymethods]
impl PyShape {
    fn area(&self) -> f64 {
        self.inner.area()
    }

    /// Lowercase variant name: "circle", "square", "triangle" or "composite".
    #[getter]
    fn kind(&self) -> &'static str {
        self.inner.kind().as_str()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}

#[pyclass(name = "Circle", module = "geomkit.shape", extends = PyShape)]
pub struct PyCircle {
    handle: Heap<Circle>,
}

impl PyCircle {
    pub(crate) fn initializer(handle: Heap<Circle>) -> PyClassInitializer<PyCircle> {
        PyClassInitializer::from(PyShape::new(Shape::Circle(handle.clone())))
            .add_subclass(PyCircle { handle })
    }
}

#[pymethods]
impl PyCircle {
    #[new]
    fn py_new(radius: f64) -> PyClassInitializer<Self> {
        PyCircle::initializer(Circle::shared(radius))
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.handle.radius()
    }
}

#[pyclass(name = "Square", module = "geomkit.shape", extends = PyShape)]
pub struct PySquare {
    handle: Heap<Square>,
}

impl PySquare {
    pub(crate) fn initializer(handle: Heap<Square>) -> PyClassInitializer<PySquare> {
        PyClassInitializer::from(PyShape::new(Shape::Square(handle.clone())))
            .add_subclass(PySquare { handle })
    }
}

#[pymethods]
impl PySquare {
    #[new]
    fn py_new(side: f64) -> PyClassInitializer<Self> {
        PySquare::initializer(Square::shared(side))
    }

    #[getter]
    fn side(&self) -> f64 {
        self.handle.side()
    }
}

#[pyclass(name = "Triangle", module = "geomkit.shape", extends = PyShape)]
pub struct PyTriangle {
    handle: Heap<Triangle>,
}

impl PyTriangle {
    pub(crate) fn initializer(handle: Heap<Triangle>) -> PyClassInitializer<PyTriangle> {
        PyClassInitializer::from(PyShape::new(Shape::Triangle(handle.clone())))
            .add_subclass(PyTriangle { handle })
    }
}

#[pymethods]
impl PyTriangle {
    #[new]
    fn py_new(base: f64, height: f64) -> PyClassInitializer<Self> {
        PyTriangle::initializer(Triangle::shared(base, height))
    }

    #[getter]
    fn base(&self) -> f64 {
        self.handle.base()
    }

    #[getter]
    fn height(&self) -> f64 {
        self.handle.height()
    }
}

/// Wrap a native shape in the Python class matching its variant.
pub(crate) fn to_python(py: Python<'_>, shape: Shape) -> PyResult<PyObject> {
    let object = match shape {
        Shape::Circle(h) => Py::new(py, PyCircle::initializer(h))?.into_py(py),
        Shape::Square(h) => Py::new(py, PySquare::initializer(h))?.into_py(py),
        Shape::Triangle(h) => Py::new(py, PyTriangle::initializer(h))?.into_py(py),
        Shape::Composite(c) => Py::new(py, PyCompositeShape::initializer(c))?.into_py(py),
    };
    Ok(object)
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyShape>()?;
    m.add_class::<PyCircle>()?;
    m.add_class::<PySquare>()?;
    m.add_class::<PyTriangle>()?;
    Ok(())
}
