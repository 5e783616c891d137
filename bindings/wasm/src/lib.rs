//! geomkit WASM Bindings
//!
//! Exposes the shape model to JavaScript. Each JS object owns one native
//! handle; converting between classes (`toShape()`, `asCircle()`, ...) and
//! pushing into a `ShapeList` clone the handle, so the caller's object stays
//! valid and still refers to the same shape.

use geom_shape::{self as geom, Heap};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Variant tag of a `Shape`.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Composite,
}

impl From<geom::ShapeKind> for ShapeKind {
    fn from(kind: geom::ShapeKind) -> Self {
        match kind {
            geom::ShapeKind::Circle => ShapeKind::Circle,
            geom::ShapeKind::Square => ShapeKind::Square,
            geom::ShapeKind::Triangle => ShapeKind::Triangle,
            geom::ShapeKind::Composite => ShapeKind::Composite,
        }
    }
}

/// Shape tree plus its area, serialized as JSON for JavaScript.
#[derive(Serialize)]
struct ShapeReport<'a> {
    area: f64,
    #[serde(flatten)]
    shape: &'a geom::Shape,
}

/// Any shape. Use `kind` and the `as*` methods to recover the concrete class.
#[wasm_bindgen]
pub struct Shape {
    inner: geom::Shape,
}

#[wasm_bindgen]
impl Shape {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> ShapeKind {
        self.inner.kind().into()
    }

    pub fn area(&self) -> f64 {
        self.inner.area()
    }

    /// The same circle as a `Circle`, or `undefined` for other kinds.
    #[wasm_bindgen(js_name = asCircle)]
    pub fn as_circle(&self) -> Option<Circle> {
        Heap::<geom::Circle>::try_from(self.inner.clone())
            .ok()
            .map(|handle| Circle { handle })
    }

    #[wasm_bindgen(js_name = asSquare)]
    pub fn as_square(&self) -> Option<Square> {
        Heap::<geom::Square>::try_from(self.inner.clone())
            .ok()
            .map(|handle| Square { handle })
    }

    #[wasm_bindgen(js_name = asTriangle)]
    pub fn as_triangle(&self) -> Option<Triangle> {
        Heap::<geom::Triangle>::try_from(self.inner.clone())
            .ok()
            .map(|handle| Triangle { handle })
    }

    #[wasm_bindgen(js_name = asComposite)]
    pub fn as_composite(&self) -> Option<CompositeShape> {
        geom::CompositeShape::try_from(self.inner.clone())
            .ok()
            .map(|composite| CompositeShape { composite })
    }

    /// JSON object with `kind`, `area` and the shape's parameters.
    ///
    /// Composites list their `children` recursively.
    pub fn describe(&self) -> String {
        let report = ShapeReport {
            area: self.inner.area(),
            shape: &self.inner,
        };
        serde_json::to_string(&report).unwrap_or_else(|e| {
            format!(r#"{{"error":"Serialization error: {e}"}}"#)
        })
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_display_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<geom::Shape> for Shape {
    fn from(inner: geom::Shape) -> Self {
        Shape { inner }
    }
}

#[wasm_bindgen]
pub struct Circle {
    handle: Heap<geom::Circle>,
}

#[wasm_bindgen]
impl Circle {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64) -> Circle {
        Circle {
            handle: geom::Circle::shared(radius),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.handle.radius()
    }

    pub fn area(&self) -> f64 {
        self.handle.area()
    }

    /// Upcast to `Shape`, sharing this circle.
    #[wasm_bindgen(js_name = toShape)]
    pub fn to_shape(&self) -> Shape {
        geom::Shape::from(self.handle.clone()).into()
    }
}

#[wasm_bindgen]
pub struct Square {
    handle: Heap<geom::Square>,
}

#[wasm_bindgen]
impl Square {
    #[wasm_bindgen(constructor)]
    pub fn new(side: f64) -> Square {
        Square {
            handle: geom::Square::shared(side),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn side(&self) -> f64 {
        self.handle.side()
    }

    pub fn area(&self) -> f64 {
        self.handle.area()
    }

    #[wasm_bindgen(js_name = toShape)]
    pub fn to_shape(&self) -> Shape {
        geom::Shape::from(self.handle.clone()).into()
    }
}

#[wasm_bindgen]
pub struct Triangle {
    handle: Heap<geom::Triangle>,
}

#[wasm_bindgen]
impl Triangle {
    #[wasm_bindgen(constructor)]
    pub fn new(base: f64, height: f64) -> Triangle {
        Triangle {
            handle: geom::Triangle::shared(base, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn base(&self) -> f64 {
        self.handle.base()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.handle.height()
    }

    pub fn area(&self) -> f64 {
        self.handle.area()
    }

    #[wasm_bindgen(js_name = toShape)]
    pub fn to_shape(&self) -> Shape {
        geom::Shape::from(self.handle.clone()).into()
    }
}

#[wasm_bindgen]
pub struct CompositeShape {
    composite: geom::CompositeShape,
}

#[wasm_bindgen]
impl CompositeShape {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CompositeShape {
        CompositeShape {
            composite: geom::CompositeShape::new(),
        }
    }

    /// Append `shape`, sharing it with the caller.
    pub fn add(&self, shape: &Shape) {
        self.composite.add(shape.inner.clone());
    }

    pub fn area(&self) -> f64 {
        self.composite.area()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.composite.len()
    }

    #[wasm_bindgen(js_name = toShape)]
    pub fn to_shape(&self) -> Shape {
        geom::Shape::from(self.composite.clone()).into()
    }
}

impl Default for CompositeShape {
    fn default() -> Self {
        CompositeShape::new()
    }
}

/// Ordered shape handles, the sequence argument of `wrapShapes`.
#[wasm_bindgen]
pub struct ShapeList {
    shapes: Vec<geom::Shape>,
}

#[wasm_bindgen]
impl ShapeList {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ShapeList {
        ShapeList { shapes: Vec::new() }
    }

    /// Append `shape`. The caller's object stays usable.
    pub fn push(&mut self, shape: &Shape) {
        self.shapes.push(shape.inner.clone());
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.shapes.len()
    }
}

impl Default for ShapeList {
    fn default() -> Self {
        ShapeList::new()
    }
}

/// Left-fold sum of the areas in `list`.
#[wasm_bindgen(js_name = wrapShapes)]
pub fn wrap_shapes(list: &ShapeList) -> f64 {
    geom_utils::wrap_shapes(&list.shapes)
}

#[wasm_bindgen(js_name = maybeMakeCircle)]
pub fn maybe_make_circle(flag: bool) -> Option<Circle> {
    geom_utils::maybe_make_circle(flag).map(|handle| Circle { handle })
}

#[wasm_bindgen(js_name = maybeMakeSquare)]
pub fn maybe_make_square(flag: bool) -> Option<Square> {
    geom_utils::maybe_make_square(flag).map(|handle| Square { handle })
}

#[wasm_bindgen(js_name = maybeMakeTriangle)]
pub fn maybe_make_triangle(flag: bool) -> Option<Triangle> {
    geom_utils::maybe_make_triangle(flag).map(|handle| Triangle { handle })
}

/// A circle-kinded `Shape` when `flag` is true, otherwise a square-kinded one.
#[wasm_bindgen(js_name = getShapeVariant)]
pub fn get_shape_variant(flag: bool) -> Shape {
    geom::Shape::from(geom_utils::get_shape_variant(flag)).into()
}

#[wasm_bindgen(js_name = makeComposite)]
pub fn make_composite() -> CompositeShape {
    CompositeShape {
        composite: geom_utils::make_composite(),
    }
}

#[cfg(test)]
mod tests;
