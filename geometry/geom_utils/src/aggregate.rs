use std::borrow::Borrow;

use geom_shape::Shape;

/// Sum of `area()` over `shapes`, folded left from `0.0` in iteration order.
///
/// Accepts owned shapes or borrowed handles (`&[Shape]`, `Vec<Shape>`,
/// `iter::repeat(&s).take(n)`, ...). An empty sequence yields `0.0`; a NaN or
/// infinite area propagates.
#[tracing::instrument(level = "trace", skip_all)]
pub fn wrap_shapes<I>(shapes: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<Shape>,
{
    shapes
        .into_iter()
        .fold(0.0, |total, shape| total + shape.borrow().area())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_empty_is_exactly_zero() {
        let empty: [Shape; 0] = [];
        assert_eq!(wrap_shapes(&empty), 0.0);
        assert_eq!(wrap_shapes(Vec::<Shape>::new()), 0.0);
    }

    #[test]
    fn test_fixture_shapes() {
        let shapes = vec![
            Shape::circle(1.1),
            Shape::square(2.2),
            Shape::triangle(3.3, 4.4),
        ];
        let expected = 0.0 + PI * 1.1 * 1.1 + 2.2 * 2.2 + 0.5 * 3.3 * 4.4;
        assert_eq!(wrap_shapes(&shapes), expected);
        assert!((wrap_shapes(&shapes) - (PI * 1.21 + 4.84 + 7.26)).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_reference_doubles() {
        let circle = Shape::circle(1.0);
        assert_eq!(wrap_shapes(std::iter::repeat(&circle).take(2)), PI + PI);
    }

    #[test]
    fn test_nan_propagates() {
        let shapes = [Shape::square(1.0), Shape::circle(f64::NAN)];
        assert!(wrap_shapes(&shapes).is_nan());
    }
}
