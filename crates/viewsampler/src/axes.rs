//! Named parameter axes and their ordered Cartesian product.
//!
//! The enumeration order of a view sequence is the order of its axes: the
//! first axis is the outermost loop and the last axis varies fastest. A flat
//! index therefore decodes into one coordinate per axis by mixed-radix
//! division, which lets any view be computed from its index alone.

use viewsampler_core::{Error, Result};

/// An ordered list of values for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterAxis {
    name: &'static str,
    values: Vec<f32>,
}

impl ParameterAxis {
    /// Creates an axis from explicit values, kept in the given order.
    pub fn new(name: &'static str, values: Vec<f32>) -> Self {
        Self { name, values }
    }

    /// Creates an axis whose values are `0, 1, ..., count - 1`.
    #[allow(clippy::cast_precision_loss)]
    pub fn indexed(name: &'static str, count: usize) -> Self {
        Self {
            name,
            values: (0..count).map(|i| i as f32).collect(),
        }
    }

    /// Returns the axis name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the axis values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the axis has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One coordinate of a [`GridPoint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Axis name.
    pub axis: &'static str,
    /// Position along the axis.
    pub index: usize,
    /// Value at that position.
    pub value: f32,
}

/// A single combination of axis values.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    /// Flat position in the enumeration.
    pub index: usize,
    /// One coordinate per axis, outermost first.
    pub coordinates: Vec<Coordinate>,
}

impl GridPoint {
    /// Returns the coordinate on the named axis.
    pub fn coordinate(&self, axis: &str) -> Option<&Coordinate> {
        self.coordinates.iter().find(|c| c.axis == axis)
    }

    /// Returns the coordinate on the named axis, or an error if the point
    /// came from a product without it.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] naming the missing axis.
    pub fn require(&self, axis: &str) -> Result<&Coordinate> {
        self.coordinate(axis)
            .ok_or_else(|| Error::InvalidConfig(format!("grid point {} has no '{axis}' axis", self.index)))
    }
}

/// Product of axis lengths, or `None` on overflow. Zero for no axes or any
/// empty axis.
pub fn checked_axis_product(lengths: &[usize]) -> Option<usize> {
    if lengths.is_empty() || lengths.contains(&0) {
        return Some(0);
    }
    lengths.iter().try_fold(1usize, |total, &n| total.checked_mul(n))
}

/// The ordered Cartesian product of a list of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianProduct {
    axes: Vec<ParameterAxis>,
}

impl CartesianProduct {
    /// Creates the product; the first axis is the outermost.
    pub fn new(axes: Vec<ParameterAxis>) -> Self {
        Self { axes }
    }

    /// Returns the axes in enumeration order.
    pub fn axes(&self) -> &[ParameterAxis] {
        &self.axes
    }

    /// Number of combinations, or `None` if it does not fit in `usize`.
    pub fn checked_len(&self) -> Option<usize> {
        let lengths: Vec<usize> = self.axes.iter().map(ParameterAxis::len).collect();
        checked_axis_product(&lengths)
    }

    /// Number of combinations. Zero if there are no axes or any axis is empty;
    /// saturates at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.checked_len().unwrap_or(usize::MAX)
    }

    /// Returns true if the product has no combinations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decodes a flat index into its grid point.
    pub fn point_at(&self, index: usize) -> Option<GridPoint> {
        if index >= self.len() {
            return None;
        }
        let mut coordinates = Vec::with_capacity(self.axes.len());
        let mut rest = index;
        // Innermost axis varies fastest, so peel digits from the back.
        for axis in self.axes.iter().rev() {
            let i = rest % axis.len();
            rest /= axis.len();
            coordinates.push(Coordinate {
                axis: axis.name,
                index: i,
                value: axis.values[i],
            });
        }
        coordinates.reverse();
        Some(GridPoint { index, coordinates })
    }

    /// Iterates over all grid points in enumeration order.
    pub fn iter(&self) -> Points<'_> {
        Points {
            product: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a CartesianProduct {
    type Item = GridPoint;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`CartesianProduct`].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    product: &'a CartesianProduct,
    next: usize,
    len: usize,
}

impl Iterator for Points<'_> {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.next >= self.len {
            return None;
        }
        let point = self.product.point_at(self.next);
        self.next += 1;
        point
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> CartesianProduct {
        CartesianProduct::new(vec![
            ParameterAxis::new("outer", vec![10.0, 20.0]),
            ParameterAxis::new("inner", vec![1.0, 2.0, 3.0]),
        ])
    }

    #[test]
    fn test_len() {
        assert_eq!(two_by_three().len(), 6);
        assert_eq!(CartesianProduct::new(Vec::new()).len(), 0);
        let with_empty = CartesianProduct::new(vec![
            ParameterAxis::indexed("a", 4),
            ParameterAxis::new("b", Vec::new()),
        ]);
        assert!(with_empty.is_empty());
        assert_eq!(with_empty.iter().count(), 0);
    }

    #[test]
    fn test_last_axis_varies_fastest() {
        let values: Vec<(f32, f32)> = two_by_three()
            .iter()
            .map(|p| (p.coordinates[0].value, p.coordinates[1].value))
            .collect();
        assert_eq!(
            values,
            vec![
                (10.0, 1.0),
                (10.0, 2.0),
                (10.0, 3.0),
                (20.0, 1.0),
                (20.0, 2.0),
                (20.0, 3.0),
            ]
        );
    }

    #[test]
    fn test_point_at_matches_iteration() {
        let product = CartesianProduct::new(vec![
            ParameterAxis::indexed("a", 3),
            ParameterAxis::indexed("b", 4),
            ParameterAxis::indexed("c", 5),
        ]);
        for (i, point) in product.iter().enumerate() {
            assert_eq!(point.index, i);
            assert_eq!(product.point_at(i), Some(point));
        }
        assert_eq!(product.point_at(60), None);
    }

    #[test]
    fn test_point_positions() {
        let point = two_by_three().point_at(4).unwrap();
        assert_eq!(point.require("outer").unwrap().index, 1);
        assert_eq!(point.require("inner").unwrap().value, 2.0);
        assert!(point.coordinate("missing").is_none());
        let err = point.require("missing").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("'missing'")));
    }

    #[test]
    fn test_checked_len_overflow() {
        let small = CartesianProduct::new(vec![
            ParameterAxis::new("a", vec![0.0, 1.0]),
            ParameterAxis::new("b", vec![0.0, 1.0]),
        ]);
        assert_eq!(small.checked_len(), Some(4));
        assert_eq!(CartesianProduct::new(Vec::new()).checked_len(), Some(0));
        assert_eq!(checked_axis_product(&[usize::MAX, 2]), None);
        assert_eq!(checked_axis_product(&[usize::MAX, 2, 0]), Some(0));
        assert_eq!(checked_axis_product(&[6, 7, 6]), Some(252));
    }

    #[test]
    fn test_exact_size() {
        let product = two_by_three();
        let mut iter = product.iter();
        assert_eq!(iter.len(), 6);
        iter.next();
        assert_eq!(iter.len(), 5);
    }
}
