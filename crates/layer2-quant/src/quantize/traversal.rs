//! Scanline traversal order strategies.
//!
//! The Layer 2 framebuffer is laid out as a sequence of 8 KiB stripes, and
//! the stripe direction depends on the resolution mode. Getting the visit
//! order wrong produces a correctly-sized but visually scrambled output,
//! so the order is modeled explicitly rather than buried in loop bodies.

/// The order in which source pixels are visited.
///
/// One parametrized strategy covers both modes; only the loop nesting
/// differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Outer loop over Y, inner loop over X. Standard reading order.
    RowMajor,

    /// Outer loop over X, inner loop over Y. Equivalent to flipping the
    /// image horizontally, rotating it 90 degrees counter-clockwise, and
    /// then reading row-major.
    ColumnMajorXOuter,
}

impl Traversal {
    /// Iterate over every `(x, y)` coordinate of a `width` x `height`
    /// raster in this traversal's order.
    ///
    /// # Example
    ///
    /// ```
    /// use layer2_quant::Traversal;
    ///
    /// let order: Vec<_> = Traversal::ColumnMajorXOuter.visit(2, 2).collect();
    /// assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    pub fn visit(self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let (outer, inner) = match self {
            Traversal::RowMajor => (height, width),
            Traversal::ColumnMajorXOuter => (width, height),
        };
        (0..outer).flat_map(move |o| {
            (0..inner).map(move |i| match self {
                Traversal::RowMajor => (i, o),
                Traversal::ColumnMajorXOuter => (o, i),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_2x2() {
        let order: Vec<_> = Traversal::RowMajor.visit(2, 2).collect();
        assert_eq!(order, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_column_major_x_outer_2x2() {
        let order: Vec<_> = Traversal::ColumnMajorXOuter.visit(2, 2).collect();
        assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_visit_covers_every_pixel_once() {
        for traversal in [Traversal::RowMajor, Traversal::ColumnMajorXOuter] {
            let mut seen: Vec<_> = traversal.visit(5, 3).collect();
            assert_eq!(seen.len(), 15);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 15, "{traversal:?} visited a pixel twice");
        }
    }

    #[test]
    fn test_non_square_order() {
        let order: Vec<_> = Traversal::ColumnMajorXOuter.visit(3, 2).collect();
        assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }
}
