use crate::matrix::Element;

/// One of the four equal sub-blocks of a matrix with even extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Returns `(row_half, col_half)`: which half of each axis this quadrant
    /// occupies, 0 for the first half and 1 for the second.
    fn halves(self) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, 1),
            Quadrant::BottomLeft => (1, 0),
            Quadrant::BottomRight => (1, 1),
        }
    }
}

/// A rectangular region of some matrix buffer: extents plus offsets.
///
/// A view carries no reference to the storage it describes; it is always
/// paired with a buffer at the point of use (see [`MatRef`] and [`MatMut`]).
/// Offsets are not validated here. Every view the Strassen recursion builds
/// is derived by exact halving, so it always lands on a quadrant boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmatrixView {
    pub rows: usize,
    pub cols: usize,
    pub row_offset: usize,
    pub col_offset: usize,
}

impl SubmatrixView {
    pub fn new(rows: usize, cols: usize, row_offset: usize, col_offset: usize) -> Self {
        SubmatrixView {
            rows,
            cols,
            row_offset,
            col_offset,
        }
    }

    /// The view covering an entire `rows x cols` buffer.
    pub fn whole(rows: usize, cols: usize) -> Self {
        SubmatrixView::new(rows, cols, 0, 0)
    }

    /// Halve both extents and shift the offsets onto the requested quadrant.
    pub fn quadrant(&self, q: Quadrant) -> SubmatrixView {
        let half_rows = self.rows / 2;
        let half_cols = self.cols / 2;
        let (r, c) = q.halves();
        SubmatrixView {
            rows: half_rows,
            cols: half_cols,
            row_offset: self.row_offset + r * half_rows,
            col_offset: self.col_offset + c * half_cols,
        }
    }
}

/// Read-only pairing of a row-major buffer with a view into it.
#[derive(Debug, Clone, Copy)]
pub struct MatRef<'a> {
    data: &'a [Element],
    stride: usize,
    view: SubmatrixView,
}

impl<'a> MatRef<'a> {
    /// Pair `data` (row-major, `stride` elements per row) with `view`.
    pub fn new(data: &'a [Element], stride: usize, view: SubmatrixView) -> Self {
        debug_assert!(view.col_offset + view.cols <= stride || view.rows == 0);
        MatRef { data, stride, view }
    }

    pub fn rows(&self) -> usize {
        self.view.rows
    }

    pub fn cols(&self) -> usize {
        self.view.cols
    }

    pub fn view(&self) -> SubmatrixView {
        self.view
    }

    /// Element at (`row`, `col`) relative to the view's origin.
    pub fn get(&self, row: usize, col: usize) -> Element {
        self.data[self.index(row, col)]
    }

    /// Row `row` of the view as a contiguous slice of `cols()` elements.
    pub fn row(&self, row: usize) -> &'a [Element] {
        let start = self.index(row, 0);
        &self.data[start..start + self.view.cols]
    }

    /// The same buffer addressed through one quadrant of this view.
    pub fn quadrant(&self, q: Quadrant) -> MatRef<'a> {
        MatRef {
            data: self.data,
            stride: self.stride,
            view: self.view.quadrant(q),
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (self.view.row_offset + row) * self.stride + self.view.col_offset + col
    }
}

/// Mutable pairing of a row-major buffer with a view into it.
#[derive(Debug)]
pub struct MatMut<'a> {
    data: &'a mut [Element],
    stride: usize,
    view: SubmatrixView,
}

impl<'a> MatMut<'a> {
    /// Pair `data` (row-major, `stride` elements per row) with `view`.
    pub fn new(data: &'a mut [Element], stride: usize, view: SubmatrixView) -> Self {
        debug_assert!(view.col_offset + view.cols <= stride || view.rows == 0);
        MatMut { data, stride, view }
    }

    pub fn rows(&self) -> usize {
        self.view.rows
    }

    pub fn cols(&self) -> usize {
        self.view.cols
    }

    pub fn view(&self) -> SubmatrixView {
        self.view
    }

    pub fn get(&self, row: usize, col: usize) -> Element {
        self.data[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Element) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    pub fn row(&self, row: usize) -> &[Element] {
        let start = self.index(row, 0);
        &self.data[start..start + self.view.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Element] {
        let start = self.index(row, 0);
        let cols = self.view.cols;
        &mut self.data[start..start + cols]
    }

    /// Reborrow one quadrant of this view for writing.
    ///
    /// The quadrant borrows `self` mutably, so quadrants are written one at a
    /// time.
    pub fn quadrant_mut(&mut self, q: Quadrant) -> MatMut<'_> {
        MatMut {
            data: &mut *self.data,
            stride: self.stride,
            view: self.view.quadrant(q),
        }
    }

    /// Set every element inside the view to `value`.
    pub fn fill(&mut self, value: Element) {
        for i in 0..self.view.rows {
            self.row_mut(i).fill(value);
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (self.view.row_offset + row) * self.stride + self.view.col_offset + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_offsets() {
        let v = SubmatrixView::whole(8, 8);
        assert_eq!(v.quadrant(Quadrant::TopLeft), SubmatrixView::new(4, 4, 0, 0));
        assert_eq!(v.quadrant(Quadrant::TopRight), SubmatrixView::new(4, 4, 0, 4));
        assert_eq!(v.quadrant(Quadrant::BottomLeft), SubmatrixView::new(4, 4, 4, 0));
        assert_eq!(
            v.quadrant(Quadrant::BottomRight),
            SubmatrixView::new(4, 4, 4, 4)
        );
    }

    #[test]
    fn test_nested_quadrant_accumulates_offsets() {
        let v = SubmatrixView::whole(8, 8)
            .quadrant(Quadrant::BottomRight)
            .quadrant(Quadrant::TopRight);
        assert_eq!(v, SubmatrixView::new(2, 2, 4, 6));
    }

    #[test]
    fn test_matref_reads_through_view() {
        // 4x4 buffer holding 0..16
        let data: Vec<i64> = (0..16).collect();
        let m = MatRef::new(&data, 4, SubmatrixView::whole(4, 4));
        let br = m.quadrant(Quadrant::BottomRight);
        assert_eq!(br.rows(), 2);
        assert_eq!(br.get(0, 0), 10);
        assert_eq!(br.get(1, 1), 15);
        assert_eq!(br.row(1), &[14, 15]);
    }

    #[test]
    fn test_matmut_quadrant_writes_in_place() {
        let mut data = vec![0i64; 16];
        let mut m = MatMut::new(&mut data, 4, SubmatrixView::whole(4, 4));
        m.quadrant_mut(Quadrant::TopRight).fill(7);
        m.quadrant_mut(Quadrant::BottomLeft).set(1, 0, -3);
        assert_eq!(m.get(0, 2), 7);
        assert_eq!(m.get(3, 0), -3);
        assert_eq!(
            data,
            vec![0, 0, 7, 7, 0, 0, 7, 7, 0, 0, 0, 0, -3, 0, 0, 0]
        );
    }
}
