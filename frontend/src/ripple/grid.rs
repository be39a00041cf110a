/// Integer position of a cell. `row` selects the vertical strip, `col` the cell inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn distance_to(&self, other: CellCoord) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Parses the `data-row` / `data-col` attribute pair rendered on every cell.
    pub fn from_attrs(row: Option<String>, col: Option<String>) -> Option<Self> {
        let row = row?.trim().parse().ok()?;
        let col = col?.trim().parse().ok()?;
        Some(Self { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Arena index, row-major. Matches the DOM order of the rendered cells.
    pub fn index_of(&self, cell: CellCoord) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    #[cfg(test)]
    pub fn coord_of(&self, index: usize) -> Option<CellCoord> {
        (index < self.len()).then(|| CellCoord::new(index / self.cols, index % self.cols))
    }

    pub fn cells(self) -> impl Iterator<Item = CellCoord> {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| CellCoord::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coord_agree() {
        let dims = GridDims::new(47, 30);
        assert_eq!(dims.len(), 1410);
        for (i, cell) in dims.cells().enumerate() {
            assert_eq!(dims.index_of(cell), Some(i));
            assert_eq!(dims.coord_of(i), Some(cell));
        }
        assert_eq!(dims.coord_of(1410), None);
    }

    #[test]
    fn out_of_bounds_cells_have_no_index() {
        let dims = GridDims::new(47, 30);
        assert_eq!(dims.index_of(CellCoord::new(47, 0)), None);
        assert_eq!(dims.index_of(CellCoord::new(0, 30)), None);
        assert_eq!(dims.index_of(CellCoord::new(46, 29)), Some(1409));
    }

    #[test]
    fn distance_is_euclidean() {
        let origin = CellCoord::new(0, 0);
        assert_eq!(origin.distance_to(CellCoord::new(3, 4)), 5.0);
        assert_eq!(CellCoord::new(3, 4).distance_to(origin), 5.0);
        assert_eq!(origin.distance_to(origin), 0.0);
    }

    #[test]
    fn attrs_parse_or_reject() {
        assert_eq!(
            CellCoord::from_attrs(Some("12".into()), Some(" 7".into())),
            Some(CellCoord::new(12, 7))
        );
        assert_eq!(CellCoord::from_attrs(Some("x".into()), Some("1".into())), None);
        assert_eq!(CellCoord::from_attrs(None, Some("1".into())), None);
        assert_eq!(CellCoord::from_attrs(Some("-1".into()), Some("1".into())), None);
    }
}
