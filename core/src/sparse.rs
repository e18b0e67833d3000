//! Compressed sparse row matrix used for the term-frequency and tf-idf tables.
//!
//! Rows are appended whole and never resized afterwards. Within a row the
//! column indices are kept sorted so point lookups are a binary search.

#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n_cols: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f32>,
}

impl CsrMatrix {
    pub fn new(n_cols: usize) -> Self {
        Self { n_cols, row_ptr: vec![0], col_idx: Vec::new(), values: Vec::new() }
    }

    pub fn with_capacity(n_rows: usize, n_cols: usize, nnz: usize) -> Self {
        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        row_ptr.push(0);
        Self { n_cols, row_ptr, col_idx: Vec::with_capacity(nnz), values: Vec::with_capacity(nnz) }
    }

    /// Append a row from `(column, value)` pairs. Zero values are not stored;
    /// columns outside the matrix are dropped.
    pub fn push_row<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (usize, f32)>,
    {
        let n_cols = self.n_cols;
        let mut row: Vec<(usize, f32)> = entries
            .into_iter()
            .filter(|&(col, value)| col < n_cols && value != 0.0)
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row.dedup_by_key(|&mut (col, _)| col);
        for (col, value) in row {
            self.col_idx.push(col);
            self.values.push(value);
        }
        self.row_ptr.push(self.col_idx.len());
    }

    pub fn rows(&self) -> usize { self.row_ptr.len() - 1 }

    pub fn cols(&self) -> usize { self.n_cols }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize { self.values.len() }

    /// Column indices and values of one row.
    pub fn row(&self, row: usize) -> (&[usize], &[f32]) {
        if row >= self.rows() {
            return (&[], &[]);
        }
        let (lo, hi) = (self.row_ptr[row], self.row_ptr[row + 1]);
        (&self.col_idx[lo..hi], &self.values[lo..hi])
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        let (cols, values) = self.row(row);
        cols.binary_search(&col).map_or(0.0, |i| values[i])
    }

    /// Stored entries per column.
    pub fn column_counts(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.n_cols];
        for &col in &self.col_idx {
            counts[col] += 1;
        }
        counts
    }

    /// Multiply every column `c` by `factors[c]` (a right product with a diagonal matrix).
    pub fn scale_columns(&mut self, factors: &[f32]) {
        debug_assert_eq!(factors.len(), self.n_cols);
        for (value, &col) in self.values.iter_mut().zip(&self.col_idx) {
            *value *= factors[col];
        }
    }

    pub fn row_norm(&self, row: usize) -> f32 {
        let (_, values) = self.row(row);
        values.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Scale each row to unit Euclidean length. All-zero rows stay zero.
    pub fn normalize_rows_l2(&mut self) {
        for row in 0..self.rows() {
            let (lo, hi) = (self.row_ptr[row], self.row_ptr[row + 1]);
            let sum_sq: f32 = self.values[lo..hi].iter().map(|v| v * v).sum();
            if sum_sq > 0.0 {
                let inv = 1.0 / sum_sq.sqrt();
                for value in &mut self.values[lo..hi] {
                    *value *= inv;
                }
            }
        }
    }

    pub fn to_dense(&self) -> Vec<Vec<f32>> {
        (0..self.rows())
            .map(|row| {
                let mut dense = vec![0.0; self.n_cols];
                let (cols, values) = self.row(row);
                for (&col, &value) in cols.iter().zip(values) {
                    dense[col] = value;
                }
                dense
            })
            .collect()
    }
}
