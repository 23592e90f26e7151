use crate::geometry::Lattice;

use super::{DOWN, UP};

/// Read-only copy of the spin configuration laid out for drawing.
///
/// Outer index is the column, inner index the row, so
/// `columns()[col][row]` is the cell at canvas position `(col, row)`.
/// `true` marks a spin-up ("filled") site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    columns: Vec<Vec<bool>>,
}

impl Snapshot {
    pub fn capture(lattice: &Lattice, spins: &[i8]) -> Self {
        let size = lattice.size;
        let columns = (0..size)
            .map(|col| {
                (0..size)
                    .map(|row| spins[lattice.index(row, col)] == UP)
                    .collect()
            })
            .collect();
        Self { columns }
    }

    /// Side length L.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Number of cells (L²).
    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Vec<bool>] {
        &self.columns
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.columns[col][row]
    }

    pub fn filled_count(&self) -> usize {
        self.columns.iter().flatten().filter(|&&up| up).count()
    }

    /// Same layout with ±1 entries.
    pub fn to_spins(&self) -> Vec<Vec<i8>> {
        self.columns
            .iter()
            .map(|col| col.iter().map(|&up| if up { UP } else { DOWN }).collect())
            .collect()
    }
}
