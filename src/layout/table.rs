//! The layout table: committed rows plus the row being accumulated.

use crate::widget::WidgetId;

use super::cell::{Cell, Percentage};

/// Rows of cells, top to bottom.
///
/// New cells go to the pending row. [`commit`](Self::commit) moves a
/// non-empty pending row to the end of the committed rows; committed rows are
/// never reopened. Only committed rows count toward the row height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutTable {
    rows: Vec<Vec<Cell>>,
    pending: Vec<Cell>,
}

impl LayoutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell to the pending row.
    pub fn push(&mut self, cell: Cell) {
        self.pending.push(cell);
    }

    /// Commit the pending row. Returns `false` (and does nothing) if it is
    /// empty.
    pub fn commit(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let row = std::mem::take(&mut self.pending);
        self.rows.push(row);
        true
    }

    /// Assign percentages, in order, to the pending row or, when it is
    /// empty, the last committed row. Cells past the end of `percentages`
    /// keep theirs; extra percentages are ignored.
    ///
    /// Returns `false` when there is no row at all.
    pub fn set_percentages<I>(&mut self, percentages: I) -> bool
    where
        I: IntoIterator<Item = Percentage>,
    {
        let row = if !self.pending.is_empty() {
            &mut self.pending
        } else if let Some(last) = self.rows.last_mut() {
            last
        } else {
            return false;
        };
        for (cell, pct) in row.iter_mut().zip(percentages) {
            cell.percentage = pct;
        }
        true
    }

    /// Drop the cell holding `id`, and its row if the row becomes empty.
    /// Returns whether a cell was found.
    pub fn remove_widget(&mut self, id: WidgetId) -> bool {
        if let Some(pos) = self.pending.iter().position(|c| c.widget_id() == Some(id)) {
            self.pending.remove(pos);
            return true;
        }
        for (r, row) in self.rows.iter_mut().enumerate() {
            if let Some(pos) = row.iter().position(|c| c.widget_id() == Some(id)) {
                row.remove(pos);
                if row.is_empty() {
                    self.rows.remove(r);
                }
                return true;
            }
        }
        false
    }

    /// Reset every cell to an even split, discarding explicit percentages.
    pub fn equalize(&mut self) {
        for cell in self.rows.iter_mut().flatten().chain(self.pending.iter_mut()) {
            cell.percentage = Percentage::Auto;
        }
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.rows
            .iter()
            .flatten()
            .chain(self.pending.iter())
            .any(|c| c.widget_id() == Some(id))
    }

    /// Committed rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn pending(&self) -> &[Cell] {
        &self.pending
    }

    /// Number of committed rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
