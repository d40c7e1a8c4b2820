//! Percentage resolution and pixel placement.
//!
//! Pure functions over rows of [`Cell`]s: nothing here touches widgets or the
//! native surface.

use tracing::warn;

use crate::geometry::{Bounds, Size};

use super::cell::{Cell, CellContent, Percentage};

/// A cell with its resolved share and pixel bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub content: CellContent,
    /// Effective percentage of the usable width.
    pub percentage: f32,
    pub bounds: Bounds,
}

/// Effective percentages of a row's cells, in order.
///
/// Explicit percentages are used as given. The remainder `100 - sum` is split
/// evenly among the `Auto` cells, spacers included. If the explicit shares
/// exceed 100 the remainder is clamped to 0.
pub fn resolve_row(row: &[Cell]) -> Vec<f32> {
    let specified: f32 = row.iter().filter_map(|c| c.percentage.fixed()).sum();
    let auto = row.iter().filter(|c| c.percentage.is_auto()).count();

    if specified > 100.0 {
        warn!(specified, "explicit row percentages exceed 100; auto cells get 0");
    }
    let share = if auto > 0 {
        (100.0 - specified).max(0.0) / auto as f32
    } else {
        0.0
    };

    row.iter()
        .map(|c| match c.percentage {
            Percentage::Fixed(p) => p,
            Percentage::Auto => share,
        })
        .collect()
}

/// Screen area left after padding on both sides.
pub fn usable_size(screen: Size, padding: f32) -> Size {
    Size::new(screen.width - padding * 2.0, screen.height - padding * 2.0)
}

/// Height of every row; 0 when there are no rows.
pub fn row_height(screen: Size, padding: f32, rows: usize) -> f32 {
    if rows == 0 {
        return 0.0;
    }
    usable_size(screen, padding).height / rows as f32
}

/// Place every cell of `rows` on the screen.
///
/// Rows stack from `y = 2 * padding`; cells run left to right from
/// `x = padding`. Spacers are 0 px wide.
pub fn place_rows(rows: &[Vec<Cell>], screen: Size, padding: f32) -> Vec<Placement> {
    let usable = usable_size(screen, padding);
    let height = row_height(screen, padding, rows.len());
    let mut placements = Vec::with_capacity(rows.iter().map(Vec::len).sum());

    let mut y = padding * 2.0;
    for row in rows {
        let mut x = padding;
        for (cell, percentage) in row.iter().zip(resolve_row(row)) {
            let width = if cell.is_spacer() {
                0.0
            } else {
                usable.width * percentage / 100.0
            };
            placements.push(Placement {
                content: cell.content,
                percentage,
                bounds: Bounds::new(x, y, width, height),
            });
            x += width;
        }
        y += height;
    }
    placements
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetId;
    use slotmap::SlotMap;

    const SCREEN: Size = Size::new(480.0, 480.0);

    fn widgets(n: usize) -> Vec<Cell> {
        let mut sm: SlotMap<WidgetId, ()> = SlotMap::with_key();
        (0..n).map(|_| Cell::widget(sm.insert(()))).collect()
    }

    fn fixed(mut cell: Cell, pct: f32) -> Cell {
        cell.percentage = Percentage::Fixed(pct);
        cell
    }

    #[test]
    fn auto_cells_split_evenly() {
        for n in 1..=5 {
            let pcts = resolve_row(&widgets(n));
            assert_eq!(pcts.len(), n);
            for p in &pcts {
                assert!((p - 100.0 / n as f32).abs() < 1e-4);
            }
            assert!((pcts.iter().sum::<f32>() - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn explicit_and_auto_mix() {
        let cells = widgets(3);
        let row = vec![fixed(cells[0], 20.0), fixed(cells[1], 30.0), cells[2]];
        assert_eq!(resolve_row(&row), vec![20.0, 30.0, 50.0]);
    }

    #[test]
    fn explicit_zero_is_respected() {
        let cells = widgets(2);
        let row = vec![fixed(cells[0], 0.0), cells[1]];
        assert_eq!(resolve_row(&row), vec![0.0, 100.0]);
    }

    #[test]
    fn overflow_clamps_remainder() {
        let cells = widgets(3);
        let row = vec![fixed(cells[0], 80.0), fixed(cells[1], 40.0), cells[2]];
        assert_eq!(resolve_row(&row), vec![80.0, 40.0, 0.0]);
    }

    #[test]
    fn spacer_takes_a_share_but_no_pixels() {
        let cells = widgets(2);
        let row = vec![cells[0], Cell::spacer(), cells[1]];
        let placed = place_rows(&[row], SCREEN, 4.0);

        let third = 472.0 / 3.0;
        assert!((placed[0].bounds.width - third).abs() < 1e-3);
        assert_eq!(placed[1].bounds.width, 0.0);
        assert!((placed[1].percentage - 100.0 / 3.0).abs() < 1e-4);
        // The widget after the spacer starts right where the first one ends.
        assert!((placed[2].bounds.x - (4.0 + third)).abs() < 1e-3);
    }

    #[test]
    fn row_height_divides_usable_height() {
        assert_eq!(row_height(SCREEN, 4.0, 2), 236.0);
        assert_eq!(row_height(SCREEN, 4.0, 0), 0.0);
    }

    #[test]
    fn rows_stack_from_double_padding() {
        let cells = widgets(2);
        let placed = place_rows(&[vec![cells[0]], vec![cells[1]]], SCREEN, 4.0);
        assert_eq!(placed[0].bounds, Bounds::new(4.0, 8.0, 472.0, 236.0));
        assert_eq!(placed[1].bounds, Bounds::new(4.0, 244.0, 472.0, 236.0));
    }

    #[test]
    fn no_rows_no_placements() {
        assert!(place_rows(&[], SCREEN, 4.0).is_empty());
    }
}
