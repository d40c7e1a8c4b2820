//! Layout cells: one slot in a row.

use crate::widget::WidgetId;

/// What a cell holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CellContent {
    Widget(WidgetId),
    /// An empty slot. It takes part in the even split but is 0 px wide.
    Spacer,
}

/// The width share of a cell, in percent of the usable screen width.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Percentage {
    /// Split whatever the explicit cells leave over evenly.
    #[default]
    Auto,
    Fixed(f32),
}

impl Percentage {
    pub fn fixed(self) -> Option<f32> {
        match self {
            Percentage::Fixed(p) => Some(p),
            Percentage::Auto => None,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Percentage::Auto)
    }
}

impl From<f32> for Percentage {
    fn from(value: f32) -> Self {
        Percentage::Fixed(value)
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Percentage::Fixed(value as f32)
    }
}

impl From<Option<f32>> for Percentage {
    fn from(value: Option<f32>) -> Self {
        value.map_or(Percentage::Auto, Percentage::Fixed)
    }
}

/// A `{content, percentage}` slot in a row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub percentage: Percentage,
}

impl Cell {
    pub fn widget(id: WidgetId) -> Self {
        Self {
            content: CellContent::Widget(id),
            percentage: Percentage::Auto,
        }
    }

    pub fn spacer() -> Self {
        Self {
            content: CellContent::Spacer,
            percentage: Percentage::Auto,
        }
    }

    /// The widget this cell holds, if it is not a spacer.
    pub fn widget_id(&self) -> Option<WidgetId> {
        match self.content {
            CellContent::Widget(id) => Some(id),
            CellContent::Spacer => None,
        }
    }

    pub fn is_spacer(&self) -> bool {
        self.content == CellContent::Spacer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_conversions() {
        assert_eq!(Percentage::from(25.0_f32), Percentage::Fixed(25.0));
        assert_eq!(Percentage::from(50.0), Percentage::Fixed(50.0));
        assert_eq!(Percentage::from(None::<f32>), Percentage::Auto);
        assert_eq!(Percentage::from(Some(10.0_f32)).fixed(), Some(10.0));
    }

    #[test]
    fn zero_is_an_explicit_share() {
        let p = Percentage::from(0.0_f32);
        assert!(!p.is_auto());
        assert_eq!(p.fixed(), Some(0.0));
    }

    #[test]
    fn spacer_cell() {
        let cell = Cell::spacer();
        assert!(cell.is_spacer());
        assert_eq!(cell.widget_id(), None);
        assert!(cell.percentage.is_auto());
    }
}
