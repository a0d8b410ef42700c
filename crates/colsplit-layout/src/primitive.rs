// ABOUTME: The host column-layout primitive the reconciler sizes.
// ABOUTME: Includes a span layout that places columns in normalized coordinates.

use colsplit_core::{DisplayOptions, Gap, VerticalAlignment};

/// Underlying layout primitive: turns positive weights into containers
pub trait ColumnLayout {
    /// A region the caller may place content into
    type Container;

    /// `sizes` are positive weights, one per column
    fn columns(&mut self, sizes: &[f64], display: &DisplayOptions) -> Vec<Self::Container>;
}

impl<L: ColumnLayout + ?Sized> ColumnLayout for &mut L {
    type Container = L::Container;

    fn columns(&mut self, sizes: &[f64], display: &DisplayOptions) -> Vec<Self::Container> {
        (**self).columns(sizes, display)
    }
}

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Column produced by [`SpanLayout`]
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub index: usize,
    pub rect: Rect,
    pub gap: Gap,
    pub vertical_alignment: VerticalAlignment,
    pub border: bool,
}

/// Splits the full row horizontally in proportion to the sizes
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanLayout;

impl ColumnLayout for SpanLayout {
    type Container = Column;

    fn columns(&mut self, sizes: &[f64], display: &DisplayOptions) -> Vec<Column> {
        let total: f64 = sizes.iter().sum();
        let row = Rect::full();
        let mut x = row.x;

        sizes
            .iter()
            .enumerate()
            .map(|(index, size)| {
                let width = row.width * size / total;
                let rect = Rect {
                    x,
                    y: row.y,
                    width,
                    height: row.height,
                };
                x += width;
                Column {
                    index,
                    rect,
                    gap: display.gap,
                    vertical_alignment: display.vertical_alignment,
                    border: display.border,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_sizes_give_equal_space() {
        let columns = SpanLayout.columns(&[1.0, 1.0, 1.0], &DisplayOptions::default());
        assert_eq!(columns.len(), 3);
        for column in &columns {
            assert!((column.rect.width - 1.0 / 3.0).abs() < 0.001);
        }
    }

    #[test]
    fn spans_tile_the_row() {
        let columns = SpanLayout.columns(&[3.0, 1.0], &DisplayOptions::default());
        assert!((columns[0].rect.x - 0.0).abs() < 0.001);
        assert!((columns[0].rect.width - 0.75).abs() < 0.001);
        assert!((columns[1].rect.x - columns[0].rect.right()).abs() < 0.001);
        assert!((columns[1].rect.right() - 1.0).abs() < 0.001);
    }

    #[test]
    fn display_options_pass_through() {
        let display = DisplayOptions {
            gap: Gap::Large,
            vertical_alignment: VerticalAlignment::Bottom,
            border: true,
        };
        let columns = SpanLayout.columns(&[1.0, 2.0], &display);
        assert!(columns
            .iter()
            .all(|c| c.gap == Gap::Large
                && c.vertical_alignment == VerticalAlignment::Bottom
                && c.border));
        assert_eq!(columns[1].index, 1);
    }
}
