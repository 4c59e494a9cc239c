//! Grid rendering with half-block glyphs.
//!
//! Each terminal cell shows two grid cells stacked vertically: the upper one
//! as the foreground of `▀` and the lower one as the background.

use percolation_core::{CellState, Grid, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const UPPER_HALF_BLOCK: char = '▀';

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Read-only view of a percolation grid
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Terminal columns and rows needed to show the whole grid
    pub fn size(grid: &Grid) -> (u16, u16) {
        let size = u16::try_from(grid.size()).unwrap_or(u16::MAX);
        (size, size.div_ceil(2))
    }
}

impl Widget for GridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<&[CellState]> = self.grid.rows().collect();

        for (y, pair) in rows.chunks(2).enumerate().take(usize::from(area.height)) {
            let top = pair[0];
            let bottom = pair.get(1).copied();

            for (x, state) in top.iter().enumerate().take(usize::from(area.width)) {
                let below = bottom.map_or(Color::Reset, |row| color(row[x].color()));
                let position = (area.x + x as u16, area.y + y as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char(UPPER_HALF_BLOCK)
                        .set_fg(color(state.color()))
                        .set_bg(below);
                }
            }
        }
    }
}
