//! Ratatui widget that paints a [`DrawList`].

use std::f64::consts::TAU;

use anima_core::{DrawList, Shape, Size};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Block, Widget,
        canvas::{self, Canvas, Painter, Shape as _},
    },
};

/// Widget painting the primitives of a [`DrawList`] with braille dots.
///
/// `size` is the logical size the list was drawn for. It is mapped onto the
/// inner area of the block, flipping y so the surface origin stays top-left.
#[derive(Debug, Clone)]
pub struct CanvasView<'a> {
    draw_list: &'a DrawList,
    size: Size,
    block: Option<Block<'a>>,
}

impl<'a> CanvasView<'a> {
    pub fn new(draw_list: &'a DrawList, size: Size) -> Self {
        Self {
            draw_list,
            size,
            block: None,
        }
    }

    /// Surround the canvas with a block.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.size.height;
        let shapes = self.draw_list.shapes();

        let mut canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.size.width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for shape in shapes {
                    ctx.draw(&Projected { shape, height });
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

/// A surface shape converted to canvas coordinates.
struct Projected<'a> {
    shape: &'a Shape,
    height: f64,
}

impl canvas::Shape for Projected<'_> {
    fn draw(&self, painter: &mut Painter) {
        match *self.shape {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => {
                canvas::Line::new(x1, self.height - y1, x2, self.height - y2, color).draw(painter);
            }
            Shape::Oval {
                x,
                y,
                width,
                height,
                color,
            } => {
                let rx = width / 2.0;
                let ry = height / 2.0;
                let cx = x + rx;
                let cy = self.height - (y + ry);
                paint_ellipse(painter, cx, cy, rx, ry, color);
            }
        }
    }
}

fn paint_ellipse(painter: &mut Painter, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
    const STEPS: usize = 64;
    for i in 0..STEPS {
        let theta = TAU * i as f64 / STEPS as f64;
        if let Some((px, py)) = painter.get_point(cx + rx * theta.cos(), cy + ry * theta.sin()) {
            painter.paint(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use anima_core::Surface;

    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_block_title_is_rendered() {
        let list = DrawList::new();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&list, Size::from_cells(28, 6))
            .block(Block::bordered().title("Animation"))
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Animation"));
    }

    #[test]
    fn test_horizontal_line_spans_width() {
        let size = Size::from_cells(40, 10);
        let mut list = DrawList::new();
        list.draw_line(0.0, size.height / 2.0, size.width, size.height / 2.0);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&list, size).render(area, &mut buf);

        let widest = (0..area.height)
            .map(|y| row_text(&buf, y).chars().filter(|c| *c != ' ').count())
            .max()
            .unwrap_or(0);
        assert!(widest >= 38, "line covered only {widest} cells");
    }

    #[test]
    fn test_oval_is_painted_near_its_center() {
        let size = Size::from_cells(20, 10);
        let mut list = DrawList::new();
        // Oval in the top-left quadrant of the surface
        list.draw_oval(20.0, 20.0, 20.0, 20.0);

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        CanvasView::new(&list, size).render(area, &mut buf);

        let painted: Vec<(u16, u16)> = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&(x, y)| buf[(x, y)].symbol() != " ")
            .collect();
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|&(x, y)| x < 10 && y < 5));
    }
}
