//! Polygon rasterization on any `DrawTarget<Color = Rgb565>`.
//!
//! embedded-graphics has no filled polygon primitive, so filling is a plain
//! scanline walk: for each row, collect the x crossings of every edge, sort
//! them and fill between pairs. Edges are half-open in y (top row included,
//! bottom row excluded) so a vertex shared by two edges is counted once.
//! The outline is drawn with 1-px [`Line`]s, closing edge included.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use heapless::Vec;

use crate::config::MAX_POLYGON_POINTS;

/// Fill the interior of a closed polygon.
pub fn fill_polygon<D>(
    target: &mut D,
    points: &[Point],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if points.len() < 3 {
        return;
    }

    let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

    for y in min_y..=max_y {
        let mut crossings: Vec<i32, MAX_POLYGON_POINTS> = Vec::new();

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if a.y == b.y {
                continue;
            }
            let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
            if y < top.y || y >= bottom.y {
                continue;
            }
            let x = top.x + (y - top.y) * (bottom.x - top.x) / (bottom.y - top.y);
            crossings.push(x).ok();
        }

        crossings.sort_unstable();

        for span in crossings.chunks_exact(2) {
            let width = (span[1] - span[0] + 1) as u32;
            target
                .fill_solid(&Rectangle::new(Point::new(span[0], y), Size::new(width, 1)), color)
                .ok();
        }
    }
}

/// Draw a 1-px closed outline through `points`.
pub fn outline_polygon<D>(
    target: &mut D,
    points: &[Point],
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if points.len() < 2 {
        return;
    }

    let stroke = PrimitiveStyle::with_stroke(color, 1);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        Line::new(a, b).into_styled(stroke).draw(target).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::framebuffer::Framebuffer;

    const SQUARE: [Point; 4] = [Point::new(10, 10), Point::new(20, 10), Point::new(20, 20), Point::new(10, 20)];

    fn white_count(fb: &Framebuffer) -> usize { fb.pixels().iter().filter(|&&c| c == WHITE).count() }

    #[test]
    fn test_fill_square_interior() {
        let mut fb = Framebuffer::new();
        fill_polygon(&mut fb, &SQUARE, WHITE);

        assert_eq!(fb.pixel(Point::new(15, 15)), Some(WHITE), "center is filled");
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(WHITE), "top-left corner row is included");
        assert_eq!(fb.pixel(Point::new(9, 15)), Some(BLACK), "left of the square stays clear");
        assert_eq!(fb.pixel(Point::new(21, 15)), Some(BLACK), "right of the square stays clear");
        // Rows 10..20 (bottom row excluded), columns 10..=20
        assert_eq!(white_count(&fb), 10 * 11);
    }

    #[test]
    fn test_outline_closes_polygon() {
        let mut fb = Framebuffer::new();
        outline_polygon(&mut fb, &SQUARE, WHITE);

        assert_eq!(fb.pixel(Point::new(15, 10)), Some(WHITE), "top edge");
        assert_eq!(fb.pixel(Point::new(20, 15)), Some(WHITE), "right edge");
        assert_eq!(fb.pixel(Point::new(15, 20)), Some(WHITE), "bottom edge");
        assert_eq!(fb.pixel(Point::new(10, 15)), Some(WHITE), "closing edge back to the first point");
        assert_eq!(fb.pixel(Point::new(15, 15)), Some(BLACK), "outline leaves the interior alone");
    }

    #[test]
    fn test_fill_triangle_tip() {
        let triangle = [Point::new(30, 40), Point::new(50, 40), Point::new(40, 10)];
        let mut fb = Framebuffer::new();
        fill_polygon(&mut fb, &triangle, WHITE);

        assert_eq!(fb.pixel(Point::new(40, 10)), Some(WHITE), "tip row is filled");
        assert_eq!(fb.pixel(Point::new(40, 30)), Some(WHITE), "body is filled");
        assert_eq!(fb.pixel(Point::new(31, 15)), Some(BLACK), "outside the slanted edge stays clear");
    }

    #[test]
    fn test_degenerate_input_draws_nothing() {
        let mut fb = Framebuffer::new();
        fill_polygon(&mut fb, &SQUARE[..2], WHITE);
        outline_polygon(&mut fb, &SQUARE[..1], WHITE);
        assert_eq!(white_count(&fb), 0);
    }

    #[test]
    fn test_fill_clips_off_screen() {
        let off_screen = [Point::new(-20, -20), Point::new(5, -20), Point::new(5, 5), Point::new(-20, 5)];
        let mut fb = Framebuffer::new();
        fill_polygon(&mut fb, &off_screen, WHITE);
        // Only columns 0..=5 of rows 0..5 land on screen
        assert_eq!(white_count(&fb), 6 * 5);
    }
}
