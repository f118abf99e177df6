//! The single frame buffer the compositor draws into.
//!
//! Row-major RGB565, one entry per pixel of the 144x168 surface (~48 KB).
//! The host blits the finished frame to its display with [`Framebuffer::blit_to`].

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::config::{SCREEN_BOUNDS, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};

pub struct Framebuffer {
    pixels: [Rgb565; SCREEN_PIXELS],
}

impl Framebuffer {
    /// A black frame.
    pub const fn new() -> Self { Self { pixels: [BLACK; SCREEN_PIXELS] } }

    #[inline]
    fn index(point: Point) -> Option<usize> {
        let in_bounds = point.x >= 0 && point.y >= 0 && point.x < SCREEN_WIDTH as i32 && point.y < SCREEN_HEIGHT as i32;
        in_bounds.then(|| point.y as usize * SCREEN_WIDTH as usize + point.x as usize)
    }

    /// Color at `point`, or `None` outside the surface.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        Self::index(point).map(|i| self.pixels[i])
    }

    /// All pixels, row-major.
    #[inline]
    pub const fn pixels(&self) -> &[Rgb565] { &self.pixels }

    /// Push the whole frame to a host display.
    pub fn blit_to<D>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.fill_contiguous(&SCREEN_BOUNDS, self.pixels.iter().copied())
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { SCREEN_BOUNDS.size }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = Self::index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}
