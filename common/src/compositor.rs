//! Layer tree, dirty tracking and redraw order.
//!
//! The tree is fixed at construction and never changes:
//!
//! ```text
//! root window
//! ├── background   (dial + ticks)
//! ├── date
//! │   └── numeric label
//! └── hands        (minute, hour, hub)
//! ```
//!
//! # Redraw Strategy
//!
//! The face has no partial updates. A tick marks the whole tree dirty and the
//! next redraw repaints every layer, bottom to top, from one clock sample:
//!
//! | Step | Layer | Reads |
//! |------|-------|-------|
//! | 1 | Background | nothing |
//! | 2 | Date | day of month |
//! | 3 | Hands | hour, minute |
//!
//! Hands are topmost: where they cross the date label they cover it.
//!
//! A redraw on a clean tree draws nothing, so one tick yields exactly one frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::trace;

use crate::config::LAYER_COUNT;
use crate::layers::{DateLayer, DialLayer, Drawable, HandsLayer, LayerKind};
use crate::time::Clock;

/// Layers drawn by one redraw, in draw order.
pub type DrawnLayers = Vec<LayerKind, LAYER_COUNT>;

/// Redraw counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Completed redraws.
    pub frames: u32,
    pub background_draws: u32,
    pub hands_draws: u32,
    pub date_draws: u32,
    /// Times the tree was marked dirty.
    pub invalidations: u32,
}

impl RenderStats {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            background_draws: 0,
            hands_draws: 0,
            date_draws: 0,
            invalidations: 0,
        }
    }

    const fn record(
        &mut self,
        kind: LayerKind,
    ) {
        match kind {
            LayerKind::Background => self.background_draws += 1,
            LayerKind::Hands => self.hands_draws += 1,
            LayerKind::Date => self.date_draws += 1,
        }
    }
}

/// Owns every layer and composites them into one target.
pub struct Compositor {
    root: Rectangle,
    layers: [Drawable; LAYER_COUNT],
    dirty: bool,
    stats: RenderStats,
}

impl Compositor {
    /// Build the layer tree inside `root`, the window frame in target coordinates.
    ///
    /// Starts dirty so the first redraw paints a full frame.
    pub fn new(root: Rectangle) -> Self {
        let bounds = Rectangle::new(Point::zero(), root.size);
        let center = Point::new(bounds.size.width as i32 / 2, bounds.size.height as i32 / 2);

        Self {
            root,
            layers: [
                Drawable::Background(DialLayer::new(bounds, center)),
                Drawable::DateText(DateLayer::new(bounds)),
                Drawable::Hands(HandsLayer::new(bounds, center)),
            ],
            dirty: true,
            stats: RenderStats::new(),
        }
    }

    /// Invalidate the whole tree.
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
        self.stats.invalidations += 1;
    }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub const fn root(&self) -> Rectangle { self.root }

    /// Layers in draw order.
    #[inline]
    pub const fn layers(&self) -> &[Drawable] { &self.layers }

    #[inline]
    pub const fn stats(&self) -> RenderStats { self.stats }

    /// Repaint every layer if the tree is dirty.
    ///
    /// Reads `clock` once and hands the same sample to every layer, so the
    /// hands and the date always agree within a frame.
    pub fn redraw<D, C>(
        &mut self,
        target: &mut D,
        clock: &C,
    ) -> DrawnLayers
    where
        D: DrawTarget<Color = Rgb565>,
        C: Clock + ?Sized,
    {
        let mut drawn = DrawnLayers::new();
        if !self.dirty {
            return drawn;
        }

        let time = clock.now();
        trace!("redraw {:02}:{:02} day {}", time.hour(), time.minute(), time.day());

        for layer in &mut self.layers {
            let frame = layer.frame();
            let mut window = target.translated(self.root.top_left + frame.top_left);
            let mut surface = window.clipped(&Rectangle::new(Point::zero(), frame.size));
            layer.draw(&mut surface, &time);

            self.stats.record(layer.kind());
            drawn.push(layer.kind()).ok();
        }

        self.dirty = false;
        self.stats.frames += 1;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::{DATE_LABEL, DIAL_CENTER, SCREEN_BOUNDS};
    use crate::framebuffer::Framebuffer;
    use crate::testing::{FixedClock, SteppingClock};

    const ALL_LAYERS: [LayerKind; 3] = [LayerKind::Background, LayerKind::Date, LayerKind::Hands];

    // -------------------------------------------------------------------------
    // Tree Construction
    // -------------------------------------------------------------------------

    #[test]
    fn test_layer_tree_is_fixed() {
        let compositor = Compositor::new(SCREEN_BOUNDS);
        let kinds: std::vec::Vec<LayerKind> = compositor.layers().iter().map(Drawable::kind).collect();
        assert_eq!(kinds, ALL_LAYERS, "background, date, hands under the root window");
        assert!(compositor.layers().iter().all(|l| l.frame() == SCREEN_BOUNDS));
        assert_eq!(compositor.root(), SCREEN_BOUNDS);
    }

    #[test]
    fn test_hands_pivot_on_dial_center() {
        let compositor = Compositor::new(SCREEN_BOUNDS);
        let Drawable::Hands(hands) = &compositor.layers()[2] else {
            panic!("third layer should be the hands");
        };
        assert_eq!(hands.minute().pivot(), DIAL_CENTER);
        assert_eq!(hands.hour().pivot(), DIAL_CENTER);
    }

    // -------------------------------------------------------------------------
    // Dirty Tracking
    // -------------------------------------------------------------------------

    #[test]
    fn test_starts_dirty() {
        assert!(Compositor::new(SCREEN_BOUNDS).is_dirty(), "first frame must be drawn");
    }

    #[test]
    fn test_redraw_order() {
        let mut compositor = Compositor::new(SCREEN_BOUNDS);
        let mut fb = Framebuffer::new();
        let drawn = compositor.redraw(&mut fb, &FixedClock::at(6, 30, 7));
        assert_eq!(drawn.as_slice(), ALL_LAYERS, "background, then date, then hands");
        assert!(!compositor.is_dirty(), "redraw clears the dirty flag");
    }

    #[test]
    fn test_clean_tree_draws_nothing() {
        let mut compositor = Compositor::new(SCREEN_BOUNDS);
        let mut fb = Framebuffer::new();
        let clock = FixedClock::at(6, 30, 7);
        compositor.redraw(&mut fb, &clock);

        let drawn = compositor.redraw(&mut fb, &clock);
        assert!(drawn.is_empty(), "no redraw without a tick");
        assert_eq!(compositor.stats().frames, 1);
    }

    #[test]
    fn test_one_frame_per_invalidation() {
        let mut compositor = Compositor::new(SCREEN_BOUNDS);
        let mut fb = Framebuffer::new();
        let clock = FixedClock::at(23, 59, 31);
        compositor.redraw(&mut fb, &clock);

        for _ in 0..5 {
            compositor.mark_dirty();
            // Host may call redraw several times between ticks
            compositor.redraw(&mut fb, &clock);
            compositor.redraw(&mut fb, &clock);
        }

        let stats = compositor.stats();
        assert_eq!(stats.frames, 6);
        assert_eq!(stats.invalidations, 5);
        assert_eq!(stats.background_draws, 6, "background once per frame");
        assert_eq!(stats.hands_draws, 6, "hands once per frame");
        assert_eq!(stats.date_draws, 6, "date once per frame");
    }

    #[test]
    fn test_clock_read_once_per_redraw() {
        let mut compositor = Compositor::new(SCREEN_BOUNDS);
        let mut fb = Framebuffer::new();
        let clock = SteppingClock::new();

        compositor.redraw(&mut fb, &clock);
        assert_eq!(clock.reads(), 1, "one sample shared by all layers");

        compositor.redraw(&mut fb, &clock);
        assert_eq!(clock.reads(), 1, "clean tree does not read the clock");
    }

    // -------------------------------------------------------------------------
    // Composited Frame
    // -------------------------------------------------------------------------

    #[test]
    fn test_full_frame_at_half_past_six() {
        let mut compositor = Compositor::new(SCREEN_BOUNDS);
        let mut fb = Framebuffer::new();
        fb.clear(Rgb565::RED).ok();
        compositor.redraw(&mut fb, &FixedClock::at(6, 30, 7));

        assert!(fb.pixels().iter().all(|&c| c == BLACK || c == WHITE), "face is strictly two-tone");
        assert_eq!(fb.pixel(DIAL_CENTER), Some(BLACK), "hub masks the pivot");
        // Minute hand points straight down at :30
        assert_eq!(fb.pixel(DIAL_CENTER + Point::new(0, 45)), Some(WHITE), "minute hand below the hub");
        // Nothing above the hub at 06:30
        assert_eq!(fb.pixel(DIAL_CENTER + Point::new(0, -30)), Some(BLACK), "no hand at 12 o'clock");
        assert_eq!(fb.pixel(Point::new(72, 20)), Some(WHITE), "00 tick");
        assert!(
            DATE_LABEL.points().any(|p| fb.pixel(p) == Some(WHITE)),
            "date digit rendered in the label"
        );
    }

    #[test]
    fn test_hands_cover_date_label() {
        let clock = FixedClock::at(10, 15, 1);
        // On the minute hand axis at :15, inside the label but clear of the digit
        let on_hand = Point::new(120, 84);
        assert!(DATE_LABEL.contains(on_hand));

        let mut hands_only = Framebuffer::new();
        let mut layer = Drawable::Hands(HandsLayer::new(SCREEN_BOUNDS, DIAL_CENTER));
        layer.draw(&mut hands_only, &clock.0);
        assert_eq!(hands_only.pixel(on_hand), Some(WHITE), "minute hand crosses the label");

        let mut fb = Framebuffer::new();
        Compositor::new(SCREEN_BOUNDS).redraw(&mut fb, &clock);
        assert_eq!(fb.pixel(on_hand), Some(WHITE), "date label does not erase the hand");
    }

    #[test]
    fn test_same_time_same_frame() {
        let clock = FixedClock::at(17, 42, 19);

        let mut a = Framebuffer::new();
        let mut first = Compositor::new(SCREEN_BOUNDS);
        first.redraw(&mut a, &clock);

        // A compositor that has already drawn other times converges to the same frame
        let mut b = Framebuffer::new();
        let mut second = Compositor::new(SCREEN_BOUNDS);
        second.redraw(&mut b, &FixedClock::at(3, 3, 3));
        second.mark_dirty();
        second.redraw(&mut b, &clock);

        assert_eq!(a.pixels(), b.pixels(), "frame is a pure function of the time");
    }
}
