//! The three drawable layers of the watch face.
//!
//! Each variant of [`Drawable`] owns the state it draws from and implements one
//! draw operation. Layers draw in their own coordinate space: `(0, 0)` is the
//! layer's top-left corner and the compositor takes care of translation and
//! clipping to the layer frame.
//!
//! | Layer | Time dependency | Content |
//! |-------|-----------------|---------|
//! | Background | none | black fill, 24 white tick marks |
//! | Hands | hour, minute | minute hand, hour hand, hub dot |
//! | Date | day of month | numeric label, white on black |
//!
//! The compositor paints them in the order Background, Date, Hands, so the
//! hands stay visible where they cross the date label.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_9X18_BOLD;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
// The local `Drawable` enum shadows the prelude trait
use embedded_graphics::Drawable as _;

use crate::angle::HandAngles;
use crate::colors::{BLACK, WHITE};
use crate::config::{DATE_LABEL, DIAL_CENTER, HUB_SIZE};
use crate::date::DateBuffer;
use crate::geometry::{CLOCK_TICKS, HOUR_HAND_POINTS, MINUTE_HAND_POINTS, NUM_CLOCK_TICKS};
use crate::raster::{fill_polygon, outline_polygon};
use crate::time::TimeSample;
use crate::transform::OrientedShape;

const BLACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Bold 9x18 font: two digits fill the 18 px wide label exactly.
const DATE_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X18_BOLD, WHITE);

/// Which layer a [`Drawable`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    Background,
    Hands,
    Date,
}

// =============================================================================
// Background
// =============================================================================

/// Static dial: background fill plus the ring of tick marks.
#[derive(Clone, Debug)]
pub struct DialLayer {
    frame: Rectangle,
    ticks: [OrientedShape; NUM_CLOCK_TICKS],
}

impl DialLayer {
    /// Ticks are centered on `center`, given in layer coordinates.
    pub fn new(
        frame: Rectangle,
        center: Point,
    ) -> Self {
        // Tick tables are authored around DIAL_CENTER; shift them, never rotate
        let offset = center - DIAL_CENTER;
        Self {
            frame,
            ticks: core::array::from_fn(|i| {
                let mut tick = OrientedShape::new(CLOCK_TICKS[i]);
                tick.move_to(offset);
                tick
            }),
        }
    }

    fn draw<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_solid(&local_bounds(self.frame), BLACK).ok();

        for tick in &self.ticks {
            fill_polygon(target, tick.points(), WHITE);
        }
    }
}

// =============================================================================
// Hands
// =============================================================================

/// Minute and hour hands rotating about the dial center.
#[derive(Clone, Debug)]
pub struct HandsLayer {
    frame: Rectangle,
    minute: OrientedShape,
    hour: OrientedShape,
}

impl HandsLayer {
    /// Hands pivot on `center`, given in layer coordinates.
    pub fn new(
        frame: Rectangle,
        center: Point,
    ) -> Self {
        let mut minute = OrientedShape::new(MINUTE_HAND_POINTS);
        let mut hour = OrientedShape::new(HOUR_HAND_POINTS);
        minute.move_to(center);
        hour.move_to(center);
        Self { frame, minute, hour }
    }

    #[inline]
    pub const fn minute(&self) -> &OrientedShape { &self.minute }

    #[inline]
    pub const fn hour(&self) -> &OrientedShape { &self.hour }

    /// Hub dot: a `HUB_SIZE` square centered on the layer.
    pub const fn hub(&self) -> Rectangle {
        let w = self.frame.size.width as i32;
        let h = self.frame.size.height as i32;
        Rectangle::new(Point::new(w / 2 - 1, h / 2 - 1), Size::new(HUB_SIZE, HUB_SIZE))
    }

    fn draw<D>(
        &mut self,
        target: &mut D,
        time: &TimeSample,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let angles = HandAngles::from_time(time);

        // Minute hand first so the hour hand sits on top of it
        self.minute.rotate_to(angles.minute);
        fill_polygon(target, self.minute.points(), WHITE);
        outline_polygon(target, self.minute.points(), BLACK);

        self.hour.rotate_to(angles.hour);
        fill_polygon(target, self.hour.points(), WHITE);
        outline_polygon(target, self.hour.points(), BLACK);

        self.hub().into_styled(BLACK_FILL).draw(target).ok();
    }
}

// =============================================================================
// Date
// =============================================================================

/// Day-of-month readout in a fixed label rectangle.
#[derive(Clone, Debug)]
pub struct DateLayer {
    frame: Rectangle,
    label: Rectangle,
    text: DateBuffer,
}

impl DateLayer {
    pub const fn new(frame: Rectangle) -> Self {
        Self {
            frame,
            label: DATE_LABEL,
            text: DateBuffer::new(),
        }
    }

    /// Label sub-region, in date layer coordinates.
    #[inline]
    pub const fn label(&self) -> Rectangle { self.label }

    /// Text currently shown.
    #[inline]
    pub fn text(&self) -> &str { self.text.as_str() }

    fn draw<D>(
        &mut self,
        target: &mut D,
        time: &TimeSample,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        self.text.set_day(time.day());

        let mut label = target.clipped(&self.label);
        label.fill_solid(&self.label, BLACK).ok();
        Text::with_baseline(self.text.as_str(), self.label.top_left, DATE_TEXT_STYLE, Baseline::Top)
            .draw(&mut label)
            .ok();
    }
}

// =============================================================================
// Drawable
// =============================================================================

/// One layer of the face, dispatched by the compositor.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Drawable {
    Background(DialLayer),
    Hands(HandsLayer),
    DateText(DateLayer),
}

impl Drawable {
    pub const fn kind(&self) -> LayerKind {
        match self {
            Self::Background(_) => LayerKind::Background,
            Self::Hands(_) => LayerKind::Hands,
            Self::DateText(_) => LayerKind::Date,
        }
    }

    /// Frame in parent (root window) coordinates.
    pub const fn frame(&self) -> Rectangle {
        match self {
            Self::Background(layer) => layer.frame,
            Self::Hands(layer) => layer.frame,
            Self::DateText(layer) => layer.frame,
        }
    }

    /// Draw this layer into `target`, which is already in layer coordinates.
    pub fn draw<D>(
        &mut self,
        target: &mut D,
        time: &TimeSample,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Background(layer) => layer.draw(target),
            Self::Hands(layer) => layer.draw(target, time),
            Self::DateText(layer) => layer.draw(target, time),
        }
    }
}

/// `frame` moved to the origin.
#[inline]
const fn local_bounds(frame: Rectangle) -> Rectangle { Rectangle::new(Point::zero(), frame.size) }
