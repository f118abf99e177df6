//! Static polygon tables: hand shapes and the ring of dial ticks.
//!
//! Hand templates are relative to the pivot, pointing at 12 o'clock
//! (negative y). Tick templates are in absolute screen coordinates and are
//! never rotated. All tables are read-only for the lifetime of the program.

use embedded_graphics::prelude::Point;

/// An ordered, read-only list of polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonTemplate {
    points: &'static [(i32, i32)],
}

impl PolygonTemplate {
    pub const fn new(points: &'static [(i32, i32)]) -> Self { Self { points } }

    #[inline]
    pub const fn len(&self) -> usize { self.points.len() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Vertices in authoring order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ { self.points.iter().map(|&(x, y)| Point::new(x, y)) }
}

// =============================================================================
// Hands
// =============================================================================

/// Minute hand: a long narrow triangle with its tail below the pivot.
pub const MINUTE_HAND_POINTS: PolygonTemplate = PolygonTemplate::new(&[(-6, 12), (6, 12), (0, -62)]);

/// Hour hand: shorter and slightly narrower than the minute hand.
pub const HOUR_HAND_POINTS: PolygonTemplate = PolygonTemplate::new(&[(-5, 12), (5, 12), (0, -44)]);

// =============================================================================
// Dial Ticks
// =============================================================================

/// Number of tick marks on the 24-hour dial (one per hour).
pub const NUM_CLOCK_TICKS: usize = 24;

/// Tick marks, index = hour. Hours 0, 6, 12 and 18 are long and wide.
pub const CLOCK_TICKS: [PolygonTemplate; NUM_CLOCK_TICKS] = [
    PolygonTemplate::new(&[(70, 26), (70, 14), (74, 14), (74, 26)]), // 00
    PolygonTemplate::new(&[(88, 22), (89, 16), (91, 17), (90, 22)]), // 01
    PolygonTemplate::new(&[(103, 28), (106, 23), (108, 24), (105, 29)]), // 02
    PolygonTemplate::new(&[(117, 38), (121, 34), (122, 35), (118, 39)]), // 03
    PolygonTemplate::new(&[(127, 51), (132, 48), (133, 50), (128, 53)]), // 04
    PolygonTemplate::new(&[(134, 66), (139, 65), (140, 67), (134, 68)]), // 05
    PolygonTemplate::new(&[(130, 82), (142, 82), (142, 86), (130, 86)]), // 06
    PolygonTemplate::new(&[(134, 100), (140, 101), (139, 103), (134, 102)]), // 07
    PolygonTemplate::new(&[(128, 115), (133, 118), (132, 120), (127, 117)]), // 08
    PolygonTemplate::new(&[(118, 129), (122, 133), (121, 134), (117, 130)]), // 09
    PolygonTemplate::new(&[(105, 139), (108, 144), (106, 145), (103, 140)]), // 10
    PolygonTemplate::new(&[(90, 146), (91, 151), (89, 152), (88, 146)]), // 11
    PolygonTemplate::new(&[(74, 142), (74, 154), (70, 154), (70, 142)]), // 12
    PolygonTemplate::new(&[(56, 146), (55, 152), (53, 151), (54, 146)]), // 13
    PolygonTemplate::new(&[(41, 140), (38, 145), (36, 144), (39, 139)]), // 14
    PolygonTemplate::new(&[(27, 130), (23, 134), (22, 133), (26, 129)]), // 15
    PolygonTemplate::new(&[(17, 117), (12, 120), (11, 118), (16, 115)]), // 16
    PolygonTemplate::new(&[(10, 102), (5, 103), (4, 101), (10, 100)]), // 17
    PolygonTemplate::new(&[(14, 86), (2, 86), (2, 82), (14, 82)]), // 18
    PolygonTemplate::new(&[(10, 68), (4, 67), (5, 65), (10, 66)]), // 19
    PolygonTemplate::new(&[(16, 53), (11, 50), (12, 48), (17, 51)]), // 20
    PolygonTemplate::new(&[(26, 39), (22, 35), (23, 34), (27, 38)]), // 21
    PolygonTemplate::new(&[(39, 29), (36, 24), (38, 23), (41, 28)]), // 22
    PolygonTemplate::new(&[(54, 22), (53, 17), (55, 16), (56, 22)]), // 23
];
