//! Rotation and translation of polygon templates.
//!
//! An [`OrientedShape`] binds a template to a pivot and an angle. The current
//! points are always recomputed from the immutable template, never from the
//! previous frame's points, so repeated rotations cannot drift.
//!
//! # Handedness
//!
//! Screen y grows downwards, so a positive angle turns clockwise on screen:
//!
//! ```text
//! x' = x * cos(a) - y * sin(a)
//! y' = x * sin(a) + y * cos(a)
//! ```
//!
//! Trigonometry uses `micromath` (no_std) and results are rounded to the
//! nearest pixel.

use core::f32::consts::TAU;

use embedded_graphics::prelude::Point;
use heapless::Vec;

use crate::config::{FULL_CIRCLE, MAX_POLYGON_POINTS};
use crate::geometry::PolygonTemplate;

/// Transformed vertices of one shape.
pub type ShapePoints = Vec<Point, MAX_POLYGON_POINTS>;

/// Round half away from zero (`f32::round` is not available in core).
#[inline]
fn round_to_i32(v: f32) -> i32 {
    if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 }
}

/// Rotate `point` about the origin by `angle` (full-circle units).
pub fn rotate_point(
    point: Point,
    angle: i32,
) -> Point {
    let turns = angle.rem_euclid(FULL_CIRCLE);
    if turns == 0 {
        return point;
    }
    let radians = turns as f32 * (TAU / FULL_CIRCLE as f32);
    let sin = micromath::F32(radians).sin().0;
    let cos = micromath::F32(radians).cos().0;

    let x = point.x as f32;
    let y = point.y as f32;
    Point::new(round_to_i32(x * cos - y * sin), round_to_i32(x * sin + y * cos))
}

/// Rotate every template point by `angle`, then translate by `pivot`.
pub fn transform(
    template: &PolygonTemplate,
    pivot: Point,
    angle: i32,
) -> ShapePoints {
    let mut out = ShapePoints::new();
    for p in template.points() {
        // Templates are checked against MAX_POLYGON_POINTS in geometry tests
        out.push(rotate_point(p, angle) + pivot).ok();
    }
    out
}

/// A template bound to a pivot and a rotation.
#[derive(Clone, Debug)]
pub struct OrientedShape {
    template: PolygonTemplate,
    pivot: Point,
    angle: i32,
    points: ShapePoints,
}

impl OrientedShape {
    /// Bind `template` at the origin with no rotation.
    pub fn new(template: PolygonTemplate) -> Self {
        Self {
            template,
            pivot: Point::zero(),
            angle: 0,
            points: transform(&template, Point::zero(), 0),
        }
    }

    /// Move the pivot, keeping the current angle.
    pub fn move_to(
        &mut self,
        pivot: Point,
    ) {
        self.pivot = pivot;
        self.points = transform(&self.template, self.pivot, self.angle);
    }

    /// Set the absolute rotation about the pivot.
    pub fn rotate_to(
        &mut self,
        angle: i32,
    ) {
        self.angle = angle;
        self.points = transform(&self.template, self.pivot, self.angle);
    }

    #[inline]
    pub const fn pivot(&self) -> Point { self.pivot }

    #[inline]
    pub const fn angle(&self) -> i32 { self.angle }

    /// Points to rasterize for the current frame.
    #[inline]
    pub fn points(&self) -> &[Point] { &self.points }
}
