// SPDX-License-Identifier: MPL-2.0
//! Circular angle picker.
//!
//! [`AngleDial`] is the pointer-to-angle state: it turns control-local pointer
//! coordinates into an angle and remembers the last one. It knows nothing
//! about images or the editor; the editor reads [`AngleDial::value`] when the
//! user asks for a rotation. Drawing and event capture live in [`renderer`].
//!
//! Coordinates use the screen convention (y grows downward). The raw pointer
//! angle is measured clockwise from the positive x axis, and the reported
//! value is its complement, so pointing straight up reads 90 and turning the
//! dial counter-clockwise increases the value.

pub mod renderer;

pub use renderer::DialRenderer;

use crate::domain::editing::DialAngle;
use iced::Point;

/// Pointer events published by the dial canvas, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    PointerDown { x: f32, y: f32 },
    PointerDragged { x: f32, y: f32 },
}

/// Pointer-to-angle state of the circular dial.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleDial {
    radius: f32,
    pointer_angle: DialAngle,
    value: DialAngle,
    pointer: Option<Point>,
}

impl AngleDial {
    /// Creates a dial whose bounding box is `size` x `size`.
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            radius: size.max(0.0) / 2.0,
            pointer_angle: DialAngle::ZERO,
            value: DialAngle::ZERO,
            pointer: None,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PointerDown { x, y } => self.on_pointer_down(x, y),
            Message::PointerDragged { x, y } => self.on_pointer_drag(x, y),
        }
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.update_from_point(x, y);
    }

    pub fn on_pointer_drag(&mut self, x: f32, y: f32) {
        self.update_from_point(x, y);
    }

    /// Recomputes the angle for a pointer at `(x, y)` relative to the dial's
    /// top-left corner.
    ///
    /// There is no distance check: any point, even far outside the circle,
    /// sets the angle. The exact center yields 0.
    pub fn update_from_point(&mut self, x: f32, y: f32) {
        let dx = x - self.radius;
        let dy = y - self.radius;

        self.pointer_angle = DialAngle::from_radians(dy.atan2(dx));
        self.value = self.pointer_angle.inverted();
        self.pointer = Some(Point::new(x, y));
    }

    /// The selected angle in degrees, in `[0, 360)`. Zero until the first
    /// interaction.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value.degrees()
    }

    /// Same as [`value`](Self::value), typed.
    #[must_use]
    pub fn angle(&self) -> DialAngle {
        self.value
    }

    /// The raw pointer angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn pointer_angle(&self) -> f32 {
        self.pointer_angle.degrees()
    }

    /// Line from the dial center to the last pointer position, once the user
    /// has interacted.
    #[must_use]
    pub fn indicator(&self) -> Option<(Point, Point)> {
        self.pointer.map(|pointer| (self.center(), pointer))
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.radius * 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }
}
