// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the dial and forwards pointer input.

use super::{AngleDial, Message};
use crate::domain::editing::DialAngle;
use crate::ui::design_tokens::{border, typography};
use crate::ui::theming;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::widget::Action;
use iced::{Point, Rectangle, Renderer, Theme};

/// Gap between the bounding box and the drawn circle.
const CIRCLE_INSET: f32 = 5.0;

/// Y coordinate the idle indicator points to before any interaction.
const IDLE_INDICATOR_Y: f32 = 10.0;

/// Drag tracking kept by iced between events.
#[derive(Debug, Default)]
pub struct DragState {
    dragging: bool,
}

/// Snapshot of an [`AngleDial`] that can be handed to `iced::widget::canvas`.
#[derive(Debug, Clone)]
pub struct DialRenderer {
    radius: f32,
    value: DialAngle,
    indicator_end: Option<Point>,
}

impl DialRenderer {
    #[must_use]
    pub fn new(dial: &AngleDial) -> Self {
        Self {
            radius: dial.radius(),
            value: dial.angle(),
            indicator_end: dial.indicator().map(|(_, end)| end),
        }
    }

    fn center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }
}

/// Cursor position relative to the canvas origin, even when outside bounds.
fn local_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    cursor
        .position()
        .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y))
}

impl canvas::Program<Message> for DialRenderer {
    type State = DragState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.dragging = true;
                Some(
                    Action::publish(Message::PointerDown {
                        x: position.x,
                        y: position.y,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.dragging => {
                let position = local_position(cursor, bounds)?;
                Some(
                    Action::publish(Message::PointerDragged {
                        x: position.x,
                        y: position.y,
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.dragging =>
            {
                state.dragging = false;
                Some(Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let colors = theming::dial_colors(theme);
        let center = self.center();

        let circle = Path::circle(center, (self.radius - CIRCLE_INSET).max(0.0));
        frame.fill(&circle, colors.face);
        frame.stroke(
            &circle,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(colors.rim),
        );

        let end = self
            .indicator_end
            .unwrap_or(Point::new(center.x, IDLE_INDICATOR_Y));
        frame.stroke(
            &Path::line(center, end),
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(colors.indicator),
        );
        frame.fill(&Path::circle(center, border::WIDTH_MD * 1.5), colors.indicator);

        let label = self.value.to_string();
        let size = typography::CAPTION;
        frame.fill_text(Text {
            content: label,
            position: Point::new(center.x + CIRCLE_INSET, center.y + CIRCLE_INSET),
            color: colors.label,
            size: size.into(),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_snapshots_dial_state() {
        let mut dial = AngleDial::new(100.0);
        dial.on_pointer_down(50.0, 0.0);

        let renderer = DialRenderer::new(&dial);
        assert_eq!(renderer.center(), Point::new(50.0, 50.0));
        assert_eq!(renderer.indicator_end, Some(Point::new(50.0, 0.0)));
        assert!((renderer.value.degrees() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn label_wraps_near_full_turn() {
        let mut dial = AngleDial::new(100.0);
        let raw = 0.3_f32.to_radians();
        dial.on_pointer_down(50.0 + 40.0 * raw.cos(), 50.0 + 40.0 * raw.sin());

        let renderer = DialRenderer::new(&dial);
        assert!(renderer.value.degrees() > 359.5);
        assert_eq!(renderer.value.to_string(), "0°");
    }

    #[test]
    fn idle_dial_has_no_indicator_end() {
        let renderer = DialRenderer::new(&AngleDial::new(100.0));
        assert!(renderer.indicator_end.is_none());
    }

    #[test]
    fn local_position_is_relative_to_bounds() {
        let bounds = Rectangle::new(Point::new(10.0, 20.0), iced::Size::new(100.0, 100.0));
        let cursor = mouse::Cursor::Available(Point::new(5.0, 200.0));
        assert_eq!(local_position(cursor, bounds), Some(Point::new(-5.0, 180.0)));
        assert_eq!(local_position(mouse::Cursor::Unavailable, bounds), None);
    }
}
