// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown inside the loading overlay card.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Angular length of the moving arc.
const ARC_SWEEP: f32 = FRAC_PI_2;
const ARC_SEGMENTS: u16 = 24;
const STROKE_WIDTH: f32 = 4.0;

/// Ring with a rotating colored arc.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    track: Color,
    arc: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the given rotation angle (radians).
    #[must_use]
    pub fn new(rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation.rem_euclid(TAU),
            track: Color {
                a: 0.2,
                ..palette::SLATE_700
            },
            arc: palette::INFO,
            size: sizing::SPINNER,
        }
    }

    /// Overrides the arc color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.arc = color;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points along the arc starting at `rotation`, measured from 12 o'clock.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - FRAC_PI_2;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let angle = start + ARC_SWEEP * f32::from(i) / f32::from(ARC_SEGMENTS);
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.track),
                );

                let points = arc_points(center, radius, self.rotation);
                let arc = Path::new(|builder| {
                    if let Some((first, rest)) = points.split_first() {
                        builder.move_to(*first);
                        for point in rest {
                            builder.line_to(*point);
                        }
                    }
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.arc)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
