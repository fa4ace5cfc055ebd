/*
 * Renderer Module
 *
 * Draws the flock: each boid as a triangle pointing along its heading, with
 * an optional trail through its recent positions. Field coordinates have the
 * origin at the top-left with y pointing down, so everything is mapped into
 * nannou's centred, y-up window space before drawing.
 */

use std::f32::consts::FRAC_PI_6;

use nannou::prelude::*;

use crate::app::Model;
use crate::flock::BoidView;
use crate::ui;
use crate::BOID_SIZE;

// Field coordinates to window coordinates
#[inline]
fn to_screen(x: f32, y: f32, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + x, window_rect.top() - y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let body: Rgb<u8> = rgb(85, 140, 244);
    let trail = rgba(85.0 / 255.0, 140.0 / 255.0, 244.0 / 255.0, 0.4);

    for boid in model.simulation.snapshot() {
        if model.panel.draw_trails && boid.trail().len() > 1 {
            draw.polyline()
                .weight(1.0)
                .points(boid.trail().map(|p| to_screen(p.x, p.y, window_rect)))
                .color(trail);
        }
        draw_boid(&draw, &boid, window_rect, body);
    }

    if model.panel.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.simulation.flock().len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!("Failed to draw frame: {err:?}");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::error!("Failed to draw UI: {err:?}");
    }
}

// Triangle with its tip at the boid's position, wings swept back by 30 degrees
fn draw_boid(draw: &Draw, boid: &BoidView<'_>, window_rect: Rect, color: Rgb<u8>) {
    let (x, y) = (boid.position.x, boid.position.y);
    let angle = boid.heading;
    let points = [
        to_screen(x, y, window_rect),
        to_screen(
            x - BOID_SIZE * (angle - FRAC_PI_6).cos(),
            y - BOID_SIZE * (angle - FRAC_PI_6).sin(),
            window_rect,
        ),
        to_screen(
            x - BOID_SIZE * (angle + FRAC_PI_6).cos(),
            y - BOID_SIZE * (angle + FRAC_PI_6).sin(),
            window_rect,
        ),
    ];

    draw.polygon().color(color).points(points);
}
