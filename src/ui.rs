/*
 * UI Module
 *
 * Slider panel for the four flocking coefficients, plus the update mode,
 * trail and pause toggles. The panel edits its own copy of the parameters;
 * the app hands them to the simulation once per frame.
 */

use nannou_egui::{egui, Egui};

use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::params::{FlockParams, UpdateMode};

// Values the panel edits between frames
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPanel {
    pub params: FlockParams,
    pub mode: UpdateMode,
    pub draw_trails: bool,
    pub show_debug: bool,
    pub paused: bool,
}

impl ControlPanel {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            params: config.params,
            mode: config.mode,
            draw_trails: config.draw_trails,
            show_debug: false,
            paused: false,
        }
    }
}

// What the user asked for this frame
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelResponse {
    pub reset: bool,
    pub changed: bool,
}

pub fn update_ui(egui: &mut Egui, panel: &mut ControlPanel, debug_info: &DebugInfo) -> PanelResponse {
    let before = panel.clone();
    let mut reset = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Flocking")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.add(egui::Slider::new(&mut panel.params.coherence_factor, FlockParams::factor_range()).text("Coherence"));
            ui.add(egui::Slider::new(&mut panel.params.separation_factor, FlockParams::factor_range()).text("Separation"));
            ui.add(egui::Slider::new(&mut panel.params.alignment_factor, FlockParams::factor_range()).text("Alignment"));
            ui.add(egui::Slider::new(&mut panel.params.visual_range, FlockParams::visual_range_range()).text("Visual Range"));

            ui.collapsing("Update Rules", |ui| {
                ui.radio_value(&mut panel.mode, UpdateMode::SameFrame, UpdateMode::SameFrame.label());
                ui.radio_value(&mut panel.mode, UpdateMode::DoubleBuffered, UpdateMode::DoubleBuffered.label());
                ui.checkbox(&mut panel.params.include_self, "Count self as neighbor");
            });

            ui.separator();
            ui.checkbox(&mut panel.draw_trails, "Draw Trails");
            ui.checkbox(&mut panel.show_debug, "Show Debug Info");
            ui.checkbox(&mut panel.paused, "Pause Simulation");
            if ui.button("Reset Boids").clicked() {
                reset = true;
            }

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame: {}", debug_info.frame));
            ui.label(format!("Step time: {:.2} ms", debug_info.step_time.as_secs_f64() * 1000.0));
        });

    PanelResponse {
        reset,
        changed: *panel != before,
    }
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect, boids_len: usize) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 6.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boids_len),
        format!("Mean speed: {:.2}", debug_info.mean_speed),
        format!("Max speed: {:.2}", debug_info.max_speed),
        format!("Centroid: ({:.0}, {:.0})", debug_info.centroid.x, debug_info.centroid.y),
        format!("Polarization: {:.2}", debug_info.polarization),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
