/*
 * Application Module
 *
 * This module defines the nannou model for the windowed simulation. Each
 * nannou update reads the slider panel, hands the parameters to the
 * simulation and advances it by one frame; the view then draws the result.
 * Frame pacing is left to nannou's event loop.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, error};

use crate::config::SimulationConfig;
use crate::debug::DebugInfo;
use crate::renderer;
use crate::simulation::Simulation;
use crate::ui::{self, ControlPanel};

// nannou builds the model from a plain fn pointer, so the launch config is parked here
static LAUNCH_CONFIG: OnceLock<SimulationConfig> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub panel: ControlPanel,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Open the window and run until it is closed
pub fn run(config: SimulationConfig) {
    if LAUNCH_CONFIG.set(config).is_err() {
        error!("Window already launched");
        return;
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = LAUNCH_CONFIG.get().cloned().unwrap_or_default();

    let window_id = match app
        .new_window()
        .title("Boids Simulation")
        .size(config.field.width as u32, config.field.height as u32)
        .view(view)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            error!("Failed to open window: {err:?}");
            std::process::exit(1);
        }
    };
    let Some(window) = app.window(window_id) else {
        error!("Window closed before the UI could attach");
        std::process::exit(1);
    };
    let egui = Egui::from_window(&window);

    let panel = ControlPanel::from_config(&config);
    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    Model {
        simulation,
        panel,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let response = ui::update_ui(&mut model.egui, &mut model.panel, &model.debug_info);
    if response.changed {
        debug!(params = ?model.panel.params, mode = model.panel.mode.label(), "Panel changed");
    }

    // New values take effect this frame without touching the boids
    model.simulation.set_params(model.panel.params);
    model.simulation.set_mode(model.panel.mode);

    if response.reset {
        model.simulation.reset();
    }

    if !model.panel.paused {
        model.simulation.step();
    }

    model.debug_info.observe(
        model.simulation.flock(),
        model.simulation.frame(),
        model.simulation.last_step_time(),
    );
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    renderer::view(app, model, frame);
}

// Forward raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
