use flywheel_ballistics::report::{csv_header, csv_row};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{DISTANCE_KEY_RATE_FT, HEIGHT_KEY_RATE_FT, PANEL_WIDTH};
use crate::state::TunerState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) reset: bool,
    pub(crate) toggle_clamp: bool,
    pub(crate) log_shot: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            reset: self.reset || other.reset,
            toggle_clamp: self.toggle_clamp || other.toggle_clamp,
            log_shot: self.log_shot || other.log_shot,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        reset: is_key_pressed(KeyCode::R),
        toggle_clamp: is_key_pressed(KeyCode::C),
        log_shot: is_key_pressed(KeyCode::L),
    }
}

pub(crate) fn draw_control_panel(state: &mut TunerState) -> FrameActions {
    let mut actions = FrameActions::default();
    let inputs = &mut state.inputs;

    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(PANEL_WIDTH, 520.0))
        .label("Shot Inputs")
        .ui(&mut *root_ui(), |ui| {
            ui.label(None, "Geometry (ft)");
            ui.slider(hash!(), "Floor distance", 1.0..30.0, &mut inputs.distance_ft);
            ui.slider(hash!(), "Target offset", 0.0..6.0, &mut inputs.offset_ft);
            ui.slider(hash!(), "Edge height", 4.0..14.0, &mut inputs.height_above_ft);
            ui.slider(hash!(), "Target height", 3.0..10.0, &mut inputs.target_height_ft);
            ui.separator();
            ui.label(None, "Flywheel");
            ui.slider(hash!(), "Mass (lb)", 0.5..8.0, &mut inputs.flywheel_mass_lb);
            ui.slider(hash!(), "Radius (in)", 1.0..6.0, &mut inputs.flywheel_radius_in);
            ui.separator();
            ui.label(None, "Launch angle range (deg)");
            ui.slider(hash!(), "Min angle", 0.0..89.0, &mut inputs.min_angle_deg);
            ui.slider(hash!(), "Max angle", 0.0..89.0, &mut inputs.max_angle_deg);
            ui.checkbox(hash!(), "Clamp angle", &mut inputs.clamp_angle);
            ui.separator();
            if ui.button(None, "Log Shot (L)") {
                actions.log_shot = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
        });

    actions
}

pub(crate) fn apply_actions(state: &mut TunerState, actions: FrameActions) {
    if actions.reset {
        state.reset();
    }
    if actions.toggle_clamp {
        state.inputs.clamp_angle = !state.inputs.clamp_angle;
    }
    if actions.log_shot {
        let solution = state.tracker.solution();
        if !state.logged_header {
            println!("{}", csv_header(solution));
            state.logged_header = true;
        }
        println!("{}", csv_row(solution));
    }
}

pub(crate) fn apply_keyboard_adjustments(state: &mut TunerState, frame_dt: f32) {
    let inputs = &mut state.inputs;
    if is_key_down(KeyCode::D) {
        inputs.distance_ft = (inputs.distance_ft + DISTANCE_KEY_RATE_FT * frame_dt).min(30.0);
    }
    if is_key_down(KeyCode::A) {
        inputs.distance_ft = (inputs.distance_ft - DISTANCE_KEY_RATE_FT * frame_dt).max(1.0);
    }
    if is_key_down(KeyCode::W) {
        inputs.height_above_ft = (inputs.height_above_ft + HEIGHT_KEY_RATE_FT * frame_dt).min(14.0);
    }
    if is_key_down(KeyCode::S) {
        inputs.height_above_ft = (inputs.height_above_ft - HEIGHT_KEY_RATE_FT * frame_dt).max(4.0);
    }
}
