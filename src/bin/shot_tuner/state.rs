use std::cell::RefCell;
use std::rc::Rc;

use flywheel_ballistics::core::geometry::{
    DEFAULT_HEIGHT_ABOVE_REFERENCE_M, DEFAULT_TARGET_HEIGHT_M, DEFAULT_TARGET_OFFSET_M,
};
use flywheel_ballistics::core::physics::{
    KILOGRAMS_PER_POUND, METERS_PER_INCH, PhysicalConfig, meters_to_feet,
};
use flywheel_ballistics::core::{ShotEvent, ShotGeometry, ShotTracker};

const DEFAULT_DISTANCE_FT: f32 = 12.0;

/// Slider values, in the units printed on the panel.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct TunerInputs {
    pub(crate) distance_ft: f32,
    pub(crate) offset_ft: f32,
    pub(crate) height_above_ft: f32,
    pub(crate) target_height_ft: f32,
    pub(crate) flywheel_mass_lb: f32,
    pub(crate) flywheel_radius_in: f32,
    pub(crate) min_angle_deg: f32,
    pub(crate) max_angle_deg: f32,
    pub(crate) clamp_angle: bool,
}

impl TunerInputs {
    pub(crate) fn defaults() -> Self {
        let physical = PhysicalConfig::default();
        Self {
            distance_ft: DEFAULT_DISTANCE_FT,
            offset_ft: meters_to_feet(DEFAULT_TARGET_OFFSET_M) as f32,
            height_above_ft: meters_to_feet(DEFAULT_HEIGHT_ABOVE_REFERENCE_M) as f32,
            target_height_ft: meters_to_feet(DEFAULT_TARGET_HEIGHT_M) as f32,
            flywheel_mass_lb: (physical.flywheel_mass / KILOGRAMS_PER_POUND) as f32,
            flywheel_radius_in: (physical.flywheel_radius / METERS_PER_INCH) as f32,
            min_angle_deg: physical.min_launch_angle_deg as f32,
            max_angle_deg: physical.max_launch_angle_deg as f32,
            clamp_angle: physical.clamp_angle,
        }
    }

    fn geometry(&self) -> ShotGeometry {
        ShotGeometry::from_feet(
            self.distance_ft as f64,
            self.offset_ft as f64,
            self.height_above_ft as f64,
            self.target_height_ft as f64,
        )
    }

    fn same_physical(&self, other: &Self) -> bool {
        self.flywheel_mass_lb == other.flywheel_mass_lb
            && self.flywheel_radius_in == other.flywheel_radius_in
            && self.min_angle_deg == other.min_angle_deg
            && self.max_angle_deg == other.max_angle_deg
    }
}

#[derive(Default)]
pub(crate) struct StatusLines {
    pub(crate) solve: String,
    pub(crate) config: String,
}

pub(crate) struct TunerState {
    pub(crate) inputs: TunerInputs,
    applied: Option<TunerInputs>,
    pub(crate) tracker: ShotTracker,
    pub(crate) status: Rc<RefCell<StatusLines>>,
    pub(crate) logged_header: bool,
}

impl TunerState {
    pub(crate) fn new() -> Self {
        let mut tracker = ShotTracker::default();
        let status = Rc::new(RefCell::new(StatusLines::default()));
        let sink = Rc::clone(&status);
        tracker.subscribe(move |event| match event {
            ShotEvent::Solved(solution) => {
                sink.borrow_mut().solve = if solution.result.is_finite() {
                    format!("Solved: {:.0} rpm", solution.result.rpm)
                } else {
                    "No finite solution for this geometry".to_string()
                };
            }
            ShotEvent::ConfigChanged(config) => {
                sink.borrow_mut().config = format!(
                    "Flywheel {:.2} kg, r {:.3} m | angles {:.1}..{:.1} deg | clamp {}",
                    config.flywheel_mass,
                    config.flywheel_radius,
                    config.min_launch_angle_deg,
                    config.max_launch_angle_deg,
                    if config.clamp_active() { "on" } else { "off" }
                );
            }
            ShotEvent::FitUpdated(_) => {}
        });

        let mut state = Self {
            inputs: TunerInputs::defaults(),
            applied: None,
            tracker,
            status,
            logged_header: false,
        };
        state.refresh();
        state
    }

    /// Pushes changed properties into the tracker and solves the current shot.
    pub(crate) fn refresh(&mut self) {
        let inputs = self.inputs;
        let previous = self.applied;

        if previous.is_none_or(|p| !p.same_physical(&inputs)) {
            self.tracker.set_physical_properties(
                inputs.flywheel_mass_lb as f64 * KILOGRAMS_PER_POUND,
                inputs.flywheel_radius_in as f64 * METERS_PER_INCH,
                inputs.min_angle_deg as f64,
                inputs.max_angle_deg as f64,
            );
        }
        if previous.is_none_or(|p| p.clamp_angle != inputs.clamp_angle) {
            self.tracker.set_clamp_angle(inputs.clamp_angle);
        }

        self.tracker.solve_geometry(&inputs.geometry());
        self.applied = Some(inputs);
    }

    pub(crate) fn reset(&mut self) {
        self.inputs = TunerInputs::defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_events(state: &mut TunerState) -> (Rc<RefCell<u32>>, Rc<RefCell<u32>>) {
        let solves = Rc::new(RefCell::new(0));
        let configs = Rc::new(RefCell::new(0));
        let (solve_sink, config_sink) = (Rc::clone(&solves), Rc::clone(&configs));
        state.tracker.subscribe(move |event| match event {
            ShotEvent::Solved(_) => *solve_sink.borrow_mut() += 1,
            ShotEvent::ConfigChanged(_) => *config_sink.borrow_mut() += 1,
            ShotEvent::FitUpdated(_) => {}
        });
        (solves, configs)
    }

    #[test]
    fn refresh_solves_every_frame() {
        let mut state = TunerState::new();
        let (solves, configs) = count_events(&mut state);

        state.refresh();
        state.refresh();

        assert_eq!(*solves.borrow(), 2);
        assert_eq!(*configs.borrow(), 0);
        assert!(state.status.borrow().solve.starts_with("Solved"));
    }

    #[test]
    fn slider_change_pushes_physical_properties() {
        let mut state = TunerState::new();
        let (solves, configs) = count_events(&mut state);
        let before = state.tracker.rpm();

        state.inputs.flywheel_radius_in = 4.0;
        state.refresh();

        assert_eq!(*solves.borrow(), 1);
        assert_eq!(*configs.borrow(), 1);
        assert!(state.tracker.rpm() < before);
    }
}
