use crate::core::ballistics::ShotSolution;
use crate::core::physics::meters_to_feet;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 1.5; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.08;
const Y_PADDING_RATIO: f64 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcWindow {
    pub max_x: f64,
    pub max_y: f64,
}

impl ArcWindow {
    pub fn padded(raw_max_x: f64, raw_max_y: f64) -> Self {
        // NaN extents collapse to one foot
        let raw_x_span = raw_max_x.max(1.0);
        let raw_y_span = raw_max_y.max(1.0);

        let mut x_span = raw_x_span * (1.0 + X_PADDING_RATIO);
        let mut y_span = raw_y_span * (1.0 + Y_PADDING_RATIO);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self {
            max_x: x_span,
            max_y: y_span,
        }
    }

    pub fn for_solution(solution: &ShotSolution, launch_height: f64) -> Self {
        let geometry = &solution.geometry;
        let raw_max_x = meters_to_feet(geometry.total_distance());
        let raw_max_y = [
            launch_height,
            geometry.height_above_reference,
            geometry.target_height,
            solution.result.apex_height,
        ]
        .into_iter()
        .map(meters_to_feet)
        .fold(0.0, f64::max);

        Self::padded(raw_max_x, raw_max_y)
    }

    pub fn normalized(&self, x_ft: f64, y_ft: f64) -> (f64, f64) {
        (x_ft / self.max_x, y_ft / self.max_y)
    }
}
