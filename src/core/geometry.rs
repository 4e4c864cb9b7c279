use tracing::debug;

use crate::core::physics::{METERS_PER_FOOT, METERS_PER_INCH, feet_to_meters};

/// Substitute for a zero target offset (1 mm); the fit divides by the offset.
pub const MIN_TARGET_OFFSET_M: f64 = 0.001;

pub const DEFAULT_TARGET_OFFSET_M: f64 = 2.5 * METERS_PER_FOOT;
pub const DEFAULT_HEIGHT_ABOVE_REFERENCE_M: f64 = 9.2 * METERS_PER_FOOT;
pub const DEFAULT_TARGET_HEIGHT_M: f64 = 80.0 * METERS_PER_INCH;

/// Metres. Both heights are absolute; `target_offset` is measured past the
/// near edge that `floor_distance` reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShotGeometry {
    pub floor_distance: f64,
    pub target_offset: f64,
    pub height_above_reference: f64,
    pub target_height: f64,
}

impl ShotGeometry {
    pub fn new(
        floor_distance: f64,
        target_offset: f64,
        height_above_reference: f64,
        target_height: f64,
    ) -> Self {
        Self {
            floor_distance,
            target_offset,
            height_above_reference,
            target_height,
        }
    }

    pub fn from_feet(
        floor_distance_ft: f64,
        target_offset_ft: f64,
        height_above_reference_ft: f64,
        target_height_ft: f64,
    ) -> Self {
        Self::new(
            feet_to_meters(floor_distance_ft),
            feet_to_meters(target_offset_ft),
            feet_to_meters(height_above_reference_ft),
            feet_to_meters(target_height_ft),
        )
    }

    /// Geometry with a zero offset replaced by [`MIN_TARGET_OFFSET_M`].
    ///
    /// This is the only guard in the pipeline; every other degenerate input
    /// is allowed to produce non-finite output.
    pub fn guarded(self) -> Self {
        if self.target_offset == 0.0 {
            Self {
                target_offset: MIN_TARGET_OFFSET_M,
                ..self
            }
        } else {
            self
        }
    }

    pub fn total_distance(&self) -> f64 {
        self.floor_distance + self.target_offset
    }
}

/// Vertical parabola `y = a·x² + b·x` through the launch point, the near edge
/// crossing and the landing point, with heights relative to the launch height.
///
/// The constant term is zero because the launch point is the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrajectoryFit {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
    pub a: f64,
    pub b: f64,
}

impl TrajectoryFit {
    /// Lagrange closed form through the three control points.
    ///
    /// Coincident x-coordinates give a zero denominator and non-finite
    /// coefficients; that is not checked.
    pub fn through(geometry: &ShotGeometry, launch_height: f64) -> Self {
        let (x1, y1) = (0.0, 0.0);
        let x2 = geometry.floor_distance;
        let y2 = geometry.height_above_reference - launch_height;
        let x3 = geometry.floor_distance + geometry.target_offset;
        let y3 = geometry.target_height - launch_height;

        let common_denominator = (x1 - x2) * (x1 - x3) * (x2 - x3);
        debug!(common_denominator, "parabola fit");

        let a = (x3 * (y2 - y1) + x2 * (y1 - y3) + x1 * (y3 - y2)) / common_denominator;
        let b = (x3 * x3 * (y1 - y2) + x2 * x2 * (y3 - y1) + x1 * x1 * (y2 - y3))
            / common_denominator;

        Self {
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            a,
            b,
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x
    }

    pub fn vertex(&self) -> (f64, f64) {
        let x = -self.b / (2.0 * self.a);
        (x, self.evaluate(x))
    }

    pub fn sample(&self, samples: usize) -> Vec<(f64, f64)> {
        let sample_count = samples.max(2);
        (0..=sample_count)
            .map(|i| {
                let x = (i as f64 * self.x3) / sample_count as f64;
                (x, self.evaluate(x))
            })
            .collect()
    }
}

/// Absolute apex height of the arc through the three control points.
///
/// Derived straight from the height and distance differences rather than from
/// a [`TrajectoryFit`]; both must agree for the same geometry.
pub fn apex_height(geometry: &ShotGeometry, launch_height: f64) -> f64 {
    let target_rise = geometry.target_height - launch_height;
    let distance = geometry.total_distance();
    let edge_rise = geometry.height_above_reference - launch_height;
    let floor = geometry.floor_distance;
    // Opposite sign to the fit's denominator because of the point ordering.
    let denominator = geometry.target_offset * floor * distance;

    let a = (floor * target_rise - distance * edge_rise) / denominator;
    let b = (distance * distance * edge_rise - floor * floor * target_rise) / denominator;

    let apex = -b * b / (4.0 * a) + launch_height;
    debug!(apex, "apex height");
    apex
}
