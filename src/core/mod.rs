pub mod ballistics;
pub mod geometry;
pub mod physics;
pub mod tracker;
pub mod window;

pub use ballistics::{ShotSolution, SolveResult, solve};
pub use geometry::{ShotGeometry, TrajectoryFit};
pub use physics::PhysicalConfig;
pub use tracker::{ShotEvent, ShotTracker};
