//! Last-result wrapper around [`solve`] for callers that poll between updates.
//!
//! A tracker owns one [`PhysicalConfig`] and the most recent [`ShotSolution`].
//! Every call to [`ShotTracker::solve`] recomputes the whole pipeline and
//! replaces the stored solution. Accessors only read; they never recompute.
//! The tracker is meant for a single owner (one control loop or one UI
//! thread); share it across threads only behind your own lock.

use tracing::trace;

use crate::core::ballistics::{ShotSolution, SolveResult, solve};
use crate::core::geometry::{ShotGeometry, TrajectoryFit};
use crate::core::physics::PhysicalConfig;

/// Notification sent to registered listeners.
#[derive(Clone, Copy, Debug)]
pub enum ShotEvent<'a> {
    FitUpdated(&'a TrajectoryFit),
    Solved(&'a ShotSolution),
    ConfigChanged(&'a PhysicalConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ShotEvent<'_>)>;

pub struct ShotTracker {
    config: PhysicalConfig,
    solution: ShotSolution,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Default for ShotTracker {
    fn default() -> Self {
        Self::new(PhysicalConfig::default())
    }
}

fn notify(listeners: &mut [(ListenerId, Listener)], event: &ShotEvent<'_>) {
    trace!(listeners = listeners.len(), ?event, "dispatch");
    for (_, listener) in listeners.iter_mut() {
        listener(event);
    }
}

impl ShotTracker {
    pub fn new(config: PhysicalConfig) -> Self {
        Self {
            config,
            solution: ShotSolution::default(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Solves for a shot given in metres and returns the flywheel RPM.
    pub fn solve(
        &mut self,
        floor_distance: f64,
        target_offset: f64,
        height_above_reference: f64,
        target_height: f64,
    ) -> f64 {
        let geometry = ShotGeometry::new(
            floor_distance,
            target_offset,
            height_above_reference,
            target_height,
        );
        self.solve_geometry(&geometry).result.rpm
    }

    pub fn solve_geometry(&mut self, geometry: &ShotGeometry) -> &ShotSolution {
        self.solution = solve(geometry, &self.config);
        notify(&mut self.listeners, &ShotEvent::FitUpdated(&self.solution.fit));
        notify(&mut self.listeners, &ShotEvent::Solved(&self.solution));
        &self.solution
    }

    /// The stored solution is left as is until the next solve.
    pub fn set_physical_properties(
        &mut self,
        flywheel_mass: f64,
        flywheel_radius: f64,
        min_angle_deg: f64,
        max_angle_deg: f64,
    ) {
        self.config
            .set_physical_properties(flywheel_mass, flywheel_radius, min_angle_deg, max_angle_deg);
        notify(&mut self.listeners, &ShotEvent::ConfigChanged(&self.config));
    }

    pub fn set_clamp_angle(&mut self, clamp: bool) {
        self.config.clamp_angle = clamp;
        notify(&mut self.listeners, &ShotEvent::ConfigChanged(&self.config));
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ShotEvent<'_>) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn config(&self) -> &PhysicalConfig {
        &self.config
    }

    pub fn solution(&self) -> &ShotSolution {
        &self.solution
    }

    pub fn geometry(&self) -> &ShotGeometry {
        &self.solution.geometry
    }

    pub fn result(&self) -> &SolveResult {
        &self.solution.result
    }

    pub fn fit(&self) -> &TrajectoryFit {
        &self.solution.fit
    }

    pub fn launch_angle_deg(&self) -> f64 {
        self.solution.result.launch_angle_deg
    }

    pub fn landing_angle_deg(&self) -> f64 {
        self.solution.result.landing_angle_deg
    }

    pub fn rpm(&self) -> f64 {
        self.solution.result.rpm
    }
}
