//! UFO fleet: a fixed roster of agents spawned at known slots around the city.
//! Reset rebuilds every agent from its slot and seed, so a restart always
//! reproduces the same opening layout.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ufo::{UfoAgent, UfoConfig};

/// Default spawn slots: centre, north, east, south, west of the city.
pub const DEFAULT_SPAWN_SLOTS: [Vec3; 5] = [
    Vec3::new(0.0, 60.0, 0.0),
    Vec3::new(0.0, 70.0, -80.0),
    Vec3::new(80.0, 90.0, 0.0),
    Vec3::new(0.0, 110.0, 80.0),
    Vec3::new(-80.0, 80.0, 0.0),
];

/// Default base seed for per-agent randomness.
pub const DEFAULT_FLEET_SEED: u64 = 0x0F0_5EED;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    /// Base seed; agent `i` uses `seed ^ i`.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// One UFO per slot.
    #[serde(default = "default_slots")]
    pub slots: Vec<Vec3>,
}

fn default_seed() -> u64 {
    DEFAULT_FLEET_SEED
}
fn default_slots() -> Vec<Vec3> {
    DEFAULT_SPAWN_SLOTS.to_vec()
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            slots: default_slots(),
        }
    }
}

/// Owns every UFO, indexed by spawn slot.
#[derive(Debug, Clone)]
pub struct UfoFleet {
    config: FleetConfig,
    ufo: UfoConfig,
    agents: Vec<UfoAgent>,
}

impl UfoFleet {
    pub fn new(config: FleetConfig, ufo: UfoConfig) -> Self {
        let agents = spawn_agents(&config, ufo);
        Self { config, ufo, agents }
    }

    /// Throw away every agent and spawn the canonical roster again.
    pub fn reset(&mut self) {
        self.agents = spawn_agents(&self.config, self.ufo);
        log::debug!("UFO fleet rebuilt with {} agents", self.agents.len());
    }

    pub fn update(&mut self, dt: f32) {
        for agent in &mut self.agents {
            agent.update(dt);
        }
    }

    /// Index of the first UFO strictly closer than `distance` to `point`.
    pub fn first_collision(&self, point: Vec3, distance: f32) -> Option<usize> {
        self.agents
            .iter()
            .position(|agent| agent.position().distance(point) < distance)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UfoAgent> {
        self.agents.iter()
    }

    pub fn get(&self, index: usize) -> Option<&UfoAgent> {
        self.agents.get(index)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

fn spawn_agents(config: &FleetConfig, ufo: UfoConfig) -> Vec<UfoAgent> {
    config
        .slots
        .iter()
        .enumerate()
        .map(|(slot, &position)| UfoAgent::new(ufo, position, config.seed ^ slot as u64))
        .collect()
}
