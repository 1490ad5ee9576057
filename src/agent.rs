use crate::config::*;
use crate::direction::Facing;
use crate::perceptron::Perceptron;
use bevy::prelude::*;
use rand::Rng;

/// The foraging agent: position, facing, resource pools and its decision model
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Agent {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,

    pub stamina: i32,
    pub max_stamina: i32,
    pub oxygen: i32,
    pub max_oxygen: i32,
    pub heat: i32,
    pub max_heat: i32,

    /// Number of rings each vision beam scans
    pub vision_distance: i32,

    pub model: Perceptron,

    /// Ticks survived this episode
    pub age: u64,
    /// Food tiles consumed this episode
    pub food_eaten: u64,
}

impl Agent {
    /// Fresh agent at the spawn point with the given model
    pub fn new(model: Perceptron) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            facing: Facing::North,
            stamina: STARTING_STAMINA,
            max_stamina: MAX_STAMINA,
            oxygen: MAX_OXYGEN,
            max_oxygen: MAX_OXYGEN,
            heat: MAX_HEAT,
            max_heat: MAX_HEAT,
            vision_distance: VISION_DISTANCE,
            model,
            age: 0,
            food_eaten: 0,
        }
    }

    /// Fresh agent with newly randomized weights
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Perceptron::random(rng))
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn stamina_ratio(&self) -> f32 {
        ratio(self.stamina, self.max_stamina)
    }

    pub fn oxygen_ratio(&self) -> f32 {
        ratio(self.oxygen, self.max_oxygen)
    }

    pub fn heat_ratio(&self) -> f32 {
        ratio(self.heat, self.max_heat)
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new(Perceptron::default())
    }
}

fn ratio(value: i32, max: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    (value as f32 / max as f32).clamp(0.0, 1.0)
}
