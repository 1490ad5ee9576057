use crate::agent::Agent;
use crate::config::*;
use crate::direction::{Action, resolve_motion};
use crate::stats::Statistics;
use crate::world::{Cell, WorldGrid, wrap};
use bevy::log::debug;
use std::fmt;

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Cold,
    Drowning,
    Hazard,
    Exhaustion,
    Gluttony,
}

impl DeathCause {
    pub const ALL: [DeathCause; 5] = [
        DeathCause::Cold,
        DeathCause::Drowning,
        DeathCause::Hazard,
        DeathCause::Exhaustion,
        DeathCause::Gluttony,
    ];
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::Cold => write!(f, "cold"),
            DeathCause::Drowning => write!(f, "drowning"),
            DeathCause::Hazard => write!(f, "hazard"),
            DeathCause::Exhaustion => write!(f, "exhaustion"),
            DeathCause::Gluttony => write!(f, "gluttony"),
        }
    }
}

/// Advance the episode by one step. Returns whether the agent survived.
///
/// The engine never resets anything; on death the caller ends the episode.
pub fn tick(stats: &mut Statistics, world: &mut WorldGrid, agent: &mut Agent, action: Action) -> bool {
    run_tick(stats, world, agent, action).is_none()
}

/// Advance one step, count it and record the cause of death if any
pub fn run_tick(
    stats: &mut Statistics,
    world: &mut WorldGrid,
    agent: &mut Agent,
    action: Action,
) -> Option<DeathCause> {
    let cause = step(world, agent, action);
    stats.ticks += 1;
    if let Some(cause) = cause {
        stats.record_death(cause);
    }
    cause
}

/// One state transition without touching statistics
pub fn step(world: &mut WorldGrid, agent: &mut Agent, action: Action) -> Option<DeathCause> {
    /* Move */

    let motion = resolve_motion(agent.facing, action);
    agent.facing = motion.facing;
    let (x, y) = wrap(agent.x + motion.step.0, agent.y + motion.step.1);
    agent.x = x;
    agent.y = y;

    let cell = world.get(x, y);

    /* Resources */

    apply_resources(agent, cell);
    agent.age += 1;

    /* Death check */

    let cause = death_cause(agent, cell);

    /* Consume perishable overlays */

    world.strip_overlays(x, y);

    debug!(
        "tick: action={} pos=({}, {}) facing={} stamina={} oxygen={} heat={}",
        action, agent.x, agent.y, agent.facing, agent.stamina, agent.oxygen, agent.heat
    );

    cause
}

/// Stamina, heat and oxygen bookkeeping for landing on `cell`
pub fn apply_resources(agent: &mut Agent, cell: Cell) {
    agent.stamina -= STAMINA_COST;

    if cell.contains(Cell::FOOD) {
        agent.stamina += if cell.contains(Cell::WATER) {
            WET_FOOD_STAMINA
        } else if cell.contains(Cell::SNOW) {
            COLD_FOOD_STAMINA
        } else {
            FOOD_STAMINA
        };
        agent.food_eaten += 1;
    }

    if cell.contains(Cell::SNOW) {
        agent.heat -= SNOW_HEAT_LOSS;
    } else {
        agent.heat = (agent.heat + HEAT_RECOVERY).min(agent.max_heat);
    }

    if cell.contains(Cell::WATER) {
        agent.oxygen -= WATER_OXYGEN_LOSS;
    } else {
        agent.oxygen = agent.max_oxygen;
    }
}

/// First matching cause in priority order: hazard, exhaustion, gluttony, drowning, cold
pub fn death_cause(agent: &Agent, cell: Cell) -> Option<DeathCause> {
    if cell.contains(Cell::HAZARD) {
        Some(DeathCause::Hazard)
    } else if agent.stamina <= 0 {
        Some(DeathCause::Exhaustion)
    } else if agent.stamina > agent.max_stamina {
        Some(DeathCause::Gluttony)
    } else if agent.oxygen <= 0 {
        Some(DeathCause::Drowning)
    } else if agent.heat <= 0 {
        Some(DeathCause::Cold)
    } else {
        None
    }
}
