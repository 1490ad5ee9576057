use crate::agent::Agent;
use crate::config::*;
use crate::direction::Action;
use crate::perceptron::choose_action;
use crate::senses::sense;
use crate::stats::Statistics;
use crate::tick::run_tick;
use crate::world::WorldGrid;
use bevy::log::info;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Resource to control simulation state
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SimulationState {
    #[default]
    Running,
    Paused,
}

/// Who picks the agent's next action
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ControlMode {
    #[default]
    Autonomous,
    Manual,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Autonomous => ControlMode::Manual,
            ControlMode::Manual => ControlMode::Autonomous,
        }
    }
}

/// Action queued for the next tick, consumed by `advance_tick`
#[derive(Resource, Debug, Default)]
pub struct PendingAction(pub Option<Action>);

/// Population counts used whenever a new world is drawn
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub hazard_count: usize,
    pub food_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hazard_count: HAZARD_COUNT,
            food_count: FOOD_COUNT,
        }
    }
}

/// Random source shared by world population, model weights and tie-breaks
#[derive(Resource)]
pub struct SimRng(pub StdRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Sense the surroundings and let the agent's model pick an action
pub fn decide<R: Rng + ?Sized>(world: &WorldGrid, agent: &Agent, rng: &mut R) -> Action {
    let input = sense(world, agent);
    let candidates = agent.model.evaluate(input);
    choose_action(candidates, rng)
}

/// Draw a new world and respawn the agent with fresh weights
pub fn reset<R: Rng + ?Sized>(world: &mut WorldGrid, agent: &mut Agent, rng: &mut R, config: &SimulationConfig) {
    world.randomize(rng, config.hazard_count, config.food_count);
    *agent = Agent::spawn(rng);
}

/// Headless episode loop: decide, tick, respawn on death
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldGrid>()
            .init_resource::<Agent>()
            .init_resource::<Statistics>()
            .init_resource::<SimRng>()
            .init_resource::<SimulationConfig>()
            .init_resource::<SimulationState>()
            .init_resource::<ControlMode>()
            .init_resource::<PendingAction>()
            .add_systems(Startup, start_first_episode)
            .add_systems(
                Update,
                (
                    decide_action.run_if(|state: Res<SimulationState>, mode: Res<ControlMode>| {
                        *state == SimulationState::Running && *mode == ControlMode::Autonomous
                    }),
                    advance_tick,
                )
                    .chain(),
            );
    }
}

/// System to populate the first world and spawn the first agent
pub fn start_first_episode(
    mut world: ResMut<WorldGrid>,
    mut agent: ResMut<Agent>,
    mut rng: ResMut<SimRng>,
    config: Res<SimulationConfig>,
) {
    reset(&mut world, &mut agent, &mut rng.0, &config);
}

/// System to queue the model's choice for this frame
pub fn decide_action(
    world: Res<WorldGrid>,
    agent: Res<Agent>,
    mut rng: ResMut<SimRng>,
    mut pending: ResMut<PendingAction>,
) {
    pending.0 = Some(decide(&world, &agent, &mut rng.0));
}

/// System to run the queued action and start a new episode on death
pub fn advance_tick(
    mut pending: ResMut<PendingAction>,
    mut stats: ResMut<Statistics>,
    mut world: ResMut<WorldGrid>,
    mut agent: ResMut<Agent>,
    mut rng: ResMut<SimRng>,
    config: Res<SimulationConfig>,
) {
    let Some(action) = pending.0.take() else {
        return;
    };

    // Most ticks leave every cell alone; only flag the grid for redraw when
    // food was eaten (a hazard tile always ends in a reset below).
    let eaten = agent.food_eaten;
    let cause = run_tick(&mut stats, world.bypass_change_detection(), &mut agent, action);
    if agent.food_eaten != eaten {
        world.set_changed();
    }

    if let Some(cause) = cause {
        stats.end_episode(&agent);
        info!(
            "Episode {} ended by {} after {} ticks, {} food eaten",
            stats.deaths(),
            cause,
            agent.age,
            agent.food_eaten
        );
        reset(&mut world, &mut agent, &mut rng.0, &config);
    }
}
