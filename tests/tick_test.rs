use perceptron_forager::config::*;
use perceptron_forager::tick::{death_cause, run_tick};
use perceptron_forager::{Action, Agent, Cell, DeathCause, Facing, Statistics, WorldGrid, tick};

fn setup(cell: Cell) -> (Statistics, WorldGrid, Agent) {
    let mut world = WorldGrid::new();
    // Ahead of the spawn point, which faces north
    world.put(SPAWN_X, SPAWN_Y - 1, cell);
    (Statistics::new(), world, Agent::default())
}

#[test]
fn test_wet_food_scenario() {
    let (mut stats, mut world, mut agent) = setup(Cell::WATER | Cell::FOOD);
    assert_eq!(agent.facing, Facing::North);
    assert_eq!(agent.stamina, 100);

    let alive = tick(&mut stats, &mut world, &mut agent, Action::Forward);

    assert!(alive);
    assert_eq!(agent.stamina, 139);
    assert_eq!(agent.food_eaten, 1);
    assert_eq!(agent.position(), (SPAWN_X, SPAWN_Y - 1));
    assert_eq!(world.get(SPAWN_X, SPAWN_Y - 1), Cell::WATER);
    assert_eq!(agent.oxygen, MAX_OXYGEN - 1);
    assert_eq!(stats.ticks, 1);
}

#[test]
fn test_exhaustion_scenario() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS);
    agent.stamina = 1;

    let alive = tick(&mut stats, &mut world, &mut agent, Action::Nothing);

    assert!(!alive);
    assert_eq!(agent.stamina, 0);
    assert_eq!(stats.deaths_by_exhaustion, 1);
    assert_eq!(stats.deaths(), 1);
    assert_eq!(agent.position(), (SPAWN_X, SPAWN_Y));
    assert_eq!(agent.facing, Facing::North);
}

#[test]
fn test_hazard_outranks_exhaustion() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS | Cell::HAZARD);
    agent.stamina = 1;

    let cause = run_tick(&mut stats, &mut world, &mut agent, Action::Forward);

    assert_eq!(cause, Some(DeathCause::Hazard));
    assert!(agent.stamina <= 0);
    assert_eq!(stats.deaths_by_hazard, 1);
    assert_eq!(stats.deaths_by_exhaustion, 0);
}

#[test]
fn test_death_priority_order() {
    let mut agent = Agent::default();
    agent.stamina = 0;
    agent.oxygen = 0;
    agent.heat = 0;
    assert_eq!(death_cause(&agent, Cell::GRASS), Some(DeathCause::Exhaustion));

    agent.stamina = MAX_STAMINA + 1;
    assert_eq!(death_cause(&agent, Cell::GRASS), Some(DeathCause::Gluttony));

    agent.stamina = 50;
    assert_eq!(death_cause(&agent, Cell::GRASS), Some(DeathCause::Drowning));

    agent.oxygen = 10;
    assert_eq!(death_cause(&agent, Cell::GRASS), Some(DeathCause::Cold));

    agent.heat = 1;
    assert_eq!(death_cause(&agent, Cell::GRASS), None);
}

#[test]
fn test_gluttony() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS | Cell::FOOD);
    agent.stamina = 290;

    assert!(!tick(&mut stats, &mut world, &mut agent, Action::Forward));
    assert_eq!(agent.stamina, 314);
    assert_eq!(stats.deaths_by_gluttony, 1);
}

#[test]
fn test_drowning() {
    let (mut stats, mut world, mut agent) = setup(Cell::WATER);
    agent.oxygen = 1;

    assert!(!tick(&mut stats, &mut world, &mut agent, Action::Forward));
    assert_eq!(agent.oxygen, 0);
    assert_eq!(stats.deaths_by_drowning, 1);
}

#[test]
fn test_cold() {
    let (mut stats, mut world, mut agent) = setup(Cell::SNOW);
    agent.heat = 1;

    assert!(!tick(&mut stats, &mut world, &mut agent, Action::Forward));
    assert_eq!(agent.heat, 0);
    assert_eq!(stats.deaths_by_cold, 1);
}

#[test]
fn test_food_tiers() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS | Cell::FOOD);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.stamina, 100 - STAMINA_COST + FOOD_STAMINA);

    let (mut stats, mut world, mut agent) = setup(Cell::SNOW | Cell::FOOD);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.stamina, 100 - STAMINA_COST + COLD_FOOD_STAMINA);

    // Water takes precedence when a tile is both wet and snowy
    let (mut stats, mut world, mut agent) = setup(Cell::WATER | Cell::SNOW | Cell::FOOD);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.stamina, 100 - STAMINA_COST + WET_FOOD_STAMINA);
}

#[test]
fn test_heat_recovers_but_caps() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS);
    agent.heat = MAX_HEAT - 1;
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.heat, MAX_HEAT);

    agent.heat = 40;
    tick(&mut stats, &mut world, &mut agent, Action::Nothing);
    assert_eq!(agent.heat, 42);
}

#[test]
fn test_heat_drops_on_snow() {
    let (mut stats, mut world, mut agent) = setup(Cell::SNOW);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.heat, MAX_HEAT - SNOW_HEAT_LOSS);
}

#[test]
fn test_oxygen_resets_fully_on_land() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS);
    agent.oxygen = 3;
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.oxygen, MAX_OXYGEN);
}

#[test]
fn test_consumed_food_cell_is_deleted() {
    let (mut stats, mut world, mut agent) = setup(Cell::GRASS | Cell::FOOD);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(world.stored_len(), 0);
    assert_eq!(world.get(SPAWN_X, SPAWN_Y - 1), Cell::GRASS);
}

#[test]
fn test_terrain_only_cells_are_untouched() {
    let (mut stats, mut world, mut agent) = setup(Cell::SNOW);
    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(world.get(SPAWN_X, SPAWN_Y - 1), Cell::SNOW);
    assert_eq!(world.stored_len(), 1);
}

#[test]
fn test_movement_wraps_around() {
    let mut stats = Statistics::new();
    let mut world = WorldGrid::new();
    let mut agent = Agent::default().with_position(0, 0);

    tick(&mut stats, &mut world, &mut agent, Action::Forward);
    assert_eq!(agent.position(), (0, WORLD_HEIGHT - 1));

    tick(&mut stats, &mut world, &mut agent, Action::Left);
    assert_eq!(agent.facing, Facing::West);
    assert_eq!(agent.position(), (WORLD_WIDTH - 1, WORLD_HEIGHT - 1));
}

#[test]
fn test_backward_keeps_facing() {
    let mut stats = Statistics::new();
    let mut world = WorldGrid::new();
    let mut agent = Agent::default();

    tick(&mut stats, &mut world, &mut agent, Action::Backward);
    assert_eq!(agent.facing, Facing::North);
    assert_eq!(agent.position(), (SPAWN_X, SPAWN_Y + 1));
}

#[test]
fn test_right_turn_moves_east() {
    let mut stats = Statistics::new();
    let mut world = WorldGrid::new();
    let mut agent = Agent::default();

    tick(&mut stats, &mut world, &mut agent, Action::Right);
    assert_eq!(agent.facing, Facing::East);
    assert_eq!(agent.position(), (SPAWN_X + 1, SPAWN_Y));
}

#[test]
fn test_ticks_and_age_accumulate() {
    let mut stats = Statistics::new();
    let mut world = WorldGrid::new();
    let mut agent = Agent::default();

    for _ in 0..10 {
        assert!(tick(&mut stats, &mut world, &mut agent, Action::Nothing));
    }
    assert_eq!(stats.ticks, 10);
    assert_eq!(agent.age, 10);
    assert_eq!(agent.stamina, STARTING_STAMINA - 10);
}

#[test]
fn test_idle_agent_starves_on_schedule() {
    let mut stats = Statistics::new();
    let mut world = WorldGrid::new();
    let mut agent = Agent::default();

    let mut ticks = 0;
    while tick(&mut stats, &mut world, &mut agent, Action::Nothing) {
        ticks += 1;
    }
    assert_eq!(ticks + 1, STARTING_STAMINA as u64);
    assert_eq!(stats.deaths_by_exhaustion, 1);
}

#[test]
fn test_end_episode_keeps_maxima() {
    let mut stats = Statistics::new();
    let mut agent = Agent::default();

    agent.age = 120;
    agent.food_eaten = 3;
    stats.end_episode(&agent);

    agent.age = 80;
    agent.food_eaten = 7;
    stats.end_episode(&agent);

    assert_eq!(stats.longest_life, 120);
    assert_eq!(stats.most_food_eaten, 7);
}
