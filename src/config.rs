/// Configuration constants for the forager simulation

// ============================================================================
// WORLD SETTINGS
// ============================================================================

/// Number of columns in the toroidal grid
pub const WORLD_WIDTH: i32 = 256;

/// Number of rows in the toroidal grid
pub const WORLD_HEIGHT: i32 = 256;

/// Hazard cells scattered over the grid at the start of every episode
pub const HAZARD_COUNT: usize = 100;

/// Food cells scattered over the grid at the start of every episode
pub const FOOD_COUNT: usize = 240;

// ============================================================================
// AGENT SETTINGS
// ============================================================================

/// Column the agent spawns on
pub const SPAWN_X: i32 = WORLD_WIDTH / 2;

/// Row the agent spawns on
pub const SPAWN_Y: i32 = WORLD_HEIGHT / 2;

/// Stamina cap; exceeding it kills the agent (gluttony)
pub const MAX_STAMINA: i32 = 300;

/// Stamina of a freshly spawned agent
pub const STARTING_STAMINA: i32 = 100;

/// Oxygen cap; also the starting value
pub const MAX_OXYGEN: i32 = 100;

/// Heat cap; also the starting value
pub const MAX_HEAT: i32 = 100;

/// Number of rings scanned by each vision beam
pub const VISION_DISTANCE: i32 = 6;

// ============================================================================
// RESOURCE ACCOUNTING (per tick)
// ============================================================================

/// Stamina spent on every tick, whatever the action
pub const STAMINA_COST: i32 = 1;

/// Stamina gained from food on grass
pub const FOOD_STAMINA: i32 = 25;

/// Stamina gained from food lying in water
pub const WET_FOOD_STAMINA: i32 = 40;

/// Stamina gained from food lying in snow
pub const COLD_FOOD_STAMINA: i32 = 10;

/// Heat lost per tick spent on snow
pub const SNOW_HEAT_LOSS: i32 = 1;

/// Heat regained per tick spent off snow (capped at MAX_HEAT)
pub const HEAT_RECOVERY: i32 = 2;

/// Oxygen lost per tick spent in water
pub const WATER_OXYGEN_LOSS: i32 = 1;

// ============================================================================
// DECISION MODEL
// ============================================================================

/// Output nodes of the perceptron layer, one per action
pub const OUTPUT_NODES: usize = 5;

/// Width of the sensory bitmask in bits
pub const SENSORY_WIDTH: u32 = u16::BITS;

// ============================================================================
// VIEWER SETTINGS
// ============================================================================

/// Window edge length in logical pixels
pub const WINDOW_SIZE: f32 = 1024.0;

/// Edge length of one grid cell in world units
pub const CELL_SIZE: f32 = WINDOW_SIZE / WORLD_WIDTH as f32;

/// Zoom limits for the camera
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 4.0;

/// Zoom change per mouse-wheel line
pub const ZOOM_STEP: f32 = 0.1;

/// Cell colours as 0xRRGGBB
pub const FOOD_COLOR: u32 = 0xfcba03;
pub const HAZARD_COLOR: u32 = 0xdd0000;
pub const WATER_COLOR: u32 = 0x0000ff;
pub const SNOW_COLOR: u32 = 0xadd8e6;
pub const GRASS_COLOR: u32 = 0x00ff00;
