use crate::agent::Agent;
use crate::config::SENSORY_WIDTH;
use crate::world::{Cell, WorldGrid};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Fixed-width sensory input word fed to the perceptron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SensoryBits(pub u16);

impl SensoryBits {
    pub const EMPTY: SensoryBits = SensoryBits(0);

    // Internal state
    pub const SATIATED: SensoryBits = SensoryBits(1 << 0);
    pub const VERY_SATIATED: SensoryBits = SensoryBits(1 << 1);
    pub const STAMINA_LOW: SensoryBits = SensoryBits(1 << 2);
    pub const STAMINA_VERY_LOW: SensoryBits = SensoryBits(1 << 3);
    pub const OXYGEN_LOW: SensoryBits = SensoryBits(1 << 4);
    pub const OXYGEN_VERY_LOW: SensoryBits = SensoryBits(1 << 5);
    pub const HEAT_LOW: SensoryBits = SensoryBits(1 << 6);
    pub const HEAT_VERY_LOW: SensoryBits = SensoryBits(1 << 7);

    // Current tile
    pub const SUBMERGED: SensoryBits = SensoryBits(1 << 8);
    pub const ON_SNOW: SensoryBits = SensoryBits(1 << 9);

    // Vision beams
    pub const FOOD_FRONT: SensoryBits = SensoryBits(1 << 10);
    pub const HAZARD_FRONT: SensoryBits = SensoryBits(1 << 11);
    pub const FOOD_LEFT: SensoryBits = SensoryBits(1 << 12);
    pub const HAZARD_LEFT: SensoryBits = SensoryBits(1 << 13);
    pub const FOOD_RIGHT: SensoryBits = SensoryBits(1 << 14);
    pub const HAZARD_RIGHT: SensoryBits = SensoryBits(1 << 15);

    /// Channels that never count toward activation. Every bit is wired in this layout.
    pub const DEAD_INPUTS: SensoryBits = SensoryBits(0);

    /// Channel names in bit order, for display
    pub const NAMES: [&'static str; SENSORY_WIDTH as usize] = [
        "satiated",
        "very-satiated",
        "stamina-low",
        "stamina-very-low",
        "oxygen-low",
        "oxygen-very-low",
        "heat-low",
        "heat-very-low",
        "submerged",
        "on-snow",
        "food-front",
        "hazard-front",
        "food-left",
        "hazard-left",
        "food-right",
        "hazard-right",
    ];

    pub fn contains(self, other: SensoryBits) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Bits that take part in activation counting
    pub fn live_mask() -> SensoryBits {
        !Self::DEAD_INPUTS
    }

    /// Number of channels outside DEAD_INPUTS
    pub fn active_input_count() -> u32 {
        Self::live_mask().count()
    }

    /// Names of the set channels, lowest bit first
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .enumerate()
            .filter(move |(bit, _)| self.0 & (1 << *bit) != 0)
            .map(|(_, name)| name)
    }
}

impl BitOr for SensoryBits {
    type Output = SensoryBits;

    fn bitor(self, rhs: SensoryBits) -> SensoryBits {
        SensoryBits(self.0 | rhs.0)
    }
}

impl BitOrAssign for SensoryBits {
    fn bitor_assign(&mut self, rhs: SensoryBits) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SensoryBits {
    type Output = SensoryBits;

    fn bitand(self, rhs: SensoryBits) -> SensoryBits {
        SensoryBits(self.0 & rhs.0)
    }
}

impl Not for SensoryBits {
    type Output = SensoryBits;

    fn not(self) -> SensoryBits {
        SensoryBits(!self.0)
    }
}

impl fmt::Display for SensoryBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

/// One of the three vision beams, relative to the agent's facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beam {
    Front,
    Left,
    Right,
}

impl Beam {
    pub const ALL: [Beam; 3] = [Beam::Front, Beam::Left, Beam::Right];

    fn food_bit(self) -> SensoryBits {
        match self {
            Beam::Front => SensoryBits::FOOD_FRONT,
            Beam::Left => SensoryBits::FOOD_LEFT,
            Beam::Right => SensoryBits::FOOD_RIGHT,
        }
    }

    fn hazard_bit(self) -> SensoryBits {
        match self {
            Beam::Front => SensoryBits::HAZARD_FRONT,
            Beam::Left => SensoryBits::HAZARD_LEFT,
            Beam::Right => SensoryBits::HAZARD_RIGHT,
        }
    }
}

/// Encode the agent's internal state, current tile and vision into one bitmask
pub fn sense(world: &WorldGrid, agent: &Agent) -> SensoryBits {
    internal_state(agent) | current_tile(world.get(agent.x, agent.y)) | vision(world, agent)
}

/// Satiation and low-resource tiers
pub fn internal_state(agent: &Agent) -> SensoryBits {
    let mut bits = SensoryBits::EMPTY;

    let max = agent.max_stamina;
    if agent.stamina + max / 4 > max {
        bits |= SensoryBits::SATIATED;
    }
    if agent.stamina + max / 6 > max {
        bits |= SensoryBits::VERY_SATIATED;
    }

    bits |= low_tiers(
        agent.stamina,
        agent.max_stamina,
        SensoryBits::STAMINA_LOW,
        SensoryBits::STAMINA_VERY_LOW,
    );
    bits |= low_tiers(
        agent.oxygen,
        agent.max_oxygen,
        SensoryBits::OXYGEN_LOW,
        SensoryBits::OXYGEN_VERY_LOW,
    );
    bits |= low_tiers(agent.heat, agent.max_heat, SensoryBits::HEAT_LOW, SensoryBits::HEAT_VERY_LOW);

    bits
}

fn low_tiers(value: i32, max: i32, low: SensoryBits, very_low: SensoryBits) -> SensoryBits {
    let mut bits = SensoryBits::EMPTY;
    if value < max / 8 {
        bits |= low;
    }
    if value < max / 16 {
        bits |= very_low;
    }
    bits
}

pub fn current_tile(cell: Cell) -> SensoryBits {
    let mut bits = SensoryBits::EMPTY;
    if cell.contains(Cell::WATER) {
        bits |= SensoryBits::SUBMERGED;
    }
    if cell.contains(Cell::SNOW) {
        bits |= SensoryBits::ON_SNOW;
    }
    bits
}

/// Run all three beams
pub fn vision(world: &WorldGrid, agent: &Agent) -> SensoryBits {
    Beam::ALL
        .into_iter()
        .map(|beam| scan_beam(world, agent, beam))
        .fold(SensoryBits::EMPTY, |acc, bits| acc | bits)
}

/// Sweep one beam outward and latch the first hazard or food it meets.
///
/// Ring `r` is centred on the tile `r` steps along the beam and spans
/// `3 + 2r` tiles across the axis perpendicular to the beam, so ring 0 is the
/// agent's own row. Within a tile hazard wins over food.
pub fn scan_beam(world: &WorldGrid, agent: &Agent, beam: Beam) -> SensoryBits {
    let direction = match beam {
        Beam::Front => agent.facing,
        Beam::Left => agent.facing.turned_left(),
        Beam::Right => agent.facing.turned_right(),
    };
    let (dx, dy) = direction.vector();
    // Perpendicular axis: offsets along x when the beam runs along y, and vice versa.
    let (px, py) = (dy.abs(), dx.abs());

    for r in 0..agent.vision_distance {
        let cx = agent.x + dx * r;
        let cy = agent.y + dy * r;
        let half_width = r + 1;

        for offset in -half_width..=half_width {
            let cell = world.get(cx + px * offset, cy + py * offset);
            if cell.contains(Cell::HAZARD) {
                return beam.hazard_bit();
            }
            if cell.contains(Cell::FOOD) {
                return beam.food_bit();
            }
        }
    }

    SensoryBits::EMPTY
}
