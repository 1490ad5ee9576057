use std::fmt;

/// Absolute facing on the grid. North is toward smaller y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::South, Facing::East, Facing::West];

    /// Unit step (dx, dy) for this facing
    pub fn vector(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::South => (0, 1),
            Facing::East => (1, 0),
            Facing::West => (-1, 0),
        }
    }

    fn from_vector(v: (i32, i32)) -> Self {
        match v {
            (0, -1) => Facing::North,
            (0, 1) => Facing::South,
            (1, 0) => Facing::East,
            (-1, 0) => Facing::West,
            _ => unreachable!("facing vectors are always cardinal unit steps"),
        }
    }

    pub fn reversed(self) -> Self {
        Self::from_vector(reverse(self.vector()))
    }

    pub fn turned_right(self) -> Self {
        Self::from_vector(rotate_right(self.vector()))
    }

    pub fn turned_left(self) -> Self {
        Self::from_vector(reverse(rotate_right(self.vector())))
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::North => write!(f, "north"),
            Facing::South => write!(f, "south"),
            Facing::East => write!(f, "east"),
            Facing::West => write!(f, "west"),
        }
    }
}

/// Relative action chosen for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Nothing,
    Forward,
    Backward,
    Left,
    Right,
}

impl Action {
    /// Indexed the same way as the perceptron's output nodes
    pub const ALL: [Action; 5] = [
        Action::Nothing,
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
    ];

    pub fn index(self) -> usize {
        match self {
            Action::Nothing => 0,
            Action::Forward => 1,
            Action::Backward => 2,
            Action::Left => 3,
            Action::Right => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Nothing => write!(f, "nothing"),
            Action::Forward => write!(f, "forward"),
            Action::Backward => write!(f, "backward"),
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
        }
    }
}

/// Outcome of resolving a relative action against the current facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    /// Facing after the action
    pub facing: Facing,
    /// Unit step to apply, (0, 0) for the no-op
    pub step: (i32, i32),
}

// Clockwise quarter turn with y pointing down: swap the axes, negate x.
fn rotate_right((x, y): (i32, i32)) -> (i32, i32) {
    (-y, x)
}

fn reverse((x, y): (i32, i32)) -> (i32, i32) {
    (-x, -y)
}

/// Direction the action points toward. Left is a right turn followed by a reversal.
pub fn resolve_direction(facing: Facing, action: Action) -> Facing {
    match action {
        Action::Nothing | Action::Forward => facing,
        Action::Backward => facing.reversed(),
        Action::Right => facing.turned_right(),
        Action::Left => facing.turned_left(),
    }
}

/// New facing and movement step for an action. Backward moves without turning.
pub fn resolve_motion(facing: Facing, action: Action) -> Motion {
    let direction = resolve_direction(facing, action);
    match action {
        Action::Nothing => Motion { facing, step: (0, 0) },
        Action::Backward => Motion { facing, step: direction.vector() },
        Action::Forward | Action::Left | Action::Right => Motion {
            facing: direction,
            step: direction.vector(),
        },
    }
}
