use crate::config::*;
use crate::direction::Action;
use crate::senses::SensoryBits;
use bevy::log::warn;
use rand::Rng;
use std::fmt;

/// Bitset of candidate actions, bit i set when output node i fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(pub u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    pub fn insert(&mut self, action: Action) {
        self.0 |= 1 << action.index();
    }

    pub fn contains(self, action: Action) -> bool {
        self.0 & (1 << action.index()) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |action| self.contains(*action))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::EMPTY;
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|action| action.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Single layer of masked threshold units, one per action.
///
/// Node `i` fires when `popcount(((and_masks[i] & input) ^ xor_masks[i]) & live)`
/// reaches `thresholds[i]`. Weights are drawn once per episode and never trained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Perceptron {
    pub and_masks: [u16; OUTPUT_NODES],
    pub xor_masks: [u16; OUTPUT_NODES],
    pub thresholds: [u32; OUTPUT_NODES],
}

impl Perceptron {
    /// Create a new randomly weighted model
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut model = Self::default();
        model.randomize(rng);
        model
    }

    /// Redraw every mask and recalibrate thresholds to half the live inputs
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        rng.fill(&mut self.and_masks[..]);
        rng.fill(&mut self.xor_masks[..]);

        let threshold = SensoryBits::active_input_count() / 2;
        self.thresholds = [threshold; OUTPUT_NODES];
    }

    /// Activation count of one node for the given input
    pub fn activation(&self, node: usize, input: SensoryBits) -> u32 {
        let live = SensoryBits::live_mask().0;
        (((self.and_masks[node] & input.0) ^ self.xor_masks[node]) & live).count_ones()
    }

    /// Every action whose node reaches its threshold
    pub fn evaluate(&self, input: SensoryBits) -> ActionSet {
        (0..OUTPUT_NODES)
            .filter(|&node| self.activation(node, input) >= self.thresholds[node])
            .filter_map(Action::from_index)
            .collect()
    }
}

/// Pick one action from the candidates, uniformly per set bit.
/// An empty set falls back to the no-op.
pub fn choose_action<R: Rng + ?Sized>(candidates: ActionSet, rng: &mut R) -> Action {
    match candidates.len() {
        0 => {
            warn!("Decision model produced no candidate actions, doing nothing");
            Action::Nothing
        }
        1 => candidates.iter().next().unwrap_or(Action::Nothing),
        count => {
            let pick = rng.gen_range(0..count);
            candidates.iter().nth(pick).unwrap_or(Action::Nothing)
        }
    }
}
