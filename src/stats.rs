use crate::agent::Agent;
use crate::tick::DeathCause;
use bevy::prelude::*;

/// Process-lifetime counters, owned by the episode loop
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Ticks executed across all episodes
    pub ticks: u64,
    pub longest_life: u64,
    pub most_food_eaten: u64,

    pub deaths_by_cold: u64,
    pub deaths_by_drowning: u64,
    pub deaths_by_hazard: u64,
    pub deaths_by_exhaustion: u64,
    pub deaths_by_gluttony: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_death(&mut self, cause: DeathCause) {
        *self.counter_mut(cause) += 1;
    }

    pub fn deaths_by(&self, cause: DeathCause) -> u64 {
        match cause {
            DeathCause::Cold => self.deaths_by_cold,
            DeathCause::Drowning => self.deaths_by_drowning,
            DeathCause::Hazard => self.deaths_by_hazard,
            DeathCause::Exhaustion => self.deaths_by_exhaustion,
            DeathCause::Gluttony => self.deaths_by_gluttony,
        }
    }

    fn counter_mut(&mut self, cause: DeathCause) -> &mut u64 {
        match cause {
            DeathCause::Cold => &mut self.deaths_by_cold,
            DeathCause::Drowning => &mut self.deaths_by_drowning,
            DeathCause::Hazard => &mut self.deaths_by_hazard,
            DeathCause::Exhaustion => &mut self.deaths_by_exhaustion,
            DeathCause::Gluttony => &mut self.deaths_by_gluttony,
        }
    }

    /// Total recorded deaths, i.e. finished episodes
    pub fn deaths(&self) -> u64 {
        DeathCause::ALL.iter().map(|&cause| self.deaths_by(cause)).sum()
    }

    /// Fold a finished episode into the cross-episode maxima
    pub fn end_episode(&mut self, agent: &Agent) {
        self.longest_life = self.longest_life.max(agent.age);
        self.most_food_eaten = self.most_food_eaten.max(agent.food_eaten);
    }
}
