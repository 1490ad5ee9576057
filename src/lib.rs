//! Single-agent foraging simulation on a toroidal grid, driven by a static
//! random perceptron and tracked across repeated episodes.

pub mod agent;
pub mod config;
pub mod direction;
pub mod perceptron;
pub mod senses;
pub mod simulation;
pub mod stats;
pub mod tick;
pub mod view;
pub mod world;

pub use agent::Agent;
pub use direction::{Action, Facing};
pub use perceptron::{ActionSet, Perceptron, choose_action};
pub use senses::{SensoryBits, sense};
pub use simulation::{SimulationPlugin, decide, reset};
pub use stats::Statistics;
pub use tick::{DeathCause, tick};
pub use world::{Cell, WorldGrid};
