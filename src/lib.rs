//! Discrete time simulation of lifts ferrying a queue of passengers up from the ground floor.
//!
//! [`manager::LiftManager`] is the tick engine. It owns the [`lift::LiftState`]s and the
//! passenger queues and is driven by calling `advance` until it reports no change.
//! [`scenario::Scenario`] validates caller input and builds the manager, [`simulation`] and
//! [`report`] drive it on a thread and render what happened.

pub mod config;
pub mod error;
pub mod lift;
pub mod manager;
pub mod report;
pub mod scenario;
pub mod shared;
pub mod simulation;

pub use error::{BoardingError, ConfigError};
pub use lift::LiftState;
pub use manager::LiftManager;
pub use scenario::{calculate_lift_ticks, Scenario};
