pub mod state;
pub mod state_tests;

pub use state::LiftState;
