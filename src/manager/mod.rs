pub mod manager;

pub use manager::LiftManager;
