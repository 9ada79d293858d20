pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::Lift;
pub use structs::LiftAction;
pub use structs::LiftKind;
pub use structs::LiftReport;
pub use structs::Passenger;
pub use structs::SimulationSummary;
pub use structs::TickReport;
pub use structs::GROUND_FLOOR;
