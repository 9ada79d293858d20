/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Passenger;

/// Raised when a passenger is pushed into a lift that cannot take them.
/// The manager checks `can_board` first, so seeing this means the tick
/// protocol itself is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("over capacity: cannot board {passenger:?} ({load}/{weight_capacity} kg, {count}/{passenger_capacity} riders)")]
pub struct BoardingError {
    pub passenger: Passenger,
    pub load: u64,
    pub weight_capacity: u32,
    pub count: usize,
    pub passenger_capacity: u32,
}

/// Caller side errors, caught once before the first tick.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{weights} weights but {destinations} destinations")]
    LengthMismatch { weights: usize, destinations: usize },
    #[error("building must have at least one floor")]
    NoFloors,
    #[error("lift capacity must be positive (weight {weight}, passengers {passengers})")]
    NoCapacity { weight: u32, passengers: u32 },
    #[error("at least one lift is required")]
    NoLifts,
    #[error("{express} express lifts requested but only {lifts} lifts configured")]
    TooManyExpress { express: usize, lifts: usize },
    #[error("passenger {index} is bound for floor {floor}, building has floors 1..={floors}")]
    FloorOutOfRange { index: usize, floor: u32, floors: u32 },
    #[error("passenger {index} weighs {weight}, above lift capacity {capacity}")]
    TooHeavy { index: usize, weight: u32, capacity: u32 },
    #[error("passenger {index} is bound for odd floor {floor} but every lift is express")]
    Unserved { index: usize, floor: u32 },
}
