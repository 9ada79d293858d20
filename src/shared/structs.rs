/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*             Constants               */
/***************************************/
/// The floor every lift starts at and boards from.
pub const GROUND_FLOOR: u32 = 1;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A rider waiting for, or travelling in, a lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    pub weight: u32,
    pub floor: u32,
}

impl Passenger {
    pub fn new(weight: u32, floor: u32) -> Passenger {
        Passenger { weight, floor }
    }
}

/// Physical limits of a lift car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lift {
    pub weight_capacity: u32,
    pub passenger_capacity: u32,
}

impl Lift {
    pub fn new(weight_capacity: u32, passenger_capacity: u32) -> Lift {
        Lift {
            weight_capacity,
            passenger_capacity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    None,
}

/// Capability tag of a lift. Express lifts only carry passengers bound for
/// even floors and travel two floors per step, except between floors 1 and 2.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LiftKind {
    #[default]
    Standard,
    Express,
}

impl LiftKind {
    /// Whether a lift of this kind may carry a passenger to `floor`.
    pub fn serves(&self, floor: u32) -> bool {
        match *self {
            LiftKind::Standard => true,
            LiftKind::Express => floor % 2 == 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            LiftKind::Standard => "",
            LiftKind::Express => "Express ",
        }
    }
}

/// What a single lift did during one tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LiftAction {
    Exit,
    Board,
    Move,
    Idle,
}

impl LiftAction {
    pub fn changed(&self) -> bool {
        *self != LiftAction::Idle
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LiftReport {
    pub lift: usize,
    pub kind: LiftKind,
    pub action: LiftAction,
    pub floor: u32,
    pub passengers: usize,
}

/// Snapshot of every lift after one call to the manager's tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickReport {
    pub time: u64,
    pub lifts: Vec<LiftReport>,
    pub changed: bool,
}

/// Totals handed back once the simulation has gone quiescent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Ticks elapsed, including the final quiescent one.
    pub time: u64,
    /// Ticks in which at least one lift exited, boarded or moved.
    pub busy_ticks: u64,
    pub delivered: usize,
    pub stranded: usize,
}
