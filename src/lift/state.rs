/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::BoardingError;
use crate::shared::{Direction, Lift, LiftKind, Passenger, GROUND_FLOOR};

/**
 * Holds the state of one lift car and the rules for changing it.
 *
 * A `LiftState` knows which floor it is on and who is riding it. It decides whether a
 * waiting passenger fits, lets riders off at their floor and picks the next direction
 * of travel. Express lifts share the same state and only differ in boarding eligibility
 * and step size, both dispatched on `kind`.
 *
 * # Fields
 * - `spec`:        Weight and passenger limits of the car.
 * - `kind`:        Standard or express.
 * - `floor`:       The floor the car is currently at. Starts at the ground floor.
 * - `passengers`:  Riders currently on board, in boarding order.
 *
 * # Invariants
 * The total weight of `passengers` never exceeds `spec.weight_capacity` and their count
 * never exceeds `spec.passenger_capacity`. An express car only ever carries riders bound
 * for even floors.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct LiftState {
    spec: Lift,
    kind: LiftKind,
    floor: u32,
    passengers: Vec<Passenger>,
}

impl LiftState {
    pub fn new(spec: Lift, kind: LiftKind) -> LiftState {
        LiftState {
            spec,
            kind,
            floor: GROUND_FLOOR,
            passengers: Vec::new(),
        }
    }

    pub fn standard(spec: Lift) -> LiftState {
        LiftState::new(spec, LiftKind::Standard)
    }

    pub fn express(spec: Lift) -> LiftState {
        LiftState::new(spec, LiftKind::Express)
    }

    /// Places an empty car at `floor` instead of the ground floor.
    pub fn starting_at(mut self, floor: u32) -> LiftState {
        self.floor = floor.max(GROUND_FLOOR);
        self
    }

    pub fn spec(&self) -> Lift {
        self.spec
    }

    pub fn kind(&self) -> LiftKind {
        self.kind
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Combined weight of everyone on board.
    pub fn load(&self) -> u64 {
        self.passengers.iter().map(|p| u64::from(p.weight)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Checks if `passenger` can get on without breaking either capacity limit.
    pub fn can_board(&self, passenger: &Passenger) -> bool {
        let fits = self.passengers.len() < self.spec.passenger_capacity as usize
            && self.load() + u64::from(passenger.weight) <= u64::from(self.spec.weight_capacity);

        fits && self.kind.serves(passenger.floor)
    }

    pub fn board(&mut self, passenger: Passenger) -> Result<(), BoardingError> {
        if !self.can_board(&passenger) {
            return Err(BoardingError {
                passenger,
                load: self.load(),
                weight_capacity: self.spec.weight_capacity,
                count: self.passengers.len(),
                passenger_capacity: self.spec.passenger_capacity,
            });
        }

        self.passengers.push(passenger);
        Ok(())
    }

    /// True if anyone on board is getting off at the current floor.
    pub fn needs_exit(&self) -> bool {
        self.passengers.iter().any(|p| p.floor == self.floor)
    }

    /// Lets off everyone bound for the current floor and hands them back as delivered.
    pub fn exit(&mut self) -> Vec<Passenger> {
        let floor = self.floor;
        let (delivered, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .passengers
            .drain(..)
            .partition(|p| p.floor == floor);
        self.passengers = staying;

        delivered
    }

    /// Picks the next direction of travel.
    ///
    /// Pending exits always win, so a car with riders for this floor stays put. An empty
    /// car heads back down one step at a time and a loaded car always goes up.
    pub fn should_move_in(&self) -> Direction {
        if self.needs_exit() || (self.floor == GROUND_FLOOR && self.passengers.is_empty()) {
            return Direction::None;
        }

        if self.passengers.is_empty() {
            return Direction::Down;
        }

        Direction::Up
    }

    pub fn move_in(&mut self, direction: Direction) {
        self.floor = match (self.kind, direction) {
            (_, Direction::None) => self.floor,
            (LiftKind::Standard, Direction::Up) => self.floor + 1,
            (LiftKind::Standard, Direction::Down) => self.floor.saturating_sub(1),

            // Floor 1 is the only odd floor an express car stops at.
            (LiftKind::Express, Direction::Up) if self.floor == GROUND_FLOOR => 2,
            (LiftKind::Express, Direction::Down) if self.floor == 2 => GROUND_FLOOR,
            (LiftKind::Express, Direction::Up) => self.floor + 2,
            (LiftKind::Express, Direction::Down) => self.floor.saturating_sub(2),
        }
        .max(GROUND_FLOOR);
    }
}
