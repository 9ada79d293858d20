/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, trace};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;
use crate::lift::LiftState;
use crate::shared::{Direction, LiftAction, LiftKind, LiftReport, Passenger, TickReport, GROUND_FLOOR};

/**
 * Advances a set of lifts through discrete time while draining the passenger queues.
 *
 * Every tick each lift performs at most one action, in fixed priority: let riders off,
 * board from the ground floor, move, or stay idle. Boarding is strictly first come first
 * served. If the passenger at the front of a queue does not fit, nobody behind them gets on.
 *
 * # Fields
 * - `lifts`:               Lift states, advanced in list order.
 * - `passengers`:          Queue served by standard lifts.
 * - `express_passengers`:  Queue of even floor passengers, served by express lifts.
 * - `time`:                Number of ticks advanced so far.
 * - `delivered`:           Passengers that have left a lift at their floor.
 *
 */
pub struct LiftManager {
    lifts: Vec<LiftState>,
    passengers: VecDeque<Passenger>,
    express_passengers: VecDeque<Passenger>,
    time: u64,
    delivered: usize,
}

impl LiftManager {
    /// Builds a manager from the configured lifts and the initial passenger list.
    ///
    /// When any express lift is present the passengers are split by destination parity,
    /// even floors to the express queue, keeping arrival order within each queue.
    pub fn new<I>(lifts: Vec<LiftState>, passengers: I) -> Result<LiftManager, ConfigError>
    where
        I: IntoIterator<Item = Passenger>,
    {
        if lifts.is_empty() {
            return Err(ConfigError::NoLifts);
        }

        let has_express = lifts.iter().any(|l| l.kind() == LiftKind::Express);
        let (express_passengers, passengers): (VecDeque<Passenger>, VecDeque<Passenger>) =
            passengers
                .into_iter()
                .partition(|p| has_express && LiftKind::Express.serves(p.floor));

        debug!(
            "Lift manager ready: {} lifts, {} regular and {} express passengers waiting",
            lifts.len(),
            passengers.len(),
            express_passengers.len()
        );

        Ok(LiftManager {
            lifts,
            passengers,
            express_passengers,
            time: 0,
            delivered: 0,
        })
    }

    pub fn lifts(&self) -> &[LiftState] {
        &self.lifts
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Passengers still waiting for a standard lift.
    pub fn waiting(&self) -> usize {
        self.passengers.len()
    }

    pub fn waiting_express(&self) -> usize {
        self.express_passengers.len()
    }

    /// Advances time one tick.
    ///
    /// Returns true if any lift changed state, false once every lift is idle.
    pub fn advance(&mut self) -> bool {
        self.step().changed
    }

    /// Advances time one tick and reports what every lift did.
    pub fn step(&mut self) -> TickReport {
        self.time += 1;

        let mut lifts = Vec::with_capacity(self.lifts.len());
        for index in 0..self.lifts.len() {
            let action = self.advance_lift(index);
            let lift = &self.lifts[index];

            trace!(
                "t={} lift {} ({:?}): {:?} at floor {}",
                self.time,
                index + 1,
                lift.kind(),
                action,
                lift.floor()
            );

            lifts.push(LiftReport {
                lift: index + 1,
                kind: lift.kind(),
                action,
                floor: lift.floor(),
                passengers: lift.passengers().len(),
            });
        }

        let changed = lifts.iter().any(|r| r.action.changed());
        if !changed {
            debug!("All lifts idle at t={}, simulation complete", self.time);
        }

        TickReport {
            time: self.time,
            lifts,
            changed,
        }
    }

    fn advance_lift(&mut self, index: usize) -> LiftAction {
        let lift = &mut self.lifts[index];

        if exit_if_needed(lift, &mut self.delivered) {
            return LiftAction::Exit;
        }

        let queue = match lift.kind() {
            LiftKind::Express => &mut self.express_passengers,
            LiftKind::Standard => &mut self.passengers,
        };
        if board_if_needed(lift, queue) {
            return LiftAction::Board;
        }

        if move_if_needed(lift) {
            return LiftAction::Move;
        }

        LiftAction::Idle
    }
}

/***************************************/
/*          Per lift actions           */
/***************************************/
fn exit_if_needed(lift: &mut LiftState, delivered: &mut usize) -> bool {
    if !lift.needs_exit() {
        return false;
    }

    *delivered += lift.exit().len();
    true
}

/// Boards from the front of `queue` until the next passenger does not fit.
fn board_if_needed(lift: &mut LiftState, queue: &mut VecDeque<Passenger>) -> bool {
    if lift.floor() != GROUND_FLOOR {
        return false;
    }

    let mut boarded = false;
    while let Some(passenger) = queue.front() {
        if !lift.can_board(passenger) {
            break;
        }

        if let Some(passenger) = queue.pop_front() {
            // can_board was checked on this exact passenger just above.
            if let Err(e) = lift.board(passenger) {
                panic!("tick protocol broke the capacity invariant: {}", e);
            }
            boarded = true;
        }
    }

    boarded
}

fn move_if_needed(lift: &mut LiftState) -> bool {
    let direction = lift.should_move_in();
    if direction == Direction::None {
        return false;
    }

    lift.move_in(direction);
    true
}
