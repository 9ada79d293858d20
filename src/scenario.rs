/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::error::ConfigError;
use crate::lift::LiftState;
use crate::manager::LiftManager;
use crate::shared::{Lift, LiftKind, Passenger};

/**
 * A validated description of one simulation run.
 *
 * Everything the tick engine takes for granted is checked here, once, before the first tick.
 *
 * # Fields
 * - `floors`:          Number of floors in the building, numbered from 1.
 * - `lift`:            Capacity shared by every lift.
 * - `lifts`:           Number of lifts.
 * - `express_lifts`:   How many of those are express. The first `lifts - express_lifts`
 *                      are standard, the rest express.
 * - `passengers`:      Initial queue in arrival order.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub floors: u32,
    pub lift: Lift,
    pub lifts: usize,
    pub express_lifts: usize,
    pub passengers: Vec<Passenger>,
}

impl Scenario {
    /// Pairs up weights and destinations, failing if their lengths differ.
    pub fn from_arrays(
        weights: &[u32],
        destinations: &[u32],
        floors: u32,
        max_passengers: u32,
        max_weight: u32,
    ) -> Result<Scenario, ConfigError> {
        if weights.len() != destinations.len() {
            return Err(ConfigError::LengthMismatch {
                weights: weights.len(),
                destinations: destinations.len(),
            });
        }

        let passengers = weights
            .iter()
            .zip(destinations)
            .map(|(&weight, &floor)| Passenger::new(weight, floor))
            .collect();

        Ok(Scenario {
            floors,
            lift: Lift::new(max_weight, max_passengers),
            lifts: 1,
            express_lifts: 0,
            passengers,
        })
    }

    pub fn from_config(config: &Config) -> Result<Scenario, ConfigError> {
        let sim = &config.simulation;
        let mut scenario = Scenario::from_arrays(
            &config.passengers.weights,
            &config.passengers.destinations,
            sim.floors,
            sim.max_passengers,
            sim.max_weight,
        )?;
        scenario.lifts = sim.lifts;
        scenario.express_lifts = sim.express_lifts;

        Ok(scenario)
    }

    pub fn with_lifts(mut self, lifts: usize, express_lifts: usize) -> Scenario {
        self.lifts = lifts;
        self.express_lifts = express_lifts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.floors == 0 {
            return Err(ConfigError::NoFloors);
        }
        if self.lift.weight_capacity == 0 || self.lift.passenger_capacity == 0 {
            return Err(ConfigError::NoCapacity {
                weight: self.lift.weight_capacity,
                passengers: self.lift.passenger_capacity,
            });
        }
        if self.lifts == 0 {
            return Err(ConfigError::NoLifts);
        }
        if self.express_lifts > self.lifts {
            return Err(ConfigError::TooManyExpress {
                express: self.express_lifts,
                lifts: self.lifts,
            });
        }

        let only_express = self.express_lifts == self.lifts;
        for (index, p) in self.passengers.iter().enumerate() {
            if p.floor == 0 || p.floor > self.floors {
                return Err(ConfigError::FloorOutOfRange {
                    index,
                    floor: p.floor,
                    floors: self.floors,
                });
            }
            if p.weight > self.lift.weight_capacity {
                return Err(ConfigError::TooHeavy {
                    index,
                    weight: p.weight,
                    capacity: self.lift.weight_capacity,
                });
            }
            if only_express && !LiftKind::Express.serves(p.floor) {
                return Err(ConfigError::Unserved {
                    index,
                    floor: p.floor,
                });
            }
        }

        Ok(())
    }

    /// Validates the scenario and sets up the lifts and queues for the tick engine.
    pub fn build(&self) -> Result<LiftManager, ConfigError> {
        self.validate()?;

        let standard = self.lifts - self.express_lifts;
        let lifts = (0..self.lifts)
            .map(|i| {
                if i < standard {
                    LiftState::standard(self.lift)
                } else {
                    LiftState::express(self.lift)
                }
            })
            .collect();

        info!(
            "Simulating {} standard and {} express lifts over {} floors for {} passengers",
            standard,
            self.express_lifts,
            self.floors,
            self.passengers.len()
        );

        LiftManager::new(lifts, self.passengers.iter().copied())
    }
}

/// Runs a single lift over the given passengers until every lift is idle.
///
/// Returns the number of ticks in which something happened.
pub fn calculate_lift_ticks(
    weights: &[u32],
    destinations: &[u32],
    floors: u32,
    max_passengers: u32,
    max_weight: u32,
) -> Result<u64, ConfigError> {
    let scenario = Scenario::from_arrays(weights, destinations, floors, max_passengers, max_weight)?;
    let mut manager = scenario.build()?;

    let mut busy_ticks = 0;
    while manager.advance() {
        busy_ticks += 1;
    }

    Ok(busy_ticks)
}

/***************************************/
/*             Unit tests              */
/***************************************/
