/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::manager::LiftManager;
use crate::shared::{SimulationSummary, TickReport};

/**
 * Drives a `LiftManager` until it goes quiescent, publishing every tick.
 *
 * # Fields
 * - `manager`:     The tick engine being driven.
 * - `report_tx`:   Receives one `TickReport` per tick, the final idle tick included.
 *
 */
pub struct Simulation {
    manager: LiftManager,
    report_tx: cbc::Sender<TickReport>,
}

impl Simulation {
    pub fn new(manager: LiftManager, report_tx: cbc::Sender<TickReport>) -> Simulation {
        Simulation { manager, report_tx }
    }

    /// Steps until a tick changes nothing. Dropping `self` closes the report channel.
    pub fn run(mut self) -> SimulationSummary {
        let mut busy_ticks = 0;
        let mut reporting = true;

        loop {
            let report = self.manager.step();
            let changed = report.changed;
            if changed {
                busy_ticks += 1;
            }

            if reporting && self.report_tx.send(report).is_err() {
                warn!("Report receiver hung up, continuing without reports");
                reporting = false;
            }

            if !changed {
                break;
            }
        }

        let stranded = self.manager.waiting()
            + self.manager.waiting_express()
            + self
                .manager
                .lifts()
                .iter()
                .map(|l| l.passengers().len())
                .sum::<usize>();

        let summary = SimulationSummary {
            time: self.manager.time(),
            busy_ticks,
            delivered: self.manager.delivered(),
            stranded,
        };
        info!("Simulation finished: {:?}", summary);

        summary
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
