/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ReportFormat;
use crate::shared::{LiftAction, LiftReport, TickReport};

/**
 * Renders tick reports as they arrive from the simulation thread.
 *
 * `Text` prints one tab separated status line per lift, the tick number in front of the
 * first lift, and `Completed` on the final idle tick. `Json` prints one JSON object per tick.
 */
pub struct Reporter<W: Write> {
    format: ReportFormat,
    report_rx: cbc::Receiver<TickReport>,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(format: ReportFormat, report_rx: cbc::Receiver<TickReport>, out: W) -> Reporter<W> {
        Reporter {
            format,
            report_rx,
            out,
        }
    }

    /// Consumes reports until the sending side hangs up.
    pub fn run(mut self) -> io::Result<W> {
        if self.format == ReportFormat::Text {
            writeln!(self.out, "Tick\tLift Status")?;
        }

        for report in self.report_rx.iter() {
            match self.format {
                ReportFormat::Text => write_text(&mut self.out, &report)?,
                ReportFormat::Json => {
                    serde_json::to_writer(&mut self.out, &report)?;
                    writeln!(self.out)?;
                }
            }
        }

        self.out.flush()?;
        Ok(self.out)
    }
}

fn write_text<W: Write>(out: &mut W, report: &TickReport) -> io::Result<()> {
    for (i, lift) in report.lifts.iter().enumerate() {
        let tick = if i == 0 { report.time.to_string() } else { String::new() };
        writeln!(
            out,
            "{}\t\t{}Lift {}: {}",
            tick,
            lift.kind.label(),
            lift.lift,
            status(lift)
        )?;
    }

    if !report.changed {
        writeln!(out, "\t\tCompleted")?;
    }

    Ok(())
}

fn status(lift: &LiftReport) -> String {
    match lift.action {
        LiftAction::Exit => format!("Unloading at floor {}", lift.floor),
        LiftAction::Board => format!("Loading at floor {}", lift.floor),
        LiftAction::Move => format!("Moving to floor {}", lift.floor),
        LiftAction::Idle => "Idle".to_string(),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
