/* 3rd party libraries */
use crossbeam_channel as cbc;
use env_logger::Env;
use log::{error, info, warn};
use std::io::stdout;
use std::thread::Builder;

/* Custom libraries */
use lift_sim::config::{self, Config};
use lift_sim::report::Reporter;
use lift_sim::shared::TickReport;
use lift_sim::simulation::Simulation;
use lift_sim::unwrap_or_exit;
use lift_sim::Scenario;

/* Modules */
mod cli;

/* Main */
fn main() {
    let matches = cli::command().get_matches();

    // Load the configuration, command line flags win over the file
    let config_path = cli::config_path(&matches);
    let config = config::load_config(&config_path)
        .map(|config: Config| config.with_overrides(cli::overrides(&matches)));

    // Start logging before anything can fail loudly
    let log_level = match &config {
        Ok(config) => config.report.log_level.clone(),
        Err(_) => "warn".to_string(),
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = unwrap_or_exit!(config, "loading configuration");

    // Validate the scenario and set up the lifts
    let scenario = unwrap_or_exit!(Scenario::from_config(&config), "reading scenario");
    let manager = unwrap_or_exit!(scenario.build(), "validating scenario");

    // Initialize channels
    let (report_tx, report_rx) = cbc::unbounded::<TickReport>();

    // Start the simulation
    let simulation = Simulation::new(manager, report_tx);
    let simulation_thread = Builder::new().name("lift_manager".into());
    let simulation_handle = unwrap_or_exit!(
        simulation_thread.spawn(move || simulation.run()),
        "starting simulation thread"
    );

    // Render reports until the simulation hangs up
    let reporter = Reporter::new(config.report.format, report_rx, stdout().lock());
    if let Err(e) = reporter.run() {
        error!("Failed to write report: {}", e);
    }

    let summary = match simulation_handle.join() {
        Ok(summary) => summary,
        Err(_) => {
            error!("Simulation thread panicked");
            std::process::exit(1);
        }
    };

    if summary.stranded > 0 {
        warn!("{} passengers were never delivered", summary.stranded);
    }
    info!(
        "Delivered {} passengers in {} ticks",
        summary.delivered, summary.busy_ticks
    );
}
