/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub passengers: PassengerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub floors: u32,
    pub max_weight: u32,
    pub max_passengers: u32,
    #[serde(default = "default_lifts")]
    pub lifts: usize,
    #[serde(default)]
    pub express_lifts: usize,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PassengerConfig {
    pub weights: Vec<u32>,
    pub destinations: Vec<u32>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            format: ReportFormat::default(),
            log_level: default_log_level(),
        }
    }
}

/// Values given on the command line. Anything set here wins over the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub floors: Option<u32>,
    pub max_weight: Option<u32>,
    pub max_passengers: Option<u32>,
    pub lifts: Option<usize>,
    pub express_lifts: Option<usize>,
    pub weights: Option<Vec<u32>>,
    pub destinations: Option<Vec<u32>>,
    pub format: Option<ReportFormat>,
}

fn default_lifts() -> usize {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

impl Config {
    pub fn with_overrides(mut self, overrides: Overrides) -> Config {
        let sim = &mut self.simulation;
        sim.floors = overrides.floors.unwrap_or(sim.floors);
        sim.max_weight = overrides.max_weight.unwrap_or(sim.max_weight);
        sim.max_passengers = overrides.max_passengers.unwrap_or(sim.max_passengers);
        sim.lifts = overrides.lifts.unwrap_or(sim.lifts);
        sim.express_lifts = overrides.express_lifts.unwrap_or(sim.express_lifts);

        if let Some(weights) = overrides.weights {
            self.passengers.weights = weights;
        }
        if let Some(destinations) = overrides.destinations {
            self.passengers.destinations = destinations;
        }
        if let Some(format) = overrides.format {
            self.report.format = format;
        }

        self
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
