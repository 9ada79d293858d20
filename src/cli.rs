/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{value_parser, Arg, ArgMatches, Command};

/***************************************/
/*           Local modules             */
/***************************************/
use lift_sim::config::{Overrides, ReportFormat};

pub const DEFAULT_CONFIG: &str = "config.toml";

pub fn command() -> Command<'static> {
    Command::new("lift-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tick based simulation of lifts carrying a queue of passengers up from the ground floor")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value(DEFAULT_CONFIG)
                .help("TOML scenario file"),
        )
        .arg(u32_arg("floors", "Number of floors in the building"))
        .arg(u32_arg("max-weight", "Weight capacity of every lift"))
        .arg(u32_arg("max-passengers", "Passenger capacity of every lift"))
        .arg(
            Arg::new("lifts")
                .long("lifts")
                .takes_value(true)
                .value_parser(value_parser!(usize))
                .help("Number of lifts"),
        )
        .arg(
            Arg::new("express-lifts")
                .long("express-lifts")
                .takes_value(true)
                .value_parser(value_parser!(usize))
                .help("How many of the lifts only serve even floors"),
        )
        .arg(list_arg("weights", "Comma separated passenger weights, in queue order"))
        .arg(list_arg("destinations", "Comma separated destination floors, in queue order"))
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .takes_value(true)
                .value_parser(["text", "json"])
                .help("Report format"),
        )
}

fn u32_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .takes_value(true)
        .value_parser(value_parser!(u32))
        .help(help)
}

fn list_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    u32_arg(name, help).value_delimiter(',')
}

pub fn config_path(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string())
}

pub fn overrides(matches: &ArgMatches) -> Overrides {
    let list = |name: &str| -> Option<Vec<u32>> {
        matches
            .get_many::<u32>(name)
            .map(|values| values.copied().collect())
    };

    Overrides {
        floors: matches.get_one::<u32>("floors").copied(),
        max_weight: matches.get_one::<u32>("max-weight").copied(),
        max_passengers: matches.get_one::<u32>("max-passengers").copied(),
        lifts: matches.get_one::<usize>("lifts").copied(),
        express_lifts: matches.get_one::<usize>("express-lifts").copied(),
        weights: list("weights"),
        destinations: list("destinations"),
        format: matches
            .get_one::<String>("format")
            .map(|f| match f.as_str() {
                "json" => ReportFormat::Json,
                _ => ReportFormat::Text,
            }),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
