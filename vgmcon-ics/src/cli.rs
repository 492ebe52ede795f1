use std::process;
use std::time::Duration;

use chrono_tz::Tz;
use getopts::{Matches, Options};
use vgmcon_parser::Layout;

use crate::config::{Config, Edition, OutputFormat};

#[derive(Debug)]
pub enum Command {
    Run(Config),
    Help(String),
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "e",
        "edition",
        "Schedule edition to convert, 2024 or 2025 [Default: 2024]",
        "YEAR",
    );
    opts.optopt("u", "url", "Schedule page to fetch", "URL");
    opts.optopt(
        "c",
        "cache",
        "Local copy of the schedule page, read instead of fetching when present",
        "PATH",
    );
    opts.optopt("o", "output", "File to write the calendar to", "PATH");
    opts.optopt(
        "z",
        "timezone",
        "Timezone of the schedule's wall-clock times [Default: America/Chicago]",
        "IANA_NAME",
    );
    opts.optopt(
        "l",
        "layout",
        "Where sessions keep their times: auto, title or session",
        "LAYOUT",
    );
    opts.optopt(
        "t",
        "timeout",
        "Timeout for fetching the schedule, 0 to wait forever [Default: 30]",
        "SECONDS",
    );
    opts.optflag(
        "j",
        "json",
        "Write the extracted events as JSON instead of iCalendar",
    );
    opts
}

pub fn try_parse(args: Vec<String>) -> Result<Command, String> {
    let opts = opts();
    let matches = opts.parse(args).map_err(|fail| fail.to_string())?;

    if matches.opt_present("help") {
        return Ok(Command::Help(
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))),
        ));
    }

    let edition = get::<Edition>(&matches, "edition")?.unwrap_or_default();
    let mut config = edition.config();

    if let Some(url) = matches.opt_str("url") {
        config.url = url;
    }

    if let Some(cache_path) = matches.opt_str("cache") {
        config.cache_path = cache_path.into();
    }

    if let Some(timezone) = get::<Tz>(&matches, "timezone")? {
        config.timezone = timezone;
    }

    if let Some(layout) = matches.opt_str("layout") {
        config.layout = match layout.as_str() {
            "auto" => None,
            _ => Some(layout.parse::<Layout>().map_err(|err| invalid("layout", err))?),
        };
    }

    if let Some(secs) = get::<u64>(&matches, "timeout")? {
        config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }

    if matches.opt_present("json") {
        config.format = OutputFormat::Json;
        config.output_path.set_extension("json");
    }

    if let Some(output_path) = matches.opt_str("output") {
        config.output_path = output_path.into();
    }

    Ok(Command::Run(config))
}

pub fn parse(args: Vec<String>) -> Config {
    match try_parse(args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help(usage)) => {
            println!("{usage}");
            process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn get<T>(matches: &Matches, name: &str) -> Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches.opt_get(name).map_err(|err| invalid(name, err))
}

fn invalid(name: &str, err: impl std::fmt::Display) -> String {
    format!("Provided value for option '{name}' is invalid: {err}")
}
