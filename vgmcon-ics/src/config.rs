use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::{America::Chicago, Tz};
use vgmcon_parser::Layout;

/// A yearly edition of the schedule page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edition {
    #[default]
    Vgmcon2024,
    Vgmcon2025,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Ics,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub timezone: Tz,
    pub cache_path: PathBuf,
    pub output_path: PathBuf,
    /// `None` detects the layout from the page.
    pub layout: Option<Layout>,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl Edition {
    pub fn config(self) -> Config {
        let (url, cache_path, output_path, layout) = match self {
            Self::Vgmcon2024 => (
                "https://vgmcon.org/2024-schedule/",
                "schedule.html",
                "vgmcon2024.ics",
                Layout::TitleRange,
            ),
            Self::Vgmcon2025 => (
                "https://vgmcon.org/2025-schedule/",
                "schedule-2025.html",
                "vgmcon2025.ics",
                Layout::SessionField,
            ),
        };

        Config {
            url: url.to_string(),
            timezone: Chicago,
            cache_path: cache_path.into(),
            output_path: output_path.into(),
            layout: Some(layout),
            timeout: Some(DEFAULT_TIMEOUT),
            format: OutputFormat::Ics,
        }
    }
}

impl FromStr for Edition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2024" => Ok(Self::Vgmcon2024),
            "2025" => Ok(Self::Vgmcon2025),
            _ => Err(format!("no edition `{s}`, expected 2024 or 2025")),
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vgmcon2024 => "2024",
            Self::Vgmcon2025 => "2025",
        })
    }
}

impl Config {
    /// Value of the calendar's `PRODID`.
    pub fn calendar_name(&self) -> String {
        format!("-//{}//{}", env!("CARGO_PKG_NAME"), self.url)
    }
}
