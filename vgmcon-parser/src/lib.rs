macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: ::once_cell::sync::Lazy<::scraper::Selector> =
            ::once_cell::sync::Lazy::new(|| ::scraper::Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

mod layout;
mod parser;
mod structs;
mod time;

#[cfg(feature = "ics")]
mod ics;

pub use chrono_tz::Tz;
pub use layout::{Layout, UnknownLayout};
pub use parser::parse_schedule;
pub use structs::{DropReason, DroppedSession, Event, Schedule};
pub use time::{Meridiem, TimeRange, TimestampError};
