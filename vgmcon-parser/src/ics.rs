use std::borrow::Cow;

use chrono::Utc;
use ics::{
    escape_text,
    properties::{Categories, Description, DtEnd, DtStart, Location, Summary},
    ICalendar,
};

use crate::{Event, Schedule};

const UTC_TIMESTAMP: &str = "%Y%m%dT%H%M%SZ";

impl Schedule {
    /// One `VEVENT` per event, in schedule order. Identical events are kept.
    #[must_use]
    pub fn to_ics<'a, S: Into<Cow<'a, str>>>(&'a self, name: S) -> ICalendar<'a> {
        let mut icalendar = ICalendar::new("2.0", name);

        for (index, event) in self.events.iter().enumerate() {
            icalendar.add_event(event.to_ics(index));
        }

        icalendar
    }
}

impl Event {
    pub fn summary(&self) -> String {
        format!("{}: {} ({})", self.category, self.title, self.presenter)
    }

    /// `index` keeps the `UID` unique when two sessions share start and title.
    #[must_use]
    pub fn to_ics(&self, index: usize) -> ics::Event<'_> {
        let start = self.start.with_timezone(&Utc).format(UTC_TIMESTAMP).to_string();
        let end = self.end.with_timezone(&Utc).format(UTC_TIMESTAMP).to_string();

        let id = format!("{}_{}_{}", start, index, self.title.replace(' ', "-"));

        let mut ics_event = ics::Event::new(escape_text(id), start.clone());

        ics_event.push(DtStart::new(start));
        ics_event.push(DtEnd::new(end));
        ics_event.push(Summary::new(escape_text(self.summary())));
        ics_event.push(Description::new(escape_text(self.description.as_str())));
        ics_event.push(Location::new(escape_text(self.location.as_str())));

        if !self.category.is_empty() {
            ics_event.push(Categories::new(escape_text(self.category.as_str())));
        }

        ics_event
    }
}
