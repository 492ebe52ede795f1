use chrono_tz::Tz;
use log::debug;
use scraper::{ElementRef, Html};

use crate::layout::Layout;
use crate::structs::{DropReason, DroppedSession, Event, Schedule};
use crate::time::{localize, next_day, parse_local};

/// Extracts every session of a schedule page, in document order. Sessions
/// whose times cannot be resolved end up in [`Schedule::dropped`] instead of
/// failing the whole page. `layout` is detected from the page when `None`.
pub fn parse_schedule<S: AsRef<str>>(s: S, tz: Tz, layout: Option<Layout>) -> Schedule {
    let html = Html::parse_document(s.as_ref());
    let layout = layout.unwrap_or_else(|| Layout::detect(&html));
    debug!("Reading sessions with `{layout}` layout in {}", tz.name());

    let mut schedule = Schedule::default();

    for day_element in html.select(selector!(".conference_day")) {
        parse_day(day_element, layout, tz, &mut schedule);
    }

    schedule
}

fn parse_day(element: ElementRef, layout: Layout, tz: Tz, schedule: &mut Schedule) {
    let day = child(element, |child| child.value().name() == "h3")
        .map(text)
        .unwrap_or_default();

    debug!("Reading day `{day}`");

    for block in element.select(selector!(".conf_block")) {
        match parse_session(block, &day, layout, tz) {
            Ok(event) => schedule.events.push(event),
            Err(reason) => {
                let header = title_header(block).unwrap_or_default();
                debug!("Dropping `{header}` on `{day}`: {reason}");

                schedule.dropped.push(DroppedSession {
                    day: day.clone(),
                    header,
                    reason,
                });
            }
        }
    }
}

fn parse_session(
    element: ElementRef,
    day: &str,
    layout: Layout,
    tz: Tz,
) -> Result<Event, DropReason> {
    let header = title_header(element).ok_or(DropReason::MissingField("title"))?;
    let (range, title) = layout.read(element, &header)?;

    let start = parse_local(day, &layout.clock(&range.start), layout.time_format())
        .and_then(|local| localize(local, tz))
        .map_err(DropReason::InvalidStart)?;

    let mut end = parse_local(day, &layout.clock(&range.end), layout.time_format());
    if range.crosses_midnight() {
        end = end.and_then(next_day);
    }
    let end = end
        .and_then(|local| localize(local, tz))
        .map_err(DropReason::InvalidEnd)?;

    // The page labels these two the wrong way round.
    let presenter = field(element, selector!(".quick_info .location"));
    let location = field(element, selector!(".quick_info .presenter"));

    Ok(Event {
        start,
        end,
        title,
        presenter,
        location,
        description: field(element, selector!(".details .description")),
        category: field(element, selector!(".data .theme")),
    })
}

fn title_header(element: ElementRef) -> Option<String> {
    child(element, |child| child.value().classes().any(|class| class == "title")).map(text)
}

fn child<'a>(
    element: ElementRef<'a>,
    predicate: impl Fn(&ElementRef<'a>) -> bool,
) -> Option<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| predicate(child))
}

fn field(element: ElementRef, selector: &scraper::Selector) -> String {
    element.select(selector).next().map(text).unwrap_or_default()
}

/// Decoded, trimmed text content of an element and its descendants.
pub(crate) fn text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
