use chrono::{DateTime, TimeZone};
use chrono_tz::{America::Chicago, Tz};
use vgmcon_parser::{parse_schedule, DropReason, Layout};

fn chicago(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
    Chicago.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn title_block(header: &str) -> String {
    format!(
        r#"<div class="conf_block">
            <div class="title">{header}</div>
            <div class="quick_info">
                <div class="presenter">Ballroom A</div>
                <div class="location">Some Composer</div>
            </div>
            <div class="details"><div class="description">About the session.</div></div>
            <div class="data"><div class="theme">Concert</div></div>
        </div>"#
    )
}

fn session_block(header: &str, time: &str) -> String {
    format!(
        r#"<div class="conf_block">
            <div class="title">{header}</div>
            <div class="quick_info">
                <div class="presenter">Workshop Room</div>
                <div class="location">Synth Person</div>
                <div class="session">{time}</div>
            </div>
            <div class="details"><div class="description">Hands on.</div></div>
            <div class="data"><div class="theme">Workshop</div></div>
        </div>"#
    )
}

fn day(label: &str, blocks: &[String]) -> String {
    format!(
        r#"<div class="conference_day"><h3>{label}</h3><div class="blocks">{}</div></div>"#,
        blocks.concat()
    )
}

fn page(days: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Schedule</title></head><body>{}</body></html>",
        days.concat()
    )
}

#[test]
fn afternoon_session_resolves_in_chicago() {
    let html = page(&[day("Friday 19 Apr 2024", &[title_block("[2:30p-4:00p] Opening Concert")])]);
    let schedule = parse_schedule(html, Chicago, Some(Layout::TitleRange));

    let event = &schedule.events[0];
    assert_eq!(event.start, chicago(2024, 4, 19, 14, 30));
    assert_eq!(event.end, chicago(2024, 4, 19, 16, 0));
    assert_eq!(event.title, "Opening Concert");
    assert_eq!(event.presenter, "Some Composer");
    assert_eq!(event.location, "Ballroom A");
    assert_eq!(event.description, "About the session.");
    assert_eq!(event.category, "Concert");
}

#[test]
fn session_past_midnight_ends_next_day() {
    let html = page(&[day(
        "Saturday 20 Apr 2024",
        &[title_block("[11:00p-1:00a] Late Night Jam")],
    )]);
    let event = &parse_schedule(html, Chicago, None).events[0];

    assert_eq!(event.start, chicago(2024, 4, 20, 23, 0));
    assert_eq!(event.end, chicago(2024, 4, 21, 1, 0));
    assert!(event.end >= event.start);
}

#[test]
fn same_meridiem_stays_on_same_day() {
    let html = page(&[day("Saturday 20 Apr 2024", &[title_block("[2:00p-3:00p] Panel")])]);
    let event = &parse_schedule(html, Chicago, None).events[0];

    assert_eq!(event.start, chicago(2024, 4, 20, 14, 0));
    assert_eq!(event.end, chicago(2024, 4, 20, 15, 0));
}

#[test]
fn malformed_sessions_are_skipped_without_stopping() {
    let html = page(&[
        day(
            "Friday 19 Apr 2024",
            &[
                title_block("[noon-ish] Lunch"),
                title_block("[1:00p-2:00p] After Lunch"),
            ],
        ),
        day("Saturday 20 Apr 2024", &[title_block("[10:00a-11:00a] Morning")]),
    ]);
    let schedule = parse_schedule(html, Chicago, None);

    let titles = schedule
        .events
        .iter()
        .map(|event| event.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["After Lunch", "Morning"]);

    assert_eq!(schedule.dropped.len(), 1);
    assert_eq!(schedule.dropped[0].header, "[noon-ish] Lunch");
    assert!(matches!(
        schedule.dropped[0].reason,
        DropReason::InvalidStart(_)
    ));
}

#[test]
fn session_field_layout() {
    let html = page(&[day(
        "Sunday 21 Apr 2024",
        &[session_block("[Workshop] Building a Synth", "Time: 2:30 - 3:45 PM")],
    )]);
    let schedule = parse_schedule(html, Chicago, None);

    let event = &schedule.events[0];
    assert_eq!(event.title, "Building a Synth");
    assert_eq!(event.start, chicago(2024, 4, 21, 14, 30));
    assert_eq!(event.end, chicago(2024, 4, 21, 15, 45));
    assert_eq!(event.presenter, "Synth Person");
    assert_eq!(event.location, "Workshop Room");
    assert_eq!(event.category, "Workshop");
}

#[test]
fn session_field_past_midnight() {
    let html = page(&[day(
        "Saturday 20 Apr 2024",
        &[session_block("[Concert] Finale", "Time: 11:30 PM - 12:30 AM")],
    )]);
    let event = &parse_schedule(html, Chicago, Some(Layout::SessionField)).events[0];

    assert_eq!(event.start, chicago(2024, 4, 20, 23, 30));
    assert_eq!(event.end, chicago(2024, 4, 21, 0, 30));
}

#[test]
fn session_field_spanning_noon() {
    let html = page(&[day(
        "Saturday 20 Apr 2024",
        &[session_block("[Panel] Brunch Beats", "Time: 11:00 - 12:30 PM")],
    )]);
    let schedule = parse_schedule(html, Chicago, Some(Layout::SessionField));

    let event = &schedule.events[0];
    assert_eq!(event.start, chicago(2024, 4, 20, 11, 0));
    assert_eq!(event.end, chicago(2024, 4, 20, 12, 30));
    assert!(event.end >= event.start);
}

#[test]
fn forced_layout_overrides_detection() {
    let html = page(&[day(
        "Sunday 21 Apr 2024",
        &[session_block("[Workshop] Building a Synth", "Time: 2:30 - 3:45 PM")],
    )]);
    let schedule = parse_schedule(html, Chicago, Some(Layout::TitleRange));

    assert!(schedule.events.is_empty());
    assert_eq!(
        schedule.dropped[0].reason,
        DropReason::MalformedRange("Workshop".into())
    );
}

#[test]
fn document_order_is_kept() {
    let html = page(&[
        day(
            "Friday 19 Apr 2024",
            &[
                title_block("[5:00p-6:00p] Friday Evening"),
                title_block("[9:00a-10:00a] Friday Morning"),
            ],
        ),
        day(
            "Saturday 20 Apr 2024",
            &[
                title_block("[8:00p-9:00p] Saturday Evening"),
                title_block("[8:00a-9:00a] Saturday Morning"),
            ],
        ),
    ]);
    let schedule = parse_schedule(html, Chicago, None);

    let titles = schedule
        .events
        .iter()
        .map(|event| event.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        [
            "Friday Evening",
            "Friday Morning",
            "Saturday Evening",
            "Saturday Morning"
        ]
    );
}

#[test]
fn other_timezones() {
    let html = page(&[day("Friday 19 Apr 2024", &[title_block("[2:30p-4:00p] Opening")])]);
    let event = &parse_schedule(html, chrono_tz::Europe::Berlin, None).events[0];

    assert_eq!(event.start.to_rfc3339(), "2024-04-19T14:30:00+02:00");
}
