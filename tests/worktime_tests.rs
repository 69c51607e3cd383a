mod common;

use common::{day, ts};
use dutylog::core::calculator::range::DateRange;
use dutylog::core::calculator::worktime::aggregate;
use dutylog::core::expected::ExpectedLogic;
use dutylog::core::staff::StaffLogic;
use dutylog::core::worktime::WorktimeLogic;
use dutylog::db::memory::MemoryStore;
use dutylog::errors::AppError;
use dutylog::export::range::{parse_range, resolve_range};
use dutylog::models::action::AttendanceAction::{ClockIn, ClockOut};
use dutylog::models::event::AttendanceEvent;
use dutylog::models::expected::ExpectedWorktime;
use dutylog::models::session::DutySession;
use dutylog::utils::format_minutes;

fn session(name: &str, from: &str, to: &str) -> DutySession {
    let clock_in = ts(from);
    let clock_out = ts(to);
    DutySession {
        name: name.to_string(),
        clock_in,
        clock_out,
        duration_minutes: (clock_out - clock_in).num_minutes(),
    }
}

fn punch(store: &mut MemoryStore, name: &str, from: &str, to: &str) {
    store
        .events
        .push(AttendanceEvent::new(name, ClockIn, ts(from)));
    store
        .events
        .push(AttendanceEvent::new(name, ClockOut, ts(to)));
}

#[test]
fn test_format_minutes_cases() {
    assert_eq!(format_minutes(125, false), "02:05");
    assert_eq!(format_minutes(-90, true), "-01:30");
    assert_eq!(format_minutes(0, true), "00:00");
    assert_eq!(format_minutes(0, false), "00:00");
    assert_eq!(format_minutes(61, true), "+01:01");
    // unsigned mode never adds "+" but keeps a negative sign
    assert_eq!(format_minutes(61, false), "01:01");
    assert_eq!(format_minutes(-61, false), "-01:01");
    // hours are not wrapped at 24
    assert_eq!(format_minutes(100 * 60 + 5, false), "100:05");
}

#[test]
fn test_aggregate_negative_difference() {
    let expected: ExpectedWorktime = [("Alice".to_string(), 8.0)].into_iter().collect();
    let sessions = vec![(
        "Alice".to_string(),
        vec![
            session("Alice", "2024-01-10 09:00:00", "2024-01-10 12:00:00"),
            session("Alice", "2024-01-11 09:00:00", "2024-01-11 13:30:00"),
        ],
    )];

    let summaries = aggregate(&["Alice".to_string()], &sessions, &expected);

    assert_eq!(summaries.len(), 1);
    let s = &summaries[0];
    assert_eq!(s.actual_minutes, 450);
    assert_eq!(s.expected_minutes, 480);
    assert_eq!(s.diff_minutes, -30);
    assert_eq!(format_minutes(s.diff_minutes, true), "-00:30");
    assert_eq!(s.to_row(), vec!["Alice", "08:00", "07:30", "-00:30"]);
}

#[test]
fn test_expected_minutes_truncate() {
    let mut expected = ExpectedWorktime::new();
    expected.upsert("Alice", 8.5);
    expected.upsert("Bob", 0.0166);
    expected.upsert("Alice", 1.999);

    assert_eq!(expected.minutes_for("Alice"), 119);
    assert_eq!(expected.minutes_for("Bob"), 0);
    assert_eq!(expected.minutes_for("Nobody"), 0);
    assert_eq!(expected.names().count(), 2);
}

#[test]
fn test_aggregate_membership_and_order() {
    let roster = vec!["Carol".to_string(), "Alice".to_string()];
    let expected: ExpectedWorktime = [("Dave".to_string(), 2.0), ("Alice".to_string(), 1.0)]
        .into_iter()
        .collect();
    let sessions = vec![
        ("Carol".to_string(), vec![]),
        (
            "Alice".to_string(),
            vec![session("Alice", "2024-01-10 09:00:00", "2024-01-10 10:00:00")],
        ),
        (
            "Eve".to_string(),
            vec![session("Eve", "2024-01-10 09:00:00", "2024-01-10 09:30:00")],
        ),
        ("Mallory".to_string(), vec![]),
    ];

    let summaries = aggregate(&roster, &sessions, &expected);
    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();

    // roster, then expected-only, then ledger-only with sessions
    assert_eq!(names, vec!["Carol", "Alice", "Dave", "Eve"]);
    assert_eq!(summaries[0].actual_minutes, 0);
    assert_eq!(summaries[1].diff_minutes, 0);
    assert_eq!(summaries[2].diff_minutes, -120);
    assert_eq!(summaries[3].diff_minutes, 30);
}

#[test]
fn test_range_includes_session_by_clock_out_day() {
    let range = DateRange::new(Some(day("2024-01-05")), Some(day("2024-01-05"))).unwrap();

    let overnight = session("Alice", "2024-01-04 23:00:00", "2024-01-05 01:00:00");
    let spill = session("Alice", "2024-01-05 23:00:00", "2024-01-06 01:00:00");
    let before = session("Alice", "2024-01-04 09:00:00", "2024-01-04 10:00:00");

    assert!(range.includes(&overnight));
    assert!(range.includes(&spill));
    assert!(!range.includes(&before));

    let kept = range.filter(vec![overnight, spill, before]);
    assert_eq!(kept.len(), 2);
    // counted in full even though half of it lies outside
    assert_eq!(kept[0].duration_minutes, 120);
}

#[test]
fn test_range_rejects_start_after_end() {
    let err = DateRange::new(Some(day("2024-01-06")), Some(day("2024-01-05"))).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { start, end }
        if start == day("2024-01-06") && end == day("2024-01-05")));

    let err = resolve_range(
        Some(&"2024-02-01".to_string()),
        Some(&"2024-01-01".to_string()),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));
}

#[test]
fn test_range_open_bounds() {
    let from = DateRange::new(Some(day("2024-01-05")), None).unwrap();
    assert!(from.contains(day("2030-01-01")));
    assert!(!from.contains(day("2024-01-04")));

    let all = DateRange::unbounded();
    assert!(all.is_unbounded());
    assert!(all.contains(day("1999-12-31")));
    assert_eq!(all.to_string(), "all dates");
}

#[test]
fn test_parse_range_expressions() {
    assert_eq!(
        parse_range("2024").unwrap(),
        (day("2024-01-01"), day("2024-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        (day("2024-02-01"), day("2024-02-29"))
    );
    assert_eq!(
        parse_range("2024-03-15").unwrap(),
        (day("2024-03-15"), day("2024-03-15"))
    );
    assert_eq!(
        parse_range("2023-11:2024-02").unwrap(),
        (day("2023-11-01"), day("2024-02-29"))
    );
    assert_eq!(
        parse_range("2024-01-01:2024-01-31").unwrap(),
        (day("2024-01-01"), day("2024-01-31"))
    );

    assert!(parse_range("2024-13").is_err());
    assert!(parse_range("2024:2024-05").is_err());
    assert!(parse_range("yesterday").is_err());

    let r = resolve_range(None, Some(&"2024-06-10".to_string()), Some(&"2024-06".to_string()))
        .unwrap();
    assert_eq!(r.start(), Some(day("2024-06-01")));
    assert_eq!(r.end(), Some(day("2024-06-10")));

    assert!(resolve_range(None, None, Some(&"all".to_string())).unwrap().is_unbounded());
}

#[test]
fn test_report_from_store() {
    let mut store = MemoryStore::with_staff(&["Bob", "Alice"]);
    ExpectedLogic::set(&mut store, "Alice", 2.0).unwrap();
    punch(&mut store, "Alice", "2024-01-10 09:00:00", "2024-01-10 10:00:00");
    punch(&mut store, "Bob", "2024-02-01 09:00:00", "2024-02-01 09:45:00");
    punch(&mut store, "Gone", "2024-01-11 09:00:00", "2024-01-11 09:10:00");

    let january = resolve_range(None, None, Some(&"2024-01".to_string())).unwrap();
    let report = WorktimeLogic::report(&store, &january, false).unwrap();
    let rows: Vec<Vec<String>> = report.summaries.iter().map(|s| s.to_row()).collect();

    assert_eq!(
        rows,
        vec![
            vec!["Bob", "00:00", "00:00", "00:00"],
            vec!["Alice", "02:00", "01:00", "-01:00"],
            vec!["Gone", "00:00", "00:10", "+00:10"],
        ]
    );
    assert_eq!(report.sessions.len(), 3);
    assert!(report.sessions[0].1.is_empty());

    let sorted = WorktimeLogic::report(&store, &january, true).unwrap();
    let names: Vec<&str> = sorted.summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Gone"]);
}

#[test]
fn test_sessions_for_sorts_by_clock_in() {
    let mut store = MemoryStore::with_staff(&["Alice"]);
    punch(&mut store, "Alice", "2024-01-12 09:00:00", "2024-01-12 10:00:00");
    punch(&mut store, "Alice", "2024-01-10 09:00:00", "2024-01-10 10:00:00");

    let sessions = WorktimeLogic::sessions_for(&store, "Alice", &DateRange::unbounded()).unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions[0].clock_in < sessions[1].clock_in);

    let err = WorktimeLogic::sessions_for(&store, "Nobody", &DateRange::unbounded()).unwrap_err();
    assert!(matches!(err, AppError::StaffNotFound(_)));
}

#[test]
fn test_staff_and_expected_validation() {
    let mut store = MemoryStore::new();

    assert_eq!(StaffLogic::add(&mut store, "  Alice ").unwrap(), "Alice");
    assert!(matches!(
        StaffLogic::add(&mut store, "Alice").unwrap_err(),
        AppError::DuplicateStaff(_)
    ));
    // names are case-sensitive
    StaffLogic::add(&mut store, "alice").unwrap();
    assert!(matches!(
        StaffLogic::add(&mut store, "   ").unwrap_err(),
        AppError::InvalidName(_)
    ));

    assert!(matches!(
        ExpectedLogic::set(&mut store, "Alice", -1.0).unwrap_err(),
        AppError::InvalidHours(_)
    ));
    assert!(matches!(
        ExpectedLogic::set(&mut store, "Alice", f64::NAN).unwrap_err(),
        AppError::InvalidHours(_)
    ));
    assert!(matches!(
        ExpectedLogic::set(&mut store, "Bob", 3.0).unwrap_err(),
        AppError::StaffNotFound(_)
    ));

    ExpectedLogic::set(&mut store, "Alice", 3.0).unwrap();
    ExpectedLogic::set(&mut store, "Alice", 4.5).unwrap();
    assert_eq!(store.expected.hours_for("Alice"), 4.5);

    // removal keeps the ledger
    punch(&mut store, "Alice", "2024-01-10 09:00:00", "2024-01-10 10:00:00");
    StaffLogic::remove(&mut store, "Alice").unwrap();
    assert_eq!(StaffLogic::list(&store).unwrap(), vec!["alice"]);
    assert_eq!(store.events.len(), 2);
    assert!(matches!(
        StaffLogic::remove(&mut store, "Alice").unwrap_err(),
        AppError::StaffNotFound(_)
    ));
}
