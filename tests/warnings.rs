//! Convenience forms report failures through the `log` facade.

use std::cell::RefCell;
use std::sync::Once;

use exprel::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Collects records per thread so parallel tests do not see each other's output.
struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;
static INIT: Once = Once::new();

/// Run `f` and return its result with the warnings it logged.
fn warnings_from<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let warnings = RECORDS
        .with(|r| r.take())
        .into_iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg)
        .collect();
    (out, warnings)
}

#[test]
fn overflow_logs_one_warning_naming_the_call() {
    let (v, warnings) = warnings_from(|| exp(1000.0_f64));
    assert_eq!(v, 0.0);
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].starts_with("exp(1000"), "{}", warnings[0]);
    assert!(warnings[0].contains("overflow"), "{}", warnings[0]);
}

#[test]
fn domain_error_logs_one_warning() {
    let (v, warnings) = warnings_from(|| exprel_n(-1, 2.0_f64));
    assert_eq!(v, 0.0);
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].starts_with("exprel_n(-1, 2"), "{}", warnings[0]);
}

#[test]
fn success_logs_no_warning() {
    let (v, warnings) = warnings_from(|| exp(1.0_f64));
    assert_eq!(v, 1.0_f64.exp());
    assert!(warnings.is_empty(), "{warnings:?}");

    // continued-fraction branch emits trace records only
    let (_, warnings) = warnings_from(|| exprel_n(5, 2.0_f64));
    assert!(warnings.is_empty(), "{warnings:?}");
}
