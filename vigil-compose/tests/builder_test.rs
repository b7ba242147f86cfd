//! Dispatch tests for [`ContributorBuilder`]: sole source, several sources,
//! and the empty-mapping precondition.

use std::cell::Cell;
use std::collections::HashMap;

use vigil_compose::ContributorBuilder;
use vigil_core::errors::{CompositionError, VigilError};

#[derive(Debug, PartialEq, Eq)]
struct Indicator(String);

#[derive(Debug, PartialEq, Eq)]
enum Contributor {
    Single(String),
    Group(Vec<(String, String)>),
}

impl From<Indicator> for Contributor {
    fn from(indicator: Indicator) -> Self {
        Contributor::Single(indicator.0)
    }
}

/// Collect the full mapping as sorted pairs so tests can assert it arrived
/// unchanged.
fn group_of(sources: HashMap<String, &'static str>) -> Contributor {
    let mut members: Vec<(String, String)> = sources
        .into_iter()
        .map(|(name, source)| (name, source.to_owned()))
        .collect();
    members.sort();
    Contributor::Group(members)
}

// ── Sole source ─────────────────────────────────────────────────────────────

#[test]
fn sole_source_becomes_an_indicator() {
    let composite_calls = Cell::new(0usize);
    let builder = ContributorBuilder::new(
        |source: &'static str| Indicator(source.to_owned()),
        |sources: HashMap<String, &'static str>| {
            composite_calls.set(composite_calls.get() + 1);
            group_of(sources)
        },
    );

    let sources = HashMap::from([("db".to_owned(), "postgres")]);
    let contributor = builder.create_contributor(sources).unwrap();

    assert_eq!(contributor, Contributor::Single("postgres".to_owned()));
    assert_eq!(
        composite_calls.get(),
        0,
        "the composite factory must not run for a sole source"
    );
}

// ── Several sources ─────────────────────────────────────────────────────────

#[test]
fn several_sources_delegate_to_the_composite_factory() {
    let indicator_calls = Cell::new(0usize);
    let builder = ContributorBuilder::new(
        |source: &'static str| {
            indicator_calls.set(indicator_calls.get() + 1);
            Indicator(source.to_owned())
        },
        group_of,
    );

    let sources = HashMap::from([
        ("cache".to_owned(), "redis"),
        ("db".to_owned(), "postgres"),
        ("queue".to_owned(), "rabbitmq"),
    ]);
    let contributor = builder.create_contributor(sources).unwrap();

    assert_eq!(
        contributor,
        Contributor::Group(vec![
            ("cache".to_owned(), "redis".to_owned()),
            ("db".to_owned(), "postgres".to_owned()),
            ("queue".to_owned(), "rabbitmq".to_owned()),
        ]),
        "the composite factory must see the full mapping unchanged"
    );
    assert_eq!(
        indicator_calls.get(),
        0,
        "the builder must not wrap individual sources itself"
    );
}

// ── Empty mapping ───────────────────────────────────────────────────────────

#[test]
fn empty_sources_fail_the_precondition() {
    let indicator_calls = Cell::new(0usize);
    let composite_calls = Cell::new(0usize);
    let builder = ContributorBuilder::new(
        |source: &'static str| {
            indicator_calls.set(indicator_calls.get() + 1);
            Indicator(source.to_owned())
        },
        |sources: HashMap<String, &'static str>| {
            composite_calls.set(composite_calls.get() + 1);
            group_of(sources)
        },
    );

    let err = builder
        .create_contributor(HashMap::<String, &'static str>::new())
        .unwrap_err();

    assert!(matches!(
        err,
        VigilError::Composition(CompositionError::EmptySources)
    ));
    assert_eq!(indicator_calls.get(), 0, "no indicator on failure");
    assert_eq!(composite_calls.get(), 0, "no composite on failure");
}

// ── Indicator factory passthrough ───────────────────────────────────────────

#[test]
fn explicit_factory_is_applied_exactly_once() {
    let calls = Cell::new(0usize);
    let builder = ContributorBuilder::new(
        |port: u16| {
            calls.set(calls.get() + 1);
            Indicator(port.to_string())
        },
        |sources: HashMap<String, u16>| Contributor::Group(
            sources
                .into_iter()
                .map(|(name, port)| (name, port.to_string()))
                .collect(),
        ),
    );

    let indicator = builder.create_indicator(5432).unwrap();

    assert_eq!(indicator, Indicator("5432".to_owned()));
    assert_eq!(calls.get(), 1);
}

// ── Thread safety ───────────────────────────────────────────────────────────

#[test]
fn builder_with_thread_safe_factories_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let builder = ContributorBuilder::new(
        |source: &'static str| Indicator(source.to_owned()),
        group_of,
    );

    assert_send_sync(&builder);
}
