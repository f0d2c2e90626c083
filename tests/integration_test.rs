//! Integration tests for seekr
//!
//! These tests drive the public API end to end: catalog files on disk,
//! ranking under tabs and filters, the session's timed phases and the
//! configuration file.

use seekr::{
    actions::resolve_target,
    catalog::{Catalog, CatalogError, Category, Group, Record},
    config::SeekrConfig,
    filters::{FilterError, FilterSet, Tab, TabFilters},
    search::{MatchTier, RankPolicy, evaluate, match_tier, tab_counts},
    session::{Phase, Session, Timing},
};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const CATALOG_TOML: &str = r#"
[[records]]
id = "p1"
category = "person"
name = "Randall Johnsson"
status = "Active now"

[[records]]
id = "p2"
category = "person"
name = "Anurag MK"
status = "Active 2d ago"

[[records]]
id = "d1"
category = "folder"
name = "Random Michael Folder"
details = "12 Files"

[[records]]
id = "f1"
category = "file"
name = "rand"

[[records]]
id = "c1"
category = "chat"
name = "Design sync"
"#;

/// Helper function to write a catalog file into a temp dir and load it
fn load_fixture() -> (Catalog, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.toml");
    fs::write(&path, CATALOG_TOML).unwrap();
    (Catalog::load(&path).unwrap(), dir)
}

fn names(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.display_name.clone()).collect()
}

#[test]
fn test_catalog_file_keeps_order() {
    let (catalog, _dir) = load_fixture();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.records()[0].id, "p1");
    assert_eq!(catalog.require("d1").unwrap().category, Category::Folder);
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_rand_ranks_by_tier() {
    let catalog = Catalog::new(vec![
        Record::new("1", Category::Person, "Randall Johnsson"),
        Record::new("2", Category::Person, "Anurag MK"),
        Record::new("3", Category::Folder, "Random Michael Folder"),
    ])
    .unwrap();

    let results = evaluate(
        catalog.records(),
        "rand",
        Tab::All,
        &FilterSet::default(),
        RankPolicy::default(),
    );
    assert_eq!(
        names(&results),
        ["Randall Johnsson", "Random Michael Folder", "Anurag MK"]
    );
}

#[test]
fn test_exact_beats_prefix_beats_contains() {
    let (catalog, _dir) = load_fixture();
    let results = evaluate(
        catalog.records(),
        "RAND",
        Tab::All,
        &FilterSet::default(),
        RankPolicy::default(),
    );

    let tiers: Vec<MatchTier> = results
        .iter()
        .map(|r| match_tier(&r.display_name, "RAND"))
        .collect();
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(results[0].display_name, "rand");
    assert_eq!(tiers[0], MatchTier::Exact);
}

#[test]
fn test_evaluate_is_idempotent() {
    let catalog = Catalog::builtin();
    let filters = FilterSet::all_enabled();
    let policies = [
        RankPolicy::default(),
        RankPolicy {
            include_contains: false,
            drop_unmatched: true,
        },
    ];
    let queries = ["", "rand", "an", "files_krande_michelle.avi", "zzz"];
    let tabs = [Tab::All, Tab::Group(Group::Files), Tab::Group(Group::People)];

    for policy in policies {
        for query in queries {
            for tab in tabs {
                let first: Vec<Record> = evaluate(catalog.records(), query, tab, &filters, policy)
                    .into_iter()
                    .cloned()
                    .collect();
                let second: Vec<Record> = evaluate(&first, query, tab, &filters, policy)
                    .into_iter()
                    .cloned()
                    .collect();
                assert_eq!(second, first, "query {query:?} on {tab} with {policy:?}");
            }
        }
    }
}

#[test]
fn test_duplicate_names_keep_catalog_order() {
    let catalog = Catalog::builtin();
    let results = evaluate(
        catalog.records(),
        "files_krande_michelle.avi",
        Tab::Group(Group::Files),
        &FilterSet::default(),
        RankPolicy::default(),
    );
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(&ids[..2], ["5", "7"]);
}

#[test]
fn test_blank_query_keeps_catalog_order() {
    let (catalog, _dir) = load_fixture();
    let results = evaluate(
        catalog.records(),
        "   ",
        Tab::All,
        &FilterSet::default(),
        RankPolicy::default(),
    );
    assert_eq!(
        names(&results),
        ["Randall Johnsson", "Anurag MK", "Random Michael Folder", "rand"]
    );
}

#[test]
fn test_disabling_files_resets_files_tab() {
    let (catalog, _dir) = load_fixture();
    let mut view = TabFilters::new(FilterSet::default());
    view.select(Tab::Group(Group::Files)).unwrap();

    view.set_enabled(Group::Files, false);
    assert_eq!(view.tab(), Tab::All);

    let results = evaluate(catalog.records(), "", view.tab(), view.filters(), RankPolicy::default());
    assert!(results.iter().all(|r| r.group() != Group::Files));
    assert_eq!(
        view.select(Tab::Group(Group::Files)),
        Err(FilterError::GroupDisabled(Group::Files))
    );
}

#[test]
fn test_tab_counts_follow_filters() {
    let (catalog, _dir) = load_fixture();
    let counts = tab_counts(catalog.records(), &FilterSet::default());
    assert_eq!(
        counts,
        vec![
            (Tab::All, 4),
            (Tab::Group(Group::Files), 2),
            (Tab::Group(Group::People), 2),
        ]
    );
}

#[test]
fn test_session_settles_after_typing_pause() {
    let (catalog, _dir) = load_fixture();
    let mut session = Session::new(FilterSet::default(), Timing::default());
    let t0 = Instant::now();

    assert_eq!(session.set_query("r", t0), Phase::Opening);
    assert!(session.visible_results(catalog.records(), RankPolicy::default()).is_none());
    assert_eq!(session.tick(t0 + Duration::from_millis(60)), Some(Phase::Settled));

    let t1 = t0 + Duration::from_millis(100);
    assert_eq!(session.set_query("ra", t1), Phase::Typing);
    assert_eq!(session.tick(t1 + Duration::from_millis(500)), None);
    assert_eq!(session.tick(t1 + Duration::from_millis(1000)), Some(Phase::Settled));

    let shown = session
        .visible_results(catalog.records(), RankPolicy::default())
        .unwrap();
    assert_eq!(shown[0].display_name, "rand");
}

#[test]
fn test_clear_within_debounce_never_settles() {
    let mut session = Session::default();
    let t0 = Instant::now();

    session.set_query("rand", t0);
    session.set_query("", t0 + Duration::from_millis(10));

    for ms in [50, 500, 1000, 5000] {
        assert_eq!(session.tick(t0 + Duration::from_millis(ms)), None);
        assert_eq!(session.phase(), Phase::Cleared);
    }
}

#[test]
fn test_links_use_configured_base() {
    let (catalog, _dir) = load_fixture();
    let base = "https://intranet.example.org/";
    assert_eq!(
        resolve_target(catalog.require("d1").unwrap(), base),
        "https://intranet.example.org/folders/Random Michael Folder"
    );
    assert_eq!(
        resolve_target(catalog.require("c1").unwrap(), base),
        "https://intranet.example.org/chat/c1"
    );
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seekr").join("config.toml");

    let created = SeekrConfig::load_or_create(&path).unwrap();
    assert_eq!(created, SeekrConfig::default());
    assert!(path.exists());

    let mut config = created;
    config.filters.chats = true;
    config.ranking.drop_unmatched = true;
    config.timing.typing_debounce_ms = 250;
    config.catalog = Some(dir.path().join("records.toml"));
    config.save_to(&path).unwrap();

    let loaded = SeekrConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.timing.session_timing().typing_debounce,
        Duration::from_millis(250)
    );
}
