//! Command-level tests: snapshot handling around a sync, scheduling and the
//! read-side query, driven by an in-memory fetcher.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use swapi_sync::commands::{run_query, run_schedule_with, sync_once};
use swapi_sync::config::{ScheduleSettings, Settings};
use swapi_sync::core::{EntityKind, PageQuery};
use swapi_sync::source::{Endpoints, FetchError, PageFetcher, RawPage};

const BASE: &str = "https://swapi.test/api";

/// Serves fixed pages; unknown URLs answer with an empty last page.
#[derive(Clone, Default)]
struct FixedFetcher {
    pages: Arc<HashMap<String, Value>>,
}

impl FixedFetcher {
    fn new(pages: Vec<(&str, Vec<Value>)>) -> Self {
        let pages = pages
            .into_iter()
            .map(|(collection, results)| {
                (
                    format!("{BASE}/{collection}/"),
                    json!({"count": results.len(), "next": null, "results": results}),
                )
            })
            .collect();
        Self {
            pages: Arc::new(pages),
        }
    }
}

#[async_trait]
impl PageFetcher for FixedFetcher {
    async fn fetch_page(&self, url: &str) -> Result<RawPage, FetchError> {
        match self.pages.get(url) {
            Some(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
            None => Ok(RawPage {
                count: Some(0),
                results: Some(Vec::new()),
                ..RawPage::default()
            }),
        }
    }
}

fn settings(store_file: &Path) -> Settings {
    Settings {
        endpoints: Endpoints::from_base_url(BASE),
        request_timeout: Duration::from_secs(5),
        store_file: store_file.to_path_buf(),
    }
}

fn tatooine_and_luke() -> FixedFetcher {
    FixedFetcher::new(vec![
        (
            "planets",
            vec![json!({
                "name": "Tatooine",
                "climate": "arid",
                "residents": [format!("{BASE}/people/1/")],
                "films": [],
                "url": format!("{BASE}/planets/1/"),
            })],
        ),
        (
            "people",
            vec![
                json!({
                    "name": "Luke Skywalker",
                    "homeworld": format!("{BASE}/planets/1/"),
                    "url": format!("{BASE}/people/1/"),
                }),
                json!({
                    "name": "Leia Organa",
                    "url": format!("{BASE}/people/5/"),
                }),
            ],
        ),
    ])
}

// ============================================================================
// sync
// ============================================================================

#[tokio::test]
async fn test_sync_writes_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("nested").join("catalog.json");
    let settings = settings(&store_file);

    let report = sync_once(&settings, tatooine_and_luke()).await.unwrap();

    assert_eq!(report.total_saved(), 3);
    assert!(!report.is_partial());
    assert!(store_file.exists());

    let snapshot: Value = serde_json::from_str(&std::fs::read_to_string(&store_file).unwrap()).unwrap();
    assert_eq!(snapshot["planets"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["characters"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_second_sync_updates_from_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(&dir.path().join("catalog.json"));

    sync_once(&settings, tatooine_and_luke()).await.unwrap();
    let report = sync_once(&settings, tatooine_and_luke()).await.unwrap();

    let people = report.kind(EntityKind::Character).unwrap();
    assert_eq!(people.created, 0);
    assert_eq!(people.updated, 2);

    let page = run_query(&settings, EntityKind::Character, &PageQuery::default())
        .await
        .unwrap();
    assert_eq!(page["total_elements"], 2);
}

#[tokio::test]
async fn test_sync_fails_on_corrupt_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("catalog.json");
    std::fs::write(&store_file, "not json").unwrap();

    let err = sync_once(&settings(&store_file), tatooine_and_luke())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("Failed to read snapshot"));
    assert_eq!(std::fs::read_to_string(&store_file).unwrap(), "not json");
}

// ============================================================================
// query
// ============================================================================

#[tokio::test]
async fn test_query_searches_local_store() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(&dir.path().join("catalog.json"));
    sync_once(&settings, tatooine_and_luke()).await.unwrap();

    let page = run_query(
        &settings,
        EntityKind::Character,
        &PageQuery::new(0, 15, Some("SKY".to_string())),
    )
    .await
    .unwrap();

    assert_eq!(page["total_elements"], 1);
    assert_eq!(page["total_pages"], 1);
    let luke = &page["content"][0];
    assert_eq!(luke["attributes"]["name"], "Luke Skywalker");
    assert_eq!(luke["homeworld"], 1);

    let planets = run_query(&settings, EntityKind::Planet, &PageQuery::default())
        .await
        .unwrap();
    assert_eq!(planets["content"][0]["residents"], json!([1]));
}

#[tokio::test]
async fn test_query_without_snapshot_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(&dir.path().join("absent.json"));

    let page = run_query(&settings, EntityKind::Film, &PageQuery::default())
        .await
        .unwrap();

    assert_eq!(page["total_elements"], 0);
    assert_eq!(page["content"], json!([]));
    assert!(!dir.path().join("absent.json").exists());
}

// ============================================================================
// schedule
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_schedule_runs_every_interval() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(&dir.path().join("catalog.json"));
    let schedule = ScheduleSettings {
        interval: Duration::from_secs(3600),
        run_on_start: true,
    };

    let shutdown = tokio::time::sleep(Duration::from_secs(3 * 3600 + 1800));
    let runs = run_schedule_with(&settings, schedule, tatooine_and_luke(), shutdown)
        .await
        .unwrap();

    assert_eq!(runs, 4);
    assert!(dir.path().join("catalog.json").exists());
}

#[tokio::test(start_paused = true)]
async fn test_schedule_waits_for_first_interval() {
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("catalog.json");
    let settings = settings(&store_file);
    let schedule = ScheduleSettings {
        interval: Duration::from_secs(3600),
        run_on_start: false,
    };

    let shutdown = tokio::time::sleep(Duration::from_secs(1800));
    let runs = run_schedule_with(&settings, schedule, tatooine_and_luke(), shutdown)
        .await
        .unwrap();

    assert_eq!(runs, 0);
    assert!(!store_file.exists());
}

#[tokio::test(start_paused = true)]
async fn test_schedule_survives_failed_runs() {
    let dir = tempfile::tempdir().unwrap();
    let store_file = dir.path().join("catalog.json");
    std::fs::write(&store_file, "{").unwrap();
    let settings = settings(&store_file);
    let schedule = ScheduleSettings {
        interval: Duration::from_secs(60),
        run_on_start: true,
    };

    let shutdown = tokio::time::sleep(Duration::from_secs(150));
    let runs = run_schedule_with(&settings, schedule, tatooine_and_luke(), shutdown)
        .await
        .unwrap();

    assert_eq!(runs, 3);
    assert_eq!(std::fs::read_to_string(&store_file).unwrap(), "{");
}
