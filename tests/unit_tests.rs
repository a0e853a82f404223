use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use swapi_sync::config::{
    parse_duration, ConfigFile, ScheduleSettings, Settings, DEFAULT_STORE_FILE,
};
use swapi_sync::{SourceOpts, StoreOpts};

fn config(toml: &str) -> ConfigFile {
    ConfigFile::from_toml(toml).unwrap()
}

#[test]
fn test_source_opts_from_flags() {
    let opts = SourceOpts::try_parse_from([
        "swapi-sync",
        "--base-url",
        "http://localhost:8080/api",
        "--request-timeout",
        "5s",
    ])
    .unwrap();

    assert_eq!(opts.base_url.as_deref(), Some("http://localhost:8080/api"));
    assert_eq!(opts.request_timeout.as_deref(), Some("5s"));
}

#[test]
fn test_store_opts_from_flags() {
    let opts =
        StoreOpts::try_parse_from(["swapi-sync", "--store-file", "/tmp/catalog.json"]).unwrap();
    assert_eq!(opts.store_file, Some(PathBuf::from("/tmp/catalog.json")));
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::resolve(&SourceOpts::default(), &StoreOpts::default(), None).unwrap();

    assert_eq!(settings.endpoints.planets, "https://swapi.dev/api/planets/");
    assert_eq!(settings.endpoints.people, "https://swapi.dev/api/people/");
    assert_eq!(settings.request_timeout, Duration::from_secs(30));
    assert_eq!(settings.store_file, PathBuf::from(DEFAULT_STORE_FILE));
}

#[test]
fn test_settings_file_overrides_defaults() {
    let file = config(
        r#"
        [source]
        base_url = "https://mirror.example/api/"
        request_timeout = "2m"

        [source.endpoints]
        vehicles = "https://vehicles.example/list/"

        [store]
        file = "/srv/catalog.json"
        "#,
    );

    let settings =
        Settings::resolve(&SourceOpts::default(), &StoreOpts::default(), Some(&file)).unwrap();

    assert_eq!(settings.endpoints.films, "https://mirror.example/api/films/");
    assert_eq!(settings.endpoints.vehicles, "https://vehicles.example/list/");
    assert_eq!(settings.request_timeout, Duration::from_secs(120));
    assert_eq!(settings.store_file, PathBuf::from("/srv/catalog.json"));
}

#[test]
fn test_settings_flags_override_file() {
    let file = config(
        r#"
        [source]
        base_url = "https://mirror.example/api"
        request_timeout = "2m"

        [store]
        file = "/srv/catalog.json"
        "#,
    );
    let source = SourceOpts {
        base_url: Some("http://localhost:9000/api".to_string()),
        request_timeout: Some("7".to_string()),
    };
    let store = StoreOpts {
        store_file: Some(PathBuf::from("local.json")),
    };

    let settings = Settings::resolve(&source, &store, Some(&file)).unwrap();

    assert_eq!(settings.endpoints.species, "http://localhost:9000/api/species/");
    assert_eq!(settings.request_timeout, Duration::from_secs(7));
    assert_eq!(settings.store_file, PathBuf::from("local.json"));
}

#[test]
fn test_settings_rejects_bad_timeout() {
    let source = SourceOpts {
        request_timeout: Some("soon".to_string()),
        ..SourceOpts::default()
    };
    let err = Settings::resolve(&source, &StoreOpts::default(), None).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid request timeout"));
}

#[test]
fn test_schedule_settings() {
    let defaults = ScheduleSettings::resolve(None, false, None).unwrap();
    assert_eq!(defaults.interval, Duration::from_secs(24 * 3600));
    assert!(!defaults.run_on_start);

    let file = config("[schedule]\ninterval = \"30m\"\nrun_on_start = true\n");
    let from_file = ScheduleSettings::resolve(None, false, Some(&file)).unwrap();
    assert_eq!(from_file.interval, Duration::from_secs(1800));
    assert!(from_file.run_on_start);

    let from_flags = ScheduleSettings::resolve(Some("1d"), true, Some(&file)).unwrap();
    assert_eq!(from_flags.interval, Duration::from_secs(86_400));
    assert!(from_flags.run_on_start);

    assert!(ScheduleSettings::resolve(Some("0h"), false, None).is_err());
}

#[test]
fn test_config_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swapi-sync.toml");
    std::fs::write(&path, "[store]\nfile = \"mirror.json\"\n").unwrap();

    let file = ConfigFile::from_file(&path).unwrap();
    assert_eq!(file.store.file, Some(PathBuf::from("mirror.json")));

    let missing = ConfigFile::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(format!("{missing:#}").contains("Failed to read config file"));
}

#[test]
fn test_parse_duration_public() {
    assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
    assert!(parse_duration("").is_err());
}
