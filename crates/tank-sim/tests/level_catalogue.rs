use std::io::Write;

use tank_sim::core::enums::{BossKind, EnemyKind, MapKind};
use tank_sim::core::error::ConfigError;
use tank_sim::levels::{builtin_levels, load_levels, parse_levels};

fn write_catalogue(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_catalogue_from_file() {
    let file = write_catalogue(
        r#"[
            {
                "name": "Outpost",
                "enemy_kind": "soldier",
                "map": "desert",
                "boss": { "kind": "juggernaut", "spawn_after": 12 },
                "initial_enemies": 2
            },
            {
                "name": "Survival",
                "enemy_kind": "elite",
                "enemy_quota": 30,
                "max_active": 8,
                "pacing": { "min_interval_secs": 0.25 }
            }
        ]"#,
    );

    let levels = load_levels(file.path()).unwrap();
    assert_eq!(levels.len(), 2);

    let outpost = &levels[0];
    assert_eq!(outpost.enemy_kind, EnemyKind::Soldier);
    assert_eq!(outpost.map, MapKind::Desert);
    let boss = outpost.boss.unwrap();
    assert_eq!(boss.kind, BossKind::Juggernaut);
    assert_eq!(boss.health, 500, "Boss health defaults");
    assert_eq!(outpost.initial_enemies, 2);

    let survival = &levels[1];
    assert!(survival.boss.is_none());
    assert_eq!(survival.map, MapKind::Forest);
    assert_eq!(survival.enemy_quota, Some(30));
    assert_eq!(survival.max_active, Some(8));
    assert_eq!(survival.pacing.min_interval_secs, 0.25);
    assert_eq!(survival.pacing.max_interval_secs, 3.0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_levels(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
}

#[test]
fn malformed_json_is_parse_error() {
    let file = write_catalogue("[{ \"name\": \"Broken\", ");
    let err = load_levels(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn unknown_enemy_kind_is_parse_error() {
    let err = parse_levels(r#"[{ "name": "X", "enemy_kind": "dragon", "enemy_quota": 3 }]"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

#[test]
fn unwinnable_level_is_rejected() {
    let err = parse_levels(r#"[{ "name": "Endless", "enemy_kind": "grunt" }]"#).unwrap_err();
    match err {
        ConfigError::Invalid { level, .. } => assert_eq!(level, "Endless"),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn empty_catalogue_is_rejected() {
    let file = write_catalogue("[]");
    assert!(matches!(load_levels(file.path()), Err(ConfigError::Empty)));
}

#[test]
fn builtin_catalogue_round_trips_through_a_file() {
    let json = serde_json::to_string_pretty(&builtin_levels()).unwrap();
    let file = write_catalogue(&json);
    assert_eq!(load_levels(file.path()).unwrap(), builtin_levels());
}
