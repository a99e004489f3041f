use pokedex_core::{Pokemon, RegionalDex};
use pokedex_db::*;

fn seeded() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    upsert_pokemon(&conn, 1, "bulbasaur").unwrap();
    upsert_pokemon(&conn, 4, "charmander").unwrap();
    upsert_pokemon(&conn, 25, "pikachu").unwrap();
    conn
}

#[test]
fn schema_has_a_column_per_dex() {
    let conn = open_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(pokemon)").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    for dex in RegionalDex::all() {
        assert!(
            columns.iter().any(|c| c == dex.column()),
            "missing column {}",
            dex.column()
        );
    }
}

#[test]
fn upsert_pokemon_is_idempotent_and_renames() {
    let conn = seeded();
    upsert_pokemon(&conn, 25, "Pikachu").unwrap();
    assert_eq!(count_pokemon(&conn).unwrap(), 3);
    assert_eq!(get_pokemon(&conn, 25).unwrap().unwrap().name, "Pikachu");
}

#[test]
fn upsert_keeps_existing_dex_numbers() {
    let conn = seeded();
    set_dex_number(&conn, RegionalDex::Kanto, 25, 25).unwrap();
    upsert_pokemon(&conn, 25, "pikachu").unwrap();
    assert_eq!(
        get_pokemon(&conn, 25).unwrap().unwrap().dex_number(RegionalDex::Kanto),
        Some(25)
    );
}

#[test]
fn set_dex_number_reports_missing_rows() {
    let conn = seeded();
    assert!(set_dex_number(&conn, RegionalDex::Galar, 25, 194).unwrap());
    assert!(!set_dex_number(&conn, RegionalDex::Galar, 9999, 1).unwrap());
    assert_eq!(count_pokemon(&conn).unwrap(), 3);
    assert_eq!(count_in_dex(&conn, RegionalDex::Galar).unwrap(), 1);
}

#[test]
fn clear_dex_nulls_only_that_column() {
    let conn = seeded();
    set_dex_number(&conn, RegionalDex::Kanto, 1, 1).unwrap();
    set_dex_number(&conn, RegionalDex::Kanto, 4, 4).unwrap();
    set_dex_number(&conn, RegionalDex::Paldea, 25, 74).unwrap();

    assert_eq!(clear_dex(&conn, RegionalDex::Kanto).unwrap(), 2);
    assert_eq!(count_in_dex(&conn, RegionalDex::Kanto).unwrap(), 0);
    assert_eq!(count_in_dex(&conn, RegionalDex::Paldea).unwrap(), 1);
}

#[test]
fn list_pokemon_returns_full_records_by_id() {
    let conn = seeded();
    set_dex_number(&conn, RegionalDex::Kanto, 25, 25).unwrap();
    set_dex_number(&conn, RegionalDex::UpdatedJohto, 25, 22).unwrap();

    let all = list_pokemon(&conn).unwrap();
    let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4, 25]);
    assert_eq!(
        all[2],
        Pokemon::new(25, "pikachu")
            .with_dex(RegionalDex::Kanto, 25)
            .with_dex(RegionalDex::UpdatedJohto, 22)
    );
    assert!(all[0].dex_numbers.is_empty());
}

#[test]
fn dex_sample_orders_by_entry_number() {
    let conn = seeded();
    set_dex_number(&conn, RegionalDex::Kanto, 25, 25).unwrap();
    set_dex_number(&conn, RegionalDex::Kanto, 4, 4).unwrap();
    set_dex_number(&conn, RegionalDex::Kanto, 1, 1).unwrap();

    let sample = dex_sample(&conn, RegionalDex::Kanto, 2).unwrap();
    assert_eq!(
        sample,
        vec![
            DexSampleRow {
                id: 1,
                name: "bulbasaur".to_string(),
                number: 1
            },
            DexSampleRow {
                id: 4,
                name: "charmander".to_string(),
                number: 4
            },
        ]
    );
}

#[test]
fn dex_counts_covers_every_dex() {
    let conn = seeded();
    set_dex_number(&conn, RegionalDex::Hisui, 25, 56).unwrap();
    let counts = dex_counts(&conn).unwrap();
    assert_eq!(counts.len(), 16);
    assert!(counts.contains(&(RegionalDex::Hisui, 1)));
    assert!(counts.contains(&(RegionalDex::Kanto, 0)));
}

#[test]
fn import_log_round_trip() {
    let conn = open_memory().unwrap();
    let first = ImportLog {
        id: 0,
        source_name: "national".to_string(),
        imported_at: "2026-01-01T00:00:00+00:00".to_string(),
        records_written: 1025,
        records_unmatched: 0,
    };
    let second = ImportLog {
        source_name: "galar".to_string(),
        imported_at: "2026-01-02T00:00:00+00:00".to_string(),
        records_written: 400,
        records_unmatched: 0,
        ..first.clone()
    };
    insert_import_log(&conn, &first).unwrap();
    let id = insert_import_log(&conn, &second).unwrap();

    let logs = list_import_logs(&conn, None).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, id);
    assert_eq!(logs[0].source_name, "galar");
    assert_eq!(logs[1].records_written, 1025);
}

#[test]
fn open_database_creates_file_and_reopens() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("pokemon.db");

    {
        let conn = open_database(&path).unwrap();
        upsert_pokemon(&conn, 1, "bulbasaur").unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(count_pokemon(&conn).unwrap(), 1);
}

#[test]
fn open_database_rejects_newer_schema() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("pokemon.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO schema_version (version) VALUES (99)", [])
            .unwrap();
    }
    assert!(matches!(
        open_database(&path),
        Err(SchemaError::VersionMismatch { found: 99, .. })
    ));
}
