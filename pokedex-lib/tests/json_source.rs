use std::fs;

use pokedex_lib::*;
use tempfile::TempDir;

const CATALOGUE: &str = r#"[
    {"id": 1, "name": "bulbasaur", "kanto": 1, "updated_johto": 226, "galar": null},
    {"id": 25, "name": "pikachu", "kanto": 25, "galar": 194, "paldea": 74},
    {"id": 810, "name": "grookey", "galar": 1},
    {"id": 891, "name": "kubfu", "isle_of_armor": 199}
]"#;

fn write_catalogue(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("pokemon.json");
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn loads_and_groups_file_catalogue() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalogue(&tmp, CATALOGUE);
    let loader = CatalogueLoader::new(JsonFileSource::new(&path));

    let catalogue = loader.load().await.unwrap();
    assert_eq!(catalogue.len(), 4);
    assert_eq!(catalogue[0].dex_number(RegionalDex::UpdatedJohto), Some(226));

    let groups = loader.pokemon_for_game("Sword/Shield").await.unwrap();
    let galar: Vec<(u32, &str)> = groups[0]
        .pokemon
        .iter()
        .map(|e| (e.dex_number, e.pokemon.name.as_str()))
        .collect();
    assert_eq!(galar, vec![(1, "grookey"), (194, "pikachu")]);
    assert_eq!(groups[1].pokemon.len(), 1);
    assert!(groups[2].pokemon.is_empty());
}

#[tokio::test]
async fn cached_catalogue_survives_file_removal() {
    let tmp = TempDir::new().unwrap();
    let path = write_catalogue(&tmp, CATALOGUE);
    let loader = CatalogueLoader::new(JsonFileSource::new(&path));

    let first = loader.load().await.unwrap();
    fs::remove_file(&path).unwrap();
    let second = loader.load().await.unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn missing_file_is_unavailable() {
    let tmp = TempDir::new().unwrap();
    let loader = CatalogueLoader::new(JsonFileSource::new(tmp.path().join("nope.json")));
    assert!(matches!(
        loader.load().await,
        Err(CatalogueError::Unavailable(_))
    ));
}

#[tokio::test]
async fn malformed_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let cases = [
        "not json",
        r#"{"id": 1, "name": "bulbasaur"}"#,
        r#"[{"id": 1, "name": "bulbasaur", "kanto": "one"}]"#,
        r#"[{"name": "bulbasaur"}]"#,
        r#"[{"id": 1, "name": "bulbasaur"}, {"id": 1, "name": "ivysaur"}]"#,
        r#"[{"id": 1, "name": "a", "kanto": 1}, {"id": 2, "name": "b", "kanto": 1}]"#,
    ];
    for contents in cases {
        let path = write_catalogue(&tmp, contents);
        let loader = CatalogueLoader::new(JsonFileSource::new(&path));
        assert!(
            matches!(loader.load().await, Err(CatalogueError::Malformed(_))),
            "expected malformed for {contents}"
        );
        assert!(!loader.is_loaded());
    }
}

#[test]
fn any_source_picks_by_scheme() {
    assert!(matches!(
        AnySource::from_location("https://example.com/pokemon.json").unwrap(),
        AnySource::Http(_)
    ));
    assert!(matches!(
        AnySource::from_location("public/data/pokemon.json").unwrap(),
        AnySource::File(_)
    ));
}

#[test]
fn same_number_in_different_dexes_is_fine() {
    let catalogue = parse_catalogue(
        r#"[{"id": 1, "name": "a", "kanto": 1, "galar": 1}, {"id": 2, "name": "b", "paldea": 1}]"#,
    )
    .unwrap();
    assert_eq!(catalogue.len(), 2);
}
