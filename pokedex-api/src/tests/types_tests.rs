use super::*;

#[test]
fn species_id_with_trailing_slash() {
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/25/"),
        Some(25)
    );
}

#[test]
fn species_id_without_trailing_slash() {
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/1025"),
        Some(1025)
    );
}

#[test]
fn species_id_rejects_non_numeric_segment() {
    assert_eq!(
        species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/pikachu/"),
        None
    );
    assert_eq!(species_id_from_url(""), None);
}

#[test]
fn parses_pokedex_response() {
    let body = r#"{
        "id": 27,
        "name": "galar",
        "is_main_series": true,
        "pokemon_entries": [
            {
                "entry_number": 1,
                "pokemon_species": {
                    "name": "grookey",
                    "url": "https://pokeapi.co/api/v2/pokemon-species/810/"
                }
            },
            {
                "entry_number": 2,
                "pokemon_species": {
                    "name": "thwackey",
                    "url": "https://pokeapi.co/api/v2/pokemon-species/811/"
                }
            }
        ]
    }"#;

    let dex: Pokedex = serde_json::from_str(body).unwrap();
    assert_eq!(dex.id, 27);
    assert_eq!(dex.name, "galar");
    assert_eq!(dex.pokemon_entries.len(), 2);
    assert_eq!(dex.pokemon_entries[1].entry_number, 2);
    assert_eq!(dex.pokemon_entries[1].pokemon_species.name, "thwackey");
    assert_eq!(dex.pokemon_entries[1].pokemon_species.id(), Some(811));
}
