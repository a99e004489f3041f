use super::*;
use serde_json::json;

#[test]
fn parses_flat_record_with_nulls_and_missing_keys() {
    let p: Pokemon = serde_json::from_value(json!({
        "id": 25,
        "name": "pikachu",
        "kanto": 25,
        "updated_johto": 22,
        "galar": null,
    }))
    .unwrap();

    assert_eq!(p.id, 25);
    assert_eq!(p.name, "pikachu");
    assert_eq!(p.dex_number(RegionalDex::Kanto), Some(25));
    assert_eq!(p.dex_number(RegionalDex::UpdatedJohto), Some(22));
    assert_eq!(p.dex_number(RegionalDex::Galar), None);
    assert_eq!(p.dex_number(RegionalDex::Paldea), None);
    assert_eq!(p.dex_numbers.len(), 2);
}

#[test]
fn unknown_keys_are_ignored() {
    let p: Pokemon =
        serde_json::from_value(json!({"id": 1, "name": "bulbasaur", "sprite": "x.png"})).unwrap();
    assert!(p.dex_numbers.is_empty());
}

#[test]
fn non_numeric_dex_value_is_rejected() {
    let err = Pokemon::from_json_object(
        json!({"id": 1, "name": "bulbasaur", "kanto": "1"})
            .as_object()
            .unwrap(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        PokemonError::InvalidField {
            field: "kanto".to_string(),
            value: "\"1\"".to_string(),
        }
    );
}

#[test]
fn zero_and_negative_values_are_rejected() {
    for bad in [json!(0), json!(-3), json!(1.5)] {
        let obj = json!({"id": 1, "name": "bulbasaur", "galar": bad});
        assert!(Pokemon::from_json_object(obj.as_object().unwrap()).is_err());
    }
    let obj = json!({"id": 0, "name": "missingno"});
    assert!(Pokemon::from_json_object(obj.as_object().unwrap()).is_err());
}

#[test]
fn missing_id_or_name_is_rejected() {
    let no_id = json!({"name": "bulbasaur"});
    assert_eq!(
        Pokemon::from_json_object(no_id.as_object().unwrap()),
        Err(PokemonError::MissingField("id"))
    );
    let no_name = json!({"id": 1});
    assert_eq!(
        Pokemon::from_json_object(no_name.as_object().unwrap()),
        Err(PokemonError::MissingField("name"))
    );
    let blank = json!({"id": 1, "name": "  "});
    assert_eq!(
        Pokemon::from_json_object(blank.as_object().unwrap()),
        Err(PokemonError::EmptyName(1))
    );
}

#[test]
fn non_object_record_fails_to_deserialize() {
    let result: Result<Pokemon, _> = serde_json::from_value(json!([1, "bulbasaur"]));
    assert!(result.is_err());
}

#[test]
fn serializes_every_dex_column() {
    let p = Pokemon::new(1, "bulbasaur").with_dex(RegionalDex::Kanto, 1);
    let value = serde_json::to_value(&p).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2 + RegionalDex::all().len());
    assert_eq!(obj["kanto"], json!(1));
    assert_eq!(obj["blueberry"], json!(null));

    let back: Pokemon = serde_json::from_value(value).unwrap();
    assert_eq!(back, p);
}

#[test]
fn set_dex_number_inserts_and_clears() {
    let mut p = Pokemon::new(7, "squirtle");
    p.set_dex_number(RegionalDex::Kanto, Some(7));
    assert_eq!(p.dex_number(RegionalDex::Kanto), Some(7));
    p.set_dex_number(RegionalDex::Kanto, None);
    assert_eq!(p.dex_number(RegionalDex::Kanto), None);
}

#[test]
fn dex_parses_column_and_slug() {
    assert_eq!("isle_of_armor".parse::<RegionalDex>().unwrap(), RegionalDex::IsleOfArmor);
    assert_eq!("isle-of-armor".parse::<RegionalDex>().unwrap(), RegionalDex::IsleOfArmor);
    assert_eq!("Updated-Hoenn".parse::<RegionalDex>().unwrap(), RegionalDex::UpdatedHoenn);
    assert!("national".parse::<RegionalDex>().is_err());
    assert_eq!(RegionalDex::all().len(), 16);
    for &dex in RegionalDex::all() {
        assert_eq!(RegionalDex::from_column(dex.column()), Some(dex));
        assert_eq!(dex.api_slug().replace('-', "_"), dex.column());
    }
}
