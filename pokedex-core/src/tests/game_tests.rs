use super::*;

#[test]
fn all_has_13_games() {
    assert_eq!(GameName::all().len(), 13);
}

#[test]
fn every_game_has_dexes_and_a_known_region() {
    for &game in GameName::all() {
        assert!(!dexes_for_game(game.title()).is_empty(), "{game} has no dexes");
        let region = region_for_game(game.title());
        assert_ne!(region, UNKNOWN_REGION);
        assert!(
            Region::all().iter().any(|r| r.name() == region),
            "{game} maps to unexpected region {region}",
        );
    }
}

#[test]
fn titles_round_trip() {
    for &game in GameName::all() {
        let parsed: GameName = game.title().parse().unwrap();
        assert_eq!(parsed, game, "round-trip failed for {:?}", game);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("swsh", GameName::SwordShield),
        ("SV", GameName::ScarletViolet),
        ("frlg", GameName::FireRedLeafGreen),
        ("bw2", GameName::BlackWhite2),
        ("bw", GameName::BlackWhite),
        ("pla", GameName::LegendsArceus),
        ("z-a", GameName::LegendsZA),
        ("sword/shield", GameName::SwordShield),
    ];
    for (input, expected) in cases {
        let parsed: GameName = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn aliases_are_unique_across_games() {
    let mut seen = std::collections::HashSet::new();
    for &game in GameName::all() {
        assert!(seen.insert(game.title().to_lowercase()));
        for alias in game.aliases() {
            assert!(seen.insert(alias.to_string()), "duplicate alias '{alias}'");
        }
    }
}

#[test]
fn sword_shield_uses_galar_and_dlc_dexes() {
    assert_eq!(
        dexes_for_game("Sword/Shield"),
        &[
            RegionalDex::Galar,
            RegionalDex::IsleOfArmor,
            RegionalDex::CrownTundra
        ]
    );
    assert_eq!(region_for_game("Sword/Shield"), "Galar");
}

#[test]
fn unknown_game_is_empty_not_an_error() {
    assert!(dexes_for_game("Unknown Title").is_empty());
    assert_eq!(region_for_game("Unknown Title"), "Unknown");
    assert!(dexes_for_game("").is_empty());

    let pokemon = Pokemon::new(25, "pikachu").with_dex(RegionalDex::Kanto, 25);
    assert!(!pokemon_in_game(&pokemon, "Unknown Title"));
}

#[test]
fn games_sharing_a_dex_list_are_listed_independently() {
    assert_eq!(GameName::XY.dexes(), GameName::LegendsZA.dexes());
    assert_eq!(GameName::BlackWhite.config(), GameName::BlackWhite2.config());
    assert_ne!(GameName::XY, GameName::LegendsZA);
}

#[test]
fn pokemon_in_game_checks_any_dex() {
    let toxtricity = Pokemon::new(849, "toxtricity").with_dex(RegionalDex::Galar, 311);
    assert!(pokemon_in_game(&toxtricity, "Sword/Shield"));
    assert!(!pokemon_in_game(&toxtricity, "Scarlet/Violet"));

    let dlc_only = Pokemon::new(891, "kubfu").with_dex(RegionalDex::IsleOfArmor, 199);
    assert!(pokemon_in_game(&dlc_only, "Sword/Shield"));
    assert!(GameName::SwordShield.includes(&dlc_only));

    let nowhere = Pokemon::new(1, "bulbasaur");
    for &game in GameName::all() {
        assert!(!pokemon_in_game(&nowhere, game.title()));
    }
}

#[test]
fn pokemon_in_game_matches_dex_membership_for_every_game() {
    let pokemon = Pokemon::new(133, "eevee")
        .with_dex(RegionalDex::Kanto, 133)
        .with_dex(RegionalDex::KalosCentral, 78)
        .with_dex(RegionalDex::Paldea, 184);
    for &game in GameName::all() {
        let expected = game
            .dexes()
            .iter()
            .any(|d| pokemon.dex_number(*d).is_some());
        assert_eq!(pokemon_in_game(&pokemon, game.title()), expected, "{game}");
    }
}

#[test]
fn string_lookups_need_the_exact_title() {
    assert!(dexes_for_game("sword").is_empty());
    assert!(dexes_for_game("swsh").is_empty());
    assert!(dexes_for_game("sword/shield").is_empty());
    assert_eq!(region_for_game("white"), UNKNOWN_REGION);
    assert_eq!(region_for_game("  X/Y  "), UNKNOWN_REGION);

    let kubfu = Pokemon::new(891, "kubfu").with_dex(RegionalDex::IsleOfArmor, 199);
    assert!(!pokemon_in_game(&kubfu, "swsh"));
    assert!(pokemon_in_game(&kubfu, "Sword/Shield"));
}

#[test]
fn from_title_matches_titles_only() {
    for &game in GameName::all() {
        assert_eq!(GameName::from_title(game.title()), Some(game));
        for alias in game.aliases() {
            assert_eq!(GameName::from_title(alias), None, "alias '{alias}'");
        }
    }
}
