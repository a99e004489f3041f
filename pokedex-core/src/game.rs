//! Game titles and the regional dexes each one uses.
//!
//! The game-to-dex table is hand-curated from PokeAPI's pokedex listings and
//! never changes at runtime. Order within a game's dex list is display order:
//! the base dex comes before any DLC dexes.
//!
//! The string-keyed functions at the bottom are the boundary for external
//! input. They match exact titles only and are total: anything else, aliases
//! included, behaves like a game with no dexes and region [`UNKNOWN_REGION`].
//! Alias-tolerant parsing lives in `FromStr`.

use crate::dex::RegionalDex;
use crate::pokemon::Pokemon;
use crate::region::{Region, UNKNOWN_REGION};

/// Pokemon titles (or title pairs) covered by the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameName {
    FireRedLeafGreen,
    RubySapphire,
    DiamondPearlPlatinum,
    HeartGoldSoulSilver,
    BlackWhite,
    BlackWhite2,
    XY,
    OmegaRubyAlphaSapphire,
    UltraSunUltraMoon,
    SwordShield,
    LegendsArceus,
    ScarletViolet,
    LegendsZA,
}

/// The dexes and region for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Never empty.
    pub dexes: &'static [RegionalDex],
    pub region: Region,
}

use RegionalDex as D;

const KALOS_DEXES: &[RegionalDex] = &[D::KalosCentral, D::KalosCoastal, D::KalosMountain];

/// All games in release-table order.
const ALL_GAMES: &[GameName] = &[
    GameName::FireRedLeafGreen,
    GameName::RubySapphire,
    GameName::DiamondPearlPlatinum,
    GameName::HeartGoldSoulSilver,
    GameName::BlackWhite,
    GameName::BlackWhite2,
    GameName::XY,
    GameName::OmegaRubyAlphaSapphire,
    GameName::UltraSunUltraMoon,
    GameName::SwordShield,
    GameName::LegendsArceus,
    GameName::ScarletViolet,
    GameName::LegendsZA,
];

impl GameName {
    /// The display title, which is also the lookup key for string input.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FireRedLeafGreen => "FireRed/LeafGreen",
            Self::RubySapphire => "Ruby/Sapphire",
            Self::DiamondPearlPlatinum => "Diamond/Pearl/Platinum",
            Self::HeartGoldSoulSilver => "HeartGold/SoulSilver",
            Self::BlackWhite => "Black/White",
            Self::BlackWhite2 => "Black/White 2",
            Self::XY => "X/Y",
            Self::OmegaRubyAlphaSapphire => "Omega Ruby/Alpha Sapphire",
            Self::UltraSunUltraMoon => "Ultra Sun/Ultra Moon",
            Self::SwordShield => "Sword/Shield",
            Self::LegendsArceus => "Legends: Arceus",
            Self::ScarletViolet => "Scarlet/Violet",
            Self::LegendsZA => "Legends: Z-A",
        }
    }

    /// Short names accepted in addition to the title (case-insensitive).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::FireRedLeafGreen => &["frlg", "firered", "leafgreen"],
            Self::RubySapphire => &["rs", "ruby", "sapphire"],
            Self::DiamondPearlPlatinum => &["dppt", "dp", "diamond", "pearl", "platinum"],
            Self::HeartGoldSoulSilver => &["hgss", "heartgold", "soulsilver"],
            Self::BlackWhite => &["bw", "black", "white"],
            Self::BlackWhite2 => &["bw2", "b2w2", "black 2", "white 2"],
            Self::XY => &["xy"],
            Self::OmegaRubyAlphaSapphire => &["oras", "omega ruby", "alpha sapphire"],
            Self::UltraSunUltraMoon => &["usum", "ultra sun", "ultra moon"],
            Self::SwordShield => &["swsh", "sword", "shield"],
            Self::LegendsArceus => &["pla", "arceus", "legends arceus"],
            Self::ScarletViolet => &["sv", "scarlet", "violet"],
            Self::LegendsZA => &["lza", "z-a", "legends z-a"],
        }
    }

    pub fn config(&self) -> GameConfig {
        GameConfig {
            dexes: self.dexes(),
            region: self.region(),
        }
    }

    pub fn dexes(&self) -> &'static [RegionalDex] {
        match self {
            Self::FireRedLeafGreen => &[D::Kanto],
            Self::RubySapphire => &[D::UpdatedHoenn],
            Self::DiamondPearlPlatinum => &[D::ExtendedSinnoh],
            Self::HeartGoldSoulSilver => &[D::UpdatedJohto],
            Self::BlackWhite => &[D::UpdatedUnova],
            Self::BlackWhite2 => &[D::UpdatedUnova],
            Self::XY => KALOS_DEXES,
            Self::OmegaRubyAlphaSapphire => &[D::UpdatedHoenn],
            Self::UltraSunUltraMoon => &[D::UpdatedAlola],
            Self::SwordShield => &[D::Galar, D::IsleOfArmor, D::CrownTundra],
            Self::LegendsArceus => &[D::Hisui],
            Self::ScarletViolet => &[D::Paldea, D::Kitakami, D::Blueberry],
            Self::LegendsZA => KALOS_DEXES,
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Self::FireRedLeafGreen => Region::Kanto,
            Self::RubySapphire | Self::OmegaRubyAlphaSapphire => Region::Hoenn,
            Self::DiamondPearlPlatinum => Region::Sinnoh,
            Self::HeartGoldSoulSilver => Region::Johto,
            Self::BlackWhite | Self::BlackWhite2 => Region::Unova,
            Self::XY | Self::LegendsZA => Region::Kalos,
            Self::UltraSunUltraMoon => Region::Alola,
            Self::SwordShield => Region::Galar,
            Self::LegendsArceus => Region::Hisui,
            Self::ScarletViolet => Region::Paldea,
        }
    }

    /// True if `pokemon` has an entry in any of this game's dexes.
    pub fn includes(&self, pokemon: &Pokemon) -> bool {
        pokemon.appears_in_any(self.dexes())
    }

    /// All 13 games.
    pub fn all() -> &'static [GameName] {
        ALL_GAMES
    }

    /// The game whose title is exactly `title` (case and spacing significant).
    pub fn from_title(title: &str) -> Option<Self> {
        ALL_GAMES.iter().copied().find(|g| g.title() == title)
    }
}

impl std::fmt::Display for GameName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when a string names no known game.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown game: '{0}'")]
pub struct GameParseError(pub String);

impl std::str::FromStr for GameName {
    type Err = GameParseError;

    /// Parse a game from its title or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &game in ALL_GAMES {
            if game.title().to_lowercase() == lower {
                return Ok(game);
            }
            if game.aliases().contains(&lower.as_str()) {
                return Ok(game);
            }
        }
        Err(GameParseError(s.to_string()))
    }
}

/// Dexes used by the game titled `game`, or an empty slice for any other string.
pub fn dexes_for_game(game: &str) -> &'static [RegionalDex] {
    GameName::from_title(game).map_or(&[], |g| g.dexes())
}

/// Region name for the game titled `game`, or [`UNKNOWN_REGION`].
pub fn region_for_game(game: &str) -> &'static str {
    GameName::from_title(game).map_or(UNKNOWN_REGION, |g| g.region().name())
}

/// Whether `pokemon` appears in at least one dex of `game`.
pub fn pokemon_in_game(pokemon: &Pokemon, game: &str) -> bool {
    pokemon.appears_in_any(dexes_for_game(game))
}

#[cfg(test)]
#[path = "tests/game_tests.rs"]
mod tests;
