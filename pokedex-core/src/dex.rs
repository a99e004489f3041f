use serde::{Deserialize, Serialize};

/// Regional Pokedex identifiers.
///
/// Each variant corresponds to one nullable column in the `pokemon` table
/// and one pokedex resource on PokeAPI. The column name (snake_case) is the
/// canonical spelling; the API slug (kebab-case) is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionalDex {
    Kanto,
    UpdatedJohto,
    UpdatedHoenn,
    ExtendedSinnoh,
    UpdatedUnova,
    KalosCentral,
    KalosCoastal,
    KalosMountain,
    UpdatedAlola,
    Galar,
    IsleOfArmor,
    CrownTundra,
    Hisui,
    Paldea,
    Kitakami,
    Blueberry,
}

/// All regional dexes in column order.
const ALL_DEXES: &[RegionalDex] = &[
    RegionalDex::Kanto,
    RegionalDex::UpdatedJohto,
    RegionalDex::UpdatedHoenn,
    RegionalDex::ExtendedSinnoh,
    RegionalDex::UpdatedUnova,
    RegionalDex::KalosCentral,
    RegionalDex::KalosCoastal,
    RegionalDex::KalosMountain,
    RegionalDex::UpdatedAlola,
    RegionalDex::Galar,
    RegionalDex::IsleOfArmor,
    RegionalDex::CrownTundra,
    RegionalDex::Hisui,
    RegionalDex::Paldea,
    RegionalDex::Kitakami,
    RegionalDex::Blueberry,
];

impl RegionalDex {
    /// Column name in the catalogue database and key in the JSON export.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Kanto => "kanto",
            Self::UpdatedJohto => "updated_johto",
            Self::UpdatedHoenn => "updated_hoenn",
            Self::ExtendedSinnoh => "extended_sinnoh",
            Self::UpdatedUnova => "updated_unova",
            Self::KalosCentral => "kalos_central",
            Self::KalosCoastal => "kalos_coastal",
            Self::KalosMountain => "kalos_mountain",
            Self::UpdatedAlola => "updated_alola",
            Self::Galar => "galar",
            Self::IsleOfArmor => "isle_of_armor",
            Self::CrownTundra => "crown_tundra",
            Self::Hisui => "hisui",
            Self::Paldea => "paldea",
            Self::Kitakami => "kitakami",
            Self::Blueberry => "blueberry",
        }
    }

    /// Pokedex name as used in PokeAPI URLs (`/pokedex/{slug}`).
    pub fn api_slug(&self) -> &'static str {
        match self {
            Self::Kanto => "kanto",
            Self::UpdatedJohto => "updated-johto",
            Self::UpdatedHoenn => "updated-hoenn",
            Self::ExtendedSinnoh => "extended-sinnoh",
            Self::UpdatedUnova => "updated-unova",
            Self::KalosCentral => "kalos-central",
            Self::KalosCoastal => "kalos-coastal",
            Self::KalosMountain => "kalos-mountain",
            Self::UpdatedAlola => "updated-alola",
            Self::Galar => "galar",
            Self::IsleOfArmor => "isle-of-armor",
            Self::CrownTundra => "crown-tundra",
            Self::Hisui => "hisui",
            Self::Paldea => "paldea",
            Self::Kitakami => "kitakami",
            Self::Blueberry => "blueberry",
        }
    }

    /// All 16 regional dexes.
    pub fn all() -> &'static [RegionalDex] {
        ALL_DEXES
    }

    /// Look up a dex by its exact column name.
    pub fn from_column(column: &str) -> Option<Self> {
        ALL_DEXES.iter().copied().find(|d| d.column() == column)
    }
}

impl std::fmt::Display for RegionalDex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Error returned when a string names no known regional dex.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown pokedex: '{0}'")]
pub struct DexParseError(pub String);

impl std::str::FromStr for RegionalDex {
    type Err = DexParseError;

    /// Parse from either the column name or the PokeAPI slug (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_DEXES
            .iter()
            .copied()
            .find(|d| d.column() == lower || d.api_slug() == lower)
            .ok_or_else(|| DexParseError(s.to_string()))
    }
}
