use serde::{Deserialize, Serialize};

/// Display name returned for games that are not in the mapping table.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Regions a game can be set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Hisui,
    Paldea,
}

impl Region {
    /// Returns the display name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kanto => "Kanto",
            Self::Johto => "Johto",
            Self::Hoenn => "Hoenn",
            Self::Sinnoh => "Sinnoh",
            Self::Unova => "Unova",
            Self::Kalos => "Kalos",
            Self::Alola => "Alola",
            Self::Galar => "Galar",
            Self::Hisui => "Hisui",
            Self::Paldea => "Paldea",
        }
    }

    /// All ten regions.
    pub fn all() -> &'static [Region] {
        &[
            Self::Kanto,
            Self::Johto,
            Self::Hoenn,
            Self::Sinnoh,
            Self::Unova,
            Self::Kalos,
            Self::Alola,
            Self::Galar,
            Self::Hisui,
            Self::Paldea,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
