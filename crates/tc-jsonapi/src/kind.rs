//! The closed set of TCAPI resource kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A domain resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Attribute,
    Brand,
    Card,
    Genre,
    Manufacturer,
    Player,
    PlayerTeam,
    Set,
    Team,
    Year,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: [ResourceKind; 10] = [
        ResourceKind::Attribute,
        ResourceKind::Brand,
        ResourceKind::Card,
        ResourceKind::Genre,
        ResourceKind::Manufacturer,
        ResourceKind::Player,
        ResourceKind::PlayerTeam,
        ResourceKind::Set,
        ResourceKind::Team,
        ResourceKind::Year,
    ];

    /// Singular, capitalized wire form used as the registry key.
    pub fn type_key(&self) -> &'static str {
        match self {
            ResourceKind::Attribute => "Attribute",
            ResourceKind::Brand => "Brand",
            ResourceKind::Card => "Card",
            ResourceKind::Genre => "Genre",
            ResourceKind::Manufacturer => "Manufacturer",
            ResourceKind::Player => "Player",
            ResourceKind::PlayerTeam => "Playerteam",
            ResourceKind::Set => "Set",
            ResourceKind::Team => "Team",
            ResourceKind::Year => "Year",
        }
    }

    /// Collection path segment, e.g. `cards`.
    pub fn collection_path(&self) -> &'static str {
        match self {
            ResourceKind::Attribute => "attributes",
            ResourceKind::Brand => "brands",
            ResourceKind::Card => "cards",
            ResourceKind::Genre => "genres",
            ResourceKind::Manufacturer => "manufacturers",
            ResourceKind::Player => "players",
            ResourceKind::PlayerTeam => "playerteams",
            ResourceKind::Set => "sets",
            ResourceKind::Team => "teams",
            ResourceKind::Year => "years",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_key())
    }
}
