//! Food catalog and listing enums.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Vegetarian marker shown on catalog items and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl FoodType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
        }
    }
}

impl FromStr for FoodType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Veg" => Ok(Self::Veg),
            "Non-Veg" => Ok(Self::NonVeg),
            other => Err(UnknownVariant {
                kind: "food type",
                value: other.to_owned(),
            }),
        }
    }
}

/// Availability of a vendor member's listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Available,
    Finished,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Finished => "Finished",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "Finished" => Ok(Self::Finished),
            other => Err(UnknownVariant {
                kind: "listing status",
                value: other.to_owned(),
            }),
        }
    }
}
