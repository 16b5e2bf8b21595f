use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// Synthetic category label meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// One catalog entry as delivered by the remote source. Immutable once
/// fetched; `id` is unique and stable across the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
        };
        f.write_str(label)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortKey::None),
            "price_asc" | "asc" => Ok(SortKey::PriceAsc),
            "price_desc" | "desc" => Ok(SortKey::PriceDesc),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}
