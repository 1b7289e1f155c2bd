use crate::Rarity;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Cosmetic slot a shop item goes into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemCategory {
    Avatar,
    Background,
    Frame,
    Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub price: i64,
    #[serde(default)]
    pub rarity: Rarity,
    /// Hex color string as stored by the backend, e.g. "#FFCB05".
    #[serde(default)]
    pub theme_color: Option<String>,
}
