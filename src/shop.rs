//! Cosmetic shop: buying items with gold and equipping them.

use crate::errors::{ShopError, ShopResult};
use crate::missions::GameEvent;
use crate::progression::Ledger;
use schema::{ItemCategory, Rarity, ShopItem, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// An RGB(A) color read from a shop item's theme string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ThemeColor {
    /// Used whenever a theme string cannot be read (Pokédex red, #EF5350)
    pub const DEFAULT: ThemeColor = ThemeColor {
        alpha: 0xFF,
        red: 0xEF,
        green: 0x53,
        blue: 0x50,
    };

    /// Strict parse of `#RRGGBB`, `RRGGBB` or `#AARRGGBB`
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;

        match hex.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Like `parse`, but malformed strings give `DEFAULT` instead of failing
    pub fn parse_lenient(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|| {
            tracing::warn!("Malformed theme color '{}', using default", text);
            Self::DEFAULT
        })
    }

    fn from_argb(value: u32) -> Self {
        let [alpha, red, green, blue] = value.to_be_bytes();
        ThemeColor {
            alpha,
            red,
            green,
            blue,
        }
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }
}

/// Theme color of an item; items without one use the default
pub fn item_theme_color(item: &ShopItem) -> ThemeColor {
    item.theme_color
        .as_deref()
        .map(ThemeColor::parse_lenient)
        .unwrap_or_default()
}

/// Item ids a user owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    owned: BTreeSet<String>,
}

impl Inventory {
    pub fn new<I: IntoIterator<Item = String>>(owned: I) -> Self {
        Inventory {
            owned: owned.into_iter().collect(),
        }
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.owned.contains(item_id)
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }
}

/// Buy `item`: spend its price and record ownership. Returns the mission
/// events the purchase produced.
pub fn purchase(
    profile: &mut UserProfile,
    inventory: &mut Inventory,
    item: &ShopItem,
    ledger: &Ledger,
) -> ShopResult<Vec<GameEvent>> {
    if inventory.owns(&item.id) {
        return Err(ShopError::AlreadyOwned(item.id.clone()));
    }
    ledger.spend_gold(profile, item.price)?;

    inventory.owned.insert(item.id.clone());
    profile.stats.purchases += 1;
    tracing::info!(
        "{} bought {} for {} gold",
        profile.username,
        item.name,
        item.price
    );

    Ok(vec![GameEvent::ItemPurchased {
        item_id: item.id.clone(),
    }])
}

/// Put an owned item into its category's slot. Returns the mission events
/// equipping produced; re-equipping the item already in the slot produces none.
pub fn equip(
    profile: &mut UserProfile,
    inventory: &Inventory,
    item: &ShopItem,
) -> ShopResult<Vec<GameEvent>> {
    if !inventory.owns(&item.id) {
        return Err(ShopError::NotOwned(item.id.clone()));
    }

    let slot = match item.category {
        ItemCategory::Avatar => &mut profile.equipped.avatar,
        ItemCategory::Background => &mut profile.equipped.background,
        ItemCategory::Frame => &mut profile.equipped.frame,
        ItemCategory::Title => &mut profile.equipped.title,
    };
    let newly_equipped = slot.as_deref() != Some(item.id.as_str());
    *slot = Some(item.id.clone());

    let mut events = Vec::new();
    if newly_equipped && item.rarity == Rarity::Legendary {
        events.push(GameEvent::LegendaryItemEquipped {
            item_id: item.id.clone(),
        });
    }
    Ok(events)
}

/// Clear a cosmetic slot. Returns the item id that was equipped.
pub fn unequip(profile: &mut UserProfile, category: ItemCategory) -> Option<String> {
    match category {
        ItemCategory::Avatar => profile.equipped.avatar.take(),
        ItemCategory::Background => profile.equipped.background.take(),
        ItemCategory::Frame => profile.equipped.frame.take(),
        ItemCategory::Title => profile.equipped.title.take(),
    }
}
