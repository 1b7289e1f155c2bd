//! Lenient parsing of the free-text keys the backend stores for missions.
//!
//! Unknown keys do not fail: they fall back to a default and log a warning,
//! so a mission seeded with a legacy or misspelled key still shows up.
//! Use `str::parse` on the enums for strict parsing.

use schema::{Rarity, RequirementKind};

/// Kind used when a requirement key is not recognised
pub const FALLBACK_REQUIREMENT_KIND: RequirementKind = RequirementKind::FavoriteCount;

/// "favoriteCount", "Favorite-Count " and "favorite_count" all become "favorite_count"
pub fn normalize_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len() + 4);
    let mut previous: Option<char> = None;

    for c in text.trim().chars() {
        match c {
            '-' | ' ' | '_' => {
                if !key.ends_with('_') && !key.is_empty() {
                    key.push('_');
                }
            }
            c if c.is_uppercase() => {
                if previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                    key.push('_');
                }
                key.extend(c.to_lowercase());
            }
            c => key.push(c),
        }
        previous = Some(c);
    }

    key.trim_end_matches('_').to_string()
}

/// Map a free-text requirement key onto a `RequirementKind`, accepting the
/// aliases seen in seed data. Unrecognised keys become `FavoriteCount`.
pub fn parse_requirement_kind(text: &str) -> RequirementKind {
    let key = normalize_key(text);
    let kind = match key.as_str() {
        "favorite_count" | "favorites" | "favorite" | "favorite_pokemon" => {
            Some(RequirementKind::FavoriteCount)
        }
        "purchase_count" | "purchases" | "purchase" | "shop_purchase" => {
            Some(RequirementKind::PurchaseCount)
        }
        "pet_change_count" | "pet_changes" | "pet_change" | "change_pet" => {
            Some(RequirementKind::PetChangeCount)
        }
        "collection_count" | "collection" | "catch_count" | "pokemon_caught" | "catch" => {
            Some(RequirementKind::CollectionCount)
        }
        "team_count" | "team" | "team_size" => Some(RequirementKind::TeamCount),
        "level_reached" | "level" | "reach_level" => Some(RequirementKind::LevelReached),
        "gold_earned" | "gold" | "earn_gold" => Some(RequirementKind::GoldEarned),
        "type_collection_count" | "type_collection" | "collect_type" => {
            Some(RequirementKind::TypeCollectionCount)
        }
        "generation_collection_count" | "generation_collection" | "collect_generation" => {
            Some(RequirementKind::GenerationCollectionCount)
        }
        "legendary_item_equip" | "equip_legendary" | "legendary_equip" => {
            Some(RequirementKind::LegendaryItemEquip)
        }
        _ => None,
    };

    kind.unwrap_or_else(|| {
        tracing::warn!(
            "Unrecognised requirement kind '{}', defaulting to {}",
            text,
            FALLBACK_REQUIREMENT_KIND
        );
        FALLBACK_REQUIREMENT_KIND
    })
}

/// Map free-text rarity onto `Rarity`; unknown values become `Common`.
pub fn parse_rarity(text: &str) -> Rarity {
    normalize_key(text).parse().unwrap_or_else(|_| {
        tracing::warn!("Unrecognised rarity '{}', defaulting to common", text);
        Rarity::Common
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("favorite_count", "favorite_count")]
    #[case("favoriteCount", "favorite_count")]
    #[case("  Favorite-Count ", "favorite_count")]
    #[case("LEVEL REACHED", "level_reached")]
    #[case("gold__earned", "gold_earned")]
    fn test_normalize_key(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_key(input), expected);
    }

    #[rstest]
    #[case("purchase_count", RequirementKind::PurchaseCount)]
    #[case("petChangeCount", RequirementKind::PetChangeCount)]
    #[case("catch", RequirementKind::CollectionCount)]
    #[case("team-size", RequirementKind::TeamCount)]
    #[case("Level", RequirementKind::LevelReached)]
    #[case("type_collection", RequirementKind::TypeCollectionCount)]
    #[case("generation collection count", RequirementKind::GenerationCollectionCount)]
    #[case("equip_legendary", RequirementKind::LegendaryItemEquip)]
    fn test_parse_requirement_kind_aliases(#[case] input: &str, #[case] expected: RequirementKind) {
        assert_eq!(parse_requirement_kind(input), expected);
    }

    #[test]
    fn test_every_canonical_key_round_trips() {
        for kind in RequirementKind::iter() {
            assert_eq!(parse_requirement_kind(kind.key()), kind);
        }
    }

    #[test]
    fn test_unknown_kind_falls_back_to_favorite_count() {
        assert_eq!(
            parse_requirement_kind("win_battles"),
            RequirementKind::FavoriteCount
        );
        assert_eq!(parse_requirement_kind(""), RequirementKind::FavoriteCount);
    }

    #[test]
    fn test_strict_parse_rejects_unknown_kind() {
        assert!("win_battles".parse::<RequirementKind>().is_err());
        assert_eq!(
            "gold_earned".parse::<RequirementKind>(),
            Ok(RequirementKind::GoldEarned)
        );
    }

    #[rstest]
    #[case("legendary", Rarity::Legendary)]
    #[case("Epic", Rarity::Epic)]
    #[case("RARE", Rarity::Rare)]
    #[case("mythic", Rarity::Common)]
    fn test_parse_rarity(#[case] input: &str, #[case] expected: Rarity) {
        assert_eq!(parse_rarity(input), expected);
    }
}
