#[cfg(test)]
mod tests {
    use crate::config::EconomyConfig;
    use crate::errors::ShopError;
    use crate::progression::tests::common::TestProfileBuilder;
    use crate::progression::Ledger;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_award_xp_without_level_up() {
        // Arrange
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("ash").build();

        // Act
        let summary = ledger.award_xp(&mut profile, 150);

        // Assert
        assert_eq!(profile.xp, 150);
        assert_eq!(profile.level, 1);
        assert!(!summary.leveled_up());
        assert_eq!(summary.gold_awarded, 0);
        assert_eq!(profile.gold, 0);
    }

    #[test]
    fn test_award_xp_pays_every_level_gained() {
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("misty").build();

        // 0 -> 1000 xp crosses levels 2..=10
        let summary = ledger.award_xp(&mut profile, 1000);

        assert_eq!(summary.previous_level, 1);
        assert_eq!(summary.new_level, 10);
        assert_eq!(summary.levels_gained(), 9);
        // 9 levels * 50 flat + level 5 bonus + level 10 (5th and 10th) bonuses
        assert_eq!(summary.gold_awarded, 9 * 50 + 100 + 100 + 250);
        assert_eq!(profile.gold, summary.gold_awarded);
        assert_eq!(profile.stats.gold_earned, summary.gold_awarded);
        assert_eq!(profile.level, 10);
    }

    #[test]
    fn test_award_negative_xp_is_ignored() {
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("brock").with_xp(300, 3).build();

        let summary = ledger.award_xp(&mut profile, -500);

        assert_eq!(profile.xp, 300);
        assert_eq!(profile.level, 3);
        assert!(!summary.leveled_up());
    }

    #[test]
    fn test_award_xp_uses_configured_step() {
        let ledger = Ledger::new(EconomyConfig {
            xp_per_level: 10,
            ..Default::default()
        });
        let mut profile = TestProfileBuilder::new("gary").build();

        let summary = ledger.award_xp(&mut profile, 35);

        assert_eq!(summary.new_level, 3);
    }

    #[test]
    fn test_huge_xp_award_pays_in_closed_form() {
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("red").build();

        let summary = ledger.award_xp(&mut profile, i64::MAX);

        assert_eq!(summary.new_level, u32::MAX);
        assert_eq!(
            summary.gold_awarded,
            ledger.gold_for_levels(1, u32::MAX),
            "gold for levels 2..=u32::MAX"
        );
        assert_eq!(profile.gold, summary.gold_awarded);
        assert_eq!(ledger.xp_to_next_level(profile.xp), 0);
    }

    #[test]
    fn test_spend_gold() {
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("ash").with_gold(100).build();

        assert_eq!(ledger.spend_gold(&mut profile, 60), Ok(()));
        assert_eq!(profile.gold, 40);

        let result = ledger.spend_gold(&mut profile, 41);
        assert_eq!(
            result,
            Err(ShopError::InsufficientGold {
                required: 41,
                available: 40
            })
        );
        assert_eq!(profile.gold, 40, "failed spend must not touch the balance");
    }

    #[test]
    fn test_earn_gold_ignores_negative_amounts() {
        let ledger = Ledger::default();
        let mut profile = TestProfileBuilder::new("ash").with_gold(10).build();

        assert_eq!(ledger.earn_gold(&mut profile, -5), 0);
        assert_eq!(ledger.earn_gold(&mut profile, 5), 5);
        assert_eq!(profile.gold, 15);
        assert_eq!(profile.stats.gold_earned, 5);
    }
}
