#[cfg(test)]
mod tests {
    use crate::missions::tests::common::{at, TestMissionBuilder};
    use crate::missions::{MissionEvaluator, MissionState, ProgressOutcome};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{RequirementKind, UserMission};

    #[test]
    fn test_progress_caps_at_threshold_and_completes_once() {
        // Arrange
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::CollectionCount, 10).build();
        let mut record = UserMission::new("m1");

        // Act
        let first = evaluator.record_progress(&mission, &mut record, 6, at(0));
        let second = evaluator.record_progress(&mission, &mut record, 6, at(1));
        let third = evaluator.record_progress(&mission, &mut record, 6, at(2));

        // Assert
        assert_eq!(first, ProgressOutcome::Advanced { progress: 6 });
        assert_eq!(second, ProgressOutcome::Completed { completed_at: at(1) });
        assert_eq!(third, ProgressOutcome::Unchanged);
        assert_eq!(record.progress, 10);
        assert!(record.completed);
        assert_eq!(record.completed_at, Some(at(1)));
    }

    #[test]
    fn test_completion_on_first_call_ignores_replay() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::CollectionCount, 10).build();
        let mut record = UserMission::new("m1");

        let first = evaluator.record_progress(&mission, &mut record, 12, at(0));
        let snapshot = record.clone();
        let replay = evaluator.record_progress(&mission, &mut record, 12, at(5));

        assert_eq!(first, ProgressOutcome::Completed { completed_at: at(0) });
        assert_eq!(replay, ProgressOutcome::Unchanged);
        assert_eq!(record, snapshot);
        assert_eq!(record.progress, 10);
    }

    #[rstest]
    #[case(10)]
    #[case(14)]
    fn test_stale_record_at_threshold_completes_on_next_event(#[case] stored: i64) {
        // Arrange: a persisted row that reached the threshold but was never flagged
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::CollectionCount, 10).build();
        let mut record = UserMission::new("m1");
        record.progress = stored;

        // Act
        let outcome = evaluator.record_progress(&mission, &mut record, 1, at(4));
        let replay = evaluator.record_value(&mission, &mut record, 20, at(5));

        // Assert
        assert_eq!(outcome, ProgressOutcome::Completed { completed_at: at(4) });
        assert_eq!(replay, ProgressOutcome::Unchanged);
        assert!(record.completed);
        assert_eq!(record.completed_at, Some(at(4)));
        assert_eq!(record.progress, 10);
        assert_eq!(
            evaluator.evaluate(&mission, Some(&record)),
            MissionState::Completed {
                completed_at: Some(at(4))
            }
        );
    }

    #[test]
    fn test_negative_and_zero_deltas_change_nothing() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::FavoriteCount, 5).build();
        let mut record = UserMission::new("m1");
        record.progress = 2;

        assert_eq!(
            evaluator.record_progress(&mission, &mut record, 0, at(0)),
            ProgressOutcome::Unchanged
        );
        assert_eq!(
            evaluator.record_progress(&mission, &mut record, -3, at(0)),
            ProgressOutcome::Unchanged
        );
        assert_eq!(record.progress, 2);
    }

    #[test]
    fn test_record_value_only_moves_forward() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("lvl", RequirementKind::LevelReached, 10).build();
        let mut record = UserMission::new("lvl");

        assert_eq!(
            evaluator.record_value(&mission, &mut record, 4, at(0)),
            ProgressOutcome::Advanced { progress: 4 }
        );
        assert_eq!(
            evaluator.record_value(&mission, &mut record, 3, at(1)),
            ProgressOutcome::Unchanged
        );
        assert_eq!(
            evaluator.record_value(&mission, &mut record, 15, at(2)),
            ProgressOutcome::Completed { completed_at: at(2) }
        );
        assert_eq!(record.progress, 10);
    }

    #[test]
    fn test_evaluate_states() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::PurchaseCount, 3).build();
        let mut record = UserMission::new("m1");

        assert_eq!(evaluator.evaluate(&mission, None), MissionState::NotStarted);
        assert_eq!(
            evaluator.evaluate(&mission, Some(&record)),
            MissionState::InProgress { progress: 0 }
        );

        evaluator.record_progress(&mission, &mut record, 3, at(7));
        assert_eq!(
            evaluator.evaluate(&mission, Some(&record)),
            MissionState::Completed {
                completed_at: Some(at(7))
            }
        );
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(5, 0.5)]
    #[case(10, 1.0)]
    #[case(25, 1.0)]
    #[case(-4, 0.0)]
    fn test_completion_percentage_is_clamped(#[case] progress: i64, #[case] expected: f64) {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::GoldEarned, 10).build();
        let mut record = UserMission::new("m1");
        record.progress = progress;

        assert_eq!(
            evaluator.completion_percentage(&mission, Some(&record)),
            expected
        );
    }

    #[test]
    fn test_completion_percentage_without_record() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::GoldEarned, 10).build();
        assert_eq!(evaluator.completion_percentage(&mission, None), 0.0);
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn test_zero_threshold_is_complete_with_zero_percent(#[case] threshold: i64) {
        let evaluator = MissionEvaluator;
        let mission =
            TestMissionBuilder::new("free", RequirementKind::TeamCount, threshold).build();
        let mut record = UserMission::new("free");

        // Complete before any event, but 0% by convention
        assert_eq!(
            evaluator.evaluate(&mission, None),
            MissionState::Completed { completed_at: None }
        );
        assert_eq!(evaluator.completion_percentage(&mission, None), 0.0);

        // The first event stamps completion, progress stays at 0
        let outcome = evaluator.record_progress(&mission, &mut record, 1, at(3));
        assert_eq!(outcome, ProgressOutcome::Completed { completed_at: at(3) });
        assert_eq!(record.progress, 0);
        assert_eq!(
            evaluator.completion_percentage(&mission, Some(&record)),
            0.0
        );
        assert_eq!(
            evaluator.record_progress(&mission, &mut record, 1, at(4)),
            ProgressOutcome::Unchanged
        );
    }

    #[test]
    fn test_percentage_stays_in_range_for_any_sequence() {
        let evaluator = MissionEvaluator;
        let mission = TestMissionBuilder::new("m1", RequirementKind::CollectionCount, 7).build();
        let mut record = UserMission::new("m1");

        for (minute, delta) in [3, 0, 2, 9, 1, 4].into_iter().enumerate() {
            evaluator.record_progress(&mission, &mut record, delta, at(minute as u32));
            let pct = evaluator.completion_percentage(&mission, Some(&record));
            assert!((0.0..=1.0).contains(&pct));
            assert!(record.progress <= mission.requirement_value);
        }
        assert!(record.completed);
    }
}
