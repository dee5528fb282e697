use dms::{FaceSample, FatigueDetector, FatigueRule};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = (u64, f32, f32, Option<f32>, Option<f32>)> {
    (
        0u64..3000,
        -60.0f32..60.0,
        -60.0f32..60.0,
        proptest::option::of(0.0f32..1.0),
        proptest::option::of(0.0f32..1.0),
    )
}

/// Turn (gap, yaw, pitch, left, right) tuples into a non-decreasing stream
fn build_stream(parts: &[(u64, f32, f32, Option<f32>, Option<f32>)]) -> Vec<FaceSample> {
    let mut t = 0;
    parts
        .iter()
        .map(|&(gap, yaw, pitch, left, right)| {
            t += gap;
            FaceSample::new(t, yaw, pitch).with_eyes(left, right)
        })
        .collect()
}

proptest! {
    #[test]
    fn small_yaw_never_fires_yaw_turn(
        parts in prop::collection::vec(sample_strategy(), 1..100),
        yaws in prop::collection::vec(-20.0f32..=20.0, 100)
    ) {
        let mut detector = FatigueDetector::default();
        for (i, mut sample) in build_stream(&parts).into_iter().enumerate() {
            sample.head_yaw_degrees = yaws[i];
            prop_assert!(!detector.evaluate(&sample).contains(FatigueRule::YawTurn));
        }
    }

    #[test]
    fn identical_streams_give_identical_results(
        parts in prop::collection::vec(sample_strategy(), 1..200)
    ) {
        let stream = build_stream(&parts);
        let mut first = FatigueDetector::default();
        let mut second = FatigueDetector::default();

        let a: Vec<_> = stream.iter().map(|s| first.evaluate(s)).collect();
        let b: Vec<_> = stream.iter().map(|s| second.evaluate(s)).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn yaw_fires_at_most_once_per_refractory_window(
        parts in prop::collection::vec(sample_strategy(), 1..200)
    ) {
        let mut detector = FatigueDetector::default();
        let mut last_fire: Option<u64> = None;
        for sample in build_stream(&parts) {
            if detector.evaluate(&sample).contains(FatigueRule::YawTurn) {
                if let Some(last) = last_fire {
                    prop_assert!(sample.timestamp_ms - last > 5000);
                }
                last_fire = Some(sample.timestamp_ms);
            }
        }
    }

    #[test]
    fn missing_eye_never_bursts(
        parts in prop::collection::vec(sample_strategy(), 1..200)
    ) {
        let mut detector = FatigueDetector::default();
        for mut sample in build_stream(&parts) {
            sample.left_eye_open = None;
            prop_assert!(!detector.evaluate(&sample).contains(FatigueRule::BlinkBurst));
        }
        prop_assert_eq!(detector.state().blink_streak_count, 0);
    }

    #[test]
    fn isolated_large_pitch_never_nods(
        pitch in prop_oneof![20.5f32..90.0, -90.0f32..-20.5],
        gap in 2000u64..100_000
    ) {
        let mut detector = FatigueDetector::default();
        prop_assert!(!detector.evaluate(&FaceSample::new(0, 0.0, pitch)).is_fatigued());
        prop_assert!(!detector.evaluate(&FaceSample::new(gap, 0.0, pitch)).is_fatigued());
    }

    #[test]
    fn state_never_moves_backwards(
        timestamps in prop::collection::vec(0u64..100_000, 1..100)
    ) {
        let mut detector = FatigueDetector::default();
        let mut high_water = 0;
        for t in timestamps {
            let sample = FaceSample::new(t, 30.0, 30.0).with_eyes(Some(0.0), Some(0.0));
            let evaluation = detector.evaluate(&sample);
            high_water = high_water.max(t);
            prop_assert_eq!(evaluation.timestamp_ms, high_water);
            prop_assert_eq!(detector.state().last_sample_at, Some(high_water));
        }
    }
}

#[test]
fn four_close_closures_fire_only_on_fourth() {
    let mut detector = FatigueDetector::default();
    let results: Vec<bool> = [0u64, 200, 400, 600]
        .iter()
        .map(|&t| {
            let sample = FaceSample::new(t, 0.0, 0.0).with_eyes(Some(0.05), Some(0.2));
            detector.evaluate(&sample).contains(FatigueRule::BlinkBurst)
        })
        .collect();

    assert_eq!(results, vec![false, false, false, true]);
}

#[test]
fn second_nod_timing() {
    let mut near = FatigueDetector::default();
    near.evaluate(&FaceSample::new(0, 0.0, -25.0));
    assert!(near.evaluate(&FaceSample::new(1500, 0.0, -25.0)).contains(FatigueRule::HeadNod));

    let mut far = FatigueDetector::default();
    far.evaluate(&FaceSample::new(0, 0.0, -25.0));
    assert!(!far.evaluate(&FaceSample::new(2500, 0.0, -25.0)).is_fatigued());
}
