// Host-side tests for the marquee tween: direction, wrap-around and seamlessness.

use ambient_core::{
    measure_loop_width, AmbientError, Direction, MarqueeConfig, MarqueeTween, MeasureGate,
    MeasureStep, Motion,
};
use std::time::Duration;

fn tween(direction: Direction, loop_width: f32, duration_secs: f64) -> MarqueeTween {
    MarqueeTween::new(loop_width, &MarqueeConfig::new(direction, duration_secs)).unwrap()
}

#[test]
fn direction_signs() {
    assert_eq!(Direction::Leftward.sign(), 1.0);
    assert_eq!(Direction::Rightward.sign(), -1.0);
    assert_eq!(Direction::from_sign(1), Some(Direction::Leftward));
    assert_eq!(Direction::from_sign(7), Some(Direction::Leftward));
    assert_eq!(Direction::from_sign(-1), Some(Direction::Rightward));
    assert_eq!(Direction::from_sign(0), None);
}

#[test]
fn row_presets_match_tools_section() {
    let top = MarqueeConfig::leftward_row();
    assert_eq!(top.direction, Direction::Leftward);
    assert_eq!(top.duration_secs, 40.0);
    let bottom = MarqueeConfig::rightward_row();
    assert_eq!(bottom.direction, Direction::Rightward);
    assert_eq!(bottom.duration_secs, 45.0);
    assert_eq!(bottom.motion, Motion::Full);
}

#[test]
fn loop_width_is_half_the_doubled_track() {
    assert_eq!(measure_loop_width(2000.0), Ok(1000.0));
    assert_eq!(
        measure_loop_width(0.0),
        Err(AmbientError::DegenerateWidth { measured: 0.0 })
    );
    // fonts not loaded yet: a handful of pixels is not a layout
    assert!(measure_loop_width(60.0).is_err());
    assert!(measure_loop_width(f32::NAN).is_err());
    assert!(measure_loop_width(100.0).is_ok());
}

#[test]
fn leftward_loop_of_one_thousand_over_ten_seconds() {
    let t = tween(Direction::Leftward, 1000.0, 10.0);
    assert_eq!(t.target_at(5.0), -500.0);
    assert_eq!(t.offset_at(5.0), -500.0);

    assert_eq!(t.target_at(10.0), -1000.0);
    // boundary: folded into [-1000, 0); visually identical to 0
    assert_eq!(t.offset_at(10.0), -1000.0);

    // keeps cycling
    assert_eq!(t.offset_at(12.5), -250.0);
    assert_eq!(t.offset_at(25.0), -500.0);
}

#[test]
fn rightward_moves_the_other_way() {
    let t = tween(Direction::Rightward, 1000.0, 10.0);
    assert_eq!(t.target_at(2.5), 250.0);
    assert_eq!(t.offset_at(2.5), -750.0);
    assert_eq!(t.offset_at(5.0), -500.0);
    assert_eq!(t.offset_at(7.5), -250.0);
}

#[test]
fn advancing_repeats_forever() {
    let mut t = tween(Direction::Leftward, 1000.0, 10.0);
    assert_eq!(t.offset(), -1000.0);
    t.advance(Duration::from_secs(5));
    assert_eq!(t.offset(), -500.0);
    t.advance(Duration::from_secs(5));
    assert_eq!(t.elapsed_secs(), 0.0);
    assert_eq!(t.raw_offset(), 0.0);
    t.advance(Duration::from_millis(2500));
    assert_eq!(t.offset(), -250.0);
}

#[test]
fn offset_stays_in_range_and_only_jumps_by_one_loop() {
    for direction in [Direction::Leftward, Direction::Rightward] {
        let loop_width = 1234.5_f32;
        let mut t = tween(direction, loop_width, 7.0);
        let step = Duration::from_secs_f64(1.0 / 60.0);
        let per_frame = loop_width / (7.0 * 60.0);
        let mut prev = t.offset();
        let mut wraps = 0;
        for _ in 0..(60 * 30) {
            t.advance(step);
            let x = t.offset();
            assert!(x >= -loop_width && x < 0.0, "{:?} out of range: {}", direction, x);
            let jump = (x - prev).abs();
            if (jump - per_frame).abs() > 1e-2 {
                assert!(
                    ((jump - loop_width).abs() - per_frame).abs() < 1e-2,
                    "{:?} discontinuity of {}",
                    direction,
                    jump
                );
                wraps += 1;
            }
            prev = x;
        }
        // 30 s over a 7 s loop
        assert!((4..=5).contains(&wraps), "{:?} wrapped {} times", direction, wraps);
    }
}

#[test]
fn leftward_offsets_decrease_between_wraps() {
    let mut t = tween(Direction::Leftward, 500.0, 5.0);
    t.advance(Duration::from_millis(10));
    let mut prev = t.offset();
    for _ in 0..100 {
        t.advance(Duration::from_millis(10));
        assert!(t.offset() < prev);
        prev = t.offset();
    }
}

// Lay out a doubled strip and list which items are visible in a viewport,
// as (item index within one copy, left edge in the viewport).
fn visible_items(widths: &[f32], gap: f32, offset: f32, viewport: f32) -> Vec<(usize, f32)> {
    let mut out = Vec::new();
    let mut x = offset;
    for _ in 0..2 {
        for (i, w) in widths.iter().enumerate() {
            if x + w > 0.0 && x < viewport {
                out.push((i, x));
            }
            x += w + gap;
        }
    }
    out
}

#[test]
fn strip_looks_identical_at_both_ends_of_the_loop() {
    let widths = [120.0, 80.0, 150.0, 95.0, 60.0];
    let gap = 40.0;
    // one copy: items plus the gap after each, so the second copy starts exactly one loop later
    let loop_width: f32 = widths.iter().sum::<f32>() + gap * widths.len() as f32;
    let full_width = loop_width * 2.0;
    assert_eq!(measure_loop_width(full_width), Ok(loop_width));

    let viewport = 400.0;
    let at_start = visible_items(&widths, gap, 0.0, viewport);
    let at_end = visible_items(&widths, gap, -loop_width, viewport);
    assert!(!at_start.is_empty());
    assert_eq!(at_start.len(), at_end.len());
    for (a, b) in at_start.iter().zip(&at_end) {
        assert_eq!(a.0, b.0);
        assert!((a.1 - b.1).abs() < 1e-3);
    }
}

#[test]
fn invalid_duration_is_rejected() {
    let bad = MarqueeConfig::new(Direction::Leftward, 0.0);
    assert!(matches!(
        MarqueeTween::new(1000.0, &bad),
        Err(AmbientError::InvalidConfig(_))
    ));
    assert!(MarqueeConfig::new(Direction::Rightward, f64::NAN).validate().is_err());
}

#[test]
fn measure_gate_waits_two_frames_then_retries_with_budget() {
    let mut gate = MeasureGate::new(2, 3);
    assert_eq!(gate.on_frame(), MeasureStep::Wait);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);
    assert_eq!(gate.attempts(), 3);
    assert_eq!(gate.on_frame(), MeasureStep::GiveUp);

    gate.reset(true);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);

    gate.reset(false);
    assert_eq!(gate.on_frame(), MeasureStep::Wait);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);
}

#[test]
fn default_gate_is_double_frame_heuristic() {
    let mut gate = MeasureGate::default();
    assert_eq!(gate.on_frame(), MeasureStep::Wait);
    assert_eq!(gate.on_frame(), MeasureStep::Measure);
}
