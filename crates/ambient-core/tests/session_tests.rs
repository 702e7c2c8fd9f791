// Host-side tests for the marquee measure/start flow and the shared timeline loop.

mod common;

use ambient_core::{
    Direction, MarqueeConfig, MarqueeSession, Motion, StartOutcome, Timeline, TimelineDriver,
};
use common::{CountingScheduler, FakeTrack};
use std::time::Duration;

type Session = MarqueeSession<FakeTrack, CountingScheduler>;

fn session(timeline: &mut Timeline, track: &FakeTrack, config: MarqueeConfig) -> Session {
    MarqueeSession::new(
        timeline.allocate_id(),
        track.clone(),
        config,
        CountingScheduler::default(),
    )
}

fn leftward() -> MarqueeConfig {
    MarqueeConfig::new(Direction::Leftward, 10.0)
}

#[test]
fn measures_once_layout_has_settled() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(2000.0);
    let mut s = session(&mut timeline, &track, leftward());

    s.begin_measuring(false);
    assert!(s.is_measuring());
    assert_eq!(s.on_frame(&mut timeline), None);
    assert!(!timeline.is_live(s.id()));

    assert_eq!(
        s.on_frame(&mut timeline),
        Some(StartOutcome::Started { loop_width: 1000.0 })
    );
    assert!(timeline.is_live(s.id()));
    assert_eq!(track.offset(), Some(0.0));
    // the timeline owns the motion from here
    assert!(!s.is_measuring());
}

#[test]
fn degenerate_width_retries_every_frame() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(30.0);
    let mut s = session(&mut timeline, &track, leftward());

    s.begin_measuring(true);
    for _ in 0..5 {
        assert_eq!(s.on_frame(&mut timeline), None);
        assert!(s.is_measuring());
    }
    assert_eq!(s.driver().scheduler().requested, 6);

    track.width.set(1200.0);
    assert_eq!(
        s.on_frame(&mut timeline),
        Some(StartOutcome::Started { loop_width: 600.0 })
    );
}

#[test]
fn gives_up_after_the_retry_budget() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(10.0);
    let mut s = session(&mut timeline, &track, leftward());

    s.begin_measuring(false);
    // one settle frame, sixty attempts, then the give-up frame
    for _ in 0..62 {
        assert_eq!(s.on_frame(&mut timeline), None);
    }
    assert!(!s.is_measuring());
    assert!(timeline.is_idle());
    assert_eq!(track.offset(), None);
    assert_eq!(s.on_frame(&mut timeline), None);
}

#[test]
fn static_strip_can_be_switched_to_full_motion() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(2000.0);
    let mut s = session(&mut timeline, &track, leftward().with_motion(Motion::Reduced));

    assert_eq!(s.try_start(&mut timeline), Ok(StartOutcome::Static));
    assert_eq!(track.offset(), Some(0.0));
    assert!(timeline.is_idle());
    assert_eq!(s.driver().scheduler().requested, 0);

    // layout collapsed when motion is switched back on: falls back to gated retry
    track.width.set(40.0);
    assert_eq!(s.restart(&mut timeline, Some(leftward())), None);
    assert!(s.is_measuring());
    assert_eq!(s.on_frame(&mut timeline), None);

    track.width.set(1600.0);
    assert_eq!(
        s.on_frame(&mut timeline),
        Some(StartOutcome::Started { loop_width: 800.0 })
    );
    assert!(timeline.is_live(s.id()));
    assert!(!s.config().motion.is_reduced());
}

#[test]
fn restart_with_a_good_width_starts_immediately() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(2000.0);
    let mut s = session(&mut timeline, &track, leftward());

    assert_eq!(
        s.restart(&mut timeline, None),
        Some(StartOutcome::Started { loop_width: 1000.0 })
    );
    timeline.tick(Duration::from_secs(2));
    assert_eq!(track.offset(), Some(-200.0));

    track.width.set(3000.0);
    assert_eq!(
        s.restart(&mut timeline, None),
        Some(StartOutcome::Started { loop_width: 1500.0 })
    );
    assert_eq!(track.offset(), Some(0.0));
    assert_eq!(s.driver().scheduler().requested, 0);
}

#[test]
fn stop_cancels_pending_measurement_and_is_final() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(40.0);
    let mut s = session(&mut timeline, &track, leftward());

    s.begin_measuring(false);
    let pending = s.driver().scheduler().outstanding;
    assert!(pending.is_some());

    assert!(!s.stop(&mut timeline));
    assert!(s.is_stopped());
    assert_eq!(s.driver().scheduler().cancelled, vec![pending.unwrap()]);
    // a callback already in flight does nothing
    assert_eq!(s.on_frame(&mut timeline), None);

    track.width.set(2000.0);
    assert_eq!(s.restart(&mut timeline, None), None);
    s.begin_measuring(true);
    assert!(!s.is_measuring());
    assert!(timeline.is_idle());
    assert!(!s.stop(&mut timeline));
}

#[test]
fn stop_keeps_the_last_offset() {
    let mut timeline = Timeline::default();
    let track = FakeTrack::with_width(2000.0);
    let mut s = session(&mut timeline, &track, leftward());
    s.restart(&mut timeline, None);
    timeline.tick(Duration::from_secs(3));

    assert!(s.stop(&mut timeline));
    timeline.tick(Duration::from_secs(3));
    assert_eq!(track.offset(), Some(-300.0));
}

#[test]
fn timeline_loop_runs_only_while_a_tween_is_live() {
    let mut timeline = Timeline::default();
    let mut clock = TimelineDriver::new(CountingScheduler::default());
    let track = FakeTrack::with_width(2000.0);
    let id = timeline.allocate_id();
    timeline.start(id, Box::new(track.clone()), &leftward()).unwrap();

    assert!(clock.ensure_running());
    assert!(!clock.ensure_running());
    assert_eq!(clock.driver().scheduler().requested, 1);

    assert!(clock.frame(&mut timeline, Duration::from_secs(1)));
    assert_eq!(track.offset(), Some(-100.0));
    assert!(clock.is_running());

    timeline.stop(id);
    assert!(clock.frame(&mut timeline, Duration::from_secs(1)));
    assert!(!clock.is_running());
    assert!(!clock.frame(&mut timeline, Duration::from_secs(1)));
}

#[test]
fn stopping_the_last_tween_cancels_the_pending_loop_frame() {
    let mut timeline = Timeline::default();
    let mut clock = TimelineDriver::new(CountingScheduler::default());
    let a = timeline.allocate_id();
    let b = timeline.allocate_id();
    let track = FakeTrack::with_width(2000.0);
    timeline.start(a, Box::new(track.clone()), &leftward()).unwrap();
    timeline.start(b, Box::new(track.clone()), &leftward()).unwrap();
    clock.ensure_running();

    timeline.stop(a);
    assert!(!clock.halt_if_idle(&timeline));
    assert!(clock.is_running());

    let pending = clock.driver().scheduler().outstanding;
    timeline.stop(b);
    assert!(clock.halt_if_idle(&timeline));
    assert_eq!(clock.driver().scheduler().cancelled, vec![pending.unwrap()]);
    assert_eq!(clock.driver().scheduler().outstanding, None);
    // the cancelled callback would find nothing to do
    assert!(!clock.frame(&mut timeline, Duration::from_millis(16)));
    assert!(!clock.halt_if_idle(&timeline));

    // a later start brings the loop back
    timeline.start(a, Box::new(track.clone()), &leftward()).unwrap();
    assert!(clock.ensure_running());
}
