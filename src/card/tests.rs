use std::f32::consts::PI;

use glam::Vec2;
use web_time::Duration;

use super::ProfileCard;
use crate::flip::{Face, FlipPhase};
use crate::host::manual::{run_for, step, FRAME_60HZ};
use crate::host::{CardHost, ManualHost};
use crate::input::{Bounds, CardEvent, DeviceProfile, ListenerScope, Source};
use crate::options::Options;
use crate::tilt::{Tilt, HIGHLIGHT_CENTER};

const MAX_TILT: f32 = 15.0;

fn bounds() -> Bounds {
    Bounds::new(0.0, 0.0, 200.0, 300.0)
}

fn pointer_card() -> ProfileCard<ManualHost> {
    ProfileCard::mount_default(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::POINTER,
    )
}

fn front_card() -> ProfileCard<ManualHost> {
    let mut options = Options::default();
    options.flip.start_face = Face::Front;
    ProfileCard::mount(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::POINTER,
        options,
    )
}

fn viewport_move(x: f32, y: f32) -> CardEvent {
    CardEvent::PointerMoved {
        x,
        y,
        scope: ListenerScope::Viewport,
    }
}

fn surface_move(x: f32, y: f32) -> CardEvent {
    CardEvent::PointerMoved {
        x,
        y,
        scope: ListenerScope::Surface,
    }
}

fn settle_flip(card: &mut ProfileCard<ManualHost>) {
    run_for(card, Duration::from_millis(620), FRAME_60HZ);
}

fn assert_bounded(tilt: Tilt) {
    assert!(
        tilt.x.abs() <= MAX_TILT && tilt.y.abs() <= MAX_TILT,
        "tilt out of bounds: {tilt:?}"
    );
}

// ── Mount ───────────────────────────────────────────────────────────────

#[test]
fn mounts_on_back_with_loop_and_listener() {
    let card = pointer_card();
    assert_eq!(card.phase(), FlipPhase::Back);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert!(card.is_loop_running());
    assert!(card.has_viewport_listener());
    assert_eq!(card.host().pending_frames(), 1);
    assert!(card.host().has_listener(ListenerScope::Viewport));
}

#[test]
fn touch_device_runs_loop_without_listener() {
    let card = ProfileCard::mount_default(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::TOUCH,
    );
    assert!(card.is_loop_running());
    assert!(!card.has_viewport_listener());
    assert_eq!(card.host().listener_count(), 0);
}

#[test]
fn front_mount_needs_no_loop() {
    let card = front_card();
    assert_eq!(card.phase(), FlipPhase::Front);
    assert!(!card.is_loop_running());
    assert_eq!(card.host().pending_frames(), 0);
    assert_eq!(card.host().listener_count(), 0);
}

// ── Idle ────────────────────────────────────────────────────────────────

#[test]
fn idle_trajectory_drives_unhovered_back_face() {
    let mut card = pointer_card();
    step(&mut card, Duration::from_secs_f32(PI / 1.2));
    assert_eq!(card.source(), Source::Idle);
    assert!(card.tilt().x.abs() < 1e-3, "tiltX = {}", card.tilt().x);
    assert!((card.auto_clock() - PI / 1.2).abs() < 1e-4);
}

#[test]
fn idle_highlight_follows_tilt() {
    let mut card = pointer_card();
    step(&mut card, Duration::from_secs_f32(PI / 2.0 / 0.8));
    let tilt = card.tilt();
    let expected = Vec2::new(
        50.0 + tilt.y / MAX_TILT * 20.0,
        50.0 + tilt.x / MAX_TILT * 20.0,
    );
    assert!((card.highlight() - expected).length() < 1e-4);
}

#[test]
fn touch_device_idles_even_when_hovered() {
    let mut card = ProfileCard::mount_default(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::TOUCH,
    );
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 150.0));
    run_for(&mut card, Duration::from_millis(100), FRAME_60HZ);
    assert_eq!(card.source(), Source::Idle);
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
}

#[test]
fn reduced_motion_keeps_back_face_still() {
    let mut card = pointer_card();
    run_for(&mut card, Duration::from_millis(700), FRAME_60HZ);
    assert_ne!(card.highlight(), HIGHLIGHT_CENTER);

    card.set_reduced_motion(true);
    run_for(&mut card, Duration::from_secs(1), FRAME_60HZ);
    assert_eq!(card.source(), Source::None);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);
    assert_eq!(card.auto_clock(), 0.0);
    assert!(card.is_loop_running());
}

#[test]
fn negative_max_tilt_preset_is_repaired() {
    let options = Options::from_toml("[tilt]\nmax_tilt = -5.0\n").unwrap();
    let mut card = ProfileCard::mount(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::POINTER,
        options,
    );
    assert_eq!(card.options().tilt.max_tilt, 5.0);

    run_for(&mut card, Duration::from_secs(2), FRAME_60HZ);
    assert_eq!(card.source(), Source::Idle);
    assert!(card.tilt().x.abs() <= 5.0 && card.tilt().y.abs() <= 5.0);

    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 150.0));
    run_for(&mut card, Duration::from_secs(1), FRAME_60HZ);
    assert_eq!(card.tilt(), Tilt::new(0.0, 5.0));
}

#[test]
fn nan_max_tilt_preset_keeps_card_flat() {
    let options = Options::from_toml("[tilt]\nmax_tilt = nan\n").unwrap();
    let mut card = ProfileCard::mount(
        ManualHost::with_bounds(bounds()),
        DeviceProfile::POINTER,
        options,
    );
    run_for(&mut card, Duration::from_secs(1), FRAME_60HZ);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);

    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 0.0));
    run_for(&mut card, Duration::from_millis(500), FRAME_60HZ);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert!(card.is_loop_running());
}

// ── Pointer tracking ────────────────────────────────────────────────────

#[test]
fn pointer_at_right_edge_converges_to_full_y_tilt() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 150.0));
    assert_eq!(card.target_tilt(), Tilt::new(0.0, MAX_TILT));

    // A full 15 degree swing is still ~0.11 off after 30 frames and snaps
    // on the 31st, so allow a few frames of slack past 500 ms.
    for _ in 0..36 {
        step(&mut card, FRAME_60HZ);
        assert!(card.tilt().y <= MAX_TILT);
        assert_eq!(card.source(), Source::Pointer);
    }
    assert!(card.tilt().max_abs_diff(Tilt::new(0.0, MAX_TILT)) < 0.1);

    // Held target: no drift, no oscillation.
    run_for(&mut card, Duration::from_millis(500), FRAME_60HZ);
    assert_eq!(card.tilt(), card.target_tilt());
}

#[test]
fn auto_clock_pauses_while_pointer_drives() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    run_for(&mut card, Duration::from_millis(300), FRAME_60HZ);
    assert_eq!(card.auto_clock(), 0.0);

    card.handle_event(CardEvent::PointerLeft);
    run_for(&mut card, Duration::from_millis(300), FRAME_60HZ);
    assert_eq!(card.source(), Source::Idle);
    assert!(card.auto_clock() > 0.25);
}

#[test]
fn viewport_tracking_works_outside_the_card() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(-500.0, 900.0));
    assert_eq!(card.target_tilt(), Tilt::new(-MAX_TILT, -MAX_TILT));
    assert_eq!(card.highlight(), Vec2::new(0.0, 100.0));
}

#[test]
fn unmeasured_card_gives_neutral_target() {
    let mut card = ProfileCard::mount_default(
        ManualHost::new(),
        DeviceProfile::POINTER,
    );
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(40.0, 40.0));
    run_for(&mut card, Duration::from_millis(200), FRAME_60HZ);
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);

    card.host_mut()
        .set_bounds(Some(Bounds::new(0.0, 0.0, 0.0, 0.0)));
    card.handle_event(viewport_move(40.0, 40.0));
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
    assert!(card.highlight().is_finite());
}

#[test]
fn surface_moves_are_ignored_on_back_face() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(surface_move(200.0, 150.0));
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);
}

#[test]
fn tilt_stays_bounded_under_mixed_input() {
    let mut card = pointer_card();
    for i in 0..600_u32 {
        let f = i as f32;
        match i % 97 {
            0 => card.handle_event(CardEvent::PointerEntered),
            50 => card.handle_event(CardEvent::PointerLeft),
            73 if i % 3 == 0 => card.activate(),
            _ => {}
        }
        card.handle_event(viewport_move(
            (f * 37.0) % 900.0 - 300.0,
            (f * 53.0) % 1_100.0 - 400.0,
        ));
        step(&mut card, FRAME_60HZ);
        assert_bounded(card.tilt());
        assert_bounded(card.target_tilt());
    }
}

// ── Flip ────────────────────────────────────────────────────────────────

#[test]
fn activation_locks_and_neutralizes() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 0.0));
    run_for(&mut card, Duration::from_millis(200), FRAME_60HZ);
    assert!(!card.tilt().is_neutral());

    card.handle_event(CardEvent::Activate);
    assert_eq!(card.phase(), FlipPhase::FlippingToFront);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
    assert_eq!(card.auto_clock(), 0.0);
    assert!(!card.is_loop_running());
    assert!(!card.has_viewport_listener());
    assert_eq!(card.host().pending_frames(), 0);
    assert_eq!(card.host().listener_count(), 0);
    assert_eq!(card.host().pending_timers(), 1);
}

#[test]
fn tilt_is_exactly_neutral_during_lock() {
    let mut card = pointer_card();
    card.activate();
    card.activate();
    assert_eq!(card.phase(), FlipPhase::FlippingToBack);

    for i in 0..30_u32 {
        card.handle_event(CardEvent::PointerEntered);
        card.handle_event(viewport_move(i as f32 * 10.0, 0.0));
        step(&mut card, FRAME_60HZ);
        assert!(card.is_locked());
        assert_eq!(card.tilt(), Tilt::NEUTRAL);
        assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
        assert_eq!(card.presentation().transform.tilt, None);
    }
}

#[test]
fn flip_to_front_settles_without_loop() {
    let mut card = pointer_card();
    card.activate();
    settle_flip(&mut card);
    assert_eq!(card.phase(), FlipPhase::Front);
    assert!(!card.is_loop_running());
    assert_eq!(card.host().pending_frames(), 0);
    assert_eq!(card.host().pending_timers(), 0);
    assert_eq!(card.host().listener_count(), 0);
}

#[test]
fn flip_back_restarts_loop_and_listener() {
    let mut card = front_card();
    card.activate();
    assert!(!card.is_loop_running());
    settle_flip(&mut card);
    assert_eq!(card.phase(), FlipPhase::Back);
    assert!(card.is_loop_running());
    assert!(card.has_viewport_listener());
    assert_eq!(card.host().pending_frames(), 1);
    assert_eq!(card.host().listener_count(), 1);
}

#[test]
fn even_activations_return_to_start_face() {
    let mut card = pointer_card();
    for _ in 0..4 {
        card.activate();
    }
    assert_eq!(card.host().pending_timers(), 1);
    settle_flip(&mut card);
    assert_eq!(card.phase(), FlipPhase::Back);
    assert!(card.is_loop_running());
}

#[test]
fn odd_activations_land_on_other_face() {
    let mut card = pointer_card();
    for _ in 0..3 {
        card.activate();
    }
    settle_flip(&mut card);
    assert_eq!(card.phase(), FlipPhase::Front);
}

#[test]
fn lock_clears_after_latest_activation() {
    let mut card = pointer_card();
    card.activate();
    step(&mut card, Duration::from_millis(100));
    card.activate();

    // 650 ms after the first activation, 550 ms after the second.
    step(&mut card, Duration::from_millis(550));
    assert!(card.is_locked());
    assert_eq!(card.phase(), FlipPhase::FlippingToBack);

    step(&mut card, Duration::from_millis(60));
    assert!(!card.is_locked());
    assert_eq!(card.phase(), FlipPhase::Back);
    assert_eq!(card.host().pending_timers(), 0);
    assert_eq!(card.host().pending_frames(), 1);
}

#[test]
fn stale_frame_after_flip_is_ignored() {
    let mut card = pointer_card();
    let stale = card.host_mut().take_frames()[0];
    card.activate();
    let now = card.host().now();
    card.on_frame(stale, now);
    assert!(!card.is_loop_running());
    assert_eq!(card.host().pending_frames(), 0);
    assert_eq!(card.tilt(), Tilt::NEUTRAL);
}

#[test]
fn idle_clock_restarts_after_flip() {
    let mut card = pointer_card();
    run_for(&mut card, Duration::from_secs(1), FRAME_60HZ);
    assert!(card.auto_clock() > 0.9);
    card.activate();
    card.activate();
    assert_eq!(card.auto_clock(), 0.0);
    settle_flip(&mut card);
    assert!(card.auto_clock() < 0.1);
}

// ── Front face ──────────────────────────────────────────────────────────

#[test]
fn front_highlight_follows_surface_pointer() {
    let mut card = front_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(surface_move(50.0, 75.0));
    assert_eq!(card.highlight(), Vec2::new(25.0, 25.0));

    let p = card.presentation();
    assert_eq!(p.transform.hover_rotation_z, 4.0);
    assert_eq!(p.front_glare.map(|g| g.position), Some(Vec2::new(25.0, 25.0)));
    assert!(p.back_glare.is_none());
}

#[test]
fn front_leave_resets_highlight() {
    let mut card = front_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(surface_move(10.0, 10.0));
    card.handle_event(CardEvent::PointerLeft);
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);

    let p = card.presentation();
    assert_eq!(p.transform.hover_rotation_z, 0.0);
    assert!(p.front_glare.is_none());
}

#[test]
fn front_ignores_viewport_and_unhovered_moves() {
    let mut card = front_card();
    card.handle_event(viewport_move(10.0, 10.0));
    card.handle_event(surface_move(10.0, 10.0));
    assert_eq!(card.highlight(), HIGHLIGHT_CENTER);
    assert_eq!(card.target_tilt(), Tilt::NEUTRAL);
}

// ── Presentation ────────────────────────────────────────────────────────

#[test]
fn back_presentation_reports_tilt_and_intensity() {
    let mut card = pointer_card();
    card.handle_event(CardEvent::PointerEntered);
    card.handle_event(viewport_move(200.0, 0.0));
    run_for(&mut card, Duration::from_secs(1), FRAME_60HZ);

    let p = card.presentation();
    assert_eq!(p.transform.flip_rotation_y, 180.0);
    assert_eq!(p.transform.tilt, Some(Tilt::new(MAX_TILT, MAX_TILT)));
    assert_eq!(p.highlight.intensity, 1.0);
    assert!(p.back_glare.is_some());
}

// ── Unmount ─────────────────────────────────────────────────────────────

#[test]
fn unmount_cancels_everything() {
    let mut card = pointer_card();
    run_for(&mut card, Duration::from_millis(100), FRAME_60HZ);
    assert!(card.is_loop_running());

    card.unmount();
    assert!(!card.is_mounted());
    assert_eq!(card.host().pending_frames(), 0);
    assert_eq!(card.host().pending_timers(), 0);
    assert_eq!(card.host().listener_count(), 0);

    let issued = card.host().total_frame_requests();
    run_for(&mut card, Duration::from_millis(500), FRAME_60HZ);
    card.handle_event(CardEvent::Activate);
    card.handle_event(viewport_move(10.0, 10.0));
    assert_eq!(card.host().total_frame_requests(), issued);
    assert_eq!(card.host().pending_timers(), 0);
    assert_eq!(card.host().listener_count(), 0);
}

#[test]
fn unmount_during_flip_clears_lock_timer() {
    let mut card = pointer_card();
    card.activate();
    assert_eq!(card.host().pending_timers(), 1);
    card.unmount();
    assert_eq!(card.host().pending_timers(), 0);
    card.unmount();
    assert_eq!(card.host().pending_frames(), 0);
}
