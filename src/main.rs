//! `holocard` - replays a scripted session against a fake-clock host and
//! logs what a renderer would paint.
//!
//! Usage: `holocard [options.toml]`. Set `RUST_LOG=debug` to also see loop
//! and listener transitions.

use std::path::Path;
use std::process::ExitCode;

use holocard::host::manual::{run_for, step, FRAME_60HZ};
use holocard::host::ManualHost;
use holocard::input::{Bounds, CardEvent, DeviceProfile, ListenerScope};
use holocard::options::Options;
use holocard::ProfileCard;
use web_time::Duration;

const CARD_BOUNDS: Bounds = Bounds {
    left: 100.0,
    top: 100.0,
    width: 320.0,
    height: 480.0,
};

fn load_options() -> Result<Options, holocard::CardError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading options from {path}");
            Options::load(Path::new(&path))
        }
        None => Ok(Options::default()),
    }
}

fn report(card: &ProfileCard<ManualHost>, label: &str) {
    let presentation = card.presentation();
    let position = presentation.highlight.position;
    log::info!(
        "[{:>6.0} ms] {label}: {:?} source={:?} transform=\"{}\" \
         highlight=({:.1}%, {:.1}%) intensity={:.2}",
        card.host().elapsed().as_secs_f64() * 1000.0,
        card.phase(),
        card.source(),
        presentation.transform.to_css(),
        position.x,
        position.y,
        presentation.highlight.intensity,
    );
}

fn pointer(card: &mut ProfileCard<ManualHost>, x: f32, y: f32, scope: ListenerScope) {
    card.handle_event(CardEvent::PointerMoved { x, y, scope });
}

fn run_session(card: &mut ProfileCard<ManualHost>) {
    let flip_wait = card.options().flip_duration() + FRAME_60HZ;
    report(card, "mounted");

    for _ in 0..4 {
        run_for(card, Duration::from_millis(500), FRAME_60HZ);
        report(card, "idle");
    }

    card.handle_event(CardEvent::PointerEntered);
    let center = CARD_BOUNDS.center();
    let targets = [
        (center.x + 160.0, center.y),
        (center.x, center.y - 240.0),
        // Outside the card: the viewport listener keeps tracking.
        (center.x - 600.0, center.y + 600.0),
    ];
    for (x, y) in targets {
        pointer(card, x, y, ListenerScope::Viewport);
        run_for(card, Duration::from_millis(300), FRAME_60HZ);
        report(card, "tracking");
    }

    card.activate();
    report(card, "activated");
    run_for(card, flip_wait, FRAME_60HZ);
    report(card, "settled");

    let (x, y) = (CARD_BOUNDS.left + 80.0, CARD_BOUNDS.top + 360.0);
    pointer(card, x, y, ListenerScope::Surface);
    step(card, FRAME_60HZ);
    report(card, "front hover");

    card.handle_event(CardEvent::PointerLeft);
    card.activate();
    run_for(card, flip_wait, FRAME_60HZ);
    report(card, "back again");
    run_for(card, Duration::from_millis(500), FRAME_60HZ);
    report(card, "idle");

    card.unmount();
    log::info!(
        "unmounted: {} frames requested, {} pending, {} listeners",
        card.host().total_frame_requests(),
        card.host().pending_frames(),
        card.host().listener_count(),
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match load_options() {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let host = ManualHost::with_bounds(CARD_BOUNDS);
    let mut card = ProfileCard::mount(host, DeviceProfile::POINTER, options);
    run_session(&mut card);
    ExitCode::SUCCESS
}
