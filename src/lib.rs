// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive orientation animation engine for a flipping profile card.
//!
//! The card shows one of two faces. While the back face is settled it
//! re-orients itself every display frame, following either the pointer
//! (smoothed) or an autonomous figure-eight trajectory, and a flip
//! suppresses all tilt until its transition lock clears.
//!
//! # Key entry points
//!
//! - [`ProfileCard`] - the card instance, owner of all motion state
//! - [`host::CardHost`] - the effects boundary (frames, timers, listeners)
//! - [`host::ManualHost`] - a fake-clock host for tests and simulation
//! - [`options::Options`] - tunable constants with TOML preset support
//! - [`compositor::Presentation`] - bounded numbers for the renderer
//!
//! # Architecture
//!
//! Each frame tick runs strictly in order: the [`input::classify`]
//! decision picks a [`input::Source`], the [`tilt`] model moves the
//! current tilt, and [`compositor::compose`] derives presentation
//! parameters on demand. The [`flip`] state machine gates whether the
//! [`scheduler::FrameScheduler`] runs at all. With the `web` feature, the
//! `web` module mounts a card on a DOM element.

pub mod card;
pub mod compositor;
pub mod error;
pub mod flip;
pub mod host;
pub mod input;
pub mod options;
pub mod scheduler;
pub mod tilt;
#[cfg(feature = "web")]
pub mod web;

pub use card::ProfileCard;
pub use error::CardError;
