//! Input handling: event types, device capability, the pointer bridge
//! and the per-frame source classifier.

/// Decides which motion source drives the tilt each frame.
pub mod classifier;
/// Touch capability detection.
pub mod device;
/// Platform-agnostic card events.
pub mod event;
/// Converts pointer coordinates into tilt targets and highlight positions.
pub mod pointer;

pub use classifier::{classify, ClassifierInput, Source};
pub use device::DeviceProfile;
pub use event::CardEvent;
pub use pointer::{Bounds, ListenerScope, PointerBridge, PointerSignal};
