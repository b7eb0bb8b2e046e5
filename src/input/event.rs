use super::pointer::ListenerScope;

/// Platform-agnostic card events.
///
/// These are fed into [`ProfileCard::handle_event`](crate::ProfileCard::handle_event)
/// by whatever host owns the real event listeners.
///
/// # Example
///
/// ```ignore
/// card.handle_event(CardEvent::PointerMoved {
///     x: 100.0,
///     y: 200.0,
///     scope: ListenerScope::Viewport,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// Click or tap on the card: toggle the face.
    Activate,
    /// Pointer entered the card's bounding box.
    PointerEntered,
    /// Pointer left the card's bounding box.
    PointerLeft,
    /// Pointer moved to an absolute client position.
    PointerMoved {
        /// Horizontal position in client pixels.
        x: f32,
        /// Vertical position in client pixels.
        y: f32,
        /// Which listener observed the move.
        scope: ListenerScope,
    },
}
