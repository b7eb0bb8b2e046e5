use glam::Vec2;

use crate::tilt::{clamp_percent, Tilt, HIGHLIGHT_CENTER};

/// Where a pointer listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// The card's own bounding box (enter/leave/move on the element).
    Surface,
    /// The whole viewport, so tracking continues outside the card.
    Viewport,
}

/// Measured bounding box of the card in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Bounds {
    /// Box from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left, self.top) + self.half_size()
    }

    /// Half the width and height.
    #[must_use]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Whether the box has a usable, finite, non-zero area.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        let all_finite = [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        all_finite && self.width > 0.0 && self.height > 0.0
    }
}

/// Output of one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSignal {
    /// Tilt the back face should approach.
    pub target_tilt: Tilt,
    /// Highlight position in `[0, 100]` on both axes.
    pub highlight: Vec2,
}

impl PointerSignal {
    /// Neutral target with a centred highlight.
    pub const NEUTRAL: Self = Self {
        target_tilt: Tilt::NEUTRAL,
        highlight: HIGHLIGHT_CENTER,
    };
}

/// Maps pointer coordinates to tilt targets and highlight positions.
///
/// Vertical offset from the centre drives X rotation (inverted, so the
/// surface tips away from the pointer) and horizontal offset drives Y
/// rotation. Offsets are normalized by the half-dimensions, so a pointer
/// on the card's edge yields the full `max_tilt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerBridge {
    max_tilt: f32,
}

impl PointerBridge {
    /// Bridge bounded to `max_tilt` degrees.
    #[must_use]
    pub fn new(max_tilt: f32) -> Self {
        Self { max_tilt }
    }

    /// Tilt target for a pointer at `pointer`.
    ///
    /// Unmeasured bounds or non-finite coordinates yield neutral tilt.
    #[must_use]
    pub fn target_tilt(&self, pointer: Vec2, bounds: &Bounds) -> Tilt {
        if !bounds.is_measured() || !pointer.is_finite() {
            return Tilt::NEUTRAL;
        }
        let offset = (pointer - bounds.center()) / bounds.half_size();
        Tilt::new(-offset.y * self.max_tilt, offset.x * self.max_tilt)
            .clamped(self.max_tilt)
    }

    /// Highlight position for a pointer at `pointer`, relative to the box.
    ///
    /// Unmeasured bounds or non-finite coordinates yield the centre.
    #[must_use]
    pub fn highlight(&self, pointer: Vec2, bounds: &Bounds) -> Vec2 {
        if !bounds.is_measured() || !pointer.is_finite() {
            return HIGHLIGHT_CENTER;
        }
        let origin = Vec2::new(bounds.left, bounds.top);
        let size = Vec2::new(bounds.width, bounds.height);
        clamp_percent((pointer - origin) / size * 100.0)
    }

    /// Both signals for one pointer sample.
    #[must_use]
    pub fn map(&self, pointer: Vec2, bounds: Option<Bounds>) -> PointerSignal {
        bounds.map_or(PointerSignal::NEUTRAL, |b| PointerSignal {
            target_tilt: self.target_tilt(pointer, &b),
            highlight: self.highlight(pointer, &b),
        })
    }
}

impl Default for PointerBridge {
    fn default() -> Self {
        Self::new(15.0)
    }
}
