/// Pointer capabilities of the device, fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceProfile {
    /// Whether the primary input is touch (no meaningful hover).
    pub is_touch_capable: bool,
}

impl DeviceProfile {
    /// Mouse or trackpad device.
    pub const POINTER: Self = Self {
        is_touch_capable: false,
    };

    /// Touch-first device.
    pub const TOUCH: Self = Self {
        is_touch_capable: true,
    };

    /// Build a profile from host capability probes.
    ///
    /// `has_touch_events` is whether touch event handlers exist,
    /// `max_touch_points` the reported touch point count. Either probe
    /// being positive marks the device as touch capable; probes that are
    /// unavailable (`None`) fall back to the pointer path.
    #[must_use]
    pub fn from_probe(
        has_touch_events: Option<bool>,
        max_touch_points: Option<u32>,
    ) -> Self {
        let is_touch_capable = has_touch_events.unwrap_or(false)
            || max_touch_points.is_some_and(|n| n > 0);
        if has_touch_events.is_none() && max_touch_points.is_none() {
            log::debug!("touch capability unavailable, assuming pointer");
        }
        Self { is_touch_capable }
    }
}
