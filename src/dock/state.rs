//! Attachment state owned by one engine instance.

use crate::config::DockConfig;
use crate::geometry::Rect;
use crate::platform::WindowHandle;

/// Where the avatar sits on its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    pub host: WindowHandle,
    /// Avatar horizontal center as a fraction of host width, measured from
    /// the host's left edge. Recomputed live while dragging, frozen
    /// otherwise. Not clamped: dragging past the host's edge legally
    /// produces values outside [0, 1] and consumers extrapolate.
    pub snap_fraction: f32,
    /// Vertical distance from the host's top edge up to the avatar's top,
    /// captured at attach time.
    pub anchor_offset: f32,
}

impl Attachment {
    pub fn new(host: WindowHandle, avatar: Rect, host_rect: Rect, config: &DockConfig) -> Self {
        Self {
            host,
            snap_fraction: snap_fraction(avatar, host_rect),
            anchor_offset: avatar.height() as f32
                + config.snap_zone_offset.y
                + config.snap_zone_size.y * 0.5,
        }
    }
}

/// Fraction of the host width at which the avatar's center currently sits.
pub fn snap_fraction(avatar: Rect, host: Rect) -> f32 {
    (avatar.center_x() - host.left as f32) / host.width() as f32
}

/// Exactly one of these exists per avatar instance at any tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DockState {
    #[default]
    Unattached,
    Attached(Attachment),
}

impl DockState {
    pub fn is_attached(&self) -> bool {
        matches!(self, DockState::Attached(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn fraction_is_center_relative_to_host_width() {
        let host = Rect::from_origin(300, 100, 600, 600);
        // Avatar centered over the host's midpoint.
        let avatar = Rect::from_origin(500, 0, 200, 200);
        assert_eq!(snap_fraction(avatar, host), 0.5);

        // Center at the host's left edge.
        let at_left = Rect::from_origin(200, 0, 200, 200);
        assert_eq!(snap_fraction(at_left, host), 0.0);
    }

    #[test]
    fn fraction_extrapolates_past_host_edges() {
        let host = Rect::from_origin(0, 0, 100, 100);
        let past_right = Rect::from_origin(100, 0, 100, 100);
        assert_eq!(snap_fraction(past_right, host), 1.5);

        let past_left = Rect::from_origin(-150, 0, 100, 100);
        assert_eq!(snap_fraction(past_left, host), -1.0);
    }

    #[test]
    fn attachment_captures_anchor_offset() {
        let cfg = DockConfig::default();
        let host = Rect::from_origin(300, 100, 600, 600);
        let avatar = Rect::from_origin(500, 0, 200, 200);
        let att = Attachment::new(WindowHandle(7), avatar, host, &cfg);
        // height 200 + offset.y (-5) + size.y/2 (5)
        assert_eq!(att.anchor_offset, 200.0);
        assert_eq!(att.snap_fraction, 0.5);
    }
}
