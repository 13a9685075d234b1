//! Keeps a docked avatar glued to its host: recompute the target from the
//! host's fresh rectangle every tick and move the avatar's own window there.

use crate::config::DockConfig;
use crate::dock::state::Attachment;
use crate::geometry::Rect;
use crate::platform::{Desktop, WindowHandle, ZOrder};

/// Target top-left corner for the avatar given the host's current rect.
///
/// X pins the avatar's center at `snap_fraction` of the host width; Y hangs
/// the avatar above the host's top edge by the captured anchor offset, with
/// linear compensation for the avatar's visual scale relative to baseline.
pub fn target_position(
    host: Rect,
    avatar: Rect,
    attachment: &Attachment,
    scale: f32,
    config: &DockConfig,
) -> (i32, i32) {
    let center_x = host.left as f32 + attachment.snap_fraction * host.width() as f32;
    let x = (center_x - avatar.width() as f32 * 0.5).round() as i32;

    let scale_compensation = (config.base_scale - scale) * config.base_offset;
    let y = host.top - (attachment.anchor_offset + scale_compensation) as i32
        + config.vertical_offset;

    (x, y)
}

/// Move the avatar to its target. Size is never altered here. While not
/// dragging, additionally re-issue the directive placing the avatar directly
/// above the host, since the host's own z-order can change under us at any
/// time.
pub fn synchronize(
    desktop: &dyn Desktop,
    own: WindowHandle,
    avatar: Rect,
    attachment: &Attachment,
    host: Rect,
    scale: f32,
    config: &DockConfig,
    dragging: bool,
) {
    let (x, y) = target_position(host, avatar, attachment, scale, config);
    desktop.move_window(own, x, y, avatar.width(), avatar.height());
    if !dragging {
        desktop.set_z_order(own, ZOrder::AboveWindow(attachment.host));
    }
}
