//! Snap-zone geometry: the avatar's pink zone, host dock strips, and the
//! occlusion-checked candidate pick.

use crate::config::DockConfig;
use crate::dock::snapshot::WindowEntry;
use crate::geometry::{Point, Rect};
use crate::platform::Desktop;

/// Height of the strip along a host's top edge that accepts docking.
pub const DOCK_STRIP_HEIGHT: i32 = 5;

/// The avatar's trigger rectangle: anchored at its horizontal center plus the
/// configured offset, hanging off its bottom edge. Recomputed every tick,
/// never stored.
pub fn pink_zone(avatar: Rect, config: &DockConfig) -> Rect {
    let center_x = avatar.center_x() + config.snap_zone_offset.x;
    let top = avatar.bottom as f32 + config.snap_zone_offset.y;
    let size = config.snap_zone_size;
    Rect::from_origin(
        (center_x - size.x * 0.5).round() as i32,
        top.round() as i32,
        size.x.round() as i32,
        size.y.round() as i32,
    )
}

/// Thin rectangle flush with the host's top edge, spanning its full width.
pub fn dock_strip(host: Rect) -> Rect {
    Rect::from_origin(host.left, host.top, host.width(), DOCK_STRIP_HEIGHT)
}

/// The screen point used for the occlusion hit-test: horizontal middle of the
/// strip, just inside the top edge.
pub fn strip_midpoint(host: Rect) -> Point {
    Point {
        x: host.left + host.width() / 2,
        y: host.top + 2,
    }
}

/// First candidate in enumeration order whose dock strip overlaps the pink
/// zone and which is actually on top at the strip midpoint.
///
/// The hit-test guards against selecting a window whose rectangle overlaps
/// the zone while another window covers it at that point. It runs only here,
/// at initial-snap time; the per-tick "still near" check is overlap-only.
pub fn find_snap_target<'a>(
    zone: Rect,
    entries: &'a [WindowEntry],
    desktop: &dyn Desktop,
) -> Option<&'a WindowEntry> {
    entries.iter().find(|entry| {
        if !zone.overlaps(&dock_strip(entry.rect)) {
            return false;
        }
        match desktop.root_window_at(strip_midpoint(entry.rect)) {
            Some(root) => root == entry.handle,
            None => false,
        }
    })
}
