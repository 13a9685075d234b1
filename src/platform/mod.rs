//! The OS window-manager boundary.
//!
//! Everything the docking engine needs from the desktop goes through the
//! [`Desktop`] trait: enumeration, rect queries, moves, and z-order
//! directives. The engine only ever mutates its own window; other windows are
//! read, never written. Failures surface as `None`/`false` and are absorbed
//! by the caller — a bad tick degrades to "do nothing", never to a panic.

#[cfg(test)]
pub(crate) mod mock;
#[cfg(target_os = "windows")]
pub mod win32;

use crate::geometry::{Point, Rect};

/// Opaque top-level window identifier.
///
/// Validity is transient: a handle is only trusted within the tick whose
/// enumeration produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub(crate) isize);

impl WindowHandle {
    pub const fn raw(self) -> isize {
        self.0
    }
}

/// One top-level window as reported by enumeration, before filtering.
#[derive(Debug, Clone)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub title: String,
    pub class_name: String,
    pub rect: Rect,
    pub visible: bool,
    pub has_parent: bool,
}

/// Z-order directive for the avatar's own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    Topmost,
    NotTopmost,
    /// Place immediately above the given window without activating.
    AboveWindow(WindowHandle),
}

pub trait Desktop {
    /// Append every top-level window the OS reports into `out`.
    ///
    /// Windows whose state cannot be queried are skipped, never reported as
    /// errors; the call itself cannot fail.
    fn enumerate_top_level(&self, out: &mut Vec<WindowInfo>);

    /// Fresh screen rect for a window, `None` once the handle has gone stale.
    fn window_rect(&self, window: WindowHandle) -> Option<Rect>;

    /// Move a window to `(x, y)` at the given size. Only ever called on the
    /// avatar's own window.
    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32) -> bool;

    /// Apply a z-order directive. Only ever called on the avatar's own window.
    fn set_z_order(&self, window: WindowHandle, order: ZOrder) -> bool;

    /// Root ancestor of the topmost window at a screen point.
    fn root_window_at(&self, point: Point) -> Option<WindowHandle>;

    /// The calling process's main top-level window, once it exists.
    fn own_main_window(&self) -> Option<WindowHandle>;
}
