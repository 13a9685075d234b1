//! Per-tick window snapshot: enumerate everything, keep only plausible
//! docking hosts.
//!
//! The list is rebuilt from scratch every tick. Re-filtering tens of windows
//! per frame is cheaper than tracking change notifications and keeps every
//! handle freshly validated.

use smallvec::SmallVec;

use crate::geometry::Rect;
use crate::platform::{Desktop, WindowHandle, WindowInfo};

/// Host windows must be at least this large in both dimensions; rejects
/// tooltips and small overlays.
const MIN_HOST_DIM: i32 = 100;

const TASKBAR_CLASSES: &[&str] = &["Shell_TrayWnd", "Shell_SecondaryTrayWnd"];

/// Shell pseudo-windows that must never become docking hosts.
const SHELL_CLASSES: &[&str] = &["Progman", "WorkerW", "DV2ControlHost", "MsgrIMEWindowClass"];

/// One docking candidate. Valid for the tick that produced it, no longer.
#[derive(Debug, Clone, Copy)]
pub struct WindowEntry {
    pub handle: WindowHandle,
    pub rect: Rect,
    pub is_taskbar: bool,
}

pub type WindowList = SmallVec<[WindowEntry; 16]>;

fn is_taskbar_class(class_name: &str) -> bool {
    TASKBAR_CLASSES.contains(&class_name)
}

fn is_shell_class(class_name: &str) -> bool {
    SHELL_CLASSES.contains(&class_name)
        || class_name.starts_with('#')
        || class_name.contains("Desktop")
}

fn passes_host_filter(info: &WindowInfo) -> bool {
    if info.rect.width() < MIN_HOST_DIM || info.rect.height() < MIN_HOST_DIM {
        return false;
    }
    if info.has_parent || info.title.is_empty() {
        return false;
    }
    !is_shell_class(&info.class_name)
}

/// Rebuilds the candidate list once per tick.
pub struct SnapshotProvider {
    // Scratch buffer reused across ticks to avoid per-frame allocation.
    scratch: Vec<WindowInfo>,
}

impl SnapshotProvider {
    pub fn new() -> Self {
        Self {
            scratch: Vec::with_capacity(64),
        }
    }

    /// Refresh `out` with this tick's candidates, excluding the avatar's own
    /// window. Taskbar windows bypass the host filter so later extensions can
    /// treat them as hosts; they are tagged instead.
    pub fn refresh(&mut self, desktop: &dyn Desktop, own: WindowHandle, out: &mut WindowList) {
        self.scratch.clear();
        desktop.enumerate_top_level(&mut self.scratch);

        out.clear();
        for info in &self.scratch {
            if info.handle == own || !info.visible {
                continue;
            }
            let is_taskbar = is_taskbar_class(&info.class_name);
            if !is_taskbar && !passes_host_filter(info) {
                continue;
            }
            out.push(WindowEntry {
                handle: info.handle,
                rect: info.rect,
                is_taskbar,
            });
        }
    }
}

impl Default for SnapshotProvider {
    fn default() -> Self {
        Self::new()
    }
}
