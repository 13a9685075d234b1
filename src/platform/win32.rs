//! Win32 backend for the [`Desktop`] trait.
//!
//! All calls are synchronous and complete within the tick that issued them.
//! Per-window query failures are skipped silently; a handle that stopped
//! resolving is a normal signal (the window closed), not an error.

use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT};
use windows::Win32::System::Threading::GetCurrentProcessId;
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetAncestor, GetClassNameW, GetParent, GetWindow, GetWindowRect,
    GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible, MoveWindow, SetWindowPos,
    WindowFromPoint, GA_ROOT, GW_OWNER, HWND_NOTOPMOST, HWND_TOPMOST, SWP_NOACTIVATE,
    SWP_NOMOVE, SWP_NOSIZE,
};
use windows::core::BOOL;

use crate::geometry::{Point, Rect};
use crate::platform::{Desktop, WindowHandle, WindowInfo, ZOrder};

/// Stateless Win32 desktop accessor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Win32Desktop {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut core::ffi::c_void)
}

fn handle_of(h: HWND) -> WindowHandle {
    WindowHandle(h.0 as isize)
}

fn rect_of(r: RECT) -> Rect {
    Rect::new(r.left, r.top, r.right, r.bottom)
}

unsafe extern "system" fn collect_cb(window: HWND, lparam: LPARAM) -> BOOL {
    let out = unsafe { &mut *(lparam.0 as *mut Vec<isize>) };
    out.push(window.0 as isize);
    true.into()
}

/// Raw top-level HWNDs in z-order (topmost first), the order the engine's
/// first-match candidate selection relies on.
fn collect_raw_windows() -> Vec<isize> {
    let mut raw: Vec<isize> = Vec::new();
    let lparam = LPARAM(&mut raw as *mut Vec<isize> as isize);
    if let Err(err) = unsafe { EnumWindows(Some(collect_cb), lparam) } {
        log::warn!("EnumWindows failed: {}", err);
    }
    raw
}

fn class_name_of(window: HWND) -> String {
    let mut buf = [0u16; 256];
    let len = unsafe { GetClassNameW(window, &mut buf) };
    if len <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buf[..len as usize])
}

fn title_of(window: HWND) -> String {
    let mut buf = [0u16; 512];
    let len = unsafe { GetWindowTextW(window, &mut buf) };
    if len <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buf[..len as usize])
}

impl Desktop for Win32Desktop {
    fn enumerate_top_level(&self, out: &mut Vec<WindowInfo>) {
        for raw in collect_raw_windows() {
            let window = HWND(raw as *mut core::ffi::c_void);

            let mut r = RECT::default();
            if unsafe { GetWindowRect(window, &mut r) }.is_err() {
                // Window closed between enumeration and query; skip it.
                continue;
            }

            let visible = unsafe { IsWindowVisible(window) }.as_bool();
            let has_parent = unsafe { GetParent(window) }
                .map(|p| !p.is_invalid())
                .unwrap_or(false);

            out.push(WindowInfo {
                handle: WindowHandle(raw),
                title: title_of(window),
                class_name: class_name_of(window),
                rect: rect_of(r),
                visible,
                has_parent,
            });
        }
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Rect> {
        let mut r = RECT::default();
        unsafe { GetWindowRect(hwnd(window), &mut r) }.ok()?;
        Some(rect_of(r))
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32) -> bool {
        match unsafe { MoveWindow(hwnd(window), x, y, width, height, true.into()) } {
            Ok(()) => true,
            Err(err) => {
                log::debug!("MoveWindow({:?}) failed: {}", window, err);
                false
            }
        }
    }

    fn set_z_order(&self, window: WindowHandle, order: ZOrder) -> bool {
        let insert_after = match order {
            ZOrder::Topmost => HWND_TOPMOST,
            ZOrder::NotTopmost => HWND_NOTOPMOST,
            ZOrder::AboveWindow(host) => hwnd(host),
        };
        let result = unsafe {
            SetWindowPos(
                hwnd(window),
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        };
        match result {
            Ok(()) => true,
            Err(err) => {
                log::debug!("SetWindowPos({:?}, {:?}) failed: {}", window, order, err);
                false
            }
        }
    }

    fn root_window_at(&self, point: Point) -> Option<WindowHandle> {
        let hit = unsafe { WindowFromPoint(POINT { x: point.x, y: point.y }) };
        if hit.is_invalid() {
            return None;
        }
        let root = unsafe { GetAncestor(hit, GA_ROOT) };
        let root = if root.is_invalid() { hit } else { root };
        Some(handle_of(root))
    }

    fn own_main_window(&self) -> Option<WindowHandle> {
        // Same rule as a process "main window": visible, unowned, and owned by
        // this process. The first one in z-order wins.
        let own_pid = unsafe { GetCurrentProcessId() };
        for raw in collect_raw_windows() {
            let window = HWND(raw as *mut core::ffi::c_void);

            let mut pid = 0u32;
            unsafe { GetWindowThreadProcessId(window, Some(&mut pid)) };
            if pid != own_pid {
                continue;
            }
            if !unsafe { IsWindowVisible(window) }.as_bool() {
                continue;
            }
            let owned = unsafe { GetWindow(window, GW_OWNER) }
                .map(|o| !o.is_invalid())
                .unwrap_or(false);
            if owned {
                continue;
            }
            return Some(WindowHandle(raw));
        }
        None
    }
}
