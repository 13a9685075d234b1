//! Scripted in-memory desktop for unit tests.
//!
//! Clones share state, so a test can keep one handle to mutate the scripted
//! desktop between ticks while the engine owns another.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::geometry::{Point, Rect};
use crate::platform::{Desktop, WindowHandle, WindowInfo, ZOrder};

#[derive(Default)]
struct Inner {
    windows: Vec<WindowInfo>,
    own: Option<WindowHandle>,
    /// Scripted hit-test results; falls back to topmost-rect-containing.
    hit_overrides: HashMap<(i32, i32), WindowHandle>,
    moves: Vec<(WindowHandle, i32, i32, i32, i32)>,
    z_orders: Vec<(WindowHandle, ZOrder)>,
}

#[derive(Clone, Default)]
pub struct MockDesktop {
    inner: Rc<RefCell<Inner>>,
}

impl MockDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(handle: isize, title: &str, class_name: &str, rect: Rect) -> WindowInfo {
        WindowInfo {
            handle: WindowHandle(handle),
            title: title.to_string(),
            class_name: class_name.to_string(),
            rect,
            visible: true,
            has_parent: false,
        }
    }

    pub fn add_window(&self, info: WindowInfo) {
        self.inner.borrow_mut().windows.push(info);
    }

    pub fn remove_window(&self, handle: WindowHandle) {
        self.inner.borrow_mut().windows.retain(|w| w.handle != handle);
    }

    pub fn set_window_rect(&self, handle: WindowHandle, rect: Rect) {
        let mut inner = self.inner.borrow_mut();
        if let Some(w) = inner.windows.iter_mut().find(|w| w.handle == handle) {
            w.rect = rect;
        }
    }

    /// Register the avatar's own window; it participates in enumeration like
    /// any other window.
    pub fn set_own_window(&self, handle: isize, rect: Rect) -> WindowHandle {
        let own = WindowHandle(handle);
        self.add_window(Self::window(handle, "avatar", "PerchWindow", rect));
        self.inner.borrow_mut().own = Some(own);
        own
    }

    pub fn clear_own_window(&self) {
        self.inner.borrow_mut().own = None;
    }

    pub fn override_hit(&self, point: Point, handle: WindowHandle) {
        self.inner
            .borrow_mut()
            .hit_overrides
            .insert((point.x, point.y), handle);
    }

    pub fn moves(&self) -> Vec<(WindowHandle, i32, i32, i32, i32)> {
        self.inner.borrow().moves.clone()
    }

    pub fn z_orders(&self) -> Vec<(WindowHandle, ZOrder)> {
        self.inner.borrow().z_orders.clone()
    }

    pub fn clear_calls(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.moves.clear();
        inner.z_orders.clear();
    }
}

impl Desktop for MockDesktop {
    fn enumerate_top_level(&self, out: &mut Vec<WindowInfo>) {
        out.extend(self.inner.borrow().windows.iter().cloned());
    }

    fn window_rect(&self, window: WindowHandle) -> Option<Rect> {
        self.inner
            .borrow()
            .windows
            .iter()
            .find(|w| w.handle == window)
            .map(|w| w.rect)
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.moves.push((window, x, y, width, height));
        if let Some(w) = inner.windows.iter_mut().find(|w| w.handle == window) {
            w.rect = Rect::from_origin(x, y, width, height);
            true
        } else {
            false
        }
    }

    fn set_z_order(&self, window: WindowHandle, order: ZOrder) -> bool {
        self.inner.borrow_mut().z_orders.push((window, order));
        true
    }

    fn root_window_at(&self, point: Point) -> Option<WindowHandle> {
        let inner = self.inner.borrow();
        if let Some(handle) = inner.hit_overrides.get(&(point.x, point.y)) {
            return Some(*handle);
        }
        // List order stands in for z-order: first containing window wins. The
        // avatar's own window is click-through while hit-tests run (it is
        // dragged as a transparent layered window), so it never occludes.
        inner
            .windows
            .iter()
            .find(|w| Some(w.handle) != inner.own && w.visible && w.rect.contains(point))
            .map(|w| w.handle)
    }

    fn own_main_window(&self) -> Option<WindowHandle> {
        self.inner.borrow().own
    }
}
