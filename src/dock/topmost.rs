//! Always-on-top arbitration for the avatar's own window.
//!
//! Topmost while unattached so the pet stays visible; not-topmost while
//! docked so it sits in the host's title bar without fighting window
//! ordering. Applied on attach/detach edges only, never polled.

use crate::platform::{Desktop, WindowHandle, ZOrder};

pub struct TopmostArbiter {
    applied: Option<bool>,
}

impl TopmostArbiter {
    pub fn new() -> Self {
        Self { applied: None }
    }

    /// True until the startup application has gone through (the own window
    /// may not exist yet on early ticks).
    pub fn needs_initial(&self) -> bool {
        self.applied.is_none()
    }

    pub fn apply(&mut self, desktop: &dyn Desktop, window: WindowHandle, topmost: bool) {
        if self.applied == Some(topmost) {
            return;
        }
        let order = if topmost {
            ZOrder::Topmost
        } else {
            ZOrder::NotTopmost
        };
        if desktop.set_z_order(window, order) {
            self.applied = Some(topmost);
            log::debug!("Avatar topmost flag set to {}", topmost);
        }
    }
}

impl Default for TopmostArbiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::platform::mock::MockDesktop;

    #[test]
    fn applies_only_on_changes() {
        let desktop = MockDesktop::new();
        let own = desktop.set_own_window(1, Rect::from_origin(0, 0, 200, 200));
        let mut arbiter = TopmostArbiter::new();

        assert!(arbiter.needs_initial());
        arbiter.apply(&desktop, own, true);
        assert!(!arbiter.needs_initial());
        arbiter.apply(&desktop, own, true);
        arbiter.apply(&desktop, own, false);
        arbiter.apply(&desktop, own, false);

        assert_eq!(
            desktop.z_orders(),
            vec![(own, ZOrder::Topmost), (own, ZOrder::NotTopmost)]
        );
    }
}
