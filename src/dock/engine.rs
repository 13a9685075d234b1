//! The per-tick docking pipeline.
//!
//! Tick order is fixed: snapshot refresh, zone computation, state-machine
//! evaluation, position synchronization. Everything runs synchronously on the
//! caller's thread; a tick that cannot resolve the avatar's own window is a
//! no-op and the next tick retries from scratch.

use std::sync::Arc;

use crate::config::{DockConfig, SettingsStore};
use crate::dock::snapshot::{SnapshotProvider, WindowEntry, WindowList};
use crate::dock::state::{snap_fraction, Attachment, DockState};
use crate::dock::sync;
use crate::dock::topmost::TopmostArbiter;
use crate::dock::zones::{dock_strip, find_snap_target, pink_zone};
use crate::geometry::Rect;
use crate::platform::{Desktop, WindowHandle};

/// Docked semantic flag, consumed by the animation collaborator to switch
/// the avatar's pose.
pub trait DockObserver {
    fn docked_changed(&self, docked: bool);
}

/// Collaborator state sampled once per tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInputs {
    /// Is the user currently dragging the avatar window.
    pub dragging: bool,
    /// Is the avatar in a mutually-exclusive seated animation state.
    pub sitting: bool,
    /// Current visual scale of the avatar (1.0 = baseline).
    pub scale: f32,
}

impl Default for TickInputs {
    fn default() -> Self {
        Self {
            dragging: false,
            sitting: false,
            scale: 1.0,
        }
    }
}

pub struct DockingEngine<D: Desktop> {
    desktop: D,
    settings: Arc<SettingsStore>,
    provider: SnapshotProvider,
    entries: WindowList,
    state: DockState,
    arbiter: TopmostArbiter,
    observer: Option<Box<dyn DockObserver>>,
}

impl<D: Desktop> DockingEngine<D> {
    pub fn new(desktop: D, settings: Arc<SettingsStore>) -> Self {
        Self {
            desktop,
            settings,
            provider: SnapshotProvider::new(),
            entries: WindowList::new(),
            state: DockState::Unattached,
            arbiter: TopmostArbiter::new(),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn DockObserver>) {
        self.observer = Some(observer);
    }

    pub fn state(&self) -> DockState {
        self.state
    }

    pub fn is_docked(&self) -> bool {
        self.state.is_attached()
    }

    /// Run one frame of the docking pipeline.
    pub fn tick(&mut self, inputs: &TickInputs) {
        let config = self.settings.load();
        if !config.enabled {
            return;
        }

        // The own window may not exist yet on early ticks; retry forever.
        let Some(own) = self.desktop.own_main_window() else {
            log::trace!("Own window not resolvable, skipping tick");
            return;
        };
        let Some(avatar) = self.desktop.window_rect(own) else {
            return;
        };

        if self.arbiter.needs_initial() {
            self.arbiter.apply(&self.desktop, own, true);
        }

        self.provider.refresh(&self.desktop, own, &mut self.entries);
        let zone = pink_zone(avatar, &config);

        // A stale host must never be acted upon: if the attached handle is
        // absent from this tick's enumeration, detach before anything else,
        // dragging or not.
        if let DockState::Attached(att) = self.state {
            if self.host_entry(att.host).is_none() {
                log::info!("Dock host {:?} vanished, detaching", att.host);
                self.detach(own);
            }
        }

        if inputs.dragging && !inputs.sitting {
            match self.state {
                DockState::Unattached => {
                    let target = find_snap_target(zone, &self.entries, &self.desktop).copied();
                    if let Some(entry) = target {
                        self.attach(own, avatar, &entry, &config);
                    }
                }
                DockState::Attached(mut att) => {
                    // Presence was validated above.
                    let Some(host) = self.host_entry(att.host).map(|e| e.rect) else {
                        return;
                    };
                    if !zone.overlaps(&dock_strip(host)) {
                        self.detach(own);
                        return;
                    }
                    // Re-fraction from the live position so the user can
                    // slide the avatar along the host's top edge.
                    att.snap_fraction = snap_fraction(avatar, host);
                    self.state = DockState::Attached(att);
                    sync::synchronize(
                        &self.desktop,
                        own,
                        avatar,
                        &att,
                        host,
                        inputs.scale,
                        &config,
                        true,
                    );
                }
            }
        } else if !inputs.dragging {
            if let DockState::Attached(att) = self.state {
                let Some(host) = self.host_entry(att.host).map(|e| e.rect) else {
                    return;
                };
                sync::synchronize(
                    &self.desktop,
                    own,
                    avatar,
                    &att,
                    host,
                    inputs.scale,
                    &config,
                    false,
                );
            }
        }
    }

    fn host_entry(&self, host: WindowHandle) -> Option<&WindowEntry> {
        self.entries.iter().find(|e| e.handle == host)
    }

    fn attach(&mut self, own: WindowHandle, avatar: Rect, entry: &WindowEntry, config: &DockConfig) {
        let att = Attachment::new(entry.handle, avatar, entry.rect, config);
        log::info!(
            "Avatar docked to {:?} at fraction {:.3}",
            entry.handle,
            att.snap_fraction
        );
        self.state = DockState::Attached(att);
        self.notify(true);
        self.arbiter.apply(&self.desktop, own, false);
    }

    fn detach(&mut self, own: WindowHandle) {
        if !self.state.is_attached() {
            return;
        }
        log::info!("Avatar undocked");
        self.state = DockState::Unattached;
        self.notify(false);
        self.arbiter.apply(&self.desktop, own, true);
    }

    fn notify(&self, docked: bool) {
        if let Some(observer) = &self.observer {
            observer.docked_changed(docked);
        }
    }
}
