//! perch — desktop companion window-docking engine.
//!
//! Watches the desktop's top-level windows once per tick, detects when the
//! companion (avatar) window is dragged onto another application's title bar,
//! snaps to it, and keeps the avatar pinned there — riding along with the
//! host's moves and resizes and arbitrating always-on-top ordering — until it
//! is dragged away or the host window disappears.
//!
//! The engine is synchronous and frame-driven: call
//! [`DockingEngine::tick`](dock::DockingEngine::tick) once per rendered frame
//! from the UI thread. The OS boundary is the [`platform::Desktop`] trait;
//! only the Win32 backend is real, everything else (animation, rendering,
//! settings persistence) stays on the far side of small typed interfaces.

pub mod config;
pub mod dock;
pub mod geometry;
pub mod platform;
pub mod registry;
pub mod tween;

pub use config::{DockConfig, SettingsStore};
pub use dock::{DockObserver, DockState, DockingEngine, TickInputs};
pub use geometry::{Point, Rect, Vec2};
pub use platform::{Desktop, WindowHandle, ZOrder};
pub use registry::{EngineId, EngineRegistry};
pub use tween::Tween;
