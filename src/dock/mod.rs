//! The desktop window-docking engine: detects when the avatar window is
//! dragged onto another application's title bar, snaps to it, and keeps the
//! avatar glued to that window until it is dragged away or the host closes.

pub mod engine;
pub mod snapshot;
pub mod state;
pub mod sync;
pub mod topmost;
pub mod zones;

pub use engine::{DockObserver, DockingEngine, TickInputs};
pub use state::{Attachment, DockState};
