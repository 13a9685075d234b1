//! Explicit registry of live docking engines, owned by the composition root.
//!
//! Several avatar instances may share a desktop; each registered engine owns
//! an independent `DockState` and the registry ticks them in registration
//! order. Registration and removal are explicit lifecycle calls, not
//! process-wide static state.

use crate::dock::{DockingEngine, TickInputs};
use crate::platform::Desktop;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineId(u64);

pub struct EngineRegistry<D: Desktop> {
    next_id: u64,
    engines: Vec<(EngineId, DockingEngine<D>)>,
}

impl<D: Desktop> EngineRegistry<D> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            engines: Vec::new(),
        }
    }

    pub fn register(&mut self, engine: DockingEngine<D>) -> EngineId {
        let id = EngineId(self.next_id);
        self.next_id += 1;
        self.engines.push((id, engine));
        log::debug!("Docking engine {:?} registered", id);
        id
    }

    pub fn remove(&mut self, id: EngineId) -> Option<DockingEngine<D>> {
        let index = self.engines.iter().position(|(e, _)| *e == id)?;
        log::debug!("Docking engine {:?} removed", id);
        Some(self.engines.remove(index).1)
    }

    pub fn get_mut(&mut self, id: EngineId) -> Option<&mut DockingEngine<D>> {
        self.engines
            .iter_mut()
            .find(|(e, _)| *e == id)
            .map(|(_, engine)| engine)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Tick every engine, pulling per-instance inputs from the supplier.
    pub fn tick_all(&mut self, mut inputs_for: impl FnMut(EngineId) -> TickInputs) {
        for (id, engine) in &mut self.engines {
            engine.tick(&inputs_for(*id));
        }
    }
}

impl<D: Desktop> Default for EngineRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
