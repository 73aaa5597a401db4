use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use threadpool::ThreadPool;

use crate::doctors::doctor::Doctor;
use crate::errors::error_types::ErrorTypes;

use super::engine::{EngineBuilder, MapEngine, MarkerSpec};

/// Where the engine is in its life. `Unloaded` has no representation here:
/// before `mount` there is simply no handle, and `mount` starts construction
/// right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
    Released,
}

enum EngineState {
    Loading(Receiver<Result<Box<dyn MapEngine>, ErrorTypes>>),
    Ready(Box<dyn MapEngine>),
    Failed(ErrorTypes),
    Released,
}

/// Owns every resource of one mounted map: the engine once construction
/// finishes, or the channel the engine will arrive on while it is still
/// being built.
///
/// Every operation is gated on the current state, so nothing is ever applied
/// to a half-constructed engine. While loading, at most the latest requested
/// marker list is queued; it is applied the moment the engine arrives. An
/// `unmount` during loading cancels the construction: the result channel is
/// dropped, and the engine built later on the worker thread is discarded,
/// which releases it.
pub struct MapHandle {
    state: EngineState,
    pending_render: Option<Vec<Doctor>>,
}

impl MapHandle {
    /// Starts engine construction on the worker pool and returns the handle
    /// owning it. The builder runs off the UI thread; the caller obtains it
    /// from a live surface (see `TileMapEngine::builder`), which is what
    /// keeps an engine from ever being built before its surface exists.
    pub fn mount(pool: &ThreadPool, builder: EngineBuilder) -> Self {
        let (tx, rx) = mpsc::channel();
        pool.execute(move || {
            // A failed send means the handle was unmounted while we were
            // building; the engine is dropped here, which releases it.
            let _ = tx.send(builder());
        });
        Self {
            state: EngineState::Loading(rx),
            pending_render: None,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        match self.state {
            EngineState::Loading(_) => LoadPhase::Loading,
            EngineState::Ready(_) => LoadPhase::Ready,
            EngineState::Failed(_) => LoadPhase::Failed,
            EngineState::Released => LoadPhase::Released,
        }
    }

    /// The construction failure, once the handle has entered `Failed`.
    pub fn construction_error(&self) -> Option<&ErrorTypes> {
        match &self.state {
            EngineState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Ids of the engine's live markers; empty unless the engine is ready.
    pub fn marker_ids(&self) -> Vec<i32> {
        match &self.state {
            EngineState::Ready(engine) => engine.marker_ids(),
            _ => Vec::new(),
        }
    }

    /// Makes the engine's marker set exactly match `doctors`.
    ///
    /// Markers whose id is still present are kept as they are; only the
    /// difference is removed and added. While the engine is loading the list
    /// is queued (latest call wins) and applied on arrival. After a failure
    /// or an unmount the call is ignored.
    pub fn render(&mut self, doctors: &[Doctor]) {
        match &mut self.state {
            EngineState::Ready(engine) => sync_markers(engine.as_mut(), doctors),
            EngineState::Loading(_) => self.pending_render = Some(doctors.to_vec()),
            EngineState::Failed(_) | EngineState::Released => {
                log::debug!("render ignored: map engine is gone");
            }
        }
    }

    /// Advances the handle: pumps the construction channel, then drains
    /// marker activations.
    ///
    /// Each activation id is resolved against `doctors`, the authoritative
    /// list as of this call rather than whatever list existed when the marker
    /// was placed, and `on_select` runs exactly once per activation, in event
    /// order. Ids that no longer resolve are dropped.
    pub fn poll(&mut self, doctors: &[Doctor], on_select: &mut dyn FnMut(Doctor)) {
        self.poll_construction();

        if let EngineState::Ready(engine) = &mut self.state {
            for id in engine.take_activations() {
                match doctors.iter().find(|doctor| doctor.id == id) {
                    Some(doctor) => on_select(doctor.clone()),
                    None => log::info!("activation for marker {} no longer in the list", id),
                }
            }
        }
    }

    fn poll_construction(&mut self) {
        if !matches!(self.state, EngineState::Loading(_)) {
            return;
        }
        self.state = match std::mem::replace(&mut self.state, EngineState::Released) {
            EngineState::Loading(rx) => match rx.try_recv() {
                Ok(Ok(mut engine)) => {
                    if let Some(doctors) = self.pending_render.take() {
                        sync_markers(engine.as_mut(), &doctors);
                    }
                    EngineState::Ready(engine)
                }
                Ok(Err(error)) => {
                    let (code, message) = error.get();
                    eprintln!("Failed to construct map engine: [{}] {}", code, message);
                    self.pending_render = None;
                    EngineState::Failed(error)
                }
                Err(TryRecvError::Empty) => EngineState::Loading(rx),
                Err(TryRecvError::Disconnected) => {
                    self.pending_render = None;
                    EngineState::Failed(ErrorTypes::new(
                        202,
                        "Map engine loader stopped before delivering an engine".to_string(),
                    ))
                }
            },
            other => other,
        };
    }

    /// Releases the engine and everything it owns.
    ///
    /// Idempotent: a second call, or a call while construction is still
    /// pending, never panics. Cancelling a pending construction drops the
    /// result channel, so the engine built later is discarded on the worker
    /// thread and released by its `Drop`.
    pub fn unmount(&mut self) {
        self.pending_render = None;
        match std::mem::replace(&mut self.state, EngineState::Released) {
            EngineState::Ready(mut engine) => engine.release(),
            EngineState::Loading(_rx) => {
                log::info!("unmount before the map engine was ready; construction cancelled");
            }
            EngineState::Failed(_) => {}
            EngineState::Released => log::debug!("unmount on an already released map handle"),
        }
    }

    /// Draws the map area for the current phase: a spinner while loading, the
    /// engine once ready, a deterministic error message after a failure.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        match &mut self.state {
            EngineState::Loading(_) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(egui::Spinner::new());
                    ui.label("Loading map...");
                });
                ui.ctx().request_repaint_after(Duration::from_millis(100));
            }
            EngineState::Ready(engine) => engine.show(ui),
            EngineState::Failed(_) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("The map could not be loaded.");
                });
            }
            EngineState::Released => {}
        }
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        if !matches!(self.state, EngineState::Released) {
            self.unmount();
        }
    }
}

fn sync_markers(engine: &mut dyn MapEngine, doctors: &[Doctor]) {
    let wanted: HashSet<i32> = doctors.iter().map(|doctor| doctor.id).collect();
    let live: Vec<i32> = engine.marker_ids();

    for id in &live {
        if !wanted.contains(id) {
            engine.remove_marker(*id);
        }
    }
    for doctor in doctors {
        if !live.contains(&doctor.id) {
            engine.add_marker(MarkerSpec {
                id: doctor.id,
                position: doctor.position(),
                label: doctor.name.clone(),
            });
        }
    }
}
