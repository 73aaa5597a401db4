use crate::errors::error_types::ErrorTypes;
use walkers::Position;

/// Everything the engine needs to place one marker.
#[derive(Debug, Clone)]
pub struct MarkerSpec {
    pub id: i32,
    pub position: Position,
    pub label: String,
}

/// The boundary to a map rendering engine.
///
/// The engine owns its markers and their event bindings. Activation events
/// are not delivered through callbacks: the engine queues the activated
/// marker's id and the integration layer drains the queue once per frame,
/// resolving each id against the list that is current at drain time.
///
/// Engines are constructed on a worker thread, so implementations must be
/// `Send`. `release` must be idempotent, and dropping an engine must release
/// it as well; that is what disposes of an engine whose construction finished
/// after its handle was already unmounted.
pub trait MapEngine: Send {
    /// Places a marker. Ignored after release.
    fn add_marker(&mut self, spec: MarkerSpec);

    /// Removes a marker and its event binding. Unknown ids are ignored.
    fn remove_marker(&mut self, id: i32);

    /// Ids of every live marker.
    fn marker_ids(&self) -> Vec<i32>;

    /// Drains queued marker activations, oldest first.
    fn take_activations(&mut self) -> Vec<i32>;

    /// Draws the map surface.
    fn show(&mut self, ui: &mut egui::Ui);

    /// Releases every engine resource. Safe to call more than once.
    fn release(&mut self);

    fn is_released(&self) -> bool;
}

/// Constructs an engine on the worker pool. The closure runs off the UI
/// thread; whatever it needs (an `egui::Context`, a home position) must be
/// moved in.
pub type EngineBuilder = Box<dyn FnOnce() -> Result<Box<dyn MapEngine>, ErrorTypes> + Send>;
