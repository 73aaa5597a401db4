#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use salud_rustica::doctors::doctor::Doctor;
use salud_rustica::errors::error_types::ErrorTypes;
use salud_rustica::map::engine::{EngineBuilder, MapEngine, MarkerSpec};
use salud_rustica::map::handle::{LoadPhase, MapHandle};

/// Shared handles into a `RecordingEngine`, kept by the test while the
/// engine itself lives inside a `MapHandle` (possibly on another thread).
#[derive(Clone, Default)]
pub struct EngineProbe {
    markers: Arc<Mutex<Vec<i32>>>,
    added: Arc<Mutex<Vec<i32>>>,
    removed: Arc<Mutex<Vec<i32>>>,
    clicks: Arc<Mutex<Vec<i32>>>,
    released: Arc<AtomicBool>,
}

impl EngineProbe {
    pub fn live_markers(&self) -> Vec<i32> {
        let mut ids = self.markers.lock().unwrap().clone();
        ids.sort_unstable();
        ids
    }

    /// Every `add_marker` call the engine ever saw, in order.
    pub fn adds(&self) -> Vec<i32> {
        self.added.lock().unwrap().clone()
    }

    pub fn removals(&self) -> Vec<i32> {
        self.removed.lock().unwrap().clone()
    }

    /// Simulates the user activating the marker with this id.
    pub fn click(&self, id: i32) {
        self.clicks.lock().unwrap().push(id);
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

/// Engine fake that records every operation through its probe.
pub struct RecordingEngine {
    probe: EngineProbe,
}

impl MapEngine for RecordingEngine {
    fn add_marker(&mut self, spec: MarkerSpec) {
        self.probe.markers.lock().unwrap().push(spec.id);
        self.probe.added.lock().unwrap().push(spec.id);
    }

    fn remove_marker(&mut self, id: i32) {
        self.probe.markers.lock().unwrap().retain(|m| *m != id);
        self.probe.removed.lock().unwrap().push(id);
    }

    fn marker_ids(&self) -> Vec<i32> {
        self.probe.markers.lock().unwrap().clone()
    }

    fn take_activations(&mut self) -> Vec<i32> {
        std::mem::take(&mut *self.probe.clicks.lock().unwrap())
    }

    fn show(&mut self, _ui: &mut egui::Ui) {}

    fn release(&mut self) {
        if !self.probe.released.swap(true, Ordering::SeqCst) {
            self.probe.markers.lock().unwrap().clear();
        }
    }

    fn is_released(&self) -> bool {
        self.probe.is_released()
    }
}

impl Drop for RecordingEngine {
    fn drop(&mut self) {
        self.release();
    }
}

/// Builder whose engine is available immediately.
pub fn ready_builder(probe: EngineProbe) -> EngineBuilder {
    Box::new(move || Ok(Box::new(RecordingEngine { probe }) as Box<dyn MapEngine>))
}

/// Builder that blocks until the test sends on the gate, so the test
/// controls when construction completes.
pub fn gated_builder(probe: EngineProbe, gate: Receiver<()>) -> EngineBuilder {
    Box::new(move || {
        let _ = gate.recv();
        Ok(Box::new(RecordingEngine { probe }) as Box<dyn MapEngine>)
    })
}

/// Builder that fails construction.
pub fn failing_builder(code: i32, message: &str) -> EngineBuilder {
    let message = message.to_string();
    Box::new(move || Err(ErrorTypes::new(code, message)))
}

pub fn doctor(id: i32, name: &str, specialty: &str) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        rating: 4.5,
        distance: "1.0 km away".to_string(),
        lat: 21.14 + f64::from(id) * 0.01,
        lng: 79.08,
        phone: format!("+91 90000000{:02}", id),
        address: "Nagpur".to_string(),
    }
}

/// Polls `cond` for up to two seconds.
pub fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    for _ in 0..400 {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Pumps the handle until it reaches the wanted phase.
pub fn wait_for_phase(handle: &mut MapHandle, phase: LoadPhase) -> bool {
    wait_until(|| {
        handle.poll(&[], &mut |_| {});
        handle.phase() == phase
    })
}

pub fn sorted(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids
}
