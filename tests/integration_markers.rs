mod common;

use std::sync::mpsc;

use threadpool::ThreadPool;

use salud_rustica::map::handle::{LoadPhase, MapHandle};

use common::{
    doctor, gated_builder, ready_builder, sorted, wait_for_phase, wait_until, EngineProbe,
};

#[test]
fn render_places_one_marker_per_doctor() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    let doctors = vec![
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
        doctor(3, "Dr. Amit Kumar", "Neurologist"),
    ];
    handle.render(&doctors);

    assert_eq!(sorted(handle.marker_ids()), vec![1, 2, 3]);
    assert_eq!(probe.live_markers(), vec![1, 2, 3]);
}

#[test]
fn render_sequence_leaves_only_the_last_list() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    handle.render(&[
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
    ]);
    handle.render(&[
        doctor(2, "Dr. Priya Patel", "General Physician"),
        doctor(3, "Dr. Amit Kumar", "Neurologist"),
    ]);
    handle.render(&[doctor(3, "Dr. Amit Kumar", "Neurologist")]);

    assert_eq!(probe.live_markers(), vec![3]);
    assert_eq!(probe.removals(), vec![1, 2]);
}

#[test]
fn markers_for_retained_doctors_are_reused() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    let doctors = vec![
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
    ];
    handle.render(&doctors);
    handle.render(&doctors);
    assert_eq!(probe.adds(), vec![1, 2]);

    let mut grown = doctors.clone();
    grown.push(doctor(3, "Dr. Amit Kumar", "Neurologist"));
    handle.render(&grown);

    assert_eq!(probe.adds(), vec![1, 2, 3]);
    assert!(probe.removals().is_empty());
}

#[test]
fn render_during_construction_is_applied_once_ready() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let (gate_tx, gate_rx) = mpsc::channel();
    let mut handle = MapHandle::mount(&pool, gated_builder(probe.clone(), gate_rx));
    assert_eq!(handle.phase(), LoadPhase::Loading);

    handle.render(&[
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
    ]);
    assert!(handle.marker_ids().is_empty());

    gate_tx.send(()).unwrap();
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    assert_eq!(probe.live_markers(), vec![1, 2]);
}

#[test]
fn only_the_latest_queued_render_is_applied() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let (gate_tx, gate_rx) = mpsc::channel();
    let mut handle = MapHandle::mount(&pool, gated_builder(probe.clone(), gate_rx));

    handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);
    handle.render(&[
        doctor(2, "Dr. Priya Patel", "General Physician"),
        doctor(3, "Dr. Amit Kumar", "Neurologist"),
    ]);

    gate_tx.send(()).unwrap();
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    assert_eq!(probe.live_markers(), vec![2, 3]);
    assert!(!probe.adds().contains(&1));
}

#[test]
fn empty_list_clears_every_marker() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    handle.render(&[
        doctor(1, "Dr. Rajesh Sharma", "Cardiologist"),
        doctor(2, "Dr. Priya Patel", "General Physician"),
    ]);
    handle.render(&[]);

    assert!(probe.live_markers().is_empty());
    assert!(wait_until(|| handle.marker_ids().is_empty()));
}
