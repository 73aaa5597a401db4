mod common;

use std::sync::mpsc;

use threadpool::ThreadPool;

use salud_rustica::map::handle::{LoadPhase, MapHandle};

use common::{
    doctor, failing_builder, gated_builder, ready_builder, wait_for_phase, wait_until, EngineProbe,
};

#[test]
fn unmount_twice_is_harmless() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
    assert!(wait_for_phase(&mut handle, LoadPhase::Ready));

    handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);

    handle.unmount();
    handle.unmount();

    assert_eq!(handle.phase(), LoadPhase::Released);
    assert!(probe.is_released());
    assert!(probe.live_markers().is_empty());
    assert!(handle.marker_ids().is_empty());
}

#[test]
fn unmount_before_construction_discards_the_late_engine() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    let (gate_tx, gate_rx) = mpsc::channel();
    let mut handle = MapHandle::mount(&pool, gated_builder(probe.clone(), gate_rx));

    handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);
    handle.unmount();
    assert_eq!(handle.phase(), LoadPhase::Released);
    assert!(!probe.is_released());

    // Let construction finish now that the handle is gone.
    gate_tx.send(()).unwrap();

    assert!(wait_until(|| probe.is_released()));
    assert!(probe.adds().is_empty());
    assert!(probe.live_markers().is_empty());
}

#[test]
fn dropping_the_handle_releases_the_engine() {
    let pool = ThreadPool::new(2);
    let probe = EngineProbe::default();
    {
        let mut handle = MapHandle::mount(&pool, ready_builder(probe.clone()));
        assert!(wait_for_phase(&mut handle, LoadPhase::Ready));
        handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);
    }
    assert!(probe.is_released());
}

#[test]
fn failed_construction_is_reported_and_render_stays_safe() {
    let pool = ThreadPool::new(2);
    let mut handle = MapHandle::mount(&pool, failing_builder(201, "tile cache unavailable"));
    assert!(wait_for_phase(&mut handle, LoadPhase::Failed));

    let (code, message) = handle
        .construction_error()
        .expect("failure should be reported")
        .get();
    assert_eq!(code, 201);
    assert_eq!(message, "tile cache unavailable");

    // A later render must be ignored, not a crash.
    handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);
    handle.poll(&[], &mut |_| panic!("no selection can come from a failed map"));
    assert!(handle.marker_ids().is_empty());

    handle.unmount();
    assert_eq!(handle.phase(), LoadPhase::Released);
}

#[test]
fn queued_render_is_dropped_when_construction_fails() {
    let pool = ThreadPool::new(2);
    let mut handle = MapHandle::mount(&pool, failing_builder(201, "tile cache unavailable"));

    handle.render(&[doctor(1, "Dr. Rajesh Sharma", "Cardiologist")]);
    assert!(wait_for_phase(&mut handle, LoadPhase::Failed));
    assert!(handle.marker_ids().is_empty());
}

#[test]
fn a_loader_that_dies_without_answering_counts_as_failure() {
    let pool = ThreadPool::new(2);
    let mut handle = MapHandle::mount(
        &pool,
        Box::new(|| panic!("loader thread lost before sending a result")),
    );
    assert!(wait_for_phase(&mut handle, LoadPhase::Failed));
    let (code, _) = handle.construction_error().expect("reported").get();
    assert_eq!(code, 202);
}
