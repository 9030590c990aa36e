//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wallnote_core` linkage.
//! - Run one scripted placement against a synthetic wall so a broken
//!   engine fails loudly outside any XR runtime.

use glam::Vec3;
use wallnote_core::{
    FrameInput, Hand, HandInput, NullSink, PlacementConfig, PlacementEngine, RayQuery, Surface,
    SurfaceEvent, TriangleMesh,
};

fn main() {
    println!("wallnote_core ping={}", wallnote_core::ping());
    println!("wallnote_core version={}", wallnote_core::core_version());

    let mut engine = PlacementEngine::new(PlacementConfig::default(), Box::new(NullSink))
        .expect("default config should validate");

    let wall = Surface::with_label(
        TriangleMesh::quad(Vec3::new(0.0, 1.5, -2.0), Vec3::Z, 2.0)
            .expect("wall quad should build"),
        "wall",
    );
    engine.submit_surface_event(SurfaceEvent::Added(wall));

    let ray = RayQuery::new(Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Z)
        .expect("forward ray should build");
    let report = engine.tick(FrameInput::idle(16).with_hand(
        Hand::Right,
        HandInput {
            ray: Some(ray),
            pressed: true,
            ray_busy: false,
        },
    ));

    println!("surfaces={}", engine.registry().len());
    println!("placed={}", report.placed.len());
    for (hand, id) in &report.placed {
        let note = engine
            .lifecycle()
            .note(*id)
            .expect("placed note should exist");
        println!(
            "note hand={} id={} color={} pos=({:.3}, {:.3}, {:.3})",
            hand.as_str(),
            id,
            note.color.hex(),
            note.position.x,
            note.position.y,
            note.position.z
        );
    }
}
