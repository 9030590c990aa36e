use glam::Vec3;
use wallnote_core::{
    FrameInput, Hand, HandInput, NullSink, PlacementConfig, PlacementEngine, RayQuery, Surface,
    SurfaceEvent, TriangleMesh,
};

fn wall(center: Vec3, normal: Vec3) -> Surface {
    Surface::with_label(
        TriangleMesh::quad(center, normal, 2.0).expect("wall quad should build"),
        "wall",
    )
}

fn ray(origin: Vec3, direction: Vec3) -> RayQuery {
    RayQuery::new(origin, direction).expect("ray should build")
}

fn engine_with_front_wall() -> PlacementEngine {
    let mut engine = PlacementEngine::new(PlacementConfig::default(), Box::new(NullSink))
        .expect("default config should validate");
    engine.submit_surface_event(SurfaceEvent::Added(wall(Vec3::new(0.0, 1.5, -2.0), Vec3::Z)));
    engine.tick(FrameInput::idle(16));
    engine
}

fn pressing(hand: Hand, origin: Vec3) -> FrameInput {
    FrameInput::idle(16).with_hand(
        hand,
        HandInput {
            ray: Some(ray(origin, Vec3::NEG_Z)),
            pressed: true,
            ray_busy: false,
        },
    )
}

fn released(hand: Hand, origin: Vec3) -> FrameInput {
    FrameInput::idle(16).with_hand(
        hand,
        HandInput {
            ray: Some(ray(origin, Vec3::NEG_Z)),
            pressed: false,
            ray_busy: false,
        },
    )
}

#[test]
fn press_edge_on_a_wall_places_exactly_one_note() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let report = engine.tick(pressing(Hand::Right, origin));
    assert_eq!(report.placed.len(), 1);
    assert_eq!(report.placed[0].0, Hand::Right);

    let (_, id) = report.placed[0];
    let note = engine.lifecycle().note(id).expect("note should exist");
    // Anchored 5 mm off the wall plane at z = -2, faced back along +Z.
    assert!(note.position.abs_diff_eq(Vec3::new(0.0, 1.5, -1.995), 1e-5));
    let face = note.orientation * Vec3::Z;
    assert!(face.abs_diff_eq(Vec3::Z, 1e-5));
}

#[test]
fn held_press_places_nothing_more() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    assert_eq!(engine.tick(pressing(Hand::Right, origin)).placed.len(), 1);
    for _ in 0..10 {
        // Aim away from the fresh note so only the edge logic is under test.
        let elsewhere = Vec3::new(1.0, 1.5, 0.0);
        assert!(engine.tick(pressing(Hand::Right, elsewhere)).placed.is_empty());
    }
}

#[test]
fn retap_within_cooldown_is_throttled_then_allowed() {
    let mut engine = engine_with_front_wall();
    let first = Vec3::new(0.0, 1.5, 0.0);
    let second = Vec3::new(1.0, 1.5, 0.0);

    assert_eq!(engine.tick(pressing(Hand::Right, first)).placed.len(), 1);
    engine.tick(released(Hand::Right, second));

    // Fresh press edge well inside the 500 ms window.
    assert!(engine.tick(pressing(Hand::Right, second)).placed.is_empty());
    engine.tick(released(Hand::Right, second));

    // Let the window expire, then a new edge places again.
    let mut idle = FrameInput::idle(600);
    idle.hands[Hand::Right.index()].ray = Some(ray(second, Vec3::NEG_Z));
    engine.tick(idle);
    assert_eq!(engine.tick(pressing(Hand::Right, second)).placed.len(), 1);
}

#[test]
fn busy_hand_is_suppressed_regardless_of_cooldown() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let mut input = pressing(Hand::Right, origin);
    input.hand_mut(Hand::Right).ray_busy = true;
    assert!(engine.tick(input).placed.is_empty());
    assert!(engine.lifecycle().is_empty());
}

#[test]
fn two_hands_place_independently_in_the_same_tick() {
    let mut engine = engine_with_front_wall();
    let left_origin = Vec3::new(-1.0, 1.5, 0.0);
    let right_origin = Vec3::new(1.0, 1.5, 0.0);

    let input = FrameInput::idle(16)
        .with_hand(
            Hand::Left,
            HandInput {
                ray: Some(ray(left_origin, Vec3::NEG_Z)),
                pressed: true,
                ray_busy: false,
            },
        )
        .with_hand(
            Hand::Right,
            HandInput {
                ray: Some(ray(right_origin, Vec3::NEG_Z)),
                pressed: true,
                ray_busy: false,
            },
        );

    let report = engine.tick(input);
    assert_eq!(report.placed.len(), 2);
    assert_eq!(engine.lifecycle().len(), 2);

    let positions: Vec<Vec3> = engine.lifecycle().notes().map(|n| n.position).collect();
    assert!(positions[0].x != positions[1].x);
}

#[test]
fn a_placed_note_blocks_placement_at_the_same_spot() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    assert_eq!(engine.tick(pressing(Hand::Right, origin)).placed.len(), 1);
    engine.tick(released(Hand::Right, origin));

    // Cooldown expired, but the ray now lands on the note itself: the
    // nearest hit is a note, so the query resolves to absent.
    let mut idle = FrameInput::idle(600);
    idle.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    let report = engine.tick(idle);
    assert!(!report.surface_hit[Hand::Right.index()]);

    assert!(engine.tick(pressing(Hand::Right, origin)).placed.is_empty());
    assert_eq!(engine.lifecycle().len(), 1);
}

#[test]
fn deleting_a_note_restores_the_wall_behind_it() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let report = engine.tick(pressing(Hand::Right, origin));
    let (_, id) = report.placed[0];
    engine.tick(released(Hand::Right, origin));

    engine.lifecycle_mut().delete(id);

    let mut idle = FrameInput::idle(600);
    idle.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    let report = engine.tick(idle);
    assert!(report.surface_hit[Hand::Right.index()]);

    assert_eq!(engine.tick(pressing(Hand::Right, origin)).placed.len(), 1);
}

#[test]
fn relocating_a_note_restores_the_wall_at_its_old_spot() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let report = engine.tick(pressing(Hand::Right, origin));
    let (_, id) = report.placed[0];
    engine.tick(released(Hand::Right, origin));

    // The grab subsystem drops the note a meter to the side; the engine
    // gets told the final pose.
    let note = engine.lifecycle().note(id).expect("note should exist");
    let (position, orientation) = (note.position, note.orientation);
    assert!(engine
        .lifecycle_mut()
        .set_pose(id, position + Vec3::X, orientation));

    // The old spot raycasts through to the wall again, and the note now
    // occludes its new spot instead.
    let mut idle = FrameInput::idle(600);
    idle.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    assert!(engine.tick(idle).surface_hit[Hand::Right.index()]);

    let mut at_new_spot = FrameInput::idle(16);
    at_new_spot.hands[Hand::Right.index()].ray = Some(ray(origin + Vec3::X, Vec3::NEG_Z));
    assert!(!engine.tick(at_new_spot).surface_hit[Hand::Right.index()]);
}

#[test]
fn untracked_ray_keeps_the_cached_intersection() {
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let mut aim = FrameInput::idle(16);
    aim.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    let report = engine.tick(aim);
    assert!(report.surface_hit[Hand::Right.index()]);

    // Tracking drops for a tick: the cache is left alone, not cleared.
    let report = engine.tick(FrameInput::idle(16));
    assert!(report.surface_hit[Hand::Right.index()]);
    assert!(engine.current_intersection(Hand::Right).is_some());

    // An actual miss overwrites it.
    let mut away = FrameInput::idle(16);
    away.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::Z));
    let report = engine.tick(away);
    assert!(!report.surface_hit[Hand::Right.index()]);
    assert!(engine.current_intersection(Hand::Right).is_none());
}

#[test]
fn press_with_untracked_ray_places_against_the_cached_hit() {
    // Observed overwrite-only behavior: a stale cached intersection can
    // still satisfy the gate when the hand presses on a tick without a
    // fresh ray sample.
    let mut engine = engine_with_front_wall();
    let origin = Vec3::new(0.0, 1.5, 0.0);

    let mut aim = FrameInput::idle(16);
    aim.hands[Hand::Right.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    engine.tick(aim);

    let mut blind_press = FrameInput::idle(16);
    blind_press.hands[Hand::Right.index()].pressed = true;
    assert_eq!(engine.tick(blind_press).placed.len(), 1);
}

#[test]
fn queued_surface_events_apply_at_the_start_of_the_next_tick() {
    let mut engine = PlacementEngine::new(PlacementConfig::default(), Box::new(NullSink))
        .expect("default config should validate");
    assert!(engine.registry().is_empty());

    let surface = wall(Vec3::new(0.0, 1.5, -2.0), Vec3::Z);
    let id = surface.id;
    engine.submit_surface_event(SurfaceEvent::Added(surface));
    assert!(engine.registry().is_empty());

    // The same tick's raycast already sees the queued wall, because queued
    // events are drained before candidates are built.
    let report = engine.tick(pressing(Hand::Right, Vec3::new(0.0, 1.5, 0.0)));
    assert_eq!(engine.registry().len(), 1);
    assert_eq!(report.placed.len(), 1);

    engine.submit_surface_event(SurfaceEvent::Removed(id));
    engine.tick(FrameInput::idle(16));
    assert!(engine.registry().is_empty());
}

#[test]
fn retracted_surface_turns_hits_into_misses() {
    let mut engine = PlacementEngine::new(PlacementConfig::default(), Box::new(NullSink))
        .expect("default config should validate");
    let surface = wall(Vec3::new(0.0, 1.5, -2.0), Vec3::Z);
    let id = surface.id;
    engine.submit_surface_event(SurfaceEvent::Added(surface));

    let origin = Vec3::new(0.0, 1.5, 0.0);
    let mut aim = FrameInput::idle(16);
    aim.hands[Hand::Left.index()].ray = Some(ray(origin, Vec3::NEG_Z));
    assert!(engine.tick(aim.clone()).surface_hit[Hand::Left.index()]);

    engine.submit_surface_event(SurfaceEvent::Removed(id));
    assert!(!engine.tick(aim).surface_hit[Hand::Left.index()]);
}

#[test]
fn session_clock_accumulates_delta() {
    let mut engine = engine_with_front_wall();
    let before = engine.now_ms();
    engine.tick(FrameInput::idle(16));
    engine.tick(FrameInput::idle(600));
    assert_eq!(engine.now_ms(), before + 616);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = PlacementConfig {
        surface_offset: -1.0,
        ..PlacementConfig::default()
    };
    assert!(PlacementEngine::new(config, Box::new(NullSink)).is_err());
}
