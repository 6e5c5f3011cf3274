//! Pointer drag tests: pillar and shelf drags, release, corner prompts.

use crate::helpers::{assert_close, at_mm, drag_pillar, drag_shelf, pillar_x, TestLayoutBuilder};
use shelfboard::input::{DragState, PendingPrompt, Point, ReleaseOutcome, Selection};
use shelfboard::spatial_index::HitTarget;
use shelfboard::{PillarId, ShelfId, ShelfType};

fn three_pillars() -> TestLayoutBuilder {
    TestLayoutBuilder::new().with_pillars(&[("a", 0.0), ("b", 700.0), ("c", 1400.0)])
}

/// Pillars every 700mm from 0 to 4900 on the 5000mm wall, named p0..p7.
fn full_wall() -> TestLayoutBuilder {
    TestLayoutBuilder::new().with_evenly_spaced_pillars(8, 700.0)
}

// ============================================================================
// Pillars
// ============================================================================

#[test]
fn test_press_on_pillar_starts_drag() {
    let mut editor = three_pillars().build_editor();
    let press = at_mm(&editor, 700.0, 200.0);

    let hit = editor.pointer_down(press);

    assert_eq!(hit, Some(HitTarget::Pillar(PillarId::from("b"))));
    assert_eq!(editor.selection(), &Selection::Pillar(PillarId::from("b")));
    match editor.drag_state() {
        DragState::DraggingPillar {
            target_id,
            original_x_mm,
            start_px,
        } => {
            assert_eq!(target_id, &PillarId::from("b"));
            assert_eq!(*original_x_mm, 700.0);
            assert_eq!(*start_px, press);
        }
        other => panic!("expected pillar drag, got {other:?}"),
    }
}

#[test]
fn test_pillar_drag_snaps_to_grid() {
    let mut editor = three_pillars().build_editor();
    assert_eq!(drag_pillar(&mut editor, "b", 830.0), Some(800.0));
    assert_eq!(pillar_x(editor.store(), "b"), 800.0);
}

#[test]
fn test_pillar_drag_stops_before_right_neighbor() {
    let mut editor = three_pillars().build_editor();

    assert_eq!(drag_pillar(&mut editor, "b", 1250.0), Some(1000.0));
    assert_eq!(
        editor.pointer_up(),
        ReleaseOutcome::PillarSettled {
            pillar_id: PillarId::from("b"),
            x_mm: 1000.0,
        }
    );
    assert!(editor.drag_state().is_idle());
}

#[test]
fn test_pillar_drag_stops_before_left_neighbor() {
    let mut editor = three_pillars().build_editor();
    assert_eq!(drag_pillar(&mut editor, "b", 200.0), Some(400.0));
}

#[test]
fn test_release_resorts_pillars() {
    let mut editor = TestLayoutBuilder::new()
        .with_pillars(&[("b", 700.0), ("a", 0.0)])
        .build_editor();

    drag_pillar(&mut editor, "b", 800.0);
    editor.pointer_up();

    let order: Vec<&str> = editor.store().pillars.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn test_wall_pillar_is_not_draggable() {
    let mut editor = TestLayoutBuilder::new().with_wall_pillar("w", 3000.0).build_editor();
    let press = at_mm(&editor, 3000.0, 200.0);

    assert_eq!(editor.pointer_down(press), None);
    assert!(editor.drag_state().is_idle());
}

// ============================================================================
// Corner overshoot
// ============================================================================

#[test]
fn test_drag_past_wall_end_skips_spacing() {
    let mut editor = full_wall().build_editor();
    assert_eq!(drag_pillar(&mut editor, "p7", 5200.0), Some(5200.0));
}

#[test]
fn test_overshoot_is_bounded() {
    let mut editor = full_wall().build_editor();
    assert_eq!(drag_pillar(&mut editor, "p7", 6000.0), Some(5300.0));

    let mut editor = full_wall().build_editor();
    assert_eq!(drag_pillar(&mut editor, "p0", -1000.0), Some(-300.0));
}

#[test]
fn test_release_past_wall_end_asks_for_corner() {
    let mut editor = full_wall().build_editor();
    drag_pillar(&mut editor, "p7", 5200.0);

    let outcome = editor.pointer_up();

    assert_eq!(
        outcome,
        ReleaseOutcome::CornerConfirmationRequested {
            pillar_id: PillarId::from("p7"),
        }
    );
    assert_eq!(
        editor.pending_prompt(),
        Some(&PendingPrompt::CornerPillar {
            pillar_id: PillarId::from("p7"),
        })
    );
    // left where it was released until answered
    assert_eq!(pillar_x(editor.store(), "p7"), 5200.0);
}

#[test]
fn test_confirmed_corner_pillar_settles_inside() {
    let mut editor = full_wall().build_editor();
    drag_pillar(&mut editor, "p7", 5200.0);
    editor.pointer_up();

    assert_eq!(editor.confirm_corner_pillar(true), Some(5000.0));

    let pillar = editor.store().pillar(&PillarId::from("p7")).unwrap();
    assert!(pillar.is_corner_pillar);
    assert_eq!(pillar.x_mm, 5000.0);
    assert_eq!(editor.pending_prompt(), None);
}

#[test]
fn test_declined_corner_pillar_settles_inside() {
    let mut editor = full_wall().build_editor();
    drag_pillar(&mut editor, "p0", -200.0);
    editor.pointer_up();

    assert_eq!(editor.confirm_corner_pillar(false), Some(0.0));
    assert!(!editor.store().pillar(&PillarId::from("p0")).unwrap().is_corner_pillar);
}

#[test]
fn test_click_while_corner_prompt_open_declines() {
    let mut editor = full_wall().build_editor();
    drag_pillar(&mut editor, "p7", 5200.0);
    editor.pointer_up();

    assert_eq!(editor.pointer_down(Point::new(1.0, 1.0)), None);

    let pillar = editor.store().pillar(&PillarId::from("p7")).unwrap();
    assert!(!pillar.is_corner_pillar);
    assert_eq!(pillar.x_mm, 5000.0);
    assert_eq!(editor.pending_prompt(), None);
}

#[test]
fn test_existing_corner_pillar_settles_without_prompt() {
    let mut editor = TestLayoutBuilder::new()
        .with_evenly_spaced_pillars(7, 700.0)
        .with_corner_pillar("corner", 4900.0)
        .build_editor();
    drag_pillar(&mut editor, "corner", 5200.0);

    assert_eq!(
        editor.pointer_up(),
        ReleaseOutcome::PillarSettled {
            pillar_id: PillarId::from("corner"),
            x_mm: 5000.0,
        }
    );
    assert_eq!(editor.pending_prompt(), None);
}

#[test]
fn test_confirm_without_prompt_does_nothing() {
    let mut editor = three_pillars().build_editor();
    assert_eq!(editor.confirm_corner_pillar(true), None);
    assert!(editor.store().pillars.iter().all(|p| !p.is_corner_pillar));
}

// ============================================================================
// Shelves
// ============================================================================

fn one_bay() -> TestLayoutBuilder {
    TestLayoutBuilder::new().with_pillars(&[("a", 0.0), ("b", 700.0)])
}

#[test]
fn test_free_shelf_drag_snaps() {
    let mut editor = one_bay()
        .with_shelf("s", ("a", "b"), 2000.0, ShelfType::Normal)
        .build_editor();

    assert_eq!(drag_shelf(&mut editor, "s", 2480.0), Some(2500.0));
    assert_eq!(
        editor.pointer_up(),
        ReleaseOutcome::ShelfSettled {
            shelf_id: ShelfId::from("s"),
            height_mm: 2500.0,
        }
    );
}

#[test]
fn test_shelf_drag_held_inside_wall_span() {
    let mut editor = one_bay()
        .with_shelf("s", ("a", "b"), 2000.0, ShelfType::Normal)
        .build_editor();
    let top = drag_shelf(&mut editor, "s", 4000.0).unwrap();
    assert_close(top, 3400.0);
    editor.pointer_up();

    let bottom = drag_shelf(&mut editor, "s", -500.0).unwrap();
    assert_close(bottom, 0.0);
}

#[test]
fn test_drawer_needs_500mm_above() {
    let mut editor = one_bay()
        .with_shelf("board", ("a", "b"), 2000.0, ShelfType::Normal)
        .with_shelf("drawer", ("a", "b"), 1000.0, ShelfType::Drawer)
        .build_editor();

    assert_eq!(drag_shelf(&mut editor, "drawer", 1800.0), Some(1500.0));
}

#[test]
fn test_shelf_pushed_above_neighbor_when_too_close() {
    let mut editor = one_bay()
        .with_shelf("board", ("a", "b"), 1000.0, ShelfType::Normal)
        .with_shelf("drawer", ("a", "b"), 2000.0, ShelfType::Drawer)
        .build_editor();

    assert_eq!(drag_shelf(&mut editor, "drawer", 1200.0), Some(1300.0));
}

#[test]
fn test_shelf_drag_into_third_shelf_clearance_holds_position() {
    let mut editor = one_bay()
        .with_shelf("top", ("a", "b"), 2000.0, ShelfType::Normal)
        .with_shelf("middle", ("a", "b"), 1500.0, ShelfType::Normal)
        .with_shelf("bottom", ("a", "b"), 500.0, ShelfType::Normal)
        .build_editor();

    assert_eq!(drag_shelf(&mut editor, "bottom", 1800.0), Some(500.0));
    let bottom = editor.store().shelf(&ShelfId::from("bottom")).unwrap();
    assert_eq!(bottom.height_mm, 500.0);
}

#[test]
fn test_shelves_in_other_bays_are_ignored() {
    let mut editor = three_pillars()
        .with_shelf("s1", ("a", "b"), 2000.0, ShelfType::Normal)
        .with_shelf("s2", ("b", "c"), 2000.0, ShelfType::Hanger)
        .build_editor();

    assert_eq!(drag_shelf(&mut editor, "s1", 2100.0), Some(2100.0));
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_pointer_leave_keeps_last_position() {
    let mut editor = three_pillars().build_editor();
    drag_pillar(&mut editor, "b", 800.0);

    editor.pointer_leave();

    assert!(editor.drag_state().is_idle());
    assert_eq!(pillar_x(editor.store(), "b"), 800.0);
    let elsewhere = at_mm(&editor, 1000.0, 200.0);
    assert_eq!(editor.pointer_move(elsewhere), None);
    assert_eq!(editor.pointer_up(), ReleaseOutcome::Nothing);
    assert_eq!(pillar_x(editor.store(), "b"), 800.0);
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut editor = three_pillars().build_editor();
    let point = at_mm(&editor, 700.0, 200.0);
    assert_eq!(editor.pointer_move(point), None);
    assert_eq!(pillar_x(editor.store(), "b"), 700.0);
}
