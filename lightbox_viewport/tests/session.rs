// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for [`ViewerSession`]: raw pointer streams in, transforms and
//! double-tap resets out.

use kurbo::{Point, Vec2};
use lightbox_gesture::{PointerId, Tap, TapConfig};
use lightbox_viewport::{ViewerSession, ViewportConfig};

const A: PointerId = PointerId(0);
const B: PointerId = PointerId(1);

fn loaded() -> ViewerSession {
    let mut session = ViewerSession::new(ViewportConfig::default(), TapConfig::default()).unwrap();
    session.image_loaded(1000.0, 1000.0).unwrap();
    session
}

/// Pinches from a 100 px span to a 300 px span around (500, 500) at `t`.
fn pinch_to_3x(session: &mut ViewerSession, t: u64) {
    session.pointer_down(A, Point::new(450.0, 500.0), t);
    session.pointer_down(B, Point::new(550.0, 500.0), t);
    session.pointers_moved(
        &[(A, Point::new(350.0, 500.0)), (B, Point::new(650.0, 500.0))],
        t + 16,
    );
    session.pointer_up(B, Point::new(650.0, 500.0), t + 32);
    session.pointer_up(A, Point::new(350.0, 500.0), t + 32);
}

fn tap(session: &mut ViewerSession, at: u64) -> bool {
    let p = Point::new(500.0, 500.0);
    let reset = session.pointer_down(A, p, at);
    session.pointer_up(A, p, at + 40);
    reset
}

#[test]
fn pinch_zooms_and_blocks_outer_scroll() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);
    let t = session.transform();
    assert!((t.scale - 3.0).abs() < 1e-9);
    assert!(session.blocks_outer_scroll());
    assert!(session.shows_reset_affordance());
}

#[test]
fn drag_pans_within_the_box() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);

    session.pointer_down(A, Point::new(500.0, 500.0), 100);
    let t = session.pointer_move(A, Point::new(560.0, 470.0), 116);
    session.pointer_up(A, Point::new(560.0, 470.0), 132);
    assert!((t.translation.x - 60.0).abs() < 1e-9);
    assert!((t.translation.y + 30.0).abs() < 1e-9);
}

#[test]
fn double_tap_right_after_pinch_is_ignored() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);

    assert!(!tap(&mut session, 60));
    assert!(!tap(&mut session, 160));
    assert!((session.transform().scale - 3.0).abs() < 1e-9);
}

#[test]
fn double_tap_after_settling_resets() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);

    assert!(!tap(&mut session, 1_000));
    assert!(tap(&mut session, 1_150));
    assert!(session.transform().is_identity());
    assert!(!session.blocks_outer_scroll());
    assert!(!session.shows_reset_affordance());
}

#[test]
fn finger_wobble_in_first_tap_still_resets() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);

    let p = Point::new(500.0, 500.0);
    assert!(!session.pointer_down(A, p, 2_000));
    let t = session.pointer_move(A, Point::new(501.0, 500.0), 2_016);
    assert_eq!(t.translation, Vec2::ZERO);
    assert!(session.engine().debounce_enabled());
    assert_eq!(
        session.pointer_up(A, Point::new(501.0, 500.0), 2_040),
        Some(Tap::Single(Point::new(501.0, 500.0)))
    );

    assert!(session.pointer_down(A, p, 2_150));
    assert!(session.transform().is_identity());
}

#[test]
fn drag_past_slop_pans_from_landing_point() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);

    session.pointer_down(A, Point::new(500.0, 500.0), 100);
    let t = session.pointer_move(A, Point::new(505.0, 500.0), 116);
    assert_eq!(t.translation, Vec2::ZERO);
    let t = session.pointer_move(A, Point::new(520.0, 500.0), 132);
    assert!((t.translation.x - 20.0).abs() < 1e-9);
    assert_eq!(session.pointer_up(A, Point::new(520.0, 500.0), 148), None);
}

#[test]
fn double_tap_at_identity_does_nothing() {
    let mut session = loaded();
    session.tick(1_000);
    assert!(!tap(&mut session, 1_000));
    assert!(!tap(&mut session, 1_150));
}

#[test]
fn single_tap_is_reported() {
    let mut session = loaded();
    let p = Point::new(10.0, 10.0);
    session.pointer_down(A, p, 0);
    assert_eq!(session.pointer_up(A, p, 30), Some(Tap::Single(p)));
}

#[test]
fn closed_session_never_resets_on_double_tap() {
    let mut session = loaded();
    pinch_to_3x(&mut session, 0);
    session.close();
    session.tick(5_000);

    assert!(!tap(&mut session, 5_000));
    assert!(!tap(&mut session, 5_100));
    assert!((session.transform().scale - 3.0).abs() < 1e-9);
}

#[test]
fn failed_load_keeps_view_inert() {
    let mut session = ViewerSession::new(ViewportConfig::default(), TapConfig::default()).unwrap();
    session.image_failed();
    pinch_to_3x(&mut session, 0);
    assert!(session.transform().is_identity());
    assert!(!session.blocks_outer_scroll());
    assert!(session.render_affine().is_none());
}
