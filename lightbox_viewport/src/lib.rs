// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Viewport: the transform engine behind full-screen image viewing.
//!
//! This crate turns a stream of multi-touch [`GestureSample`]s into a
//! [`Transform`] (scale, rotation, translation) for a displayed image. It
//! focuses on:
//! - Pinch zoom with a configurable scale range and a per-sample guard
//!   against noisy jumps.
//! - Panning limited by the zoom level, without snapping: each proposed
//!   translation is accepted, accepted because it heads back toward the valid
//!   region, or rejected (see [`geometry`]).
//! - Free rotation.
//! - A double-tap reset that stays disabled until the view has been still
//!   for a short debounce window.
//!
//! It does **not** decode, cache or draw images. Callers are expected to:
//! - Report the intrinsic image size once it has loaded (or that loading
//!   failed).
//! - Feed pointer events or ready-made samples into the engine.
//! - Render with [`Transform::to_affine`] every frame, and consult
//!   [`ViewportEngine::is_transform_active`] to decide whether outer
//!   scrolling (a pager, a list) is allowed.
//!
//! ## Layers
//!
//! - [`reduce::reduce`]: the pure per-sample rule, `(Transform, sample) ->
//!   Transform`.
//! - [`ViewportEngine`]: owns the transform for one session, tracks the
//!   "transform active" flag, and drives the double-tap debounce through an
//!   injected [`lightbox_timing::Scheduler`].
//! - [`ViewerSession`]: feeds raw pointer events through a touch tracker and
//!   a tap recognizer into an engine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use lightbox_gesture::{PointerId, TapConfig};
//! use lightbox_viewport::{ViewerSession, ViewportConfig};
//!
//! let mut session = ViewerSession::new(ViewportConfig::default(), TapConfig::default()).unwrap();
//! session.image_loaded(1000.0, 1000.0).unwrap();
//!
//! // Pinch out from a 100 px span to a 200 px span.
//! session.pointer_down(PointerId(0), Point::new(450.0, 500.0), 0);
//! session.pointer_down(PointerId(1), Point::new(550.0, 500.0), 0);
//! let t = session.pointers_moved(
//!     &[
//!         (PointerId(0), Point::new(400.0, 500.0)),
//!         (PointerId(1), Point::new(600.0, 500.0)),
//!     ],
//!     16,
//! );
//! assert_eq!(t.scale, 2.0);
//! assert_eq!(t.translation, Vec2::ZERO);
//! assert!(session.blocks_outer_scroll());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod extent;
pub mod geometry;
pub mod reduce;
mod session;
mod transform;

pub use config::{
    ConfigError, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_RESET_MIN_SCALE,
    DEFAULT_SAMPLE_GUARD_MAX, DEFAULT_SAMPLE_GUARD_MIN, ViewportConfig,
};
pub use engine::{ExtentState, ViewportDebugInfo, ViewportEngine};
pub use extent::{ExtentError, ImageExtent};
pub use lightbox_gesture::GestureSample;
pub use session::ViewerSession;
pub use transform::Transform;
