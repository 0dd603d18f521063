// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Gesture: input-side state for gesture-driven image viewers.
//!
//! This crate sits between raw pointer input and a transform engine. Each
//! module handles one concern:
//!
//! - [`sample`]: [`GestureSample`], the per-frame unit of multi-touch input
//!   (zoom factor, pan delta, rotation delta, finger count).
//! - [`touch`]: [`TouchTracker`], which turns pointer down/move/up events into
//!   gesture samples.
//! - [`tap`]: [`TapRecognizer`], single and double tap recognition with
//!   spatial and temporal tolerance.
//! - [`debounce`]: [`GestureDebouncer`], which keeps a double-tap action
//!   disabled until a gesture burst has been quiet for a short window.
//!
//! None of these assume a particular UI toolkit. Positions are
//! [`kurbo::Point`]s in view space, times are host `u64` timestamps
//! (milliseconds by convention), and timers go through
//! [`lightbox_timing::Scheduler`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use lightbox_gesture::{PointerId, TouchTracker};
//!
//! let mut touches = TouchTracker::new();
//! touches.pointer_down(PointerId(0), Point::new(100.0, 100.0));
//! touches.pointer_down(PointerId(1), Point::new(200.0, 100.0));
//!
//! // Spreading the second finger to twice the span zooms in by 2x.
//! let sample = touches.pointer_move(PointerId(1), Point::new(300.0, 100.0)).unwrap();
//! assert_eq!(sample.finger_count, 2);
//! assert!((sample.zoom_factor - 2.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod debounce;
pub mod sample;
pub mod tap;
pub mod touch;

pub use debounce::{DEFAULT_DEBOUNCE_MS, GestureDebouncer};
pub use sample::GestureSample;
pub use tap::{Tap, TapConfig, TapRecognizer};
pub use touch::{DEFAULT_TOUCH_SLOP, MIN_PINCH_SPAN, PointerId, TouchTracker};
