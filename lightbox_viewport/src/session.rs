// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};
use lightbox_gesture::{PointerId, Tap, TapConfig, TapRecognizer, TouchTracker};
use lightbox_timing::TimerQueue;

use crate::{ConfigError, ExtentError, ImageExtent, Transform, ViewportConfig, ViewportEngine};

/// One full-screen viewing session, fed with raw pointer events.
///
/// `ViewerSession` is the glue a host view needs around a
/// [`ViewportEngine`]: it turns pointer down/move/up events into gesture
/// samples with a [`TouchTracker`], recognizes taps with a
/// [`TapRecognizer`], routes double taps to the engine's debounced reset, and
/// keeps the engine's [`TimerQueue`] in step with the event timestamps.
///
/// The tracker and the recognizer share [`TapConfig::touch_slop`]: a lone
/// finger that wobbles less than that neither pans the image nor disturbs
/// the double-tap debounce, and one that moves farther pans and never taps.
///
/// Every event method takes the host time of the event. Timers that expired
/// before that time are delivered first, so samples and timer callbacks are
/// handled in time order.
#[derive(Clone, Debug)]
pub struct ViewerSession {
    engine: ViewportEngine<TimerQueue>,
    touches: TouchTracker,
    taps: TapRecognizer,
}

impl ViewerSession {
    /// Creates a session for an image that is still loading.
    pub fn new(config: ViewportConfig, taps: TapConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: ViewportEngine::with_config(config)?,
            touches: TouchTracker::with_slop(taps.touch_slop),
            taps: TapRecognizer::new(taps),
        })
    }

    /// Returns the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &ViewportEngine<TimerQueue> {
        &self.engine
    }

    /// Returns the underlying engine mutably.
    pub fn engine_mut(&mut self) -> &mut ViewportEngine<TimerQueue> {
        &mut self.engine
    }

    /// Records the intrinsic size of the loaded image.
    pub fn image_loaded(&mut self, width: f64, height: f64) -> Result<(), ExtentError> {
        let extent = ImageExtent::new(width, height)?;
        self.engine.set_image_extent(extent);
        Ok(())
    }

    /// Records that the image could not be loaded.
    pub fn image_failed(&mut self) {
        self.engine.image_failed();
    }

    /// Delivers timers that expired up to `now`.
    pub fn tick(&mut self, now: u64) {
        self.engine.advance_to(now);
    }

    /// Handles a finger landing.
    ///
    /// Returns `true` if the press completed a double tap that reset the
    /// view.
    pub fn pointer_down(&mut self, id: PointerId, pos: Point, now: u64) -> bool {
        self.tick(now);
        self.touches.pointer_down(id, pos);
        if self.touches.finger_count() > 1 {
            self.taps.cancel();
            return false;
        }
        match self.taps.on_down(pos, now) {
            Some(Tap::Double(_)) => self.engine.try_double_tap_reset(),
            _ => false,
        }
    }

    /// Handles one finger moving and returns the resulting transform.
    pub fn pointer_move(&mut self, id: PointerId, pos: Point, now: u64) -> Transform {
        self.pointers_moved(&[(id, pos)], now)
    }

    /// Handles a batch of finger moves from one input frame.
    pub fn pointers_moved(&mut self, moves: &[(PointerId, Point)], now: u64) -> Transform {
        self.tick(now);
        let sample = self.touches.pointers_moved(moves);
        if let Some(pos) = self.touches.lone_position() {
            self.taps.on_move(pos);
        }
        match sample {
            Some(sample) => self.engine.process(&sample),
            None => self.engine.transform(),
        }
    }

    /// Handles a finger lifting.
    ///
    /// Returns [`Tap::Single`] when the last finger lifts at the end of a
    /// tap, for hosts that toggle their chrome on a tap.
    pub fn pointer_up(&mut self, id: PointerId, pos: Point, now: u64) -> Option<Tap> {
        self.tick(now);
        self.touches.pointer_up(id);
        if self.touches.is_active() {
            return None;
        }
        self.taps.on_up(pos, now)
    }

    /// Handles the platform aborting the gesture.
    pub fn pointer_cancel(&mut self) {
        self.touches.cancel();
        self.taps.cancel();
    }

    /// Resets the view from an explicit user action.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.engine.transform()
    }

    /// Returns the affine a renderer applies to the image, once it has loaded.
    ///
    /// Scale and rotation pivot around the image center.
    #[must_use]
    pub fn render_affine(&self) -> Option<Affine> {
        let extent = self.engine.image_extent()?;
        Some(self.engine.transform().to_affine(extent.center()))
    }

    /// Returns `true` while the surrounding pager or list must not scroll.
    #[must_use]
    pub fn blocks_outer_scroll(&self) -> bool {
        self.engine.is_transform_active()
    }

    /// Returns `true` while a "reset view" control should be shown.
    #[must_use]
    pub fn shows_reset_affordance(&self) -> bool {
        self.engine.is_transformed()
    }

    /// Tears the session down. No timer fires afterwards.
    pub fn close(&mut self) {
        self.pointer_cancel();
        self.engine.finish();
    }
}
