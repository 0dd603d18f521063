// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lightbox_gesture::{GestureDebouncer, GestureSample};
use lightbox_timing::{Scheduler, TimerQueue, TimerToken};

use crate::reduce::reduce;
use crate::{ConfigError, ImageExtent, Transform, ViewportConfig};

/// Load state of the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExtentState {
    /// The image is still loading; rotation works, pan and zoom do not.
    Pending,
    /// The image loaded with this extent.
    Known(ImageExtent),
    /// The image failed to load; the transform stays inert for the session.
    Failed,
}

/// Owns the transform of one viewing session and applies gesture samples
/// to it.
///
/// The engine runs [`reduce`](crate::reduce::reduce) for each sample, tracks
/// whether the view is transformed (hosts use that to block outer scrolling
/// and to show a reset affordance), and drives a [`GestureDebouncer`] so a
/// double tap right after a drag or pinch does not reset the view.
///
/// Timers go through the injected [`Scheduler`]. Hosts with their own timer
/// API implement [`Scheduler`] and hand delivered tokens to
/// [`ViewportEngine::on_timer`]; hosts that drive time themselves use the
/// default [`TimerQueue`] and call [`ViewportEngine::advance_to`].
///
/// ```
/// use lightbox_gesture::GestureSample;
/// use lightbox_viewport::{ImageExtent, ViewportConfig, ViewportEngine};
///
/// let mut engine = ViewportEngine::with_config(ViewportConfig::default()).unwrap();
/// engine.set_image_extent(ImageExtent::new(1080.0, 1920.0).unwrap());
///
/// engine.process(&GestureSample::zoom(2.0));
/// assert!(engine.is_transform_active());
///
/// // Too soon after the pinch: the double tap is ignored.
/// assert!(!engine.try_double_tap_reset());
///
/// engine.advance_to(300);
/// assert!(engine.try_double_tap_reset());
/// assert!(engine.transform().is_identity());
/// ```
#[derive(Clone, Debug)]
pub struct ViewportEngine<S = TimerQueue> {
    config: ViewportConfig,
    scheduler: S,
    extent: ExtentState,
    transform: Transform,
    transform_active: bool,
    debounce: GestureDebouncer,
}

impl ViewportEngine<TimerQueue> {
    /// Creates an engine driven by a [`TimerQueue`] starting at time `0`.
    pub fn with_config(config: ViewportConfig) -> Result<Self, ConfigError> {
        Self::new(config, TimerQueue::new())
    }

    /// Moves time forward and delivers every expired timer.
    pub fn advance_to(&mut self, now: u64) {
        for token in self.scheduler.advance_to(now) {
            self.on_timer(token);
        }
    }
}

impl<S: Scheduler> ViewportEngine<S> {
    /// Creates an engine for a new viewing session.
    ///
    /// The image extent starts out pending.
    pub fn new(config: ViewportConfig, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            scheduler,
            extent: ExtentState::Pending,
            transform: Transform::IDENTITY,
            transform_active: false,
            debounce: GestureDebouncer::new(config.debounce_ms),
        })
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns the scheduler mutably.
    ///
    /// Cancelling the engine's own tokens through this is harmless but will
    /// leave the debouncer waiting until the next transform change.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns the image load state.
    #[must_use]
    pub fn extent_state(&self) -> ExtentState {
        self.extent
    }

    /// Returns the image extent once it is known.
    #[must_use]
    pub fn image_extent(&self) -> Option<ImageExtent> {
        match self.extent {
            ExtentState::Known(extent) => Some(extent),
            ExtentState::Pending | ExtentState::Failed => None,
        }
    }

    /// Records the extent of a newly loaded image and resets the transform.
    pub fn set_image_extent(&mut self, extent: ImageExtent) {
        log::debug!("image extent {}x{}", extent.width(), extent.height());
        self.extent = ExtentState::Known(extent);
        self.reset();
    }

    /// Records that the image failed to load.
    ///
    /// The transform resets and ignores every later sample.
    pub fn image_failed(&mut self) {
        log::warn!("image failed to load; viewport transform disabled");
        self.extent = ExtentState::Failed;
        self.reset();
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns `true` if the image is rotated or zoomed.
    #[must_use]
    pub fn is_transformed(&self) -> bool {
        self.transform.is_transformed()
    }

    /// Returns `true` while the session holds a non-identity transform as of
    /// the last processed sample. Hosts block outer scrolling while it is set.
    #[must_use]
    pub fn is_transform_active(&self) -> bool {
        self.transform_active
    }

    /// Returns `true` once the last transform change has been quiet for the
    /// debounce window.
    #[must_use]
    pub fn debounce_enabled(&self) -> bool {
        self.debounce.enabled()
    }

    /// Applies one gesture sample and returns the resulting transform.
    pub fn process(&mut self, sample: &GestureSample) -> Transform {
        if self.extent == ExtentState::Failed {
            return self.transform;
        }
        if !sample.is_well_formed() {
            log::warn!("dropping malformed gesture sample {sample:?}");
            return self.transform;
        }

        let step = reduce(self.transform, sample, self.image_extent(), &self.config);
        log::trace!(
            "sample {sample:?}: pan {:?}, scale {:?}",
            step.pan,
            step.scale
        );
        let changed = step.transform != self.transform;
        self.transform = step.transform;

        if self.transform.is_transformed() {
            self.transform_active = true;
            if changed {
                self.debounce.refresh(&mut self.scheduler);
            }
        } else {
            self.transform_active = false;
        }
        self.transform
    }

    /// Handles a timer token delivered by the host.
    ///
    /// Returns `true` if it ended the debounce window. Stale tokens and
    /// tokens delivered after [`ViewportEngine::finish`] are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        self.debounce.on_timer(token)
    }

    /// Returns `true` if a double tap would reset the view right now.
    ///
    /// That requires the debounce window to have elapsed since the last
    /// transform change, and the view to be rotated or zoomed to at least
    /// [`ViewportConfig::reset_min_scale`].
    #[must_use]
    pub fn can_double_tap_reset(&self) -> bool {
        self.debounce.enabled()
            && (self.transform.rotation != 0.0
                || self.transform.scale >= self.config.reset_min_scale)
    }

    /// Resets the view in response to a double tap, if allowed.
    ///
    /// Returns `true` if the view was reset.
    pub fn try_double_tap_reset(&mut self) -> bool {
        if !self.can_double_tap_reset() {
            log::trace!("double tap ignored");
            return false;
        }
        self.reset();
        true
    }

    /// Returns the view to the identity transform.
    ///
    /// Idempotent. The debounce state is left alone.
    pub fn reset(&mut self) {
        if !self.transform.is_identity() {
            log::debug!("viewport reset from {:?}", self.transform);
        }
        self.transform = Transform::IDENTITY;
        self.transform_active = false;
    }

    /// Tears the session down: cancels the debounce timer for good.
    pub fn finish(&mut self) {
        self.debounce.finish(&mut self.scheduler);
    }

    /// Returns `true` once [`ViewportEngine::finish`] has been called.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.debounce.is_finished()
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            transform: self.transform,
            extent: self.extent,
            transform_active: self.transform_active,
            debounce_enabled: self.debounce.enabled(),
            debounce_pending: self.debounce.is_pending(),
            finished: self.debounce.is_finished(),
        }
    }
}

/// Debug snapshot of a [`ViewportEngine`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Current transform.
    pub transform: Transform,
    /// Image load state.
    pub extent: ExtentState,
    /// Whether outer scrolling should be blocked.
    pub transform_active: bool,
    /// Whether a double tap may reset the view (before the scale check).
    pub debounce_enabled: bool,
    /// Whether a debounce countdown is running.
    pub debounce_pending: bool,
    /// Whether the session has been torn down.
    pub finished: bool,
}
