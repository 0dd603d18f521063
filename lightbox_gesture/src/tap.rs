// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition with spatial and temporal tolerance.
//!
//! A tap is a press/release pair that never strays farther than
//! [`TapConfig::touch_slop`] from the press and lasts at most
//! [`TapConfig::max_tap_duration`]; it is reported from
//! [`TapRecognizer::on_up`] as [`Tap::Single`]. Hosts feed intermediate
//! positions to [`TapRecognizer::on_move`] so a drag that wanders off and
//! comes back is not mistaken for a tap.
//!
//! A press that lands within [`TapConfig::double_tap_timeout`] of a tap's
//! release, and within [`TapConfig::double_tap_slop`] of it, is reported from
//! [`TapRecognizer::on_down`] as [`Tap::Double`]. Reporting on the press
//! matches platform detectors and lets a handler run before the second
//! finger has a chance to wobble. The release of that press reports nothing,
//! and a third tap starts over.
//!
//! ```
//! use kurbo::Point;
//! use lightbox_gesture::{Tap, TapRecognizer};
//!
//! let mut taps = TapRecognizer::default();
//! let p = Point::new(40.0, 40.0);
//!
//! assert_eq!(taps.on_down(p, 1000), None);
//! assert_eq!(taps.on_up(p, 1050), Some(Tap::Single(p)));
//! assert_eq!(taps.on_down(p, 1150), Some(Tap::Double(p)));
//! assert_eq!(taps.on_up(p, 1200), None);
//! ```

use kurbo::Point;

use crate::DEFAULT_TOUCH_SLOP;

/// Tolerances for [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Longest press that still counts as a tap.
    pub max_tap_duration: u64,
    /// Longest gap between a tap's release and the press that doubles it.
    pub double_tap_timeout: u64,
    /// Largest distance, in view units, a finger may move from its press and
    /// still tap. Viewers use the same value as the touch slop of their
    /// [`TouchTracker`](crate::TouchTracker), so a press either pans or taps.
    pub touch_slop: f64,
    /// Largest distance between the two taps of a double tap.
    pub double_tap_slop: f64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_tap_duration: 300,
            double_tap_timeout: 300,
            touch_slop: DEFAULT_TOUCH_SLOP,
            double_tap_slop: 24.0,
        }
    }
}

/// A recognized tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tap {
    /// A completed tap, carrying the release position.
    Single(Point),
    /// The press that turned the previous tap into a double tap, carrying
    /// the press position.
    Double(Point),
}

#[derive(Clone, Copy, Debug)]
struct Touch {
    pos: Point,
    time: u64,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    at: Touch,
    completes_double: bool,
    strayed: bool,
}

/// Recognizes single and double taps from press/release pairs.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    down: Option<Press>,
    last_tap: Option<Touch>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            down: None,
            last_tap: None,
        }
    }

    /// Returns the tolerances in use.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Records a press. Returns [`Tap::Double`] if it completes a double tap.
    pub fn on_down(&mut self, pos: Point, time: u64) -> Option<Tap> {
        let at = Touch { pos, time };
        let completes_double = self.last_tap.take().is_some_and(|last| {
            time.saturating_sub(last.time) <= self.config.double_tap_timeout
                && (pos - last.pos).length() <= self.config.double_tap_slop
        });
        self.down = Some(Press {
            at,
            completes_double,
            strayed: false,
        });
        completes_double.then_some(Tap::Double(pos))
    }

    /// Records an intermediate position of the pressed finger.
    ///
    /// Once the finger has strayed beyond the touch slop, the press can no
    /// longer end in a tap, even if it returns.
    pub fn on_move(&mut self, pos: Point) {
        let slop = self.config.touch_slop;
        if let Some(press) = self.down.as_mut().filter(|p| (pos - p.at.pos).length() > slop) {
            press.strayed = true;
        }
    }

    /// Records a release. Returns [`Tap::Single`] if it completes a tap that
    /// was not already reported as the second half of a double tap.
    pub fn on_up(&mut self, pos: Point, time: u64) -> Option<Tap> {
        let press = self.down.take()?;
        if press.completes_double {
            return None;
        }
        let held = time.saturating_sub(press.at.time);
        if press.strayed
            || held > self.config.max_tap_duration
            || (pos - press.at.pos).length() > self.config.touch_slop
        {
            return None;
        }
        self.last_tap = Some(Touch { pos, time });
        Some(Tap::Single(pos))
    }

    /// Forgets any press in progress and any pending first tap.
    ///
    /// Hosts call this when a second finger lands, since a pinch is never
    /// part of a tap.
    pub fn cancel(&mut self) {
        self.down = None;
        self.last_tap = None;
    }
}
