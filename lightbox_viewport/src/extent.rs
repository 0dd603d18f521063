// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};

/// Intrinsic size of the displayed image.
///
/// Only constructible from finite, strictly positive dimensions, so boundary
/// math that divides or scales by it never sees a degenerate extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageExtent(Size);

impl ImageExtent {
    /// Creates an extent from a width and height.
    pub fn new(width: f64, height: f64) -> Result<Self, ExtentError> {
        Self::from_size(Size::new(width, height))
    }

    /// Creates an extent from a [`Size`].
    pub fn from_size(size: Size) -> Result<Self, ExtentError> {
        if !size.is_finite() {
            return Err(ExtentError::NonFinite);
        }
        if size.width <= 0.0 || size.height <= 0.0 {
            return Err(ExtentError::Empty);
        }
        Ok(Self(size))
    }

    /// Returns the extent as a [`Size`].
    #[must_use]
    pub fn size(self) -> Size {
        self.0
    }

    /// Image width.
    #[must_use]
    pub fn width(self) -> f64 {
        self.0.width
    }

    /// Image height.
    #[must_use]
    pub fn height(self) -> f64 {
        self.0.height
    }

    /// Center of the image in its own coordinate space.
    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.0.width / 2.0, self.0.height / 2.0)
    }
}

/// Error returned for an unusable image size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtentError {
    /// A dimension was NaN or infinite.
    NonFinite,
    /// A dimension was zero or negative.
    Empty,
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("image extent has a non-finite dimension"),
            Self::Empty => f.write_str("image extent has a zero or negative dimension"),
        }
    }
}

impl core::error::Error for ExtentError {}
