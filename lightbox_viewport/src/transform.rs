// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Scale, rotation and translation applied to a displayed image.
///
/// `scale` is kept within the engine's configured range (never below `1.0`
/// with the default configuration). `rotation` is in degrees and accumulates
/// without wrapping. `translation` is in view units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Accumulated rotation in degrees.
    pub rotation: f64,
    /// Pan offset in view units.
    pub translation: Vec2,
}

impl Transform {
    /// The untransformed state: `{ scale: 1, rotation: 0, translation: (0, 0) }`.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        translation: Vec2::ZERO,
    };

    /// Returns `true` if this is exactly [`Transform::IDENTITY`].
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if the image is rotated or zoomed.
    ///
    /// Translation alone does not count: at scale `1.0` it is always
    /// inadmissible, so it only exists alongside a zoom.
    #[must_use]
    pub fn is_transformed(&self) -> bool {
        self.rotation != 0.0 || self.scale != 1.0
    }

    /// Returns `true` if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.rotation.is_finite() && self.translation.is_finite()
    }

    /// Builds the affine map a renderer applies to the image.
    ///
    /// Scale and rotation pivot around `center` (normally the image center in
    /// view space), then the result is translated.
    #[must_use]
    pub fn to_affine(&self, center: Point) -> Affine {
        let pivot = center.to_vec2();
        Affine::translate(self.translation + pivot)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-pivot)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn identity_predicates() {
        let t = Transform::IDENTITY;
        assert!(t.is_identity());
        assert!(!t.is_transformed());
        assert_eq!(Transform::default(), t);
        let p = Point::new(3.0, -7.0);
        assert!(close(t.to_affine(Point::new(50.0, 50.0)) * p, p));
    }

    #[test]
    fn translation_alone_is_not_transformed() {
        let t = Transform {
            translation: Vec2::new(3.0, 0.0),
            ..Transform::IDENTITY
        };
        assert!(!t.is_identity());
        assert!(!t.is_transformed());
    }

    #[test]
    fn affine_pivots_about_center() {
        let center = Point::new(100.0, 100.0);
        let t = Transform {
            scale: 2.0,
            rotation: 90.0,
            translation: Vec2::new(10.0, 0.0),
        };
        let a = t.to_affine(center);
        // The pivot only moves by the translation.
        assert!(close(a * center, Point::new(110.0, 100.0)));
        // A point 10 units right of center ends up 20 units below it.
        assert!(close(a * Point::new(110.0, 100.0), Point::new(110.0, 120.0)));
    }

    #[test]
    fn non_finite_components_are_detected() {
        let t = Transform {
            scale: f64::NAN,
            ..Transform::IDENTITY
        };
        assert!(!t.is_finite());
        assert!(Transform::IDENTITY.is_finite());
    }
}
