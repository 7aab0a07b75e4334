//! Axis-aligned bounding boxes used as collision cages.
//!
//! A box is stored as its maximum and minimum corners. Every mutating
//! operation finishes with a boundary repair that swaps any inverted axis, so
//! readers can rely on `max >= min` without asserting it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A cuboid aligned with the world axes.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    /// Corner with the largest coordinate on every axis.
    pub max: Vec3,
    /// Corner with the smallest coordinate on every axis.
    pub min: Vec3,
}

impl AxisAlignedBox {
    /// Creates a box from its two corners, repairing them if they arrive
    /// inverted on any axis.
    ///
    /// # Examples
    /// ```
    /// use coinrun::AxisAlignedBox;
    /// use glam::Vec3;
    /// let cage = AxisAlignedBox::new(Vec3::new(-1.0, 1.0, 1.0), Vec3::new(1.0, -1.0, -1.0));
    /// assert_eq!(cage.max, Vec3::ONE);
    /// assert_eq!(cage.min, Vec3::NEG_ONE);
    /// ```
    #[must_use]
    pub fn new(max: Vec3, min: Vec3) -> Self {
        let mut cage = Self { max, min };
        cage.repair();
        cage
    }

    /// Creates a box of the given half-extents centred on `center`.
    #[must_use]
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center + half_extents, center - half_extents)
    }

    /// Swaps `max` and `min` on every axis where they are inverted.
    ///
    /// Applying the repair more than once has no further effect.
    pub fn repair(&mut self) {
        let (max, min) = (self.max.max(self.min), self.max.min(self.min));
        self.max = max;
        self.min = min;
    }

    /// Closed-interval overlap test on all three axes.
    ///
    /// Boxes that merely touch on a face count as intersecting. The test is
    /// symmetric in its arguments.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Returns `true` when `point` lies inside the box, faces included.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Strict containment: `outer` must extend past this box on both sides
    /// of every axis.
    ///
    /// A box flush with a face of `outer` is reported as outside.
    #[must_use]
    pub fn is_fully_inside(&self, outer: &Self) -> bool {
        outer.max.cmpgt(self.max).all() && outer.min.cmplt(self.min).all()
    }

    /// Translates both corners by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.max += delta;
        self.min += delta;
    }

    /// Recentres the box on `point`, keeping its extents.
    pub fn move_to(&mut self, point: Vec3) {
        self.repair();
        let half = self.extent() / 2.0;
        self.max = point + half;
        self.min = point - half;
    }

    /// Multiplies the extent of each axis by the matching component of
    /// `factor`, keeping the centre fixed.
    ///
    /// A negative factor inverts the axis; the trailing repair swaps it back.
    ///
    /// # Examples
    /// ```
    /// use coinrun::AxisAlignedBox;
    /// use glam::Vec3;
    /// let mut cage = AxisAlignedBox::new(Vec3::ONE, Vec3::NEG_ONE);
    /// cage.scale(Vec3::new(2.0, 1.0, 0.5));
    /// assert_eq!(cage.max, Vec3::new(2.0, 1.0, 0.5));
    /// assert_eq!(cage.min, Vec3::new(-2.0, -1.0, -0.5));
    /// ```
    pub fn scale(&mut self, factor: Vec3) {
        let extent = self.extent();
        let growth = extent * factor - extent;
        self.max += growth / 2.0;
        self.min -= growth / 2.0;
        self.repair();
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Full size of the box along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}
