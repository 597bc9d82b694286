//! Immutable three-dimensional vector used by geometric code.
//!
//! `Vector3` is a plain `Copy` value: every operation returns a fresh vector
//! and no method mutates its receiver. Arithmetic is exposed through the
//! `std::ops` traits; this module holds the geometric queries.

use std::cmp::Ordering;

use crate::config::VectorConfig;
use crate::error::{VectorError, VectorResult};

mod ops;

/// A point or free vector in ℝ³.
///
/// Equality is approximate: two vectors compare equal when their squared
/// distance is below `config::constants::EQUALITY_TOLERANCE`. That relation
/// is not transitive near the threshold, so `Vector3` implements neither `Eq`
/// nor `Hash`.
///
/// # Examples
/// ```
/// use vector3::Vector3;
/// let v = Vector3::new(1.0, 2.0, 3.0) + Vector3::new(1.0, 1.0, 1.0);
/// assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Vector3 {
    /// Creates a vector from its three coordinates.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let v = Vector3::new(1.0, -2.0, 0.5);
    /// assert_eq!(v.y, -2.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the zero vector.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::zero().length(), 0.0);
    /// ```
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a unit length vector along the X axis.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::unit_x().x, 1.0);
    /// ```
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Creates a unit length vector along the Y axis.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let v = Vector3::unit_y();
    /// assert_eq!((v.x, v.y, v.z), (0.0, 1.0, 0.0));
    /// ```
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Creates a unit length vector along the Z axis.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::unit_x().cross(Vector3::unit_y()), Vector3::unit_z());
    /// ```
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    // =========================================================================
    // PRODUCTS
    // =========================================================================

    /// Scalar (inner) product.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(a.dot(Vector3::new(4.0, -5.0, 6.0)), 12.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let z = Vector3::unit_x().cross(Vector3::unit_y());
    /// assert_eq!(z, Vector3::unit_z());
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Element-wise (Hadamard) product.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let p = Vector3::new(1.0, 2.0, 3.0).point_mul(Vector3::new(2.0, 0.5, -1.0));
    /// assert_eq!(p, Vector3::new(2.0, 1.0, -3.0));
    /// ```
    pub fn point_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    // =========================================================================
    // METRICS
    // =========================================================================

    /// Squared Euclidean length, `self · self`.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::new(1.0, 2.0, 2.0).squared_length(), 9.0);
    /// ```
    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::new(1.0, 2.0, 2.0).length(), 3.0);
    /// ```
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Prefer this over [`Vector3::distance`] when only ranking points.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::new(1.0, 1.0, 1.0).squared_distance(Vector3::new(2.0, 3.0, 1.0)), 5.0);
    /// ```
    pub fn squared_distance(self, other: Self) -> f64 {
        let difference = self - other;
        difference.dot(difference)
    }

    /// Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let d = Vector3::new(3.0, 4.0, 0.0).distance(Vector3::zero());
    /// assert_eq!(d, 5.0);
    /// ```
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    // =========================================================================
    // DERIVED DIRECTIONS
    // =========================================================================

    /// Returns the vector scaled to unit length.
    ///
    /// The vector is first divided by its largest absolute coordinate, so
    /// lengths whose square would overflow or underflow still normalize.
    /// Fails with [`VectorError::DegenerateVector`] for the zero vector, for
    /// non-finite coordinates, and for subnormal vectors whose largest
    /// coordinate has no representable reciprocal.
    ///
    /// # Examples
    /// ```
    /// use vector3::{Vector3, VectorError};
    /// let n = Vector3::new(0.0, 3.0, 4.0).normalize().unwrap();
    /// assert_eq!(n, Vector3::new(0.0, 0.6, 0.8));
    ///
    /// let huge = Vector3::new(1e200, 0.0, 0.0).normalize().unwrap();
    /// assert_eq!(huge, Vector3::unit_x());
    ///
    /// let err = Vector3::zero().normalize().unwrap_err();
    /// assert!(matches!(err, VectorError::DegenerateVector { .. }));
    /// ```
    pub fn normalize(self) -> VectorResult<Self> {
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let scaled = self * (1.0 / largest);
        // For finite input `scaled` has a coordinate of magnitude 1, so its length lies in [1, √3].
        let length = scaled.length();
        if largest == 0.0 || !length.is_finite() {
            log::debug!("refusing to normalize degenerate vector {}", self);
            return Err(VectorError::DegenerateVector {
                x: self.x,
                y: self.y,
                z: self.z,
            });
        }
        Ok(scaled * (1.0 / length))
    }

    /// Returns some vector perpendicular to `self`.
    ///
    /// The result is neither normalized nor unique. Vectors on the Z axis,
    /// the zero vector included, map to `(1, 1, 0)`; everything else maps to
    /// `(-y, x, 0)`.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// assert_eq!(Vector3::new(2.0, 0.0, 0.0).perpendicular(), Vector3::new(0.0, 2.0, 0.0));
    /// assert_eq!(Vector3::new(0.0, 0.0, 5.0).perpendicular(), Vector3::new(1.0, 1.0, 0.0));
    /// ```
    pub fn perpendicular(self) -> Self {
        if self.x == 0.0 && self.y == 0.0 {
            return Self::new(1.0, 1.0, 0.0);
        }
        Self::new(-self.y, self.x, 0.0)
    }

    /// Reflects `self` across the plane orthogonal to `normal`.
    ///
    /// This is `-self.mirror(normal)`: the sign is flipped relative to the
    /// ray-tracing formula `2(a·n)n - a`, which is [`Vector3::mirror`].
    /// `normal` must be unit length for the result to be a true reflection;
    /// it is not normalized here.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let r = Vector3::new(1.0, -1.0, 0.0).reflect(Vector3::unit_y());
    /// assert_eq!(r, Vector3::new(1.0, 1.0, 0.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Mirrors `self` about the line spanned by `normal`.
    ///
    /// For a direction pointing away from a surface (towards a light, say)
    /// this yields the specular direction on the same side of the surface.
    /// Equal to `-self.reflect(normal)`. Same unit-normal contract as
    /// [`Vector3::reflect`].
    pub fn mirror(self, normal: Self) -> Self {
        normal * (2.0 * self.dot(normal)) - self
    }

    // =========================================================================
    // COMPARISON
    // =========================================================================

    /// Tolerance-based equality using the shared default tolerance.
    ///
    /// Same relation as `==`.
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_with(other, &VectorConfig::default())
    }

    /// Tolerance-based equality against a caller-supplied configuration.
    ///
    /// # Examples
    /// ```
    /// use vector3::{Vector3, VectorConfig};
    /// let loose = VectorConfig::new(1.0e-2).unwrap();
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// assert!(a.approx_eq_with(Vector3::new(1.0, 2.0, 3.05), &loose));
    /// assert!(!a.approx_eq(Vector3::new(1.0, 2.0, 3.05)));
    /// ```
    pub fn approx_eq_with(self, other: Self, config: &VectorConfig) -> bool {
        self.squared_distance(other) < config.tolerance
    }

    /// Orders `u` and `v` by their squared distance from `self`.
    ///
    /// The comparison is exact (no tolerance). `Less` means `u` is closer;
    /// `ordering as i8` gives the conventional `-1 / 0 / 1`.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    /// use vector3::Vector3;
    /// let origin = Vector3::zero();
    /// let near = Vector3::new(1.0, 0.0, 0.0);
    /// let far = Vector3::new(0.0, 0.0, -2.0);
    /// assert_eq!(origin.compare_distances(near, far), Ordering::Less);
    /// ```
    pub fn compare_distances(self, u: Self, v: Self) -> Ordering {
        self.squared_distance(u).total_cmp(&self.squared_distance(v))
    }

    /// Returns the candidate closest to `self`, or `None` when there are none.
    ///
    /// Ties keep the earliest candidate.
    ///
    /// # Examples
    /// ```
    /// use vector3::Vector3;
    /// let hits = [Vector3::new(0.0, 0.0, 9.0), Vector3::new(0.0, 0.0, 2.0)];
    /// assert_eq!(Vector3::zero().nearest(hits), Some(Vector3::new(0.0, 0.0, 2.0)));
    /// ```
    pub fn nearest<I>(self, candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        candidates
            .into_iter()
            .min_by(|u, v| self.compare_distances(*u, *v))
    }
}
