//! Minimal vector and quaternion math for joint orientation.

use core::ops::{Add, Mul, Sub};
use marionette_types::Axis;

/// 3D vector (12 bytes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn midpoint(self, other: Self) -> Self {
        (self + other).scale(0.5)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Unit quaternion orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Rotation of `radians` around a principal axis.
    pub fn from_axis_angle(axis: Axis, radians: f32) -> Self {
        let [ax, ay, az] = axis.unit();
        let (s, c) = (radians * 0.5).sin_cos();
        Self {
            x: ax * s,
            y: ay * s,
            z: az * s,
            w: c,
        }
    }

    pub fn normalize(self) -> Self {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if len < 1e-10 {
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        Self {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
            w: self.w * inv,
        }
    }

    /// Composes a rotation around the local `axis` onto this orientation.
    pub fn rotate_local(self, axis: Axis, degrees: f32) -> Self {
        (self * Self::from_axis_angle(axis, degrees.to_radians())).normalize()
    }

    /// Euler angles in degrees, XYZ order.
    pub fn to_euler_degrees(self) -> [f32; 3] {
        let Self { x, y, z, w } = self;
        let m11 = 1.0 - 2.0 * (y * y + z * z);
        let m12 = 2.0 * (x * y - w * z);
        let m13 = 2.0 * (x * z + w * y);
        let m22 = 1.0 - 2.0 * (x * x + z * z);
        let m23 = 2.0 * (y * z - w * x);
        let m32 = 2.0 * (y * z + w * x);
        let m33 = 1.0 - 2.0 * (x * x + y * y);

        let ey = m13.clamp(-1.0, 1.0).asin();
        let (ex, ez) = if m13.abs() < 0.999_999_9 {
            ((-m23).atan2(m33), (-m12).atan2(m11))
        } else {
            (m32.atan2(m22), 0.0)
        };
        [ex.to_degrees(), ey.to_degrees(), ez.to_degrees()]
    }

    /// Components as `[x, y, z, w]`.
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
