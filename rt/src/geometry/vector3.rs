use std::ops::{Add, Mul, Neg, Sub};

const DELTA: f64 = 1e-5;

#[derive(Copy, Clone, Debug)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn length(&self) -> f64 {
        self.dot_product_with_self().sqrt()
    }

    /// Returns a unit vector with the same direction. Zero vector stays zero.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            *self
        } else {
            Vector3::new(self.x / length, self.y / length, self.z / length)
        }
    }

    pub fn dot_product(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn dot_product_with_self(&self) -> f64 {
        self.dot_product(self)
    }

    pub fn cross_product(&self, other: &Vector3) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x
        )
    }

    pub fn mul_elementwise(&self, other: &Vector3) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Mirrors this vector about `normal`, which is expected to be unit length.
    pub fn reflect(&self, normal: &Vector3) -> Self {
        self - &(*normal * (2.0 * self.dot_product(normal)))
    }
}

impl PartialEq for Vector3 {

    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < DELTA &&
            (self.y - other.y).abs() < DELTA &&
            (self.z - other.z).abs() < DELTA
    }
}

impl Add for Vector3 {

    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add for &Vector3 {

    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {

    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for &Vector3 {

    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<f64> for &Vector3 {

    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        *self * rhs
    }
}

impl Neg for Vector3 {

    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vector3::zero().length(), 0.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vector3::new(-1.0, 1.0, 1.0);
        let n = v.normalized();
        let k = 1.0 / 3f64.sqrt();

        assert_eq!(n, Vector3::new(-k, k, k));
        assert!((n.length() - 1.0).abs() < 1e-9);
        // source is left untouched
        assert_eq!(v, Vector3::new(-1.0, 1.0, 1.0));
    }

    #[test]
    fn test_normalized_zero() {
        assert_eq!(Vector3::zero().normalized(), Vector3::zero());
    }

    #[test]
    fn test_dot_and_cross_product() {
        let forward = Vector3::new(0.0, 1.0, 0.0);
        let up = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(forward.dot_product(&up), 0.0);
        assert_eq!(forward.cross_product(&up), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(up.cross_product(&forward), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(Vector3::new(1.0, 2.0, 3.0).dot_product(&Vector3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn test_reflect() {
        let normal = Vector3::new(0.0, -1.0, 0.0);
        let incoming = Vector3::new(1.0, 1.0, 0.0);

        assert_eq!(incoming.reflect(&normal), Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 2.0);

        assert_eq!(a + b, Vector3::new(1.5, 1.0, 5.0));
        assert_eq!(&a - &b, Vector3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.mul_elementwise(&b), Vector3::new(0.5, -2.0, 6.0));
    }
}
