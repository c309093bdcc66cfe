use std::ops::{Add, Mul, Sub};

use num::{BigRational, Zero};

use super::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Add, derive_more::Sub)]
pub struct Vector {
    pub vx: BigRational,
    pub vy: BigRational,
    pub vz: BigRational,
}

impl Vector {
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            vx: det2!([self.vy, self.vz], [other.vy, other.vz]),
            vy: det2!([self.vz, self.vx], [other.vz, other.vx]),
            vz: det2!([self.vx, self.vy], [other.vx, other.vy]),
        }
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Self {
            vx: BigRational::zero(),
            vy: BigRational::zero(),
            vz: BigRational::zero(),
        }
    }

    fn is_zero(&self) -> bool {
        self.vx.is_zero() && self.vy.is_zero() && self.vz.is_zero()
    }
}

impl From<&Point> for Vector {
    fn from(point: &Point) -> Self {
        Self {
            vx: point.x.clone(),
            vy: point.y.clone(),
            vz: point.z.clone(),
        }
    }
}

impl Mul<&BigRational> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &BigRational) -> Self::Output {
        Vector {
            vx: &self.vx * rhs,
            vy: &self.vy * rhs,
            vz: &self.vz * rhs,
        }
    }
}

impl Add<&Vector> for &Point {
    type Output = Point;

    fn add(self, rhs: &Vector) -> Self::Output {
        Point {
            x: &self.x + &rhs.vx,
            y: &self.y + &rhs.vy,
            z: &self.z + &rhs.vz,
        }
    }
}

impl Sub<&Vector> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Vector) -> Self::Output {
        Point {
            x: &self.x - &rhs.vx,
            y: &self.y - &rhs.vy,
            z: &self.z - &rhs.vz,
        }
    }
}
