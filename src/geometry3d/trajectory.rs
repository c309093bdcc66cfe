use std::{ops::RangeInclusive, str::FromStr};

use itertools::Itertools;
use num::{bigint::ParseBigIntError, BigInt, BigRational, Signed, Zero};
use thiserror::Error;

use super::{intersect::IntersectFrom, point::Point, vector::Vector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    start: Point,
    velocity: Vector,
}

impl Trajectory {
    pub fn new(start: Point, velocity: Vector) -> Self {
        Self { start, velocity }
    }

    pub fn start(&self) -> &Point {
        &self.start
    }

    pub fn velocity(&self) -> &Vector {
        &self.velocity
    }

    pub fn at_time(&self, time: &BigRational) -> Point {
        &self.start + &(&self.velocity * time)
    }

    pub fn meeting_time(&self, other: &Trajectory) -> Option<BigRational> {
        let relative_velocity = self.velocity.clone() - other.velocity.clone();
        let offset = &other.start - &self.start;
        if relative_velocity.is_zero() {
            // moving in lockstep; they either coincide forever or never meet
            return offset.is_zero().then(BigRational::zero);
        }
        let (numerator, denominator) = [
            (&offset.vx, &relative_velocity.vx),
            (&offset.vy, &relative_velocity.vy),
            (&offset.vz, &relative_velocity.vz),
        ]
        .into_iter()
        .find(|(_, denominator)| !denominator.is_zero())
        .expect("Must have a non-zero component");
        let time = numerator / denominator;
        // the remaining axes have to agree on that time
        (&relative_velocity * &time == offset).then_some(time)
    }
}

#[derive(Debug, Error, derive_more::From)]
pub enum ParseTrajectoryError {
    #[error("Record is missing the \" @ \" separator between start and velocity")]
    MissingDelimiter,
    #[error("Expected 3 components, but {} were given", .0)]
    BadComponentCount(usize),
    #[error(transparent)]
    BadInteger(ParseBigIntError),
}

fn components(raw: &str) -> Result<[BigInt; 3], ParseTrajectoryError> {
    let parsed: Vec<BigInt> = raw
        .split(',')
        .map(|component| component.trim().parse())
        .try_collect()?;
    parsed
        .try_into()
        .map_err(|extra: Vec<BigInt>| ParseTrajectoryError::BadComponentCount(extra.len()))
}

impl FromStr for Trajectory {
    type Err = ParseTrajectoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (raw_start, raw_velocity) = raw
            .split_once(" @ ")
            .ok_or(ParseTrajectoryError::MissingDelimiter)?;
        let [x, y, z] = components(raw_start)?;
        let [vx, vy, vz] = components(raw_velocity)?;
        Ok(Self {
            start: Point::new(x, y, z),
            velocity: Vector {
                vx: vx.into(),
                vy: vy.into(),
                vz: vz.into(),
            },
        })
    }
}

pub enum IntTrajTraj {
    Crossing {
        x: BigRational,
        y: BigRational,
        time_self: BigRational,
        time_other: BigRational,
    },
    Collinear,
    Parallel,
}

impl IntersectFrom<Trajectory> for Trajectory {
    type Intersection = IntTrajTraj;

    // where the xy shadows of the two paths cross, times unrestricted in sign
    fn intersect_from(&self, other: &Trajectory) -> Self::Intersection {
        let (v, w) = (&self.velocity, &other.velocity);
        let offset = &other.start - &self.start;
        let denominator = det2!([v.vx, v.vy], [w.vx, w.vy]);
        if denominator.is_zero() {
            // shadows are parallel; equal shadows when the offset is parallel too
            return if det2!([offset.vx, offset.vy], [v.vx, v.vy]).is_zero() {
                IntTrajTraj::Collinear
            } else {
                IntTrajTraj::Parallel
            };
        }
        let time_self = det2!([offset.vx, offset.vy], [w.vx, w.vy]) / &denominator;
        let time_other = det2!([offset.vx, offset.vy], [v.vx, v.vy]) / &denominator;
        IntTrajTraj::Crossing {
            x: &self.start.x + &(&v.vx * &time_self),
            y: &self.start.y + &(&v.vy * &time_self),
            time_self,
            time_other,
        }
    }
}

pub fn count_xy_crossings(
    trajectories: &[Trajectory],
    area: &RangeInclusive<BigRational>,
) -> usize {
    trajectories
        .iter()
        .tuple_combinations()
        .filter(|&(first, second)| match first.intersect_from(second) {
            IntTrajTraj::Crossing {
                x,
                y,
                time_self,
                time_other,
            } => {
                !time_self.is_negative()
                    && !time_other.is_negative()
                    && area.contains(&x)
                    && area.contains(&y)
            }
            IntTrajTraj::Collinear | IntTrajTraj::Parallel => false,
        })
        .count()
}
