use num::{BigRational, Zero};
use thiserror::Error;

use crate::geometry3d::{point::Point, trajectory::Trajectory, vector::Vector};

const UNKNOWNS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("At least 3 trajectories are needed to pin down the throw, but {} were given", .0)]
pub struct InsufficientInputError(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveResult {
    Found(Trajectory),
    NotFound,
}

pub fn solve(trajectories: &[Trajectory]) -> Result<SolveResult, InsufficientInputError> {
    // three generic trajectories already pin down all six unknowns
    let [first, second, third, ..] = trajectories else {
        return Err(InsufficientInputError(trajectories.len()));
    };
    let system = EquationSystem::for_triple(first, second, third);
    let Ok([x, y, z, vx, vy, vz]) = system.reduce() else {
        return Ok(SolveResult::NotFound);
    };
    let rock = Trajectory::new(Point::new(x, y, z), Vector { vx, vy, vz });
    // the eliminated equations hold vacuously for a stone pacing the rock at
    // the same velocity, so confirm every stone actually gets hit
    if [first, second, third]
        .into_iter()
        .any(|stone| rock.meeting_time(stone).is_none())
    {
        return Ok(SolveResult::NotFound);
    }
    Ok(SolveResult::Found(rock))
}

// rows of [coefficients over x, y, z, vx, vy, vz | right-hand side]
#[derive(Debug)]
struct EquationSystem {
    rows: Vec<[BigRational; UNKNOWNS + 1]>,
}

#[derive(Debug, PartialEq, Eq)]
enum ReduceFailure {
    Degenerate,
    Inconsistent,
}

impl EquationSystem {
    fn for_triple(first: &Trajectory, second: &Trajectory, third: &Trajectory) -> Self {
        let mut system = Self {
            rows: Vec::with_capacity(9),
        };
        system.eliminate_pair(first, second);
        system.eliminate_pair(first, third);
        system.eliminate_pair(second, third);
        system
    }

    // the rock R + tW passes through both stones: (R − P) × (W − V) = 0 for
    // each; subtracting one condition from the other cancels the bilinear
    // R × W term and leaves
    //     R × (Vb − Va) + (Pb − Pa) × W = Pb × Vb − Pa × Va
    fn eliminate_pair(&mut self, a: &Trajectory, b: &Trajectory) {
        let w = b.velocity().clone() - a.velocity().clone();
        let d = b.start() - a.start();
        let rhs = Vector::from(b.start()).cross(b.velocity())
            - Vector::from(a.start()).cross(a.velocity());
        let zero = BigRational::zero;
        self.rows.push([
            zero(),
            w.vz.clone(),
            -&w.vy,
            zero(),
            -&d.vz,
            d.vy.clone(),
            rhs.vx,
        ]);
        self.rows.push([
            -&w.vz,
            zero(),
            w.vx.clone(),
            d.vz,
            zero(),
            -&d.vx,
            rhs.vy,
        ]);
        self.rows
            .push([w.vy, -&w.vx, zero(), -&d.vy, d.vx, zero(), rhs.vz]);
    }

    fn reduce(mut self) -> Result<[BigRational; UNKNOWNS], ReduceFailure> {
        let rows = &mut self.rows;
        let mut rank = 0;
        for column in 0..UNKNOWNS {
            // exact arithmetic, so any non-zero entry makes a pivot
            let Some(pivot) = (rank..rows.len()).find(|&row| !rows[row][column].is_zero())
            else {
                // a free unknown; no unique throw
                return Err(ReduceFailure::Degenerate);
            };
            rows.swap(rank, pivot);
            let lead = rows[rank][column].clone();
            for entry in &mut rows[rank][column..] {
                *entry /= &lead;
            }
            for row in 0..rows.len() {
                if row == rank || rows[row][column].is_zero() {
                    continue;
                }
                let factor = rows[row][column].clone();
                for entry in column..=UNKNOWNS {
                    let scaled = &factor * &rows[rank][entry];
                    rows[row][entry] -= scaled;
                }
            }
            rank += 1;
        }
        if rows[rank..].iter().any(|row| !row[UNKNOWNS].is_zero()) {
            return Err(ReduceFailure::Inconsistent);
        }
        Ok(std::array::from_fn(|unknown| {
            rows[unknown][UNKNOWNS].clone()
        }))
    }
}
