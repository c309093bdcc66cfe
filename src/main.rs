use std::{env, error::Error, fs};

use hailstorm::{
    geometry3d::trajectory::{count_xy_crossings, Trajectory},
    solver::{solve, SolveResult},
};
use itertools::Itertools;
use num::BigRational;

fn rational(value: i64) -> BigRational {
    BigRational::from_integer(value.into())
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let input = fs::read_to_string(path)?;
    let trajectories: Vec<Trajectory> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse)
        .try_collect()?;
    let area = rational(200_000_000_000_000)..=rational(400_000_000_000_000);
    println!("crossings = {}", count_xy_crossings(&trajectories, &area));
    match solve(&trajectories)? {
        SolveResult::Found(rock) => {
            let start = rock.start();
            println!("sum = {}", &start.x + &start.y + &start.z);
        }
        SolveResult::NotFound => println!("No solution found"),
    }
    Ok(())
}
