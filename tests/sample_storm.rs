use hailstorm::{
    geometry3d::trajectory::{count_xy_crossings, Trajectory},
    solver::{solve, SolveResult},
};
use itertools::Itertools;
use num::BigRational;

const STORM: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

fn rational(value: i64) -> BigRational {
    BigRational::from_integer(value.into())
}

fn parse_storm() -> Vec<Trajectory> {
    STORM
        .lines()
        .map(str::parse)
        .try_collect()
        .expect("Must be valid records")
}

#[test]
fn the_whole_pipeline_resolves_the_storm() {
    let stones = parse_storm();
    assert_eq!(stones.len(), 5);

    assert_eq!(count_xy_crossings(&stones, &(rational(7)..=rational(27))), 2);

    let result = solve(&stones).expect("Must have enough stones");
    let SolveResult::Found(rock) = result else {
        panic!("Must resolve the throw");
    };
    let expected = "24, 13, 10 @ -3, 1, 2"
        .parse::<Trajectory>()
        .expect("Must be a valid record");
    assert_eq!(rock, expected);

    let start = rock.start();
    assert_eq!(&start.x + &start.y + &start.z, rational(47));
}

#[test]
fn extra_stones_do_not_change_the_throw() {
    let stones = parse_storm();
    assert_eq!(solve(&stones), solve(&stones[..3]));
}
