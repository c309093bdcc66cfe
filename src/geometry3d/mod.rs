macro_rules! det2 {
    ([$a11:expr, $a12:expr], [$a21:expr, $a22:expr]) => {
        &$a11 * &$a22 - &$a12 * &$a21
    };
}

pub mod point;
pub mod trajectory;
pub mod vector;

pub mod intersect;
