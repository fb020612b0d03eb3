pub mod fleet;
pub mod generate;
pub mod pool;
pub mod problem;
pub mod scheduler;
pub mod scoring;
pub mod solution;

pub use fleet::solve;
pub use pool::RidePool;
pub use problem::{parse_problem, read_problem, write_problem, HeaderLayout, Problem};
pub use scheduler::{solve_car, Car, Stop};
pub use solution::{evaluate, read_solution, Evaluation, Solution};

use std::fmt;

pub type CarId = usize;
pub type TimeT = u64;
pub type CoordT = i32;
pub type Score = u64;

/// Rides are identified by their position among the ride lines of the input.
/// Two `Ride` values are the same ride iff their ids match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(pub usize);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position(pub CoordT, pub CoordT);

impl Position {
    pub const ORIGIN: Position = Position(0, 0);

    pub fn distance(&self, other: &Position) -> TimeT {
        let x = (i64::from(self.0) - i64::from(other.0)).abs() as TimeT;
        let y = (i64::from(self.1) - i64::from(other.1)).abs() as TimeT;
        x + y
    }
}

/// `t_start..t_finish` is the half-open window the ride has to fit in.
#[derive(Clone, Debug)]
pub struct Ride {
    pub id: RideId,
    pub c_start: Position,
    pub c_finish: Position,
    pub t_start: TimeT,
    pub t_finish: TimeT,
}

impl Ride {
    pub fn length(&self) -> TimeT {
        self.c_start.distance(&self.c_finish)
    }
}
