use std::collections::HashSet;
use std::fmt;
use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use helpers::red::Red;

use crate::{Position, Problem, RideId, Score, TimeT};

/// Ride ids per car, in fleet order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub cars: Vec<Vec<RideId>>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rides) in self.cars.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", rides.len())?;
            for ride_id in rides {
                write!(f, " {}", ride_id)?;
            }
        }
        Ok(())
    }
}

impl Solution {
    pub fn n_rides(&self) -> usize {
        self.cars.iter().map(Vec::len).sum()
    }

    pub fn write_solution(&self, mut out: impl Write) -> std::io::Result<()> {
        write!(out, "{}", self)
    }
}

/// Reads `n_cars` rows of `count id...`. Anything after them is ignored.
pub fn read_solution(mut input: impl Read, n_cars: usize) -> Result<Solution> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    let mut red = Red::new(buf.into_iter());

    let mut cars = Vec::with_capacity(n_cars.min(1024));
    for id in 0..n_cars {
        let n_rides = red
            .read::<usize>()?
            .with_context(|| format!("solution has {} rows, expected {}", id, n_cars))?;
        let rides = red
            .read_vec::<usize>(n_rides)
            .with_context(|| format!("can't read rides of car {}", id))?;
        cars.push(rides.into_iter().map(RideId).collect());
    }

    Ok(Solution { cars })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub completed: usize,
    /// completed rides that got the bonus
    pub on_time: usize,
    /// assigned rides finishing after their window or the last step
    pub late: usize,
}

/// Scores `solution` the way the judge does: a car drives to the pickup,
/// waits for the earliest start, then drives the ride.
pub fn evaluate(problem: &Problem, solution: &Solution) -> Result<Evaluation> {
    if solution.cars.len() != problem.n_cars {
        bail!(
            "solution has {} cars, problem has {}",
            solution.cars.len(),
            problem.n_cars
        );
    }

    let mut used = HashSet::new();
    let mut res = Evaluation::default();

    for (car_id, rides) in solution.cars.iter().enumerate() {
        let mut t: TimeT = 0;
        let mut pos = Position::ORIGIN;
        for &ride_id in rides {
            let ride = match problem.rides.get(ride_id.0) {
                Some(ride) => ride,
                None => bail!("car {}: no ride {}", car_id, ride_id),
            };
            if !used.insert(ride_id) {
                bail!("car {}: ride {} assigned twice", car_id, ride_id);
            }

            let when_arrive_start = t + pos.distance(&ride.c_start);
            let when_start = std::cmp::max(when_arrive_start, ride.t_start);
            let when_finish = when_start + ride.length();

            if when_finish <= ride.t_finish && when_finish <= problem.n_steps {
                res.score += ride.length();
                res.completed += 1;
                if when_arrive_start <= ride.t_start {
                    res.score += problem.bonus;
                    res.on_time += 1;
                }
            } else {
                res.late += 1;
            }

            t = when_finish;
            pos = ride.c_finish;
        }
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_problem, HeaderLayout};

    const EXAMPLE: &str = "3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n2 0 2 2 0 9\n";

    fn ids(ids: &[usize]) -> Vec<RideId> {
        ids.iter().copied().map(RideId).collect()
    }

    #[test]
    fn count_then_ids_one_line_per_car() {
        let solution = Solution {
            cars: vec![ids(&[0]), ids(&[]), ids(&[1, 2])],
        };
        assert_eq!(solution.to_string(), "1 0\n0\n2 1 2");
        assert_eq!(solution.n_rides(), 3);

        let mut buf = Vec::new();
        solution.write_solution(&mut buf).unwrap();
        assert_eq!(buf, b"1 0\n0\n2 1 2");
    }

    #[test]
    fn no_cars_is_empty_text() {
        assert_eq!(Solution::default().to_string(), "");
    }

    #[test]
    fn reads_what_it_writes() {
        let text = "1 0\n0\n2 1 2\n";
        let solution = read_solution(text.as_bytes(), 3).unwrap();
        assert_eq!(solution.cars, vec![ids(&[0]), ids(&[]), ids(&[1, 2])]);
    }

    #[test]
    fn truncated_solution_is_an_error() {
        assert!(read_solution("1 0\n".as_bytes(), 2).is_err());
        assert!(read_solution("3 0 1\n".as_bytes(), 1).is_err());
    }

    #[test]
    fn huge_counts_are_errors() {
        assert!(read_solution("18446744073709551615 0\n".as_bytes(), 1).is_err());
        assert!(read_solution("0\n".as_bytes(), usize::MAX).is_err());
    }

    #[test]
    fn scores_the_example_by_the_rules() {
        let problem = parse_problem(EXAMPLE.as_bytes(), HeaderLayout::Standard).unwrap();
        let solution = Solution {
            cars: vec![ids(&[0]), ids(&[2, 1])],
        };
        let eval = evaluate(&problem, &solution).unwrap();
        // only ride 0 starts on time, the other two just finish in their window
        assert_eq!(
            eval,
            Evaluation {
                score: 10,
                completed: 3,
                on_time: 1,
                late: 0,
            }
        );
    }

    #[test]
    fn late_rides_score_nothing() {
        let problem = parse_problem(EXAMPLE.as_bytes(), HeaderLayout::Standard).unwrap();
        // car 0 ends ride 0 at (1, 3) at t 6, ride 2 would end at 12
        let solution = Solution {
            cars: vec![ids(&[0, 2]), ids(&[])],
        };
        let eval = evaluate(&problem, &solution).unwrap();
        assert_eq!(eval.score, 6);
        assert_eq!(eval.late, 1);
    }

    #[test]
    fn rides_past_the_last_step_score_nothing() {
        // same rides, only 3 steps
        let problem = parse_problem(EXAMPLE.as_bytes(), HeaderLayout::Reference).unwrap();
        let solution = Solution {
            cars: vec![ids(&[0]), ids(&[1, 2])],
        };
        let eval = evaluate(&problem, &solution).unwrap();
        assert_eq!(eval.completed, 0);
        assert_eq!(eval.late, 3);
        assert_eq!(eval.score, 0);
    }

    #[test]
    fn rejects_broken_solutions() {
        let problem = parse_problem(EXAMPLE.as_bytes(), HeaderLayout::Standard).unwrap();
        let twice = Solution {
            cars: vec![ids(&[0, 1]), ids(&[1])],
        };
        assert!(evaluate(&problem, &twice).is_err());

        let unknown = Solution {
            cars: vec![ids(&[3]), ids(&[])],
        };
        assert!(evaluate(&problem, &unknown).is_err());

        let short = Solution {
            cars: vec![ids(&[0])],
        };
        assert!(evaluate(&problem, &short).is_err());
    }
}
