use log::debug;

use crate::scheduler::solve_car;
use crate::{Problem, RidePool, Solution};

/// Cars are run one after another against one shared pool, so a ride taken
/// by car `i` is gone for every car after it.
pub fn solve(problem: &Problem) -> Solution {
    let mut pool = RidePool::new(problem.rides.iter().cloned());
    debug!(
        "{} rides from {} origins, {} cars",
        pool.len(),
        pool.n_origins(),
        problem.n_cars
    );

    let mut cars = Vec::new();
    for id in 0..problem.n_cars {
        let (car, _stop) = solve_car(&mut pool, id, problem.bonus, problem.n_steps);
        cars.push(car.rides);
    }

    Solution { cars }
}
