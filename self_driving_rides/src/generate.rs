use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{CoordT, Position, Problem, Ride, RideId, Score, TimeT};

#[derive(Clone, Debug)]
pub struct GenParams {
    pub n_rows: usize,
    pub n_cols: usize,
    pub n_cars: usize,
    pub n_rides: usize,
    pub bonus: Score,
    pub n_steps: TimeT,
}

impl Default for GenParams {
    // about the size of b_should_be_easy
    fn default() -> Self {
        Self {
            n_rows: 800,
            n_cols: 1000,
            n_cars: 100,
            n_rides: 300,
            bonus: 25,
            n_steps: 25000,
        }
    }
}

/// Random instance, the same for the same seed. Every ride can be done on
/// its own: its window is at least as long as the ride.
pub fn generate(params: &GenParams, seed: u64) -> Problem {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_rows = params.n_rows.max(1) as CoordT;
    let n_cols = params.n_cols.max(1) as CoordT;
    let n_steps = params.n_steps.max(1);

    let mut rides = Vec::with_capacity(params.n_rides);
    for id in 0..params.n_rides {
        let c_start = Position(rng.gen_range(0, n_rows), rng.gen_range(0, n_cols));
        let c_finish = Position(rng.gen_range(0, n_rows), rng.gen_range(0, n_cols));
        let t_start = rng.gen_range(0, n_steps);
        let slack = rng.gen_range(0, n_steps / 4 + 1);
        let t_finish = t_start + c_start.distance(&c_finish) + slack;
        rides.push(Ride {
            id: RideId(id),
            c_start,
            c_finish,
            t_start,
            t_finish,
        });
    }

    Problem {
        n_rows: params.n_rows,
        n_cols: params.n_cols,
        n_cars: params.n_cars,
        bonus: params.bonus,
        n_steps: params.n_steps,
        rides,
    }
}
