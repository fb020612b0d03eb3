use log::debug;

use crate::scoring::score;
use crate::{CarId, Position, Ride, RideId, RidePool, Score, TimeT};

#[derive(Clone, Debug)]
pub struct Car {
    pub id: CarId,
    pub c: Position,
    pub t: TimeT,
    pub rides: Vec<RideId>,
}

impl Car {
    pub fn new(id: CarId) -> Self {
        Self {
            id,
            c: Position::ORIGIN,
            t: 0,
            rides: Vec::new(),
        }
    }

    /// The clock jumps to the ride's earliest start if it is still ahead,
    /// then runs for the ride's length. Driving to the pickup is not added.
    pub fn assign(&mut self, ride: &Ride) {
        self.t = std::cmp::max(self.t, ride.t_start) + ride.length();
        self.c = ride.c_finish;
        self.rides.push(ride.id);
    }
}

/// Why a car stopped taking rides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stop {
    Horizon,
    NoRide,
}

/// Highest scoring feasible ride. The first one wins a tie, and a ride
/// scoring 0 is never picked.
pub fn next_ride<'a>(pool: &'a RidePool, car: &Car, bonus: Score) -> Option<&'a Ride> {
    let mut best_ride = None;
    let mut best_score = 0;

    for ride in pool.feasible_rides(&car.c, car.t) {
        let ride_score = score(ride, &car.c, car.t, bonus);
        if ride_score > best_score {
            best_score = ride_score;
            best_ride = Some(ride);
        }
    }

    best_ride
}

/// Runs car `id` from the origin at time zero until it runs out of time or
/// of rides worth taking. Taken rides leave `pool`.
pub fn solve_car(pool: &mut RidePool, id: CarId, bonus: Score, n_steps: TimeT) -> (Car, Stop) {
    let mut car = Car::new(id);

    let stop = loop {
        if car.t >= n_steps {
            break Stop::Horizon;
        }

        let ride = match next_ride(pool, &car, bonus) {
            Some(ride) => ride.clone(),
            None => break Stop::NoRide,
        };

        pool.remove(&ride);
        car.assign(&ride);
    };

    debug!(
        "car {} stopped ({:?}) at t={} after {} rides, {} left in pool",
        car.id,
        stop,
        car.t,
        car.rides.len(),
        pool.len()
    );

    (car, stop)
}
