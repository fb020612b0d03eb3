use crate::{Position, Ride, Score, TimeT};

/// A car standing at `from` at time `t` could still drive to the ride and
/// finish it inside the window. Waiting for `t_start` is not accounted for.
pub fn is_feasible(ride: &Ride, from: &Position, t: TimeT) -> bool {
    t + ride.length() + from.distance(&ride.c_start) < ride.t_finish
}

pub fn score(ride: &Ride, from: &Position, t: TimeT, bonus: Score) -> Score {
    let mut result = ride.length();
    if t + from.distance(&ride.c_start) <= ride.t_start {
        result += bonus;
    }
    result
}
