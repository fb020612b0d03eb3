use std::collections::HashMap;

use crate::scoring::is_feasible;
use crate::{Position, Ride, RideId, TimeT};

/// Rides not taken yet, bucketed by where they start.
/// Rides only ever leave the pool, and an origin without rides has no bucket.
#[derive(Debug, Default)]
pub struct RidePool {
    cells: HashMap<Position, Vec<Ride>>,
    len: usize,
}

impl RidePool {
    /// Rides sharing an origin keep their input order.
    pub fn new(rides: impl IntoIterator<Item = Ride>) -> Self {
        let mut cells = HashMap::<Position, Vec<Ride>>::new();
        let mut len = 0;
        for ride in rides {
            cells.entry(ride.c_start).or_default().push(ride);
            len += 1;
        }
        Self { cells, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn n_origins(&self) -> usize {
        self.cells.len()
    }

    #[cfg(test)]
    fn rides_from(&self, origin: &Position) -> &[Ride] {
        self.cells.get(origin).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: RideId) -> bool {
        self.iter().any(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.cells.values().flatten()
    }

    /// Every ride a car at `from` at time `t` could still finish in its
    /// window, lowest id first.
    pub fn feasible_rides(&self, from: &Position, t: TimeT) -> Vec<&Ride> {
        let mut res = self
            .iter()
            .filter(|r| is_feasible(r, from, t))
            .collect::<Vec<_>>();
        res.sort_unstable_by_key(|r| r.id);
        res
    }

    /// Removes the ride with `ride.id` from the bucket at `ride.c_start`.
    /// Returns `None` if it isn't there.
    pub fn remove(&mut self, ride: &Ride) -> Option<Ride> {
        let rides = self.cells.get_mut(&ride.c_start)?;
        let idx = rides.iter().position(|r| r.id == ride.id)?;
        let removed = rides.remove(idx);
        if rides.is_empty() {
            self.cells.remove(&ride.c_start);
        }
        self.len -= 1;
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(id: usize, start: (i32, i32), finish: (i32, i32), window: (TimeT, TimeT)) -> Ride {
        Ride {
            id: RideId(id),
            c_start: Position(start.0, start.1),
            c_finish: Position(finish.0, finish.1),
            t_start: window.0,
            t_finish: window.1,
        }
    }

    fn sample() -> Vec<Ride> {
        vec![
            ride(0, (0, 0), (1, 3), (2, 9)),
            ride(1, (1, 2), (1, 0), (0, 9)),
            ride(2, (2, 0), (2, 2), (0, 9)),
            ride(3, (1, 2), (5, 5), (0, 100)),
        ]
    }

    #[test]
    fn buckets_by_origin_in_input_order() {
        let pool = RidePool::new(sample());
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.n_origins(), 3);
        let ids = pool
            .rides_from(&Position(1, 2))
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![RideId(1), RideId(3)]);
        assert!(pool.rides_from(&Position(7, 7)).is_empty());
    }

    #[test]
    fn feasible_rides_sorted_by_id_and_filtered() {
        let pool = RidePool::new(sample());
        let ids = pool
            .feasible_rides(&Position::ORIGIN, 0)
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![RideId(0), RideId(1), RideId(2), RideId(3)]);

        // rides 0, 1 and 2 would all finish at 9 or later
        let ids = pool
            .feasible_rides(&Position::ORIGIN, 5)
            .iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![RideId(3)]);
    }

    #[test]
    fn every_returned_ride_passes_the_test() {
        let pool = RidePool::new(sample());
        for t in 0..12 {
            for from in &[Position(0, 0), Position(1, 2), Position(4, 4)] {
                for r in pool.feasible_rides(from, t) {
                    assert!(t + r.length() + from.distance(&r.c_start) < r.t_finish);
                }
            }
        }
    }

    #[test]
    fn remove_by_id_drops_empty_buckets() {
        let rides = sample();
        let mut pool = RidePool::new(rides.clone());

        let removed = pool.remove(&rides[0]).map(|r| r.id);
        assert_eq!(removed, Some(RideId(0)));
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.n_origins(), 2);
        assert!(!pool.contains(RideId(0)));
        assert!(pool
            .feasible_rides(&Position::ORIGIN, 0)
            .iter()
            .all(|r| r.id != RideId(0)));

        pool.remove(&rides[1]);
        assert_eq!(pool.n_origins(), 2);
        assert_eq!(pool.rides_from(&Position(1, 2)).len(), 1);
    }

    #[test]
    fn remove_matches_identity_not_content() {
        let mut pool = RidePool::new(sample());
        // same content as ride 1, unknown id
        let stranger = ride(42, (1, 2), (1, 0), (0, 9));
        assert!(pool.remove(&stranger).is_none());
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn second_remove_is_a_noop() {
        let rides = sample();
        let mut pool = RidePool::new(rides.clone());
        assert!(pool.remove(&rides[2]).is_some());
        assert!(pool.remove(&rides[2]).is_none());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn empty_pool() {
        let pool = RidePool::new(Vec::new());
        assert!(pool.is_empty());
        assert!(pool.feasible_rides(&Position::ORIGIN, 0).is_empty());
    }
}
