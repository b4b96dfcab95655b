//! Ordering rules for a single day's places.
//!
//! The local backends share these so every mutation leaves the day's orders
//! dense: for N places the orders are exactly `1..=N`.

use crate::models::{Direction, Place};

/// Stable sort by ascending order.
pub fn sort_by_order(places: &mut [Place]) {
    places.sort_by_key(|place| place.order);
}

/// Order for a place appended to the day.
pub fn next_order(places: &[Place]) -> u32 {
    places.iter().map(|place| place.order).max().unwrap_or(0) + 1
}

/// Swap `target` with its neighbour in `direction`.
///
/// Returns `false` when nothing moved: the item is absent, or it is already
/// first (moving up) or last (moving down).
pub fn shift<T: PartialEq>(items: &mut [T], target: &T, direction: Direction) -> bool {
    let Some(index) = items.iter().position(|item| item == target) else {
        return false;
    };

    match direction {
        Direction::Up if index > 0 => {
            items.swap(index, index - 1);
            true
        }
        Direction::Down if index + 1 < items.len() => {
            items.swap(index, index + 1);
            true
        }
        _ => false,
    }
}

/// Pair each item with its 1-based position.
pub fn renumber<I: IntoIterator>(items: I) -> Vec<(I::Item, u32)> {
    items.into_iter().zip(1..).collect()
}

/// Rewrite `order` on already sequenced places so it matches position.
pub fn renumber_in_place(places: &mut [Place]) {
    for (place, order) in places.iter_mut().zip(1..) {
        place.order = order;
    }
}

/// Whether the orders are exactly `1..=N`, in any sequence.
pub fn is_contiguous(places: &[Place]) -> bool {
    let mut orders: Vec<u32> = places.iter().map(|place| place.order).collect();
    orders.sort_unstable();
    orders.into_iter().eq(1..=places.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, PlaceId};

    fn place(id: i64, order: u32) -> Place {
        Place {
            id: PlaceId::from(id),
            day: Day::FIRST,
            order,
            name: format!("Place {id}"),
            lat: 0.0,
            lng: 0.0,
            memo: String::new(),
            created_at: None,
        }
    }

    #[test]
    fn next_order_starts_at_one() {
        assert_eq!(next_order(&[]), 1);
        assert_eq!(next_order(&[place(1, 1), place(2, 4)]), 5);
    }

    #[test]
    fn shift_swaps_with_neighbour() {
        let mut ids = vec![1, 2, 3];
        assert!(shift(&mut ids, &3, Direction::Up));
        assert_eq!(ids, vec![1, 3, 2]);
        assert!(shift(&mut ids, &1, Direction::Down));
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn shift_at_boundaries_is_noop() {
        let mut ids = vec![1, 2, 3];
        assert!(!shift(&mut ids, &1, Direction::Up));
        assert!(!shift(&mut ids, &3, Direction::Down));
        assert!(!shift(&mut ids, &42, Direction::Up));
        assert_eq!(ids, vec![1, 2, 3]);

        let mut single = vec![7];
        assert!(!shift(&mut single, &7, Direction::Down));
    }

    #[test]
    fn renumber_is_dense_and_keeps_sequence() {
        let numbered = renumber(["c", "a", "b"]);
        assert_eq!(numbered, vec![("c", 1), ("a", 2), ("b", 3)]);
    }

    #[test]
    fn renumber_in_place_closes_gaps() {
        let mut places = vec![place(1, 2), place(2, 5), place(3, 9)];
        renumber_in_place(&mut places);
        let orders: Vec<u32> = places.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(is_contiguous(&places));
    }

    #[test]
    fn contiguity_detects_gaps_and_duplicates() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[place(1, 2), place(2, 1)]));
        assert!(!is_contiguous(&[place(1, 1), place(2, 3)]));
        assert!(!is_contiguous(&[place(1, 1), place(2, 1)]));
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut places = vec![place(1, 2), place(2, 1), place(3, 2)];
        sort_by_order(&mut places);
        let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }
}
