//! Ordering relation for candidate selection
//!
//! Among ready events the next one to process is the maximum under:
//! 1. Higher priority
//! 2. Earlier timestamp
//! 3. Smaller id
//!
//! With unique ids no two distinct events compare equal.

use crate::models::event::Event;
use std::cmp::Ordering;

/// Compare two events by processing precedence
///
/// Returns `Ordering::Greater` when `a` should be processed before `b`.
///
/// # Example
/// ```
/// use event_scheduler_core::{precedence, Event};
/// use std::cmp::Ordering;
///
/// let urgent = Event::new(2, 5, 9, 1, vec![]);
/// let early = Event::new(1, 3, 0, 1, vec![]);
/// assert_eq!(precedence(&urgent, &early), Ordering::Greater);
/// ```
pub fn precedence(a: &Event, b: &Event) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| b.timestamp().cmp(&a.timestamp()))
        .then_with(|| b.id().cmp(&a.id()))
}

/// Check whether `a` is processed before `b`
pub fn goes_before(a: &Event, b: &Event) -> bool {
    precedence(a, b) == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_priority_wins() {
        let a = Event::new(9, 5, 10, 1, vec![]);
        let b = Event::new(1, 4, 0, 1, vec![]);
        assert!(goes_before(&a, &b));
        assert!(!goes_before(&b, &a));
    }

    #[test]
    fn test_earlier_timestamp_breaks_priority_tie() {
        let a = Event::new(9, 5, 0, 1, vec![]);
        let b = Event::new(1, 5, 1, 1, vec![]);
        assert!(goes_before(&a, &b));
    }

    #[test]
    fn test_smaller_id_breaks_full_tie() {
        let a = Event::new(1, 5, 0, 3, vec![]);
        let b = Event::new(2, 5, 0, 2, vec![]);
        assert!(goes_before(&a, &b));
        assert_eq!(precedence(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_negative_values_order_numerically() {
        let a = Event::new(-1, -2, -5, 0, vec![]);
        let b = Event::new(0, -3, -10, 0, vec![]);
        assert!(goes_before(&a, &b));
    }

    #[test]
    fn test_same_event_compares_equal() {
        let a = Event::new(3, 1, 1, 1, vec![]);
        assert_eq!(precedence(&a, &a.clone()), Ordering::Equal);
    }
}
