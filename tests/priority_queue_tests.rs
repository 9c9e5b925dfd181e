use lazy_sssp::data_structures::PriorityQueue;
use lazy_sssp::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_empty_queue_access_is_rejected() {
    let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);

    assert!(matches!(queue.peek_payload(), Err(Error::EmptyQueue)));
    assert!(matches!(queue.peek_priority(), Err(Error::EmptyQueue)));
    assert!(matches!(queue.remove_min(), Err(Error::EmptyQueue)));
    assert!(queue.pop().is_none());
}

#[test]
fn test_lowest_priority_value_comes_first() {
    let mut queue = PriorityQueue::new();
    queue.insert("low urgency", 50).unwrap();
    queue.insert("most urgent", 1).unwrap();
    queue.insert("medium", 10).unwrap();

    assert_eq!(*queue.peek_payload().unwrap(), "most urgent");
    assert_eq!(queue.peek_priority().unwrap(), 1);
    // Peeking leaves the queue untouched
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.remove_min().unwrap(), "most urgent");
    assert_eq!(queue.remove_min().unwrap(), "medium");
    assert_eq!(queue.pop(), Some(("low urgency", 50)));
    assert!(queue.is_empty());
}

#[test]
fn test_payloads_are_returned_by_value() {
    let mut queue = PriorityQueue::new();
    queue.insert(String::from("second"), 2).unwrap();
    queue.insert(String::from("first"), 1).unwrap();

    let first: String = queue.remove_min().unwrap();
    assert_eq!(first, "first");
    assert_eq!(queue.remove_min().unwrap(), "second");
}

#[test]
fn test_removal_order_is_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue = PriorityQueue::new();
    let mut expected = Vec::new();

    for payload in 0..500usize {
        let priority: i64 = rng.gen_range(-1_000..1_000);
        queue.insert(payload, priority).unwrap();
        expected.push(priority);
    }

    let mut removed = Vec::new();
    while let Some((_, priority)) = queue.pop() {
        removed.push(priority);
    }

    expected.sort_unstable();
    assert_eq!(removed, expected);
}

#[test]
fn test_heap_property_holds_under_mixed_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut queue = PriorityQueue::new();

    for step in 0..2_000u32 {
        if queue.is_empty() || rng.gen_bool(0.6) {
            queue.insert(step, rng.gen_range(0..100u32)).unwrap();
        } else {
            let floor = queue.peek_priority().unwrap();
            let (_, priority) = queue.pop().unwrap();
            assert_eq!(priority, floor);
        }
        assert!(queue.satisfies_heap_property(), "heap order broken at step {}", step);
    }
}

#[test]
fn test_insert_remove_count_conservation() {
    let mut queue = PriorityQueue::with_capacity(4);
    for i in 0..20 {
        queue.insert(i, 20 - i).unwrap();
    }
    for _ in 0..7 {
        queue.remove_min().unwrap();
    }
    assert_eq!(queue.len(), 13);

    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn test_reinserted_payload_surfaces_at_lower_priority_first() {
    // The same vertex queued twice, the second time with a better distance
    let mut queue = PriorityQueue::new();
    queue.insert((7usize, 10i64), 10).unwrap();
    queue.insert((3usize, 6i64), 6).unwrap();
    queue.insert((7usize, 4i64), 4).unwrap();

    assert_eq!(queue.remove_min().unwrap(), (7, 4));
    assert_eq!(queue.remove_min().unwrap(), (3, 6));
    assert_eq!(queue.remove_min().unwrap(), (7, 10));
}

#[test]
fn test_equal_priorities_all_come_out() {
    let mut queue = PriorityQueue::new();
    for payload in 0..10 {
        queue.insert(payload, 5).unwrap();
    }

    let mut payloads = Vec::new();
    while !queue.is_empty() {
        assert_eq!(queue.peek_priority().unwrap(), 5);
        payloads.push(queue.remove_min().unwrap());
    }

    payloads.sort_unstable();
    assert_eq!(payloads, (0..10).collect::<Vec<_>>());
}
