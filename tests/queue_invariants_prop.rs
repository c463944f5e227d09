/**
 * Property tests for the piece queue.
 *
 * Random scripts of enqueue/dequeue calls are replayed against a
 * `VecDeque` model. After every step:
 * - occupancy stays within `0..=capacity`,
 * - failures are reported exactly when the queue is full or empty,
 * - the snapshot matches the model head to tail,
 * - ids handed out by the factory are `0, 1, 2, ...` with no gaps.
 */
use std::collections::VecDeque;

use piece_queue::{error::QueueError, Piece, PieceFactory, PieceQueue};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Op {
    Enqueue,
    Dequeue,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Enqueue), Just(Op::Dequeue)]
}

fn ids<const C: usize>(queue: &PieceQueue<C>) -> Vec<u64> {
    queue.snapshot().map(|p| p.id()).collect()
}

proptest! {
    #[test]
    fn matches_vecdeque_model(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..200)) {
        let mut factory = PieceFactory::new(seed);
        let mut queue: PieceQueue<5> = PieceQueue::new();
        let mut model: VecDeque<Piece> = VecDeque::new();
        let mut issued = 0u64;

        for op in ops {
            match op {
                Op::Enqueue => match queue.enqueue(&mut factory) {
                    Ok(piece) => {
                        prop_assert!(model.len() < 5);
                        prop_assert_eq!(piece.id(), issued);
                        issued += 1;
                        model.push_back(piece);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, QueueError::QueueFullError(5));
                        prop_assert_eq!(model.len(), 5);
                    }
                },
                Op::Dequeue => match queue.dequeue() {
                    Ok(piece) => prop_assert_eq!(Some(piece), model.pop_front()),
                    Err(err) => {
                        prop_assert_eq!(err, QueueError::QueueEmptyError);
                        prop_assert!(model.is_empty());
                    }
                },
            }

            let (count, capacity) = queue.occupancy();
            prop_assert!(count <= capacity);
            prop_assert_eq!(count, model.len());
            prop_assert_eq!(factory.next_id(), issued);

            let snapshot: Vec<Piece> = queue.snapshot().copied().collect();
            let expected: Vec<Piece> = model.iter().copied().collect();
            prop_assert_eq!(snapshot, expected);
            prop_assert_eq!(queue.front(), model.front());
            prop_assert_eq!(queue.back(), model.back());
        }
    }

    #[test]
    fn fifo_order_survives_any_rotation(offset in 0usize..7, n in 0usize..=7) {
        let mut factory = PieceFactory::new(0);
        let mut queue: PieceQueue<7> = PieceQueue::new();

        // move head and tail to an arbitrary slot before the real run
        for _ in 0..offset {
            queue.enqueue(&mut factory).unwrap();
            queue.dequeue().unwrap();
        }

        let mut inserted = Vec::new();
        for _ in 0..n {
            inserted.push(queue.enqueue(&mut factory).unwrap().id());
        }

        let mut removed = Vec::new();
        while let Ok(piece) = queue.dequeue() {
            removed.push(piece.id());
        }

        prop_assert_eq!(removed, inserted);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn initialize_full_clamps(n in 0usize..50) {
        let mut factory = PieceFactory::new(1);
        let mut queue: PieceQueue<5> = PieceQueue::new();

        let filled = queue.initialize_full(&mut factory, n);

        prop_assert_eq!(filled, n.min(5));
        prop_assert_eq!(queue.len(), n.min(5));
        prop_assert_eq!(ids(&queue), (0..n.min(5) as u64).collect::<Vec<_>>());
    }
}

#[test]
fn snapshot_after_prefill_play_and_insert() {
    let mut factory = PieceFactory::from_clock();
    let mut queue: PieceQueue<5> = PieceQueue::new();

    queue.initialize_full(&mut factory, 5);
    assert_eq!(ids(&queue), vec![0, 1, 2, 3, 4]);

    assert_eq!(queue.dequeue().unwrap().id(), 0);
    assert_eq!(queue.enqueue(&mut factory).unwrap().id(), 5);
    assert_eq!(ids(&queue), vec![1, 2, 3, 4, 5]);
}

#[test]
fn wrap_around_on_capacity_three() {
    let mut factory = PieceFactory::new(3);
    let mut queue: PieceQueue<3> = PieceQueue::new();

    queue.initialize_full(&mut factory, 3);
    assert_eq!(queue.dequeue().unwrap().id(), 0);
    queue.enqueue(&mut factory).unwrap();

    assert_eq!(ids(&queue), vec![1, 2, 3]);
}

#[test]
fn repeated_failures_leave_state_alone() {
    let mut factory = PieceFactory::new(11);
    let mut queue: PieceQueue<4> = PieceQueue::new();

    for _ in 0..10 {
        assert_eq!(queue.dequeue(), Err(QueueError::QueueEmptyError));
    }
    assert_eq!(queue.occupancy(), (0, 4));

    queue.initialize_full(&mut factory, 4);
    let before = ids(&queue);
    for _ in 0..10 {
        assert_eq!(queue.enqueue(&mut factory), Err(QueueError::QueueFullError(4)));
    }
    assert_eq!(queue.occupancy(), (4, 4));
    assert_eq!(ids(&queue), before);
    assert_eq!(factory.next_id(), 4);
}
