use std::iter::FusedIterator;

use tracing::debug;

use crate::{error::QueueError, factory::PieceSource, piece::Piece};

/// Bounded FIFO of upcoming pieces backed by a fixed array of `CAPACITY` slots.
///
/// Occupied slots always form one contiguous circular run that starts at
/// `head` and is `count` slots long. `tail` names the most recently filled
/// slot and is `None` whenever the queue is empty.
#[derive(Clone, Debug)]
pub struct PieceQueue<const CAPACITY: usize> {
    head: usize,
    tail: Option<usize>,
    count: usize,
    slots: [Option<Piece>; CAPACITY],
}

impl<const CAPACITY: usize> PieceQueue<CAPACITY> {
    pub const fn new() -> Self {
        Self {
            head: 0,
            tail: None,
            count: 0,
            slots: [None; CAPACITY],
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// `(count, capacity)`, in that order.
    #[inline]
    pub const fn occupancy(&self) -> (usize, usize) {
        (self.count, CAPACITY)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.count == CAPACITY
    }

    #[inline]
    const fn mask(val: usize) -> usize {
        val % CAPACITY
    }

    #[inline]
    fn head_forward(&mut self) {
        self.head = Self::mask(self.head + 1);
    }

    #[inline]
    fn next_tail(&self) -> usize {
        match self.tail {
            Some(tail) => Self::mask(tail + 1),
            None => self.head,
        }
    }

    #[inline]
    const fn masked_rank(&self, rank: usize) -> usize {
        Self::mask(self.head + rank)
    }

    /// Piece at `rank` positions behind the head, if that many are queued.
    pub fn get_by_rank(&self, rank: usize) -> Option<&Piece> {
        if rank >= self.count {
            return None;
        }

        self.slots[self.masked_rank(rank)].as_ref()
    }

    /// Oldest queued piece, the one the next `dequeue` returns.
    pub fn front(&self) -> Option<&Piece> {
        self.get_by_rank(0)
    }

    /// Most recently queued piece.
    pub fn back(&self) -> Option<&Piece> {
        self.tail.and_then(|index| self.slots[index].as_ref())
    }

    /// Pulls one piece from `source` and appends it at the tail.
    ///
    /// The source is only consulted once room is confirmed, so a full queue
    /// never burns an id.
    pub fn enqueue<S>(&mut self, source: &mut S) -> Result<Piece, QueueError>
    where
        S: PieceSource + ?Sized,
    {
        if self.is_full() {
            debug!(capacity = CAPACITY, "enqueue rejected, queue is full");
            return Err(QueueError::QueueFullError(CAPACITY));
        }

        let index = self.next_tail();
        let piece = source.generate();

        self.slots[index] = Some(piece);
        self.tail = Some(index);
        self.count += 1;

        debug!(id = piece.id(), slot = index, count = self.count, "piece enqueued");
        Ok(piece)
    }

    /// Removes and returns the piece at the head.
    pub fn dequeue(&mut self) -> Result<Piece, QueueError> {
        if self.is_empty() {
            self.tail = None;
            debug!("dequeue rejected, queue is empty");
            return Err(QueueError::QueueEmptyError);
        }

        let index = self.head;
        let piece = self.slots[index]
            .take()
            .expect("occupied run should start at head while count > 0");

        self.head_forward();
        self.count -= 1;

        if self.count == 0 {
            self.tail = None;
        }

        debug!(id = piece.id(), slot = index, count = self.count, "piece dequeued");
        Ok(piece)
    }

    /// Enqueues `min(n, CAPACITY - len)` pieces and returns how many went in.
    /// Requests beyond the free room are clamped rather than reported.
    pub fn initialize_full<S>(&mut self, source: &mut S, n: usize) -> usize
    where
        S: PieceSource + ?Sized,
    {
        let mut inserted = 0;

        for _ in 0..n.min(CAPACITY) {
            if self.enqueue(source).is_err() {
                break;
            }
            inserted += 1;
        }

        inserted
    }

    /// Head-to-tail view of the queued pieces. Does not touch the queue, so
    /// calling it again on an unchanged queue yields the same sequence.
    pub fn snapshot(&self) -> Snapshot<'_, CAPACITY> {
        Snapshot {
            queue: self,
            rank: 0,
        }
    }
}

impl<const CAPACITY: usize> Default for PieceQueue<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const CAPACITY: usize> IntoIterator for &'a PieceQueue<CAPACITY> {
    type Item = &'a Piece;
    type IntoIter = Snapshot<'a, CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

#[derive(Clone, Debug)]
pub struct Snapshot<'a, const CAPACITY: usize> {
    queue: &'a PieceQueue<CAPACITY>,
    rank: usize,
}

impl<'a, const CAPACITY: usize> Iterator for Snapshot<'a, CAPACITY> {
    type Item = &'a Piece;

    fn next(&mut self) -> Option<Self::Item> {
        let piece = self.queue.get_by_rank(self.rank)?;
        self.rank += 1;

        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.rank);
        (remaining, Some(remaining))
    }
}

impl<const CAPACITY: usize> ExactSizeIterator for Snapshot<'_, CAPACITY> {}

impl<const CAPACITY: usize> FusedIterator for Snapshot<'_, CAPACITY> {}
