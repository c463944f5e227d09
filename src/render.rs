use std::fmt;

use crate::queue::PieceQueue;

impl<const CAPACITY: usize> fmt::Display for PieceQueue<CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, capacity) = self.occupancy();
        writeln!(f, "--- NEXT PIECES ({}/{}) ---", count, capacity)?;

        if self.is_empty() {
            return writeln!(f, "Pieces: [EMPTY]");
        }

        write!(f, "Pieces: ")?;
        for (rank, piece) in self.snapshot().enumerate() {
            if rank > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", piece)?;
        }
        writeln!(f)?;

        writeln!(f, "--- END OF QUEUE ---")
    }
}
