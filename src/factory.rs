use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::piece::{Piece, PieceKind};

/// Anything that can hand out fresh pieces for a queue to store.
pub trait PieceSource {
    fn generate(&mut self) -> Piece;
}

/// Generates pieces with a uniformly random kind and a strictly increasing id.
///
/// The id counter lives here and is the only source of ids for the lifetime
/// of the factory: it starts at 0, advances by exactly one per generated
/// piece, and is never reset.
#[derive(Clone, Debug)]
pub struct PieceFactory {
    rng: StdRng,
    next_id: u64,
}

impl PieceFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Seeds from the wall clock, so every run sees a different sequence of kinds.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    #[inline]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    fn draw_kind(&mut self) -> PieceKind {
        // the label set is a non-empty constant
        PieceKind::all()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::I)
    }
}

impl PieceSource for PieceFactory {
    fn generate(&mut self) -> Piece {
        let kind = self.draw_kind();
        let piece = Piece::new(kind, self.next_id);
        self.next_id += 1;

        piece
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
