use rand::Rng;
use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 25;

/// A player's 5x5 card: the numbers 1..=25 in a fixed shuffled order.
/// Cell positions never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BingoCard {
    cells: Vec<u8>,
}

impl BingoCard {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::shuffled(&mut rng)
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        use rand::seq::SliceRandom;
        let mut cells: Vec<u8> = (1..=CELL_COUNT as u8).collect();
        cells.shuffle(rng);
        BingoCard { cells }
    }

    pub fn contains(&self, number: u8) -> bool {
        self.cells.contains(&number)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.cells
    }

    /// Fixed layouts for tests that need to know where each number sits.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<u8>) -> Self {
        assert_eq!(cells.len(), CELL_COUNT);
        BingoCard { cells }
    }
}
