//! Random debug boards for offline runs.

use nukigata_board::Board;
use rand::Rng;
use rand::seq::SliceRandom;

/// Generates a random `width × height` problem pair.
///
/// The start board draws every cell uniformly from `0..=3`; the goal is a
/// shuffle of the same cells, so it is always reachable.
pub fn random_boards(width: i32, height: i32, rng: &mut impl Rng) -> (Board, Board) {
    let field: Vec<u8> = (0..width * height).map(|_| rng.random_range(0..4)).collect();
    let mut shuffled = field.clone();
    shuffled.shuffle(rng);
    (
        Board::new(width, height, field),
        Board::new(width, height, shuffled),
    )
}
