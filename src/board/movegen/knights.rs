use super::super::{Board, Color, MoveList, Square};

/// Knight jumps as linear a1=0 index offsets.
pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Resolve a linear offset from `from`, rejecting targets that wrapped
/// around a board edge. A knight jump changes rank and file by (1, 2) or
/// (2, 1).
#[inline]
pub(crate) fn knight_target(from: Square, offset: isize) -> Option<Square> {
    let idx = from.index() as isize + offset;
    if !(0..64).contains(&idx) {
        return None;
    }
    let to = Square::from_index(idx as usize);
    let dr = from.rank().abs_diff(to.rank());
    let df = from.file().abs_diff(to.file());
    (dr + df == 3 && dr <= 2 && df <= 2).then_some(to)
}

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &offset in &KNIGHT_OFFSETS {
            if let Some(to) = knight_target(from, offset) {
                self.push_step(from, to, color, moves);
            }
        }
    }
}
