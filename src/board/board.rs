//! Board structure: an 8x8 grid of block stacks

use super::{Color, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board. Each cell holds a stack of blocks listed bottom to top;
/// an empty stack is an empty cell. Only the top block of a stack is owned
/// and movable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    stacks: Vec<Vec<Color>>,
}

impl Board {
    /// Empty board (no blocks anywhere)
    pub fn new() -> Self {
        Self {
            stacks: vec![Vec::new(); TOTAL_CELLS],
        }
    }

    /// Blocks at `pos`, bottom first
    #[inline]
    pub fn stack(&self, pos: Pos) -> &[Color] {
        &self.stacks[pos.to_index()]
    }

    /// Stack height at `pos` (0 = empty)
    #[inline]
    pub fn height(&self, pos: Pos) -> usize {
        self.stacks[pos.to_index()].len()
    }

    /// Color of the top block, `None` for an empty cell
    #[inline]
    pub fn top(&self, pos: Pos) -> Option<Color> {
        self.stacks[pos.to_index()].last().copied()
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.stacks[pos.to_index()].is_empty()
    }

    /// Put a block on top of the stack at `pos`.
    /// Used for position setup; game moves go through `rules::apply_move`.
    #[inline]
    pub fn push(&mut self, pos: Pos, color: Color) {
        self.stacks[pos.to_index()].push(color);
    }

    /// Take the top block off the stack at `pos`
    #[inline]
    pub fn pop(&mut self, pos: Pos) -> Option<Color> {
        self.stacks[pos.to_index()].pop()
    }

    /// Replace the whole stack at `pos` (bottom first)
    pub fn set_stack(&mut self, pos: Pos, blocks: &[Color]) {
        self.stacks[pos.to_index()] = blocks.to_vec();
    }

    /// Total blocks on the board. Constant across every reachable position.
    pub fn block_count(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Occupied cells with their top color and height, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Color, usize)> + '_ {
        self.stacks.iter().enumerate().filter_map(|(idx, stack)| {
            stack
                .last()
                .map(|&top| (Pos::from_index(idx), top, stack.len()))
        })
    }

    /// Cells whose top block is `color`, row-major
    pub fn owned_by(&self, color: Color) -> impl Iterator<Item = Pos> + '_ {
        self.occupied()
            .filter(move |&(_, top, _)| top == color)
            .map(|(pos, _, _)| pos)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard starting position: rows 0-3 hold single Red blocks,
/// rows 4-7 single Blue blocks.
pub fn initial_board() -> Board {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE as u8 {
        let color = if row < 4 { Color::Red } else { Color::Blue };
        for col in 0..BOARD_SIZE as u8 {
            board.push(Pos::new(row, col), color);
        }
    }
    board
}
