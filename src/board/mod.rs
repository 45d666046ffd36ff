//! Board representation for the tower game

pub mod board;


// Re-exports
pub use board::{initial_board, Board};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Row step that moves this color toward the far side.
    /// Red advances toward row 7, Blue toward row 0.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Blue => -1,
        }
    }

    /// Row this color has to reach to win by crossing
    #[inline]
    pub fn goal_row(self) -> u8 {
        match self {
            Color::Red => BOARD_SIZE as u8 - 1,
            Color::Blue => 0,
        }
    }

    /// Rows advanced from this color's own back row
    #[inline]
    pub fn advance(self, row: u8) -> i32 {
        match self {
            Color::Red => i32::from(row),
            Color::Blue => BOARD_SIZE as i32 - 1 - i32::from(row),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four orthogonal step directions, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) step. Up is toward row 0.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Whether both coordinates lie on the board.
    /// `Pos` fields are public, so callers taking outside input check this.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Neighbor one step in `dir`, if it is on the board
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = i32::from(self.row) + i32::from(dr);
        let c = i32::from(self.col) + i32::from(dc);
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance between two positions
    #[inline]
    pub fn distance(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    /// Algebraic-style name: column letter then 1-based row ("a1" is row 0, col 0)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({},{})", self.row, self.col);
        }
        write!(f, "{}{}", char::from(b'a' + self.col), self.row + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
