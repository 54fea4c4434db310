//! Board grid, cell values and coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Default board width
pub const DEFAULT_WIDTH: u8 = 8;

/// Default board height
pub const DEFAULT_HEIGHT: u8 = 8;

/// Smallest board that still has room around the centre pattern
pub const MIN_DIM: u8 = 4;

/// Largest supported board side
pub const MAX_DIM: u8 = 26;

/// Scan directions as (dx, dy), y grows downwards
/// Order: E, W, N, S, NE, NW, SE, SW
pub const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),   // E
    (-1, 0),  // W
    (0, -1),  // N
    (0, 1),   // S
    (1, -1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (-1, 1),  // SW
];

/// Contents of a single board cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' | 'B' | 'b' => Some(Cell::Black),
            'O' | 'o' | 'W' | 'w' => Some(Cell::White),
            _ => None,
        }
    }
}

/// Grid coordinate: `x` is the column, `y` the row, both 0-indexed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Position after rotating a board of the given height 90° clockwise
    pub fn rotated_cw(self, height: u8) -> Pos {
        Pos::new(height - 1 - self.y, self.x)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Pos {
    type Err = EngineError;

    /// Parse `"x,y"`; surrounding whitespace and parentheses are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || EngineError::ParsePos(s.to_string());
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');

        let mut parts = trimmed.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };

        let x = x.trim().parse::<u8>().map_err(|_| err())?;
        let y = y.trim().parse::<u8>().map_err(|_| err())?;
        Ok(Pos::new(x, y))
    }
}

/// Fixed-size grid of cells, stored row-major
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty board; both sides must be even and within `MIN_DIM..=MAX_DIM`
    pub fn new(width: u8, height: u8) -> Result<Self, EngineError> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        })
    }

    /// Board with the opening pattern: four discs around the centre,
    /// same colours on the diagonals
    pub fn standard(width: u8, height: u8) -> Result<Self, EngineError> {
        let mut board = Self::new(width, height)?;
        board.reset_to_opening();
        Ok(board)
    }

    /// Parse a board from text rows (top row first)
    ///
    /// `X`/`B` is black, `O`/`W` is white, `.`/`-` is empty; spaces are ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let parsed: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        let height = u8::try_from(parsed.len()).unwrap_or(u8::MAX);
        let width = parsed
            .first()
            .map(|row| u8::try_from(row.len()).unwrap_or(u8::MAX))
            .unwrap_or(0);

        let mut board = Self::new(width, height)?;
        for (y, row) in parsed.iter().enumerate() {
            if row.len() != width as usize {
                return Err(EngineError::ParseBoard(format!(
                    "row {y} has {} cells, expected {width}",
                    row.len()
                )));
            }
            for (x, &c) in row.iter().enumerate() {
                let cell = Cell::from_symbol(c)
                    .ok_or_else(|| EngineError::ParseBoard(format!("unknown cell symbol {c:?}")))?;
                board.put(Pos::new(x as u8, y as u8), cell);
            }
        }
        Ok(board)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Check if this position is on the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Cell at position, `None` when off the board
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Set a cell; returns the previous value, `None` when off the board
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.index(pos);
        Some(std::mem::replace(&mut self.cells[idx], cell))
    }

    /// Neighbouring position in a direction, `None` past the edge
    pub fn step(&self, pos: Pos, (dx, dy): (i8, i8)) -> Option<Pos> {
        let x = pos.x as i16 + dx as i16;
        let y = pos.y as i16 + dy as i16;
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some(Pos::new(x as u8, y as u8))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos::new(x, y)))
    }

    /// Number of cells holding this value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Columns of cells, indexed `[x][y]`
    pub fn columns(&self) -> Vec<Vec<Cell>> {
        (0..self.width)
            .map(|x| {
                (0..self.height)
                    .map(|y| self.cells[self.index(Pos::new(x, y))])
                    .collect()
            })
            .collect()
    }

    /// Copy of the board rotated 90° clockwise (width and height swap)
    pub fn rotated_cw(&self) -> Board {
        let mut rotated = Board {
            width: self.height,
            height: self.width,
            cells: vec![Cell::Empty; self.cells.len()],
        };
        for pos in self.positions() {
            rotated.put(pos.rotated_cw(self.height), self.cells[self.index(pos)]);
        }
        rotated
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Clear every cell and place the centre pattern
    pub(crate) fn reset_to_opening(&mut self) {
        let (cx, cy) = (self.width / 2, self.height / 2);
        self.cells.fill(Cell::Empty);
        self.put(Pos::new(cx - 1, cy - 1), Cell::White);
        self.put(Pos::new(cx, cy), Cell::White);
        self.put(Pos::new(cx - 1, cy), Cell::Black);
        self.put(Pos::new(cx, cy - 1), Cell::Black);
    }

    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Write a cell known to be in bounds
    pub(crate) fn put(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Read a cell known to be in bounds
    pub(crate) fn at(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.width {
            write!(f, " {}", x % 10)?;
        }
        writeln!(f)?;
        for y in 0..self.height {
            write!(f, "{:>2}", y)?;
            for x in 0..self.width {
                write!(f, " {}", self.at(Pos::new(x, y)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Both sides even and within `MIN_DIM..=MAX_DIM`
pub fn validate_dimensions(width: u8, height: u8) -> Result<(), EngineError> {
    let ok = |d: u8| (MIN_DIM..=MAX_DIM).contains(&d) && d % 2 == 0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimensions { width, height })
    }
}
