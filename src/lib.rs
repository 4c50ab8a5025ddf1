//! Carve a perfect maze, store it as text and find the way through it
//!
//! A maze of `width × height` cells lives on a character grid of
//! `(2*height+1) × (2*width+1)` squares: odd rows and columns hold the cells,
//! even ones hold the walls between them.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_carver::{maze_generator::MazeGenerator, Maze};
//!
//! let mut maze = Maze::new(6, 4).unwrap();
//! MazeGenerator::new(Some(7)).carve(&mut maze, 0, 0);
//! assert!(maze.solve().unwrap());
//! println!("{maze}");
//! ```
//!
//! ## Parse a stored maze
//! ```
//! use maze_carver::{Maze, Point};
//!
//! let text = "
//! ########
//! #S#   #
//! ## # # #
//! ##   #E#
//! ########";
//! let mut maze: Maze = text.trim().parse().unwrap();
//! assert_eq!(maze.start(), Some(Point::new(1, 1)));
//! assert_eq!(maze.goal(), Some(Point::new(3, 5)));
//! assert!(maze.solve().unwrap());
//! assert_eq!(maze.path_len(), 9);
//! ```

use std::fmt;

use itertools::Itertools;

pub mod error;
pub mod maze_generator;
mod persistence;
mod solver;

pub use error::{MazeError, Result};

/// Location in the maze, either on the character grid or on the cell grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Point {
    pub y: usize,
    pub x: usize,
}

impl Point {
    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }
}

/// Compass direction of a single step
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order the solver explores them
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Change in (y, x) for one step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Take one step from `from`, or `None` when it would leave the
    /// non-negative quadrant. Upper bounds are up to the caller.
    pub fn step(self, from: Point) -> Option<Point> {
        let (dy, dx) = self.delta();
        Some(Point {
            y: from.y.checked_add_signed(dy)?,
            x: from.x.checked_add_signed(dx)?,
        })
    }
}

/// Rectangular maze on a character grid
#[derive(Clone, Debug)]
pub struct Maze {
    /// Character grid, `grid_height` rows of `grid_width` squares
    squares: Vec<Vec<char>>,
    /// Number of cells along x
    width: usize,
    /// Number of cells along y
    height: usize,
    /// Grid position of [Maze::S_START]
    start: Option<Point>,
    /// Grid position of [Maze::S_GOAL]
    goal: Option<Point>,
    /// Cell where carving started; only known for generated mazes
    logical_start: Option<Point>,
    /// Cell holding the goal; only known for generated mazes
    logical_goal: Option<Point>,
}

impl Maze {
    pub const S_WALL: char = '#';
    pub const S_PASSAGE: char = ' ';
    pub const S_START: char = 'S';
    pub const S_GOAL: char = 'E';
    pub const S_PATH: char = '*';

    /// Create an uncarved maze of `width × height` cells, walls everywhere.
    ///
    /// Returns [MazeError::InvalidArgument] if either dimension is zero or
    /// the grid would not fit in memory addressing.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = || MazeError::InvalidArgument { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let grid_width = width
            .checked_mul(2)
            .and_then(|w| w.checked_add(1))
            .ok_or_else(invalid)?;
        let grid_height = height
            .checked_mul(2)
            .and_then(|h| h.checked_add(1))
            .ok_or_else(invalid)?;

        Ok(Self {
            squares: vec![vec![Self::S_WALL; grid_width]; grid_height],
            width,
            height,
            start: None,
            goal: None,
            logical_start: None,
            logical_goal: None,
        })
    }

    /// Build a maze around an already validated grid.
    ///
    /// Cell dimensions are derived as `(grid_dim - 1) / 2`, which is exact
    /// only for grids this crate wrote itself.
    fn from_squares(squares: Vec<Vec<char>>, start: Point, goal: Point) -> Self {
        let grid_height = squares.len();
        let grid_width = squares.first().map_or(0, Vec::len);
        Self {
            squares,
            width: grid_width.saturating_sub(1) / 2,
            height: grid_height.saturating_sub(1) / 2,
            start: Some(start),
            goal: Some(goal),
            logical_start: None,
            logical_goal: None,
        }
    }

    /// Number of cells along x
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along y
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid_width(&self) -> usize {
        self.squares.first().map_or(0, Vec::len)
    }

    pub fn grid_height(&self) -> usize {
        self.squares.len()
    }

    /// Grid position of the start marker, once generated or loaded
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Grid position of the goal marker, once generated or loaded
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn logical_start(&self) -> Option<Point> {
        self.logical_start
    }

    pub fn logical_goal(&self) -> Option<Point> {
        self.logical_goal
    }

    /// The character grid, row by row
    pub fn squares(&self) -> &[Vec<char>] {
        &self.squares
    }

    /// Character at grid position `p`, `None` outside the grid
    pub fn square(&self, p: Point) -> Option<char> {
        self.squares.get(p.y)?.get(p.x).copied()
    }

    /// Map cell `(y, x)` onto its grid square.
    ///
    /// Coordinates past the last cell are clamped onto it.
    pub fn logical_to_grid(&self, y: usize, x: usize) -> Point {
        let y = y.min(self.height.saturating_sub(1));
        let x = x.min(self.width.saturating_sub(1));
        Point {
            y: 2 * y + 1,
            x: 2 * x + 1,
        }
    }

    /// Neighbouring cell of `cell` in `direction`, if it is inside the maze
    fn logical_neighbor(&self, cell: Point, direction: Direction) -> Option<Point> {
        direction
            .step(cell)
            .filter(|n| n.y < self.height && n.x < self.width)
    }

    /// Neighbouring grid square of `p` in `direction`, if it is on the grid
    fn grid_neighbor(&self, p: Point, direction: Direction) -> Option<Point> {
        direction
            .step(p)
            .filter(|n| n.y < self.grid_height() && n.x < self.grid_width())
    }

    fn set(&mut self, p: Point, c: char) {
        self.squares[p.y][p.x] = c;
    }

    /// Number of squares currently marked as part of the solution
    pub fn path_len(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&c| c == Self::S_PATH)
            .count()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.squares.iter().map(|row| row.iter().join("")).join("\n");
        write!(f, "{}", rows)
    }
}
