//! Plain text storage of the maze grid
//!
//! One line per grid row, one character per square, no separators.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::{Maze, MazeError, Point, Result};

impl Maze {
    /// Parse maze from its text representation
    ///
    /// Start and goal are taken from the first [Maze::S_START] and
    /// [Maze::S_GOAL] in row-major order; any further ones are logged and
    /// left as they are.
    ///
    /// Returns error if the text is empty or only blank lines, rows differ
    /// in length, a square holds an unknown character, or a marker is
    /// missing.
    pub fn parse(text: &str) -> Result<Self> {
        let squares: Vec<Vec<char>> = text.lines().map(|row| row.chars().collect()).collect();
        if squares.iter().all(Vec::is_empty) {
            return Err(MazeError::EmptyInput);
        }
        let expected = squares[0].len();

        let mut start = None;
        let mut goal = None;
        for (y, row) in squares.iter().enumerate() {
            if row.len() != expected {
                return Err(MazeError::RaggedRows {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            for (x, &c) in row.iter().enumerate() {
                let marker = match c {
                    Self::S_START => &mut start,
                    Self::S_GOAL => &mut goal,
                    Self::S_WALL | Self::S_PASSAGE | Self::S_PATH => continue,
                    found => return Err(MazeError::UnexpectedCharacter { found, y, x }),
                };
                if marker.is_some() {
                    warn!("Duplicate marker `{}` at y={}, x={} ignored", c, y, x);
                } else {
                    *marker = Some(Point { y, x });
                }
            }
        }

        let start = start.ok_or(MazeError::MissingMarker(Self::S_START))?;
        let goal = goal.ok_or(MazeError::MissingMarker(Self::S_GOAL))?;
        Ok(Self::from_squares(squares, start, goal))
    }

    /// Read maze from a text file written by [Maze::save_to_file]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let maze = Self::parse(&text)?;
        debug!(
            "Loaded {}x{} grid from {}",
            maze.grid_height(),
            maze.grid_width(),
            path.display()
        );
        Ok(maze)
    }

    /// Write the grid to `path`, each row terminated by a newline
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source: io::Error| MazeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        for row in &self.squares {
            let line: String = row.iter().collect();
            writeln!(writer, "{}", line).map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;
        debug!("Saved maze to {}", path.display());
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
