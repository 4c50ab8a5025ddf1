//! Maze generation

use std::array;

use log::{debug, warn};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Direction, Maze, Point};

/// Maze generator owning its random source.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Seeded generator for reproducible mazes, entropy-seeded otherwise
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Carve `maze` into a perfect maze, starting from cell
    /// (`start_y`, `start_x`).
    pub fn carve<'a>(
        &mut self,
        maze: &'a mut Maze,
        start_x: usize,
        start_y: usize,
    ) -> &'a mut Maze {
        maze.generate_with(start_x, start_y, &mut self.random)
    }
}

/// Directions of one cell, in the random order they will be tried
type Frame = (Point, array::IntoIter<Direction, 4>);

impl Maze {
    /// Carve a perfect maze using an entropy-seeded random source.
    ///
    /// See [Maze::generate_with].
    pub fn generate(&mut self, start_x: usize, start_y: usize) -> &mut Self {
        MazeGenerator::new(None).carve(self, start_x, start_y)
    }

    /// Carve a perfect maze with a randomized recursive backtracker.
    ///
    /// Carving starts from cell (`start_y`, `start_x`); a coordinate outside
    /// the maze is reset to 0. The start cell gets [Maze::S_START] and the
    /// bottom-right cell [Maze::S_GOAL]. A start on the goal cell is moved to
    /// cell (0, 0), except in a 1×1 maze where both share the only cell and
    /// the goal marker wins.
    ///
    /// Any earlier carving is discarded first.
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        start_x: usize,
        start_y: usize,
        random: &mut R,
    ) -> &mut Self {
        if self.width == 0 || self.height == 0 {
            warn!("Maze has no cells to carve, leaving grid untouched");
            return self;
        }
        let start_x = if start_x < self.width { start_x } else { 0 };
        let start_y = if start_y < self.height { start_y } else { 0 };
        let logical_goal = Point::new(self.height - 1, self.width - 1);
        let mut logical_start = Point::new(start_y, start_x);
        if logical_start == logical_goal && (self.width, self.height) != (1, 1) {
            warn!(
                "Start cell {:?} is the goal cell, starting from (0, 0) instead",
                logical_start
            );
            logical_start = Point::new(0, 0);
        }
        debug!(
            "Generating {}x{} maze from cell {:?}",
            self.width, self.height, logical_start
        );

        for square in self.squares.iter_mut().flatten() {
            *square = Self::S_WALL;
        }
        self.build_maze(logical_start, random);

        let start = self.logical_to_grid(logical_start.y, logical_start.x);
        let goal = self.logical_to_grid(logical_goal.y, logical_goal.x);
        self.set(start, Self::S_START);
        if start == goal {
            debug!("Start and goal share cell {:?}, goal marker wins", start);
        } else if self.square(goal) != Some(Self::S_PASSAGE) {
            warn!(
                "Goal square {:?} was not carved, holds {:?}; forcing goal marker",
                goal,
                self.square(goal)
            );
        }
        self.set(goal, Self::S_GOAL);

        self.start = Some(start);
        self.goal = Some(goal);
        self.logical_start = Some(logical_start);
        self.logical_goal = Some(logical_goal);
        self
    }

    /// Build maze depth first
    ///
    /// From the current cell, try the directions in random order. A
    /// neighbour whose square is still a wall has not been visited: carve
    /// the wall between the two cells and continue from the neighbour.
    /// When a cell runs out of directions, return to the previous one.
    ///
    /// Frames on `stack` stand in for recursive calls, so deep mazes do not
    /// exhaust the call stack.
    fn build_maze<R: Rng + ?Sized>(&mut self, from: Point, random: &mut R) {
        let first = self.logical_to_grid(from.y, from.x);
        self.set(first, Self::S_PASSAGE);
        let mut stack: Vec<Frame> = vec![(from, Self::shuffled_directions(random))];

        while let Some((cell, directions)) = stack.last_mut() {
            let cell = *cell;
            let Some(direction) = directions.next() else {
                stack.pop();
                continue;
            };
            let Some(next) = self.logical_neighbor(cell, direction) else {
                continue;
            };

            let next_square = self.logical_to_grid(next.y, next.x);
            if self.square(next_square) == Some(Self::S_WALL) {
                // Remove wall between current cell and neighbour
                let square = self.logical_to_grid(cell.y, cell.x);
                if let Some(wall) = direction.step(square) {
                    self.set(wall, Self::S_PASSAGE);
                }
                self.set(next_square, Self::S_PASSAGE);

                stack.push((next, Self::shuffled_directions(random)));
            }
        }
    }

    fn shuffled_directions<R: Rng + ?Sized>(random: &mut R) -> array::IntoIter<Direction, 4> {
        let mut directions = Direction::ALL;
        directions.shuffle(random);
        directions.into_iter()
    }
}
