//! Depth-first path search through a maze grid

use log::debug;

use crate::{Direction, Maze, MazeError, Point, Result};

impl Maze {
    /// Solve maze
    ///
    /// Look for a path from the start marker to the goal marker and mark
    /// it with [Maze::S_PATH]. Marks from a previous solve are removed
    /// first, so solving twice gives the same grid.
    ///
    /// Returns `Ok(false)` and leaves no marks if the goal is unreachable.
    /// Fails with [MazeError::InvalidState] if the markers are missing from
    /// the grid.
    pub fn solve(&mut self) -> Result<bool> {
        let (start, goal) = self.markers()?;

        for square in self.squares.iter_mut().flatten() {
            if *square == Self::S_PATH {
                *square = Self::S_PASSAGE;
            }
        }

        if start == goal {
            return Ok(true);
        }

        let found = self.search(start, goal);
        self.set(start, Self::S_START);
        debug!(
            "Search from {:?} to {:?}: found={}, path length {}",
            start,
            goal,
            found,
            self.path_len()
        );
        Ok(found)
    }

    /// Start and goal positions, checked against the grid
    fn markers(&self) -> Result<(Point, Point)> {
        let start = self
            .start
            .ok_or_else(|| MazeError::InvalidState("start position is not set".into()))?;
        let goal = self
            .goal
            .ok_or_else(|| MazeError::InvalidState("goal position is not set".into()))?;

        if self.square(goal) != Some(Self::S_GOAL) {
            return Err(MazeError::InvalidState(format!(
                "no goal marker at {:?}",
                goal
            )));
        }
        if start != goal && self.square(start) != Some(Self::S_START) {
            return Err(MazeError::InvalidState(format!(
                "no start marker at {:?}",
                start
            )));
        }
        Ok((start, goal))
    }

    /// Depth-first search over grid squares, walls are impassable
    ///
    /// Squares entered are marked with [Maze::S_PATH]. A square whose
    /// neighbours all fail gets its original character back, so only the
    /// route to the goal stays marked. Visited squares stay visited after
    /// backtracking: any path will do, not the shortest one.
    ///
    /// Each stack frame holds the square, its character before marking,
    /// and the index of the next direction to try.
    fn search(&mut self, start: Point, goal: Point) -> bool {
        let mut visited = vec![vec![false; self.grid_width()]; self.grid_height()];
        visited[start.y][start.x] = true;
        let mut stack: Vec<(Point, char, usize)> = vec![(start, Self::S_START, 0)];

        while let Some((pos, original, next_direction)) = stack.last_mut() {
            let (pos, original) = (*pos, *original);
            let Some(&direction) = Direction::ALL.get(*next_direction) else {
                // Dead end, roll back
                stack.pop();
                if pos != start {
                    self.set(pos, original);
                }
                continue;
            };
            *next_direction += 1;

            let Some(next) = self.grid_neighbor(pos, direction) else {
                continue;
            };
            if next == goal {
                return true;
            }
            if visited[next.y][next.x] {
                continue;
            }
            match self.square(next) {
                Some(Self::S_WALL) | None => continue,
                Some(c) => {
                    visited[next.y][next.x] = true;
                    self.set(next, Self::S_PATH);
                    stack.push((next, c, 0));
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{maze_generator::MazeGenerator, Maze, MazeError, Point};

    fn parse(text: &str) -> Maze {
        text.trim().parse().unwrap()
    }

    /// Open squares next to `p` that belong to the route
    fn route_neighbors(maze: &Maze, p: Point) -> usize {
        [(-1, 0), (1, 0), (0, 1), (0, -1)]
            .iter()
            .filter_map(|&(dy, dx)| {
                Some(Point::new(
                    p.y.checked_add_signed(dy)?,
                    p.x.checked_add_signed(dx)?,
                ))
            })
            .filter(|&n| {
                matches!(
                    maze.square(n),
                    Some(Maze::S_PATH | Maze::S_START | Maze::S_GOAL)
                )
            })
            .count()
    }

    /// Route is a chain: ends have one route neighbour, the rest two
    fn assert_single_route(maze: &Maze) {
        let start = maze.start().unwrap();
        let goal = maze.goal().unwrap();
        assert_eq!(route_neighbors(maze, start), 1);
        assert_eq!(route_neighbors(maze, goal), 1);
        for (y, row) in maze.squares().iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == Maze::S_PATH {
                    assert_eq!(route_neighbors(maze, Point::new(y, x)), 2, "at {y},{x}");
                }
            }
        }

        // Walk the chain from start; it has to end at the goal
        let mut prev = start;
        let mut pos = start;
        let mut steps = 0;
        while pos != goal {
            let next = [(-1, 0), (1, 0), (0, 1), (0, -1)]
                .iter()
                .filter_map(|&(dy, dx)| {
                    Some(Point::new(
                        pos.y.checked_add_signed(dy)?,
                        pos.x.checked_add_signed(dx)?,
                    ))
                })
                .find(|&n| {
                    n != prev && matches!(maze.square(n), Some(Maze::S_PATH | Maze::S_GOAL))
                })
                .unwrap();
            prev = pos;
            pos = next;
            steps += 1;
        }
        assert_eq!(steps, maze.path_len() + 1);
    }

    #[test]
    fn solve_corridor() {
        let mut maze = parse(
            "
#####
#S E#
#####",
        );
        assert!(maze.solve().unwrap());
        assert_eq!(maze.to_string(), "#####\n#S*E#\n#####");
    }

    #[test]
    fn dead_ends_are_left_unmarked() {
        let mut maze = parse(
            "
#######
#S   E#
# ### #
#   # #
#######",
        );
        assert!(maze.solve().unwrap());
        assert_eq!(
            maze.to_string(),
            "
#######
#S***E#
# ### #
#   # #
#######"
                .trim()
        );
        assert_single_route(&maze);
    }

    #[test]
    fn unreachable_goal_leaves_grid_untouched() {
        let text = "
#######
#S  # #
# # # #
#   #E#
#######";
        let mut maze = parse(text);
        assert!(!maze.solve().unwrap());
        assert_eq!(maze.to_string(), text.trim());
    }

    #[test]
    fn previous_marks_are_cleared() {
        let mut stale = parse(
            "
#######
#S****#
# # # #
#   #E#
#######",
        );
        let mut clean = parse(
            "
#######
#S    #
# # # #
#   #E#
#######",
        );
        assert_eq!(stale.solve().unwrap(), clean.solve().unwrap());
        assert_eq!(stale.to_string(), clean.to_string());
        assert_eq!(stale.square(Point::new(1, 2)), Some(Maze::S_PASSAGE));
    }

    #[test]
    fn solving_twice_is_idempotent() {
        let mut maze = Maze::new(14, 11).unwrap();
        MazeGenerator::new(Some(3)).carve(&mut maze, 0, 0);

        assert!(maze.solve().unwrap());
        let first = maze.to_string();
        assert!(maze.solve().unwrap());
        assert_eq!(maze.to_string(), first);
    }

    #[test]
    fn generated_mazes_have_single_route() {
        for seed in 0..20 {
            let mut maze = Maze::new(3 + seed as usize, 9).unwrap();
            MazeGenerator::new(Some(seed)).carve(&mut maze, seed as usize % 3, 4);
            assert!(maze.solve().unwrap());
            assert_single_route(&maze);
            assert_eq!(maze.square(maze.start().unwrap()), Some(Maze::S_START));
            assert_eq!(maze.square(maze.goal().unwrap()), Some(Maze::S_GOAL));
        }
    }

    #[test]
    fn large_maze_solves_without_recursion() {
        let mut maze = Maze::new(250, 250).unwrap();
        MazeGenerator::new(Some(1)).carve(&mut maze, 0, 0);
        assert!(maze.solve().unwrap());
        assert_single_route(&maze);
    }

    #[test]
    fn single_cell_is_trivially_solved() {
        let mut maze = Maze::new(1, 1).unwrap();
        maze.generate(0, 0);
        assert!(maze.solve().unwrap());
        assert_eq!(maze.to_string(), "###\n#E#\n###");
    }

    #[test]
    fn unsolvable_without_markers() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert!(matches!(maze.solve(), Err(MazeError::InvalidState(_))));
    }

    #[test]
    fn overwritten_marker_is_invalid_state() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.generate(0, 0);
        let start = maze.start().unwrap();
        maze.set(start, Maze::S_PASSAGE);
        assert!(matches!(maze.solve(), Err(MazeError::InvalidState(_))));

        let mut maze = Maze::new(3, 3).unwrap();
        maze.generate(0, 0);
        let goal = maze.goal().unwrap();
        maze.set(goal, Maze::S_WALL);
        assert!(matches!(maze.solve(), Err(MazeError::InvalidState(_))));
    }
}
