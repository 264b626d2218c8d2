//! Cyclic dominance rules for any odd number of moves.

use super::MoveSet;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one move against another, from the first move's perspective
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same pairing seen from the other side
    pub fn reverse(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// N x N outcome matrix over the cyclic index space Z_N
///
/// `cells[i][j]` is the outcome for move `i` played against move `j`. Each
/// move loses to the (N-1)/2 moves that follow it cyclically and beats the
/// (N-1)/2 moves that precede it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DominanceTable {
    cells: Vec<Vec<Outcome>>,
}

impl DominanceTable {
    /// Build the table for `n` moves.
    ///
    /// # Panics
    ///
    /// Panics if `n` is even or smaller than 3. `MoveSet` never produces
    /// such a size.
    pub fn build(n: usize) -> Self {
        assert!(n >= 3 && n % 2 == 1, "move count must be odd and >= 3");

        let half = (n - 1) / 2;
        let cells = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let diff = (j + n - i) % n;
                        if diff == 0 {
                            Outcome::Draw
                        } else if diff <= half {
                            Outcome::Lose
                        } else {
                            Outcome::Win
                        }
                    })
                    .collect()
            })
            .collect();

        Self { cells }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Outcome for index `i` against index `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Outcome {
        self.cells[i][j]
    }

    pub fn rows(&self) -> &[Vec<Outcome>] {
        &self.cells
    }
}

/// Display grid of the dominance relation, header row and column included
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpTable {
    rows: Vec<Vec<String>>,
}

impl HelpTable {
    /// All rows; row 0 is the header
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.rows.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &self.rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Rule engine for one move set
#[derive(Clone, Debug)]
pub struct Rules {
    moves: MoveSet,
    table: DominanceTable,
}

impl Rules {
    pub fn new(moves: MoveSet) -> Self {
        let table = DominanceTable::build(moves.len());
        Self { moves, table }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn table(&self) -> &DominanceTable {
        &self.table
    }

    /// Outcome for move `a` played against move `b`, from `a`'s perspective
    pub fn result(&self, a: &str, b: &str) -> Result<Outcome, GameError> {
        let i = self.index(a)?;
        let j = self.index(b)?;
        Ok(self.table.get(i, j))
    }

    /// Index-based variant of [`Rules::result`]
    pub fn outcome_at(&self, i: usize, j: usize) -> Outcome {
        self.table.get(i, j)
    }

    /// Moves that `name` beats
    pub fn beaten_by(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.index(name)?;
        Ok(self
            .moves
            .iter()
            .enumerate()
            .filter(|(j, _)| self.table.get(i, *j) == Outcome::Win)
            .map(|(_, m)| m)
            .collect())
    }

    /// Help grid: move names across the top and down the side, each cell
    /// labelled from the perspective of its row's move
    pub fn as_table(&self) -> HelpTable {
        let mut header = Vec::with_capacity(self.moves.len() + 1);
        header.push(String::new());
        header.extend(self.moves.iter().map(str::to_string));

        let mut rows = Vec::with_capacity(self.moves.len() + 1);
        rows.push(header);
        for (i, name) in self.moves.iter().enumerate() {
            let mut row = Vec::with_capacity(self.moves.len() + 1);
            row.push(name.to_string());
            row.extend(self.table.rows()[i].iter().map(|o| o.as_str().to_string()));
            rows.push(row);
        }

        HelpTable { rows }
    }

    fn index(&self, name: &str) -> Result<usize, GameError> {
        self.moves
            .index_of(name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Rules {
        Rules::new(MoveSet::new(["rock", "paper", "scissors"]).unwrap())
    }

    fn spock() -> Rules {
        Rules::new(MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap())
    }

    #[test]
    fn test_rock_beats_scissors() {
        let rules = classic();
        assert_eq!(rules.result("rock", "scissors").unwrap(), Outcome::Win);
        assert_eq!(rules.result("scissors", "rock").unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_scissors_beats_paper() {
        let rules = classic();
        assert_eq!(rules.result("scissors", "paper").unwrap(), Outcome::Win);
        assert_eq!(rules.result("paper", "scissors").unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_paper_beats_rock() {
        let rules = classic();
        assert_eq!(rules.result("paper", "rock").unwrap(), Outcome::Win);
        assert_eq!(rules.result("rock", "paper").unwrap(), Outcome::Lose);
    }

    #[test]
    fn test_draws() {
        let rules = classic();
        for m in ["rock", "paper", "scissors"] {
            assert_eq!(rules.result(m, m).unwrap(), Outcome::Draw);
        }
    }

    #[test]
    fn test_all_outcomes() {
        // All 9 combinations
        let rules = classic();
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for a in rules.moves().iter() {
            for b in rules.moves().iter() {
                match rules.result(a, b).unwrap() {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_five_move_cycle() {
        let rules = spock();
        // rock loses to the two moves after it and beats the two before it
        assert_eq!(rules.result("rock", "paper").unwrap(), Outcome::Lose);
        assert_eq!(rules.result("rock", "scissors").unwrap(), Outcome::Lose);
        assert_eq!(rules.result("rock", "lizard").unwrap(), Outcome::Win);
        assert_eq!(rules.result("rock", "spock").unwrap(), Outcome::Win);
        assert_eq!(rules.result("spock", "rock").unwrap(), Outcome::Lose);
        assert_eq!(rules.beaten_by("rock").unwrap(), vec!["lizard", "spock"]);
    }

    #[test]
    fn test_unknown_move() {
        let rules = classic();
        assert_eq!(
            rules.result("rock", "spock"),
            Err(GameError::UnknownMove("spock".to_string()))
        );
        assert_eq!(
            rules.result("well", "rock"),
            Err(GameError::UnknownMove("well".to_string()))
        );
    }

    #[test]
    fn test_outcome_reverse() {
        assert_eq!(Outcome::Win.reverse(), Outcome::Lose);
        assert_eq!(Outcome::Lose.reverse(), Outcome::Win);
        assert_eq!(Outcome::Draw.reverse(), Outcome::Draw);
    }

    #[test]
    #[should_panic(expected = "odd")]
    fn test_build_rejects_even_size() {
        DominanceTable::build(4);
    }

    #[test]
    fn test_help_table_layout() {
        let table = classic().as_table();
        assert_eq!(table.rows().len(), 4);
        assert!(table.rows().iter().all(|row| row.len() == 4));
        assert_eq!(table.rows()[0], vec!["", "rock", "paper", "scissors"]);
        assert_eq!(table.rows()[1], vec!["rock", "Draw", "Lose", "Win"]);
        assert_eq!(table.cell(2, 1), Some("Win"));
        assert_eq!(table.cell(3, 3), Some("Draw"));
    }

    #[test]
    fn test_help_table_display() {
        let rendered = classic().as_table().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("rock | paper | scissors"));
        assert!(lines[1].starts_with("rock     | Draw"));
    }
}
