//! Stateless text rendering for the 2048 grid and status banners.

use strictly_2048::Grid;

/// Width each cell value is padded to.
const CELL_WIDTH: usize = 5;

/// Renders the game as plain text.
///
/// Pure presentation: reads a grid snapshot and score, never touches the
/// engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Boxed grid, one line per row, framed by `|` borders that scale
    /// with the grid size. Empty cells render blank.
    pub fn grid(&self, grid: &Grid) -> String {
        let border = Self::border(grid.size());
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');

        for row in grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|value| match *value {
                    0 => " ".repeat(CELL_WIDTH),
                    v => format!("{:<width$}", v, width = CELL_WIDTH),
                })
                .collect();
            out.push_str("||");
            out.push_str(&cells.join("|"));
            out.push_str("||\n");
        }

        out.push_str(&border);
        out.push('\n');
        out
    }

    fn border(size: usize) -> String {
        let inner = "|".repeat(CELL_WIDTH * size + size.saturating_sub(1));
        format!("||{inner}||")
    }

    /// Score line.
    pub fn score(&self, score: u64) -> String {
        format!("Score: {score}\n")
    }

    /// Banner shown at the start of every game.
    pub fn welcome(&self) -> String {
        banner(&[
            "-------------------------------------------",
            "              Welcome to 2048              ",
            "-------------------------------------------",
        ])
    }

    /// Key bindings.
    pub fn controls(&self) -> String {
        banner(&[
            "Basic Rules:",
            "New Game: n | Quit Game: q",
            "Move Up: w | Move Down: s | Move Right: d | Move left: a",
        ])
    }

    /// Shown once per game when the winning tile first appears.
    pub fn win(&self) -> String {
        "~~~~~~~~~~~~~~~~~~~ You Won! ~~~~~~~~~~~~~~~~~~~~\n".to_string()
    }

    /// Shown when no direction can move.
    pub fn game_over(&self) -> String {
        "!!!!!!!!!!!!!!!!!!! Game Over !!!!!!!!!!!!!!!!!!!!\n".to_string()
    }

    /// Shown when the program exits.
    pub fn ending(&self) -> String {
        banner(&[
            "-------------------------------------------------",
            "             Thank You For Playing !!!           ",
            "-------------------------------------------------",
        ])
    }
}

fn banner(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
