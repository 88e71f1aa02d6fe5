//! Maze Example
//!
//! Finds a way through a small maze with any of the built-in strategies.
//!
//! ```text
//! RUST_LOG=info cargo run --example maze -- astar
//! RUST_LOG=info cargo run --example maze -- wastar:2 maze.dot
//! ```
//!
//! The optional second argument writes the plan as a Graphviz DOT file.

use std::fmt;

use graphsearch::{
    Goal, GraphSearch, Heuristic, PlanVisualizer, Result, SearchConfig, SearchState, Strategy,
};

const MAZE: [&str; 9] = [
    "###########",
    "#S....#...#",
    "#.###.#.#.#",
    "#...#...#.#",
    "###.#####.#",
    "#...#.....#",
    "#.###.###.#",
    "#.........G",
    "###########",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Pos {
    row: usize,
    col: usize,
}

#[derive(Debug, Clone, Copy)]
enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dir::Up => "up",
            Dir::Down => "down",
            Dir::Left => "left",
            Dir::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Pos {
    fn locate(marker: char) -> Option<Pos> {
        MAZE.iter().enumerate().find_map(|(row, line)| {
            line.find(marker).map(|col| Pos { row, col })
        })
    }

    fn step(&self, dir: Dir) -> Option<Pos> {
        let (row, col) = match dir {
            Dir::Up => (self.row.checked_sub(1)?, self.col),
            Dir::Down => (self.row + 1, self.col),
            Dir::Left => (self.row, self.col.checked_sub(1)?),
            Dir::Right => (self.row, self.col + 1),
        };
        let cell = *MAZE.get(row)?.as_bytes().get(col)?;
        (cell != b'#').then_some(Pos { row, col })
    }
}

impl SearchState for Pos {
    type Action = Dir;

    fn applicable_actions(&self, actions: &[Dir]) -> Vec<Dir> {
        actions
            .iter()
            .copied()
            .filter(|d| self.step(*d).is_some())
            .collect()
    }

    fn result(&self, action: &Dir) -> Self {
        self.step(*action).unwrap_or(*self)
    }
}

struct Exit(Pos);

impl Goal<Pos> for Exit {
    fn is_goal(&self, state: &Pos) -> bool {
        *state == self.0
    }
}

/// Manhattan distance to the exit.
#[derive(Default)]
struct Distance {
    exit: Option<Pos>,
}

impl Heuristic<Pos, Exit> for Distance {
    fn prepare(&mut self, goal: &Exit) {
        self.exit = Some(goal.0);
    }

    fn estimate(&self, state: &Pos) -> f32 {
        self.exit
            .map(|e| (e.row.abs_diff(state.row) + e.col.abs_diff(state.col)) as f32)
            .unwrap_or(0.0)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let strategy: Strategy = match args.next() {
        Some(name) => name.parse()?,
        None => Strategy::default(),
    };
    let dot_path = args.next();

    let (Some(start), Some(exit)) = (Pos::locate('S'), Pos::locate('G')) else {
        eprintln!("maze has no start or exit");
        return Ok(());
    };

    println!("Searching with {}", strategy);
    let mut search = GraphSearch::new(SearchConfig::new(strategy).with_report_every(Some(10)));
    let actions = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
    let outcome = search.search(&start, &actions, &Exit(exit), Distance::default());

    if !outcome.found {
        println!("No way out");
        return Ok(());
    }

    let steps: Vec<String> = outcome.plan.iter().map(|d| d.to_string()).collect();
    println!("Plan ({} steps): {}", steps.len(), steps.join(" "));
    println!(
        "Expanded {} states, generated {}, dropped {} duplicates",
        outcome.stats.expanded, outcome.stats.generated, outcome.stats.duplicates
    );

    if let Some(path) = dot_path {
        PlanVisualizer::new().write_to_file(&start, &outcome.plan, &path)?;
        println!("Wrote {}", path);
    }

    Ok(())
}
