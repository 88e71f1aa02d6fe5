use crate::{replay, Result, SearchState};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders a plan as a Graphviz DOT chain of states joined by actions.
///
/// The plan is replayed from the initial state, so each drawn state is the one
/// the plan actually passes through. The last state is highlighted.
#[derive(Debug, Default)]
pub struct PlanVisualizer;

impl PlanVisualizer {
    pub fn new() -> Self {
        Self
    }

    /// Writes the DOT graph for `plan` from `initial` into `out`.
    pub fn render<S, W>(&self, initial: &S, plan: &[S::Action], out: &mut W) -> Result<()>
    where
        S: SearchState + fmt::Display,
        S::Action: fmt::Display,
        W: Write,
    {
        replay(initial, plan)?;

        writeln!(out, "digraph Plan {{")?;
        writeln!(out, "    rankdir=LR;")?;
        writeln!(
            out,
            "    node [shape=box, style=filled, fillcolor=lightblue];"
        )?;
        writeln!(out, "    edge [fontsize=10];")?;

        writeln!(
            out,
            "    s0 [label=\"Initial State\\n{}\", fillcolor=lightgreen];",
            escape(&initial.to_string())
        )?;

        let mut state = initial.clone();
        for (i, action) in plan.iter().enumerate() {
            state = state.result(action);
            let step = i + 1;
            let fill = if step == plan.len() {
                ", fillcolor=lightpink"
            } else {
                ""
            };
            writeln!(
                out,
                "    s{} [label=\"Step {}\\n{}\"{}];",
                step,
                step,
                escape(&state.to_string()),
                fill
            )?;
            writeln!(
                out,
                "    s{} -> s{} [label=\"{}\"];",
                i,
                step,
                escape(&action.to_string())
            )?;
        }

        writeln!(out, "}}")?;
        Ok(())
    }

    /// Like [`render`](Self::render), writing to a new file at `path`.
    pub fn write_to_file<S>(
        &self,
        initial: &S,
        plan: &[S::Action],
        path: impl AsRef<Path>,
    ) -> Result<()>
    where
        S: SearchState + fmt::Display,
        S::Action: fmt::Display,
    {
        let mut out = BufWriter::new(File::create(path)?);
        self.render(initial, plan, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Escapes a label for use inside a quoted DOT string.
fn escape(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FactAction, FactState, SearchError};

    fn setup() -> (FactState, Vec<FactAction>) {
        let mut gather = FactAction::new("gather_wood", 1.0).unwrap();
        gather.preconditions.set("has_axe", "true");
        gather.effects.set("has_wood", "true");

        let mut build = FactAction::new("build_house", 2.0).unwrap();
        build.preconditions.set("has_wood", "true");
        build.effects.set("has_house", "true");

        let mut initial = FactState::new();
        initial.set("has_axe", "true");
        (initial, vec![gather, build])
    }

    #[test]
    fn test_render_plan() {
        let (initial, plan) = setup();
        let mut out: Vec<u8> = Vec::new();
        PlanVisualizer::new().render(&initial, &plan, &mut out).unwrap();

        let dot = String::from_utf8(out).unwrap();
        assert!(dot.starts_with("digraph Plan {"));
        assert!(dot.contains("s0 [label=\"Initial State\\nhas_axe: true\""));
        assert!(dot.contains("s0 -> s1 [label=\"gather_wood\"];"));
        assert!(dot.contains("s1 -> s2 [label=\"build_house\"];"));
        assert!(dot.contains("has_wood: true\", fillcolor=lightpink"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_render_rejects_invalid_plan() {
        let (initial, mut plan) = setup();
        let mut smelt = FactAction::new("smelt_gold", 3.0).unwrap();
        smelt.preconditions.set("has_ore", "true");
        plan.insert(1, smelt);

        let mut out: Vec<u8> = Vec::new();
        let result = PlanVisualizer::new().render(&initial, &plan, &mut out);
        assert!(matches!(
            result,
            Err(SearchError::ActionNotApplicable { step: 1, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a \"b\"\nc\\"), "a \\\"b\\\"\\nc\\\\");
    }

    #[test]
    fn test_write_to_file() {
        let (initial, plan) = setup();
        let path = std::env::temp_dir().join("graphsearch_test_plan.dot");
        PlanVisualizer::new()
            .write_to_file(&initial, &plan, &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("gather_wood"));

        std::fs::remove_file(&path).unwrap();
    }
}
