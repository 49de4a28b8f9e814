//! Problem sets of paired example grids and their text renderings.

use arpeggio_error::{ChainError, ChainErrorKind};
use std::path::Path;

/// A rectangular grid of cell values.
pub type Grid = Vec<Vec<u8>>;

/// One labeled input/output pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Example {
    /// Input grid shown to the model
    pub input: Grid,
    /// Expected output grid
    pub output: Grid,
}

/// Labeled example pairs split into training and held-out test sets.
///
/// Training examples drive rule induction; test examples are solved with
/// the induced rules and scored against their `output` grids, which are
/// never shown to the generation step.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProblemSet {
    /// Examples used to induce rules
    #[serde(default)]
    pub train: Vec<Example>,
    /// Held-out examples used to score the induced rules
    #[serde(default)]
    pub test: Vec<Example>,
}

impl ProblemSet {
    /// Loads a problem set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not
    /// a valid problem set.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ChainError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ChainError::new(ChainErrorKind::Read(e.to_string())))?;
        serde_json::from_str(&content)
            .map_err(|e| ChainError::new(ChainErrorKind::ProblemSet(e.to_string())))
    }
}

/// Renders a grid as rows of space-separated cell values, one row per line.
pub fn render_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an input/output pair as two labeled grid blocks.
pub fn render_example(example: &Example) -> String {
    format!(
        "Input:\n{}\n\nOutput:\n{}",
        render_grid(&example.input),
        render_grid(&example.output)
    )
}

/// Renders an input grid alone, for test examples whose expected output
/// must stay hidden.
pub fn render_input(input: &Grid) -> String {
    format!("Input:\n{}", render_grid(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid_rows_and_cells() {
        let grid: Grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(render_grid(&grid), "1 2 3\n4 5 6");
    }

    #[test]
    fn test_render_grid_empty() {
        let grid: Grid = vec![];
        assert_eq!(render_grid(&grid), "");
    }

    #[test]
    fn test_render_example_labels_both_grids() {
        let example = Example {
            input: vec![vec![0, 1]],
            output: vec![vec![1, 0]],
        };
        assert_eq!(render_example(&example), "Input:\n0 1\n\nOutput:\n1 0");
    }

    #[test]
    fn test_render_input_omits_output() {
        let rendered = render_input(&vec![vec![7]]);
        assert_eq!(rendered, "Input:\n7");
        assert!(!rendered.contains("Output"));
    }

    #[test]
    fn test_problem_set_defaults_missing_sections() {
        let problem_set: ProblemSet = serde_json::from_str(r#"{"train": []}"#).unwrap();
        assert!(problem_set.train.is_empty());
        assert!(problem_set.test.is_empty());
    }
}
