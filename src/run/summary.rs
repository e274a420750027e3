//! Plain-text statistics for a compiled run

use crate::generator::Algorithm;
use crate::model::Element;
use crate::run::Run;
use std::fmt;

/// What `--summary` prints instead of opening the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub input: Vec<u32>,
    pub output: Vec<u32>,
    pub frames: usize,
    pub comparisons: u64,
    pub swaps: u64,
}

impl Summary {
    pub fn new(algorithm: Algorithm, input: &[Element], run: &Run) -> Self {
        let (comparisons, swaps) = run.totals();
        let input: Vec<u32> = input.iter().map(|e| e.value).collect();
        let output = run.last().map(|f| f.values()).unwrap_or_else(|| input.clone());
        Summary {
            algorithm,
            input,
            output,
            frames: run.len(),
            comparisons,
            swaps,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Algorithm:   {} ({})",
            self.algorithm.name(),
            self.algorithm.id()
        )?;
        writeln!(f, "Input:       {:?}", self.input)?;
        writeln!(f, "Frames:      {}", self.frames)?;
        writeln!(f, "Comparisons: {}", self.comparisons)?;
        writeln!(f, "Swaps:       {}", self.swaps)?;
        write!(f, "Output:      {:?}", self.output)
    }
}
