//! Values shared by every stage of the pipeline: [`Element`], its
//! presentation [`ElementState`], and the immutable [`Frame`] snapshot.

/// Why an element is highlighted in a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementState {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
}

impl ElementState {
    pub const ALL: [ElementState; 5] = [
        ElementState::Default,
        ElementState::Comparing,
        ElementState::Swapping,
        ElementState::Sorted,
        ElementState::Pivot,
    ];

    /// Human-readable label used by the legend
    pub fn label(self) -> &'static str {
        match self {
            ElementState::Default => "Default",
            ElementState::Comparing => "Comparing",
            ElementState::Swapping => "Swapping",
            ElementState::Sorted => "Sorted",
            ElementState::Pivot => "Pivot",
        }
    }
}

/// A single bar of the visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub value: u32,
    pub state: ElementState,
}

impl Element {
    pub fn new(value: u32) -> Self {
        Element {
            value,
            state: ElementState::Default,
        }
    }

    /// Copy of this element with its presentation state cleared
    pub fn cleared(self) -> Self {
        Element::new(self.value)
    }
}

/// Build `Default` elements from raw values
pub fn elements_from_values(values: &[u32]) -> Vec<Element> {
    values.iter().copied().map(Element::new).collect()
}

/// Snapshot of the array and running counters after one micro-operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub array: Vec<Element>,
    pub comparisons: u64,
    pub swaps: u64,
}

impl Frame {
    /// The untouched input: every element `Default`, both counters zero
    pub fn initial(input: &[Element]) -> Self {
        Frame {
            array: input.iter().map(|e| e.cleared()).collect(),
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn values(&self) -> Vec<u32> {
        self.array.iter().map(|e| e.value).collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.array.windows(2).all(|w| w[0].value <= w[1].value)
    }

    pub fn all_in_state(&self, state: ElementState) -> bool {
        self.array.iter().all(|e| e.state == state)
    }

    /// Indices carrying `state` in this frame
    pub fn indices_in_state(&self, state: ElementState) -> Vec<usize> {
        self.array
            .iter()
            .enumerate()
            .filter(|(_, e)| e.state == state)
            .map(|(i, _)| i)
            .collect()
    }
}
