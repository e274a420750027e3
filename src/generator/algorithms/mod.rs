//! Instrumented simulations, one module per algorithm.
//!
//! Each routine receives a [`Recorder`](super::recorder::Recorder) holding a
//! working copy of at least one element and drives it to a fully sorted,
//! fully `Sorted`-tagged final frame.

pub(crate) mod bubble;
pub(crate) mod insertion;
pub(crate) mod merge;
pub(crate) mod quick;
pub(crate) mod selection;
