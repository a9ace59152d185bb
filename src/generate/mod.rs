/// Dataset driver and on-disk task output.
pub mod dataset;
/// Per-task generation: sample, render, animate, prompt.
pub mod task;
