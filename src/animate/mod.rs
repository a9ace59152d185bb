/// Hold → cross-fade → hold frame sequence for ground-truth videos.
pub mod morph;
