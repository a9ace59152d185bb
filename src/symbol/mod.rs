/// Shapes, colors, and the fixed symbol pool.
pub mod pool;
/// Random sequence/replacement sampling.
pub mod sampler;
