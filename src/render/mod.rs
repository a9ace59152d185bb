/// Frame buffer type shared by renderers, animators, and sinks.
pub mod backend;
/// Premultiplied RGBA8 layer compositing.
pub mod composite;
/// CPU scene renderer powered by `vello_cpu`.
pub mod cpu;
/// Shape and border geometry.
pub mod geometry;
