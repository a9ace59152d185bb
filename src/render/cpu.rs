use crate::config::TaskConfig;
use crate::foundation::core::{BezPath, Canvas, Point, Position, Rgb8};
use crate::foundation::error::{SwapError, SwapResult};
use crate::render::backend::FrameRGBA;
use crate::render::composite::over_in_place;
use crate::render::geometry::{Outline, border_rect};
use crate::symbol::pool::Symbol;
use crate::symbol::sampler::TaskData;

/// Layers fainter than this are skipped instead of composited.
pub const MIN_LAYER_OPACITY: f32 = 0.01;

/// One drawing instruction, in canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled, outlined symbol centered on a slot.
    Symbol {
        /// What to draw.
        symbol: Symbol,
        /// Slot center.
        at: Position,
    },
    /// The rectangular frame marking the substitution target.
    TargetBorder {
        /// Slot center.
        at: Position,
    },
}

/// Ops rasterized into their own transparent buffer, then composited at `opacity`.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Ops drawn into the layer, in order.
    pub ops: Vec<DrawOp>,
    /// Global opacity applied when compositing, `0..=1`.
    pub opacity: f32,
}

impl Layer {
    /// A single-op layer.
    pub fn single(op: DrawOp, opacity: f32) -> Self {
        Self {
            ops: vec![op],
            opacity,
        }
    }
}

/// CPU renderer for symbol rows, built once per configuration.
#[derive(Clone, Debug)]
pub struct SceneRenderer {
    canvas: Canvas,
    width: u16,
    height: u16,
    background: Rgb8,
    half_size: f64,
    outline_width: f64,
    border_color: Rgb8,
    border_width: f64,
    border_half_extent: f64,
}

impl SceneRenderer {
    /// Create a renderer from a configuration.
    pub fn new(config: &TaskConfig) -> SwapResult<Self> {
        let canvas = Canvas::new(config.image_size.width, config.image_size.height)?;
        let half = config.half_size();
        Ok(Self {
            canvas,
            // Canvas::new bounds both sides to u16.
            width: canvas.width as u16,
            height: canvas.height as u16,
            background: config.background,
            half_size: f64::from(half),
            outline_width: f64::from(config.outline_width),
            border_color: config.target_border_color,
            border_width: f64::from(config.target_border_width),
            border_half_extent: f64::from(half + config.target_border_padding),
        })
    }

    /// Draw `symbols` at `positions` on a blank canvas, framing `target` if given.
    pub fn render(
        &self,
        symbols: &[Symbol],
        positions: &[Position],
        target: Option<usize>,
    ) -> SwapResult<FrameRGBA> {
        debug_assert_eq!(symbols.len(), positions.len(), "one position per symbol");
        debug_assert!(target.is_none_or(|t| t < symbols.len()));

        let mut ops = Vec::with_capacity(symbols.len() + 1);
        for (i, (&symbol, &at)) in symbols.iter().zip(positions).enumerate() {
            ops.push(DrawOp::Symbol { symbol, at });
            if target == Some(i) {
                ops.push(DrawOp::TargetBorder { at });
            }
        }
        self.render_layers(&ops, &[])
    }

    /// Initial state: the original sequence with the target framed.
    pub fn render_initial(&self, task: &TaskData) -> SwapResult<FrameRGBA> {
        self.render(task.symbols(), task.positions(), Some(task.target_index()))
    }

    /// Final state: the substituted sequence, no frame.
    pub fn render_final(&self, task: &TaskData) -> SwapResult<FrameRGBA> {
        self.render(task.substituted_symbols(), task.positions(), None)
    }

    /// Draw `base` over the background, then composite each overlay layer in order.
    ///
    /// Each overlay is rasterized into a fresh transparent buffer before compositing, so
    /// overlapping layers blend only through source-over, never inside one buffer.
    pub fn render_layers(&self, base: &[DrawOp], overlays: &[Layer]) -> SwapResult<FrameRGBA> {
        let mut data = self.rasterize(base, Some(self.background))?;
        for layer in overlays {
            if layer.opacity < MIN_LAYER_OPACITY || layer.ops.is_empty() {
                continue;
            }
            let src = self.rasterize(&layer.ops, None)?;
            over_in_place(&mut data, &src, layer.opacity)?;
        }
        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
            premultiplied: true,
        })
    }

    fn rasterize(&self, ops: &[DrawOp], background: Option<Rgb8>) -> SwapResult<Vec<u8>> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        if let Some(bg) = background {
            ctx.set_paint(paint(bg));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
        for op in ops {
            self.draw_op(&mut ctx, op);
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != self.canvas.rgba_len() {
            return Err(SwapError::render(format!(
                "rasterizer produced {} bytes for a {}x{} canvas",
                data.len(),
                self.canvas.width,
                self.canvas.height
            )));
        }
        Ok(data)
    }

    fn draw_op(&self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
        match *op {
            DrawOp::Symbol { symbol, at } => {
                let outline = symbol.shape.outline(at.center_point(), self.half_size);
                let path = bezpath_to_cpu(&outline.to_path());
                ctx.set_paint(paint(symbol.color_rgb));
                ctx.fill_path(&path);
                if self.outline_width > 0.0 {
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(self.outline_width));
                    ctx.set_paint(paint(Rgb8::BLACK));
                    ctx.stroke_path(&path);
                }
            }
            DrawOp::TargetBorder { at } => {
                if self.border_width <= 0.0 {
                    return;
                }
                let rect = border_rect(
                    at.center_point(),
                    self.border_half_extent,
                    self.border_width,
                );
                let path = bezpath_to_cpu(&Outline::Box(rect).to_path());
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(self.border_width)
                        .with_join(vello_cpu::kurbo::Join::Miter),
                );
                ctx.set_paint(paint(self.border_color));
                ctx.stroke_path(&path);
            }
        }
    }
}

fn paint(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.0, c.1, c.2, 255)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
