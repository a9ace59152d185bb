use crate::foundation::error::SwapResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{DrawOp, Layer, SceneRenderer};
use crate::symbol::sampler::TaskData;

/// The target border stays visible while transition progress is below this value.
pub const BORDER_VISIBLE_UNTIL: f64 = 0.5;

/// Builds the substitution animation for a task.
#[derive(Clone, Copy, Debug)]
pub struct MorphAnimator<'r> {
    renderer: &'r SceneRenderer,
}

impl<'r> MorphAnimator<'r> {
    /// Animate with `renderer`'s canvas and styling.
    pub fn new(renderer: &'r SceneRenderer) -> Self {
        Self { renderer }
    }

    /// Lazily produce `2 * hold_frames + transition_frames` frames, in order.
    pub fn build_frames<'t>(
        &self,
        task: &'t TaskData,
        hold_frames: usize,
        transition_frames: usize,
    ) -> MorphFrames<'r, 't> {
        MorphFrames {
            renderer: self.renderer,
            task,
            hold_frames,
            transition_frames,
            next: 0,
            initial: None,
            last: None,
        }
    }

    /// Render transition frame `i` of `transition_frames` (`i` is 0-based).
    ///
    /// Non-target symbols are drawn at full opacity. At the target slot the old symbol
    /// (opacity `1 - p`) and the new symbol (opacity `p`) are each composited from their own
    /// transparent layer, old first, with `p = (i + 1) / transition_frames`. The border is drawn
    /// at full opacity on top while `p < 0.5` and vanishes abruptly after.
    pub fn transition_frame(
        &self,
        task: &TaskData,
        i: usize,
        transition_frames: usize,
    ) -> SwapResult<FrameRGBA> {
        let progress = transition_progress(i, transition_frames);
        let target = task.target_index();
        let at = task.positions()[target];

        let base: Vec<DrawOp> = task
            .symbols()
            .iter()
            .zip(task.positions())
            .enumerate()
            .filter(|(j, _)| *j != target)
            .map(|(_, (&symbol, &at))| DrawOp::Symbol { symbol, at })
            .collect();

        let mut overlays = vec![
            Layer::single(
                DrawOp::Symbol {
                    symbol: task.target_symbol(),
                    at,
                },
                (1.0 - progress) as f32,
            ),
            Layer::single(
                DrawOp::Symbol {
                    symbol: task.new_symbol(),
                    at,
                },
                progress as f32,
            ),
        ];
        if progress < BORDER_VISIBLE_UNTIL {
            overlays.push(Layer::single(DrawOp::TargetBorder { at }, 1.0));
        }

        self.renderer.render_layers(&base, &overlays)
    }
}

/// Progress of 0-based transition frame `i`: `(i + 1) / transition_frames`.
pub fn transition_progress(i: usize, transition_frames: usize) -> f64 {
    if transition_frames == 0 {
        return 1.0;
    }
    (i + 1) as f64 / transition_frames as f64
}

/// Iterator over animation frames. Single pass; build a new one to replay.
///
/// The two hold states are rendered once and cloned for every repetition.
#[derive(Debug)]
pub struct MorphFrames<'r, 't> {
    renderer: &'r SceneRenderer,
    task: &'t TaskData,
    hold_frames: usize,
    transition_frames: usize,
    next: usize,
    initial: Option<FrameRGBA>,
    last: Option<FrameRGBA>,
}

impl MorphFrames<'_, '_> {
    /// Total number of frames this sequence yields.
    pub fn total(&self) -> usize {
        2 * self.hold_frames + self.transition_frames
    }

    fn produce(&mut self, idx: usize) -> SwapResult<FrameRGBA> {
        if idx < self.hold_frames {
            return cached(&mut self.initial, || self.renderer.render_initial(self.task));
        }

        let t = idx - self.hold_frames;
        if t < self.transition_frames {
            return MorphAnimator::new(self.renderer).transition_frame(
                self.task,
                t,
                self.transition_frames,
            );
        }

        cached(&mut self.last, || self.renderer.render_final(self.task))
    }
}

fn cached(
    slot: &mut Option<FrameRGBA>,
    render: impl FnOnce() -> SwapResult<FrameRGBA>,
) -> SwapResult<FrameRGBA> {
    if let Some(frame) = slot {
        return Ok(frame.clone());
    }
    let frame = render()?;
    *slot = Some(frame.clone());
    Ok(frame)
}

impl Iterator for MorphFrames<'_, '_> {
    type Item = SwapResult<FrameRGBA>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.total();
        if self.next >= total {
            return None;
        }
        let idx = self.next;
        let out = self.produce(idx);
        // Stop after the first failure.
        self.next = if out.is_ok() { idx + 1 } else { total };
        if idx + 1 == total {
            tracing::debug!(frames = total, "animation frames produced");
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total().saturating_sub(self.next);
        (left, Some(left))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animate/morph.rs"]
mod tests;
