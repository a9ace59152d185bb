use super::*;
use crate::config::TaskConfig;
use crate::foundation::core::Canvas;
use crate::layout::compute_positions;
use crate::symbol::pool::{ColorName, Shape, Symbol};

const HOLD: usize = 8;
const TRANSITION: usize = 30;

fn fixture() -> (SceneRenderer, TaskData) {
    let cfg = TaskConfig {
        image_size: Canvas {
            width: 160,
            height: 80,
        },
        symbol_size: 30,
        symbol_spacing: 50,
        ..TaskConfig::default()
    };
    let renderer = SceneRenderer::new(&cfg).unwrap();
    let task = TaskData::new(
        vec![
            Symbol::new(Shape::Triangle, ColorName::Green),
            Symbol::new(Shape::Square, ColorName::Red),
            Symbol::new(Shape::Star, ColorName::Purple),
        ],
        1,
        Symbol::new(Shape::Circle, ColorName::Blue),
        compute_positions(3, 160, 80, 50),
    )
    .unwrap();
    (renderer, task)
}

fn all_frames(renderer: &SceneRenderer, task: &TaskData) -> Vec<FrameRGBA> {
    MorphAnimator::new(renderer)
        .build_frames(task, HOLD, TRANSITION)
        .collect::<SwapResult<Vec<_>>>()
        .unwrap()
}

// Middle of the left border stroke of the target slot (x = 80): [57.5, 61.5].
const BORDER_PROBE: (u32, u32) = (59, 40);

fn has_border(f: &FrameRGBA) -> bool {
    let px = f.pixel(BORDER_PROBE.0, BORDER_PROBE.1).unwrap();
    px[0] > 240 && px[1] < 15 && px[2] < 15
}

#[test]
fn frame_count_and_holds() {
    let (renderer, task) = fixture();
    let frames = all_frames(&renderer, &task);
    assert_eq!(frames.len(), 2 * HOLD + TRANSITION);
    assert_eq!(frames.len(), 46);

    assert_eq!(frames[0], frames[7]);
    assert_eq!(frames[38], frames[45]);
    assert_eq!(frames[0], renderer.render_initial(&task).unwrap());
    assert_eq!(frames[45], renderer.render_final(&task).unwrap());
    assert_ne!(frames[7], frames[8]);
}

#[test]
fn size_hint_counts_down() {
    let (renderer, task) = fixture();
    let mut it = MorphAnimator::new(&renderer).build_frames(&task, HOLD, TRANSITION);
    assert_eq!(it.total(), 46);
    assert_eq!(it.size_hint(), (46, Some(46)));
    it.next().unwrap().unwrap();
    assert_eq!(it.size_hint(), (45, Some(45)));
    assert_eq!(it.by_ref().count(), 45);
    assert!(it.next().is_none());
}

#[test]
fn first_transition_frame_is_mostly_old_symbol() {
    let (renderer, task) = fixture();
    let frames = all_frames(&renderer, &task);
    let px = frames[8].pixel(80, 40).unwrap();

    let (a_old, a_new) = (29.0 / 30.0, 1.0 / 30.0);
    let old = [220.0, 50.0, 50.0];
    let new = [50.0, 100.0, 220.0];
    for c in 0..3 {
        let after_old = 255.0 * (1.0 - a_old) + old[c] * a_old;
        let expected = after_old * (1.0 - a_new) + new[c] * a_new;
        assert!(
            (f64::from(px[c]) - expected).abs() <= 3.0,
            "channel {c}: got {} expected {expected:.1}",
            px[c]
        );
    }
    assert_eq!(px[3], 255);
}

#[test]
fn border_disappears_sharply_at_the_midpoint() {
    let (renderer, task) = fixture();
    let frames = all_frames(&renderer, &task);
    for (i, f) in frames.iter().enumerate() {
        let expected = i < HOLD + 14;
        assert_eq!(has_border(f), expected, "frame {i}");
    }
}

#[test]
fn non_target_symbols_never_change() {
    let (renderer, task) = fixture();
    let frames = all_frames(&renderer, &task);
    let left = frames[0].pixel(30, 40).unwrap();
    let right = frames[0].pixel(130, 40).unwrap();
    for f in &frames {
        assert_eq!(f.pixel(30, 40).unwrap(), left);
        assert_eq!(f.pixel(130, 40).unwrap(), right);
    }
}

#[test]
fn target_color_moves_toward_the_new_symbol() {
    let (renderer, task) = fixture();
    let frames = all_frames(&renderer, &task);
    // Blue channel goes from 50 (red square) to 220 (blue circle).
    let blues: Vec<u8> = frames[HOLD..HOLD + TRANSITION]
        .iter()
        .map(|f| f.pixel(80, 40).unwrap()[2])
        .collect();
    assert!(blues[0] < blues[14] && blues[14] < blues[29], "{blues:?}");
    assert!((i32::from(*blues.last().unwrap()) - 220).abs() <= 2);
}

#[test]
fn progress_is_one_based() {
    assert!((transition_progress(0, 30) - 1.0 / 30.0).abs() < 1e-12);
    assert_eq!(transition_progress(29, 30), 1.0);
    assert_eq!(transition_progress(14, 30), 0.5);
    assert_eq!(transition_progress(0, 0), 1.0);
}

#[test]
fn zero_holds_yield_only_transition_frames() {
    let (renderer, task) = fixture();
    let frames: Vec<_> = MorphAnimator::new(&renderer)
        .build_frames(&task, 0, 3)
        .collect::<SwapResult<_>>()
        .unwrap();
    assert_eq!(frames.len(), 3);
}
