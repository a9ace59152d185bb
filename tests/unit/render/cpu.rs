use super::*;
use crate::symbol::pool::{ColorName, Shape};

fn small_config() -> TaskConfig {
    TaskConfig {
        image_size: Canvas {
            width: 64,
            height: 64,
        },
        symbol_size: 30,
        symbol_spacing: 40,
        ..TaskConfig::default()
    }
}

fn close(a: [u8; 4], b: [u8; 4], tol: i32) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(&x, &y)| (i32::from(x) - i32::from(y)).abs() <= tol)
}

const CENTER: Position = Position { x: 32, y: 32 };

#[test]
fn empty_scene_is_uniform_background() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let f = r.render(&[], &[], None).unwrap();
    assert_eq!((f.width, f.height), (64, 64));
    assert_eq!(f.data.len(), small_config().image_size.rgba_len());
    assert!(f.premultiplied);
    assert!(f.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn every_shape_fills_its_center_with_its_color() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    for shape in Shape::ALL {
        let symbol = Symbol::new(shape, ColorName::Blue);
        let f = r.render(&[symbol], &[CENTER], None).unwrap();
        let px = f.pixel(32, 32).unwrap();
        assert!(close(px, [50, 100, 220, 255], 1), "{shape}: {px:?}");
        // Corners stay background.
        assert_eq!(f.pixel(0, 0), Some([255, 255, 255, 255]));
    }
}

#[test]
fn outline_is_dark() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let symbol = Symbol::new(Shape::Square, ColorName::Yellow);
    let f = r.render(&[symbol], &[CENTER], None).unwrap();
    // Square edge sits at x = 32.5 - 15 = 17.5; the 2px stroke covers [16.5, 18.5].
    let px = f.pixel(17, 32).unwrap();
    assert!(close(px, [0, 0, 0, 255], 2), "{px:?}");
}

#[test]
fn target_border_is_drawn_only_when_requested() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let symbol = Symbol::new(Shape::Circle, ColorName::Green);

    // Border box half-extent is 15 + 8 = 23; the 4px stroke covers x in [9.5, 13.5].
    let framed = r.render(&[symbol], &[CENTER], Some(0)).unwrap();
    let px = framed.pixel(11, 32).unwrap();
    assert!(close(px, [255, 0, 0, 255], 2), "{px:?}");

    let bare = r.render(&[symbol], &[CENTER], None).unwrap();
    assert_eq!(bare.pixel(11, 32), Some([255, 255, 255, 255]));
}

#[test]
fn rendering_is_idempotent() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let symbols = [
        Symbol::new(Shape::Star, ColorName::Pink),
        Symbol::new(Shape::Hexagon, ColorName::Cyan),
    ];
    let positions = [Position::new(12, 32), Position::new(52, 32)];
    let a = r.render(&symbols, &positions, Some(1)).unwrap();
    let b = r.render(&symbols, &positions, Some(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn half_opacity_layer_mixes_with_background() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let op = DrawOp::Symbol {
        symbol: Symbol::new(Shape::Square, ColorName::Red),
        at: CENTER,
    };
    let f = r.render_layers(&[], &[Layer::single(op, 0.5)]).unwrap();
    let px = f.pixel(32, 32).unwrap();
    // 0.5 * (220, 50, 50) + 0.5 * 255
    assert!(close(px, [238, 153, 153, 255], 2), "{px:?}");
}

#[test]
fn nearly_transparent_layers_are_skipped() {
    let r = SceneRenderer::new(&small_config()).unwrap();
    let op = DrawOp::Symbol {
        symbol: Symbol::new(Shape::Square, ColorName::Red),
        at: CENTER,
    };
    let base = r.render_layers(&[], &[]).unwrap();
    let faint = r.render_layers(&[], &[Layer::single(op, 0.005)]).unwrap();
    assert_eq!(base, faint);
}

#[test]
fn oversized_canvas_is_rejected() {
    let cfg = TaskConfig {
        image_size: Canvas {
            width: 100_000,
            height: 64,
        },
        ..TaskConfig::default()
    };
    assert!(SceneRenderer::new(&cfg).is_err());
}
