use super::*;

fn frame(data: Vec<u8>, w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data,
        premultiplied: true,
    }
}

#[test]
fn pixel_reads_row_major() {
    let f = frame((0u8..16).collect(), 2, 2);
    assert_eq!(f.pixel(0, 0), Some([0, 1, 2, 3]));
    assert_eq!(f.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(f.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn to_rgba_image_unpremultiplies() {
    let f = frame(vec![128, 0, 0, 128, 10, 20, 30, 255], 2, 1);
    let img = f.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(img.get_pixel(1, 0).0, [10, 20, 30, 255]);
}

#[test]
fn to_rgba_image_rejects_short_buffers() {
    let f = frame(vec![0; 7], 2, 1);
    assert!(matches!(f.to_rgba_image(), Err(SwapError::Render(_))));
}
