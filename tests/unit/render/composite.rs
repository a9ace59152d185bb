use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn half_opacity_over_white_mixes_evenly() {
    let white = [255, 255, 255, 255];
    let red = [255, 0, 0, 255];
    let out = over(white, red, 0.5);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 255);
    assert!((i32::from(out[1]) - 127).abs() <= 1, "{out:?}");
    assert!((i32::from(out[2]) - 127).abs() <= 1, "{out:?}");
}

#[test]
fn over_in_place_skips_transparent_and_checks_lengths() {
    let mut dst = vec![255u8; 8];
    let src = vec![0, 0, 0, 0, 0, 0, 255, 255];
    over_in_place(&mut dst, &src, 1.0).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 0, 0, 255, 255]);

    let mut short = vec![0u8; 4];
    assert!(over_in_place(&mut short, &src, 1.0).is_err());
}
