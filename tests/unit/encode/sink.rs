use super::*;

fn solid(width: u32, height: u32, v: u8) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![v; width as usize * height as usize * 4],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    let mut frames = (0..5u8).map(|v| Ok(solid(4, 2, v)));
    let count = drain_into_sink(&mut sink, &mut frames, 15).unwrap();

    assert_eq!(count, 5);
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 4,
            height: 2,
            fps: 15
        })
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    assert_eq!(sink.frames()[3].1, solid(4, 2, 3));
    assert!(sink.is_finished());
}

#[test]
fn empty_sequence_is_an_encode_error() {
    let mut sink = InMemorySink::new();
    let mut frames = std::iter::empty();
    let err = drain_into_sink(&mut sink, &mut frames, 15).unwrap_err();
    assert!(matches!(err, SwapError::Encode(_)));
    assert!(sink.config().is_none());
}

#[test]
fn failing_frame_stops_the_drain_but_still_ends_the_sink() {
    let mut sink = InMemorySink::new();
    let mut frames = vec![
        Ok(solid(2, 2, 0)),
        Err(SwapError::render("boom")),
        Ok(solid(2, 2, 9)),
    ]
    .into_iter();
    let err = drain_into_sink(&mut sink, &mut frames, 15).unwrap_err();
    assert!(matches!(err, SwapError::Render(_)));
    assert_eq!(sink.frames().len(), 1);
    assert!(sink.is_finished());
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(0, &solid(2, 2, 0)).is_err());
}
