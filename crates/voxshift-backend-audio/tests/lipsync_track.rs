//! Lipsync tests from audio through to animation tracks.

use pretty_assertions::assert_eq;
use voxshift_backend_audio::{analyze, build_track, classify, smooth, SampleBuffer};
use voxshift_spec::MouthShape::{Closed, Open, SlightlyOpen, WideOpen};
use voxshift_spec::{LipsyncParams, DEFAULT_FRAME_RATE};

#[test]
fn test_classify_scenario_at_default_threshold() {
    // Bands at threshold 0.1 are 0.03 / 0.06 / 0.08, so 0.05 lands in
    // slightly-open and 0.4 in wide-open.
    let envelope = [0.05, 0.05, 0.4, 0.4, 0.4, 0.05, 0.05];
    let shapes = smooth(&classify(&envelope, 0.1), 3, false);
    assert_eq!(
        shapes,
        vec![SlightlyOpen, SlightlyOpen, WideOpen, WideOpen, WideOpen, SlightlyOpen, SlightlyOpen]
    );
}

#[test]
fn test_classify_scenario_closed_open_split() {
    // At threshold 0.6 the bands are 0.18 / 0.36 / 0.48: quiet frames close
    // and loud frames open.
    let envelope = [0.05, 0.05, 0.4, 0.4, 0.4, 0.05, 0.05];
    assert_eq!(
        classify(&envelope, 0.6),
        vec![Closed, Closed, Open, Open, Open, Closed, Closed]
    );
}

#[test]
fn test_silent_audio_envelope_is_zero() {
    let buffer = SampleBuffer::silence(48000, 2, 48000 * 2).unwrap();
    let envelope = analyze(&buffer, DEFAULT_FRAME_RATE).unwrap();
    assert_eq!(envelope.len(), 60);
    assert!(envelope.iter().all(|&v| v == 0.0));
}

#[test]
fn test_track_follows_loudness() {
    // Half a second of silence, then half a second of full-scale square wave
    let sample_rate = 30_000;
    let mut samples = vec![0.0f32; 15_000];
    samples.extend((0..15_000).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }));
    let buffer = SampleBuffer::mono(sample_rate, samples).unwrap();

    let track = build_track(&buffer, &LipsyncParams::default()).unwrap();
    assert_eq!(track.len(), 30);
    assert_eq!(track.shape_at(0.1), Closed);
    assert_eq!(track.shape_at(0.9), WideOpen);
    assert_eq!(track.shape_at(60.0), WideOpen);
}

#[test]
fn test_smoothing_toggle() {
    // Isolated loud frame inside silence
    let sample_rate = 3000;
    let mut samples = vec![0.0f32; 3000];
    for s in &mut samples[1000..1100] {
        *s = 1.0;
    }
    let buffer = SampleBuffer::mono(sample_rate, samples).unwrap();

    let raw = build_track(
        &buffer,
        &LipsyncParams {
            smoothing: false,
            ..LipsyncParams::default()
        },
    )
    .unwrap();
    assert_eq!(raw.shapes[10], WideOpen);

    let smoothed = build_track(&buffer, &LipsyncParams::default()).unwrap();
    assert_eq!(smoothed.shapes[10], Closed);
    assert_eq!(smoothed.len(), raw.len());
}
