use super::*;
use pretty_assertions::assert_eq;
use voxshift_spec::VoicePreset;

fn sine(sample_rate: u32, freq: f32, frames: usize, amplitude: f32) -> SampleBuffer {
    let samples = (0..frames)
        .map(|i| {
            amplitude * (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin()
        })
        .collect();
    SampleBuffer::mono(sample_rate, samples).unwrap()
}

#[test]
fn test_default_settings_are_identity_for_in_range_input() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 800, 0.5);
    let out = render(&ctx, &source, &EffectSettings::default(), Some(1)).unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_empty_source_yields_empty_output() {
    let ctx = RenderContext::new();
    let source = SampleBuffer::silence(44100, 2, 0).unwrap();
    let settings = EffectSettings::with_preset(VoicePreset::MaleToFemale)
        .reverb(1.0)
        .echo(1.0);
    let out = render(&ctx, &source, &settings, None).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.sample_rate(), 44100);
    assert_eq!(out.channel_count(), 2);
}

#[test]
fn test_preset_rate_sets_output_length() {
    let ctx = RenderContext::new();
    let source = sine(8000, 220.0, 9000, 0.5);
    let settings = EffectSettings::with_preset(VoicePreset::MaleToFemale);
    let out = render(&ctx, &source, &settings, None).unwrap();
    assert_eq!(out.frame_count(), 6000);
}

#[test]
fn test_output_clamped() {
    let ctx = RenderContext::new();
    let source = SampleBuffer::mono(8000, vec![3.0, -3.0, 0.25]).unwrap();
    let out = render(&ctx, &source, &EffectSettings::default(), None).unwrap();
    assert_eq!(out.channel(0).unwrap(), &[1.0, -1.0, 0.25]);
}

#[test]
fn test_out_of_range_settings_are_clamped_not_rejected() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 400, 0.5);
    let settings = EffectSettings::default().echo(7.0).pitch(10.0);
    let (out, report) = render_with_report(&ctx, &source, &settings, Some(2)).unwrap();
    // pitch multiplier clamps to 2.0
    assert_eq!(out.frame_count(), 200);
    assert_eq!(report.stage_names(), vec!["rate", "echo", "clamp"]);
}

#[test]
fn test_non_finite_settings_rejected() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 400, 0.5);
    let settings = EffectSettings::default().reverb(f64::NAN);
    let err = render(&ctx, &source, &settings, None).unwrap_err();
    assert!(matches!(err, AudioError::Config(_)));
}

#[test]
fn test_report_tracks_frames() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 1000, 0.5);
    let settings = EffectSettings::with_preset(VoicePreset::FemaleToMale).reverb(0.5);
    let (out, report) = render_with_report(&ctx, &source, &settings, Some(3)).unwrap();

    assert_eq!(report.stage_names(), vec!["rate", "reverb", "clamp"]);
    assert_eq!(report.input_frames, 1000);
    assert_eq!(report.output_frames, out.frame_count());
    assert_eq!(report.stages[0].output_frames, report.stages[1].input_frames);
}

#[test]
fn test_cancelled_before_first_stage() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 400, 0.5);
    let token = CancelToken::new();
    token.cancel();
    let err = render_with_cancel(&ctx, &source, &EffectSettings::default(), None, &token)
        .unwrap_err();
    assert!(matches!(err, AudioError::Cancelled));
}

#[test]
fn test_uncancelled_token_renders_normally() {
    let ctx = RenderContext::new();
    let source = sine(8000, 440.0, 400, 0.5);
    let token = CancelToken::new();
    let out = render_with_cancel(&ctx, &source, &EffectSettings::default(), None, &token)
        .unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_seeded_render_is_deterministic() {
    let ctx = RenderContext::new();
    let source = sine(8000, 330.0, 2000, 0.6);
    let settings = EffectSettings::default().reverb(0.7).echo(0.4);
    let a = render(&ctx, &source, &settings, Some(42)).unwrap();
    let b = render(&ctx, &source, &settings, Some(42)).unwrap();
    assert_eq!(a, b);
}
