//! Convolution reverb.
//!
//! The wet signal is the input convolved with a synthetic impulse response
//! scaled to unit energy. Convolution is overlap-add in the frequency domain
//! through the render context's FFT plans; the tail past the input length is
//! discarded.

use rand::Rng;
use rustfft::num_complex::Complex;

use crate::buffer::SampleBuffer;
use crate::context::RenderContext;
use crate::error::AudioResult;
use crate::impulse::generate_impulse;

/// Scale of the wet contribution at full reverb amount.
pub const WET_SCALE: f64 = 0.3;

/// Convolves `signal` with `kernel`, returning the first `out_len` samples.
///
/// The signal is processed in blocks so the FFT size depends on the kernel,
/// not on the input length.
pub fn convolve(
    ctx: &RenderContext,
    signal: &[f32],
    kernel: &[f32],
    out_len: usize,
) -> AudioResult<Vec<f32>> {
    if signal.is_empty() || kernel.is_empty() || out_len == 0 {
        return Ok(vec![0.0; out_len]);
    }
    let mut out = vec![0.0f64; out_len];

    let first_block = signal.len().min(kernel.len());
    let fft_len = (first_block + kernel.len() - 1).next_power_of_two();
    // Each block plus the kernel tail fits in one FFT without wrapping
    let block_len = fft_len - kernel.len() + 1;
    let fft = ctx.plan(fft_len)?;

    let mut kernel_spectrum: Vec<Complex<f64>> = kernel
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    kernel_spectrum.resize(fft_len, Complex::new(0.0, 0.0));
    fft.forward.process(&mut kernel_spectrum);

    // Inverse FFT result needs to be scaled by 1/N
    let scale = 1.0 / fft_len as f64;
    let mut spectrum = vec![Complex::new(0.0, 0.0); fft_len];

    for (index, block) in signal.chunks(block_len).enumerate() {
        let offset = index * block_len;
        if offset >= out_len {
            break;
        }

        for (slot, &s) in spectrum.iter_mut().zip(block.iter()) {
            *slot = Complex::new(s as f64, 0.0);
        }
        for slot in spectrum.iter_mut().skip(block.len()) {
            *slot = Complex::new(0.0, 0.0);
        }

        fft.forward.process(&mut spectrum);
        for (a, b) in spectrum.iter_mut().zip(kernel_spectrum.iter()) {
            *a *= *b;
        }
        fft.inverse.process(&mut spectrum);

        let valid = (block.len() + kernel.len() - 1).min(out_len - offset);
        for (acc, c) in out[offset..offset + valid].iter_mut().zip(spectrum.iter()) {
            *acc += c.re * scale;
        }
    }

    Ok(out.into_iter().map(|s| s as f32).collect())
}

/// Scales a kernel to unit energy (`sum(h^2) == 1`).
///
/// A silent kernel is returned unchanged.
pub fn normalize_kernel(kernel: &[f32]) -> Vec<f32> {
    let energy: f64 = kernel.iter().map(|&h| h as f64 * h as f64).sum();
    if energy <= 0.0 {
        return kernel.to_vec();
    }
    let gain = 1.0 / energy.sqrt();
    kernel.iter().map(|&h| (h as f64 * gain) as f32).collect()
}

/// Applies the reverb stage.
///
/// Each output sample is `dry * (1 - 0.3a) + wet * 0.3a` where `wet` is the
/// convolution with an impulse response generated at intensity `a` and
/// normalized to unit energy, so the wet path keeps roughly the input's
/// level. Channel `c` convolves with impulse channel `c % 2`, so mono input
/// uses the left impulse channel.
pub fn apply<R: Rng>(
    ctx: &RenderContext,
    buffer: &SampleBuffer,
    amount: f64,
    rng: &mut R,
) -> AudioResult<SampleBuffer> {
    let amount = amount.clamp(0.0, 1.0);
    let impulse = generate_impulse(buffer.sample_rate(), amount, rng)?;
    let kernels: Vec<Vec<f32>> = impulse
        .channels()
        .iter()
        .map(|ch| normalize_kernel(ch))
        .collect();
    let wet_gain = WET_SCALE * amount;
    let dry_gain = 1.0 - wet_gain;
    let frames = buffer.frame_count();

    let mut channels = Vec::with_capacity(buffer.channel_count());
    for (index, dry) in buffer.channels().iter().enumerate() {
        let kernel = &kernels[index % kernels.len()];
        let wet = convolve(ctx, dry, kernel, frames)?;
        channels.push(
            dry.iter()
                .zip(wet.iter())
                .map(|(&d, &w)| (d as f64 * dry_gain + w as f64 * wet_gain) as f32)
                .collect(),
        );
    }

    buffer.with_channels(channels)
}
