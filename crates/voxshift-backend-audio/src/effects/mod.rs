//! Effect stages for the render chain.
//!
//! A render is a fold of the source buffer through an ordered list of
//! [`Stage`] descriptors. Each stage takes a buffer and returns a new one, so
//! stages can be tested in isolation and the chain can be inspected before it
//! runs.

pub mod delay_line;
pub mod distortion;
pub mod echo;
pub mod rate;
pub mod reverb;

use rand_pcg::Pcg32;
use voxshift_spec::EffectSettings;

use crate::buffer::SampleBuffer;
use crate::context::RenderContext;
use crate::error::AudioResult;

/// One step of the effect chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Playback-rate resampling (pitch and speed together).
    Rate {
        /// Combined preset and user rate.
        playback_rate: f64,
    },
    /// Convolution reverb.
    Reverb {
        /// Reverb amount (0.0-1.0).
        amount: f64,
    },
    /// Feedback echo.
    Echo {
        /// Echo amount (0.0-1.0).
        amount: f64,
    },
    /// Oversampled waveshaper.
    Distortion {
        /// Distortion amount (0.0-1.0).
        amount: f64,
    },
    /// Final hard clamp to [-1, 1].
    Clamp,
}

impl Stage {
    /// Short stage name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Rate { .. } => "rate",
            Stage::Reverb { .. } => "reverb",
            Stage::Echo { .. } => "echo",
            Stage::Distortion { .. } => "distortion",
            Stage::Clamp => "clamp",
        }
    }

    /// Applies the stage to a buffer.
    ///
    /// # Arguments
    /// * `ctx` - Render context supplying FFT plans
    /// * `buffer` - Input buffer
    /// * `rng` - Noise source for impulse generation
    pub fn apply(
        &self,
        ctx: &RenderContext,
        buffer: &SampleBuffer,
        rng: &mut Pcg32,
    ) -> AudioResult<SampleBuffer> {
        match *self {
            Stage::Rate { playback_rate } => rate::apply(buffer, playback_rate),
            Stage::Reverb { amount } => reverb::apply(ctx, buffer, amount, rng),
            Stage::Echo { amount } => echo::apply(buffer, amount),
            Stage::Distortion { amount } => distortion::apply(buffer, amount),
            Stage::Clamp => Ok(buffer.map_samples(|s| s.clamp(-1.0, 1.0))),
        }
    }
}

/// Builds the stage list for a set of (already sanitized) settings.
///
/// Order is rate, reverb, echo, distortion, clamp. Rate and clamp always
/// run; reverb and echo are skipped at zero amount; distortion runs when its
/// amount is positive or the preset forces it.
pub fn build_chain(settings: &EffectSettings) -> Vec<Stage> {
    let mut chain = vec![Stage::Rate {
        playback_rate: settings.playback_rate(),
    }];

    if settings.reverb_amount > 0.0 {
        chain.push(Stage::Reverb {
            amount: settings.reverb_amount,
        });
    }
    if settings.echo_amount > 0.0 {
        chain.push(Stage::Echo {
            amount: settings.echo_amount,
        });
    }
    if let Some(amount) = settings.effective_distortion() {
        chain.push(Stage::Distortion { amount });
    }

    chain.push(Stage::Clamp);
    chain
}
