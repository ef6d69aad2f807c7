//! ADC noise sampling
//!
//! A floating analog input picks up enough noise to seed program
//! selection differently on every power-up.

use embassy_rp::adc::{Adc, Async, Channel};
use sulk_core::random::seed_from_noise;

/// Samples folded into one seed
pub const NOISE_SAMPLES: usize = 32;

/// Read a floating channel repeatedly and fold the readings into a seed
///
/// Failed conversions are skipped.
pub async fn sample_noise_seed(adc: &mut Adc<'_, Async>, channel: &mut Channel<'_>) -> u32 {
    let mut samples = [0u16; NOISE_SAMPLES];
    let mut taken = 0;
    for _ in 0..NOISE_SAMPLES {
        if let Ok(sample) = adc.read(channel).await {
            samples[taken] = sample;
            taken += 1;
        }
    }
    seed_from_noise(samples[..taken].iter().copied())
}
