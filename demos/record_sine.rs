//! Sine recording example.
//!
//! Renders two seconds of a stereo 440/660Hz tone to a WAV file through
//! whichever backend accepts it first.
//!
//! Run with: cargo run --example record_sine -- [output.wav]

use audio_file_sink::{FormatPreset, MultiBlock, Sink};

const BLOCK_FRAMES: usize = 512;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sine.wav".to_string());

    let mut sink = Sink::builder(&path)
        .format(FormatPreset::Studio)
        .on_event(|e| tracing::info!(?e, "sink event"))
        .build()?;

    let samplerate = sink.samplerate() as f32;
    let total_frames = sink.samplerate() as usize * 2;
    let frequencies = [440.0f32, 660.0];

    let mut block = MultiBlock::new(usize::from(sink.channels()), BLOCK_FRAMES);
    let mut frame = 0;
    while frame < total_frames {
        let frames = BLOCK_FRAMES.min(total_frames - frame);
        for (channel, frequency) in frequencies.iter().enumerate() {
            for (i, sample) in block.row_mut(channel)[..frames].iter_mut().enumerate() {
                let t = (frame + i) as f32 / samplerate;
                *sample = (2.0 * std::f32::consts::PI * frequency * t).sin() * 0.5;
            }
        }
        sink.write_multi(&block, frames);
        frame += frames;
    }

    println!(
        "Wrote {total_frames} frames to {path} with {}",
        sink.backend_name().unwrap_or("no backend")
    );
    sink.close()?;

    Ok(())
}
