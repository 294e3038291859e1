//! Live playback - modulator on the UI thread, samples to the sound card

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use ysf_tx::{
    io::{converter::q15_to_f32, RingSink},
    TxConfig, YsfTx, SAMPLE_RATE,
};

use crate::{feeder::FrameFeeder, ui::UiApp};

/// 200 ms of samples between the modulator and the audio callback.
const RING_SAMPLES: usize = SAMPLE_RATE as usize / 5;
const SCOPE_RING: usize = 8 * 1024;

pub fn play(mut feeder: FrameFeeder, config: TxConfig, queue_frames: usize) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let default_config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let channels = default_config.channels() as usize;
    let stream_config = cpal::StreamConfig {
        channels: default_config.channels(),
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size: cpal::BufferSize::Default,
    };

    let (sink, mut samples_rx) = RingSink::new(RING_SAMPLES);
    let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_RING);

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _| {
                // Underruns play silence; the transmitter unkeys once the ring is empty
                for frame in data.chunks_mut(channels) {
                    let sample = samples_rx.pop().map(q15_to_f32).unwrap_or(0.0);
                    let _ = scope_tx.push(sample);
                    frame.fill(sample);
                }
            },
            |err| tracing::error!("audio stream error: {}", err),
            None,
        )
        .wrap_err_with(|| format!("output device rejected a {} Hz stream", SAMPLE_RATE))?;
    stream.play().wrap_err("failed to start audio stream")?;

    let mut tx = YsfTx::with_queue_capacity(sink, config, queue_frames);
    let mut app = UiApp::new(scope_rx);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal, &mut tx, &mut feeder);
    ratatui::restore();

    tracing::info!(frames = tx.frames_sent(), "playback stopped");
    result
}
