//! ysftx - YSF baseband modulator
//!
//! Run with: cargo run -- frames.bin            (play through the sound card)
//!           cargo run -- frames.bin --wav a.wav (render offline)

mod app;
mod feeder;
mod render;
mod ui;
mod wav;

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{bail, Result as EyreResult, WrapErr};
use ysf_tx::{tx::queue::DEFAULT_QUEUE_FRAMES, TxConfig, FRAME_LENGTH_BYTES, SAMPLE_RATE};

use feeder::FrameFeeder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Modulate YSF frames into 4FSK baseband", long_about = None)]
struct Args {
    /// File of back-to-back 120-byte frames
    frames: PathBuf,

    /// Render to a 48 kHz mono WAV file instead of playing
    #[arg(long)]
    wav: Option<PathBuf>,

    /// TX delay setting: preamble of 600 + 12 x delay sync bytes, capped at 1200
    #[arg(long)]
    tx_delay: Option<u8>,

    /// Hang time after the last frame, in seconds (duplex only)
    #[arg(long, default_value_t = 4)]
    hang: u8,

    /// Use the low deviation level set
    #[arg(long, default_value_t = false)]
    low_deviation: bool,

    /// Unkey as soon as the last frame is sent
    #[arg(long, default_value_t = false)]
    simplex: bool,

    /// Frame queue depth
    #[arg(long, default_value_t = DEFAULT_QUEUE_FRAMES)]
    queue_frames: usize,

    /// Verbosity level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Log file used while the terminal UI owns the screen
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn tx_config(&self) -> TxConfig {
        let mut config = TxConfig::default();
        if let Some(delay) = self.tx_delay {
            config.set_preamble_delay(delay);
        }
        config.set_deviation_and_hang(self.low_deviation, self.hang);
        config.duplex = !self.simplex;
        config
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(&args)?;

    let frames = load_frames(&args.frames)?;
    let config = args.tx_config();
    tracing::info!(
        frames = frames.len(),
        preamble = config.preamble_len,
        hang = config.hang_steps,
        duplex = config.duplex,
        "loaded"
    );

    let feeder = FrameFeeder::new(frames);

    match &args.wav {
        Some(path) => {
            let samples = render::render_offline(feeder, config, args.queue_frames);
            wav::write_wav(SAMPLE_RATE, &samples, path)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!(
                "Rendered {} samples ({:.2} s) to {}",
                samples.len(),
                samples.len() as f64 / SAMPLE_RATE as f64,
                path.display()
            );
            Ok(())
        }
        None => app::play(feeder, config, args.queue_frames),
    }
}

fn init_tracing(args: &Args) -> EyreResult<()> {
    // 0 = WARN (quiet), 1 = INFO, 2 = DEBUG, 3+ = TRACE
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    if args.wav.is_some() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    } else if let Some(path) = &args.log_file {
        let file = fs::File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init();
    }

    Ok(())
}

fn load_frames(path: &Path) -> EyreResult<Vec<Vec<u8>>> {
    let bytes = fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;

    if bytes.is_empty() {
        bail!("{} contains no frames", path.display());
    }
    if bytes.len() % FRAME_LENGTH_BYTES != 0 {
        bail!(
            "{} is {} bytes, not a whole number of {}-byte frames",
            path.display(),
            bytes.len(),
            FRAME_LENGTH_BYTES
        );
    }

    Ok(bytes
        .chunks_exact(FRAME_LENGTH_BYTES)
        .map(<[u8]>::to_vec)
        .collect())
}
