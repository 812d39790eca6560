//! drumkit - render, inspect and bounce the procedural drum voices
//!
//! Run with: cargo run -- render kick -o kick.wav

mod analyze;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use drumkit::{
    io::{load_wav, write_wav},
    synth::{beat_samples, DrumInstrument, Mixer, Registry},
    RenderParams, VoiceKind,
};

#[derive(Parser)]
#[command(name = "drumkit", version, about = "Procedural drum synthesis")]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one hit to a WAV file
    Render {
        voice: VoiceKind,
        #[command(flatten)]
        hit: HitArgs,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print level and spectrum measurements for one hit
    Analyze {
        voice: VoiceKind,
        #[command(flatten)]
        hit: HitArgs,
    },
    /// List the available voices
    List,
    /// Decode a WAV file and report what was found
    Decode { path: PathBuf },
    /// Bounce a kick/snare/hat groove to a WAV file
    Bounce {
        #[arg(long, default_value_t = 120)]
        bpm: u32,
        #[arg(long, default_value_t = 4)]
        bars: u32,
        #[arg(long, default_value_t = 44_100)]
        rate: u32,
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct HitArgs {
    /// Sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    rate: u32,
    /// Length in milliseconds
    #[arg(long, default_value_t = 250, conflicts_with = "samples")]
    ms: u32,
    /// Length in frames, conflicts with --ms
    #[arg(long)]
    samples: Option<usize>,
    /// Fixed noise seed for a reproducible render
    #[arg(long)]
    seed: Option<u64>,
}

impl HitArgs {
    fn params(&self) -> RenderParams {
        let count = self
            .samples
            .unwrap_or(self.rate as usize * self.ms as usize / 1_000);
        let params = RenderParams::new(self.rate, count);
        match self.seed {
            Some(seed) => params.with_seed(seed),
            None => params,
        }
    }
}

fn render_hit(voice: VoiceKind, hit: &HitArgs) -> EyreResult<(Vec<f32>, RenderParams)> {
    let params = hit.params();
    let mut out = vec![0.0f32; params.sample_count];
    voice
        .render(&mut out, &params)
        .wrap_err_with(|| format!("failed to render {voice}"))?;
    Ok((out, params))
}

fn bounce(bpm: u32, bars: u32, rate: u32, output: &Path) -> EyreResult<()> {
    // Sixteenth-note grid over one 4/4 bar
    const KICKS: [usize; 2] = [0, 8];
    const SNARES: [usize; 2] = [4, 12];
    const HATS: [usize; 8] = [0, 2, 4, 6, 8, 10, 12, 14];

    let registry = Registry::with_drums();
    let step = beat_samples(bpm, rate, 0.25)?;
    let total = step * 16 * bars as usize;

    let mut mixer = Mixer::new();
    for bar in 0..bars as usize {
        let bar_start = bar * step * 16;
        for (id, steps) in [("kick", &KICKS[..]), ("snare", &SNARES[..]), ("hihat", &HATS[..])] {
            for &s in steps {
                let voice = registry.trigger(id, bpm, rate)?;
                mixer.schedule(voice, bar_start + s * step);
            }
        }
    }

    let mut out = vec![0.0f32; total];
    mixer.render(&mut out);
    write_wav(output, &out, rate).wrap_err_with(|| format!("failed to write {}", output.display()))?;
    println!("Bounced {bars} bar(s) at {bpm} BPM to {}", output.display());
    Ok(())
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    match cli.command {
        Command::Render { voice, hit, output } => {
            let (out, params) = render_hit(voice, &hit)?;
            write_wav(&output, &out, params.sample_rate)
                .wrap_err_with(|| format!("failed to write {}", output.display()))?;
            println!(
                "Rendered {voice}: {} samples @ {}Hz -> {}",
                out.len(),
                params.sample_rate,
                output.display()
            );
        }
        Command::Analyze { voice, hit } => {
            let (out, params) = render_hit(voice, &hit)?;
            let stats = analyze::analyze(&out, params.sample_rate);
            println!("{voice} ({:.1} ms)", params.duration_secs() * 1_000.0);
            println!("  peak         {:.4}", stats.peak);
            println!("  rms          {:.4}", stats.rms);
            println!("  tail/head    {:.4}", stats.decay_ratio);
            println!("  centroid     {:.1} Hz", stats.centroid_hz);
        }
        Command::List => {
            for kind in VoiceKind::ALL {
                let beats = DrumInstrument::new(kind).beats();
                println!("{:<6} time={:?} hit={} beat(s)", kind.name(), kind.time_base(), beats);
            }
        }
        Command::Decode { path } => {
            let audio = load_wav(&path).map_err(|err| {
                eyre!(
                    "{} (code {}: {})",
                    path.display(),
                    err.code().code(),
                    err.code().description()
                )
            })?;
            println!(
                "{}: {} frames @ {}Hz ({:.3}s)",
                path.display(),
                audio.frames(),
                audio.sample_rate,
                audio.duration_secs()
            );
        }
        Command::Bounce {
            bpm,
            bars,
            rate,
            output,
        } => bounce(bpm, bars, rate, &output)?,
    }

    Ok(())
}
