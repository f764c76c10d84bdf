use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use ratio_motion::{
    Composition, FrameIndex, FrameRange, RenderThreading, fingerprint_frame, registry,
    render_frames,
};

#[derive(Parser, Debug)]
#[command(name = "ratio-motion", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Print one frame's visual tree and caption as JSON.
    Frame(FrameArgs),
    /// Render a frame range and print per-frame fingerprints.
    Range(RangeArgs),
    /// Print the audio mixer manifest.
    Cues(SourceArgs),
    /// Write a composition as JSON.
    Export(ExportArgs),
    /// Validate a composition and print lints.
    Validate(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Registered composition id.
    #[arg(long, required_unless_present = "in_path", conflicts_with = "in_path")]
    comp: Option<String>,

    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
        Command::Cues(args) => cmd_cues(args),
        Command::Export(args) => cmd_export(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn load(source: &SourceArgs) -> anyhow::Result<Composition> {
    match (&source.comp, &source.in_path) {
        (Some(id), _) => Ok(registry::lookup(id)?),
        (None, Some(path)) => Composition::from_path(path)
            .with_context(|| format!("load composition '{}'", path.display())),
        (None, None) => anyhow::bail!("either --comp or --in is required"),
    }
}

fn emit(value: &impl serde::Serialize, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    emit(&registry::list()?, None)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    comp.validate()?;
    let duration = comp.meta.duration_in_frames;
    if args.frame >= duration {
        anyhow::bail!("frame {} is outside [0, {duration})", args.frame);
    }
    emit(&comp.render(FrameIndex(args.frame)), args.out.as_deref())
}

#[derive(serde::Serialize)]
struct RangeReport {
    comp: String,
    stats: ratio_motion::RenderStats,
    frames: Vec<FrameSummary>,
}

#[derive(serde::Serialize)]
struct FrameSummary {
    frame: u64,
    fingerprint: String,
    scenes: Vec<String>,
    caption: Option<String>,
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let duration = comp.meta.duration_in_frames;
    let end = args.end.unwrap_or(duration);
    if end > duration {
        anyhow::bail!("range end {end} is past the composition length {duration}");
    }
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let (frames, stats) = render_frames(&comp, range, &threading)?;
    let report = RangeReport {
        comp: comp.meta.id.clone(),
        stats,
        frames: frames
            .iter()
            .map(|f| FrameSummary {
                frame: f.frame.0,
                fingerprint: fingerprint_frame(f).to_hex(),
                scenes: f.scenes.iter().map(|s| s.id.clone()).collect(),
                caption: f.caption.as_ref().map(|c| c.text.clone()),
            })
            .collect(),
    };
    emit(&report, args.out.as_deref())
}

fn cmd_cues(args: SourceArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    emit(&comp.audio_manifest()?, None)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    emit(&comp, args.out.as_deref())
}

fn cmd_validate(args: SourceArgs) -> anyhow::Result<()> {
    let comp = load(&args)?;
    let report = comp.check();
    for w in &report.warnings {
        eprintln!("warning: {w}");
    }
    report.into_result()?;
    eprintln!(
        "{}: ok ({} scenes, {} frames)",
        comp.meta.id,
        comp.scenes.len(),
        comp.meta.duration_in_frames
    );
    Ok(())
}
