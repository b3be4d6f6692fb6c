use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boomerang", version)]
struct Cli {
    #[command(flatten)]
    stage: StageArgs,

    /// Log chain events at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the canvas at one tick as a PNG.
    Frame(FrameArgs),
    /// Render a tick range as a numbered PNG sequence.
    Render(RenderArgs),
    /// Play in real time for a number of ticks.
    Play(PlayArgs),
    /// Print a JSON chain snapshot after every glyph completion.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct StageArgs {
    /// Stage options JSON (`{"canvas": {"width": .., "height": ..}}`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Viewport width in pixels (overrides the config file).
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Viewport height in pixels (overrides the config file).
    #[arg(long, global = true)]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Tick to render (0 is the initial frame).
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Number of ticks to render, starting at 0.
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Ticks to play before stopping.
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Write the last frame to this PNG.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Ticks to simulate.
    #[arg(long, default_value_t = 500)]
    ticks: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = stage_opts(&cli.stage)?;
    match cli.cmd {
        Command::Frame(args) => cmd_frame(opts, args),
        Command::Render(args) => cmd_render(opts, args),
        Command::Play(args) => cmd_play(opts, args),
        Command::Trace(args) => cmd_trace(opts, args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn stage_opts(args: &StageArgs) -> anyhow::Result<boomerang::StageOpts> {
    let mut opts = match &args.config {
        Some(path) => boomerang::StageOpts::from_path(path)
            .with_context(|| format!("load stage options '{}'", path.display()))?,
        None => boomerang::StageOpts::default(),
    };
    if let Some(w) = args.width {
        opts.canvas.width = w;
    }
    if let Some(h) = args.height {
        opts.canvas.height = h;
    }
    opts.validate()?;
    Ok(opts)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(opts: boomerang::StageOpts, args: FrameArgs) -> anyhow::Result<()> {
    let mut session = boomerang::OfflineSession::new(opts)?;
    let frame = session.render_tick(boomerang::TickIndex(args.tick))?;
    ensure_parent(&args.out)?;
    boomerang::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(opts: boomerang::StageOpts, args: RenderArgs) -> anyhow::Result<()> {
    let mut session = boomerang::OfflineSession::new(opts)?;
    let range =
        boomerang::TickRange::new(boomerang::TickIndex(0), boomerang::TickIndex(args.ticks))?;
    let mut sink = boomerang::PngSequenceSink::new(&args.out_dir);
    let stats = session.render_range(range, &mut sink)?;
    let secs = session.fps()?.frames_to_secs(stats.frames);
    eprintln!(
        "wrote {} frames ({secs:.2}s, {} completions) to {}",
        stats.frames,
        stats.completions,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_play(opts: boomerang::StageOpts, args: PlayArgs) -> anyhow::Result<()> {
    let mut player = boomerang::LivePlayer::new(opts)?;
    player.run_for_ticks(args.ticks)?;
    let snap = player.stage().chain().snapshot();
    tracing::info!(
        ticks = player.stage().ticks(),
        cursor = snap.cursor,
        direction = ?snap.direction,
        "playback stopped"
    );
    if let Some(out) = &args.out {
        ensure_parent(out)?;
        boomerang::write_png(out, &player.frame())?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_trace(opts: boomerang::StageOpts, args: TraceArgs) -> anyhow::Result<()> {
    let mut stage = boomerang::Stage::new(boomerang::RecordingContext::new(opts.canvas), opts)?;
    stage.handle_tap();
    for _ in 0..args.ticks {
        if let boomerang::ChainUpdate::Completed(c) = stage.tick()? {
            let line = serde_json::json!({
                "tick": stage.ticks(),
                "completion": c,
                "chain": stage.chain().snapshot(),
            });
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}
