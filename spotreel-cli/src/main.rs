use std::{
    io::Read as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Serialize, de::DeserializeOwned};
use tracing_subscriber::EnvFilter;

use spotreel::{
    Job, MediaCatalog, ReelConfig, ReelKind, ReelPlan, ReelRecord, RenderPreset, RenderSettings,
    Spot, decode_entities, decode_entities_in_value, decode_records, default_prefix,
    load_records_from_path, output_filename, plan_reel, seeded_rng,
};

#[derive(Parser, Debug)]
#[command(name = "spotreel", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode HTML entities in a JSON document (or plain text) and print it.
    Decode(DecodeArgs),
    /// Sample records and media and write renderer props for one reel.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Input file; reads stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output file; writes stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Spot,
    Job,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Content API payload (`{"list": [...]}` or a bare array).
    #[arg(long)]
    records: PathBuf,

    /// Directory holding background videos (.mp4) and music (.mp3).
    #[arg(long)]
    media: PathBuf,

    /// Record type in the payload.
    #[arg(long, value_enum, default_value_t = KindArg::Spot)]
    kind: KindArg,

    /// Reel config JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible picks.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of profile scenes.
    #[arg(long)]
    profiles: Option<usize>,

    /// Number of distinct background videos.
    #[arg(long)]
    videos: Option<usize>,

    /// Low-memory render settings (concurrency 1, scale 0.8, verbose).
    #[arg(long, conflicts_with = "optimized")]
    safe: bool,

    /// Concurrency 1 with verbose renderer logs.
    #[arg(long)]
    optimized: bool,

    /// Directory the rendered MP4 should land in.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Output file name prefix (defaults per reel kind).
    #[arg(long)]
    prefix: Option<String>,

    /// Props JSON path; writes stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Serialize)]
struct RenderProps<'a, R> {
    composition: &'static str,
    output: String,
    render: &'a RenderSettings,
    plan: &'a ReelPlan<R>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Decode(args) => cmd_decode(args),
        Command::Plan(args) => match args.kind {
            KindArg::Spot => cmd_plan::<Spot>(&args),
            KindArg::Job => cmd_plan::<Job>(&args),
        },
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let input = match &args.in_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read input '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    let output = match serde_json::from_str::<serde_json::Value>(&input) {
        Ok(value) => {
            let decoded = decode_entities_in_value(&value);
            let mut text = serde_json::to_string_pretty(&decoded).context("serialize json")?;
            text.push('\n');
            text
        }
        Err(_) => {
            tracing::debug!("input is not JSON; decoding as plain text");
            decode_entities(&input)
        }
    };

    write_output(args.out.as_deref(), &output)
}

fn cmd_plan<R>(args: &PlanArgs) -> anyhow::Result<()>
where
    R: ReelRecord + DeserializeOwned + Serialize,
{
    let mut config = match &args.config {
        Some(path) => ReelConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ReelConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(profiles) = args.profiles {
        config.profile_count = profiles;
    }
    if let Some(videos) = args.videos {
        config.video_count = videos;
    }

    let raws = load_records_from_path(&args.records)
        .with_context(|| format!("load records '{}'", args.records.display()))?;
    let records: Vec<R> = decode_records(&raws)
        .with_context(|| format!("decode records '{}'", args.records.display()))?;

    let catalog = MediaCatalog::scan_dir(&args.media)
        .with_context(|| format!("scan media '{}'", args.media.display()))?;
    catalog.log_summary();

    let mut rng = seeded_rng(config.seed);
    let plan = plan_reel(&records, &catalog, &config, &mut rng)?;

    let preset = if args.safe {
        RenderPreset::Safe
    } else if args.optimized {
        RenderPreset::Optimized
    } else {
        RenderPreset::Default
    };
    let render = RenderSettings::for_preset(preset);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let prefix = args
        .prefix
        .as_deref()
        .unwrap_or_else(|| default_prefix(R::KIND));
    let filename = output_filename(prefix, &chrono::Local::now().naive_local());
    let output = args.out_dir.join(filename).to_string_lossy().replace('\\', "/");

    let props = RenderProps {
        composition: composition_id(R::KIND),
        output,
        render: &render,
        plan: &plan,
    };
    let mut text = serde_json::to_string_pretty(&props).context("serialize props")?;
    text.push('\n');
    write_output(args.out.as_deref(), &text)?;

    tracing::info!(
        output = %props.output,
        duration_frames = plan.duration.0,
        duration_secs = plan.duration_secs(),
        "reel planned"
    );
    Ok(())
}

fn composition_id(kind: ReelKind) -> &'static str {
    match kind {
        ReelKind::Spot => "SpotMain",
        ReelKind::Job => "Main",
    }
}

fn write_output(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
