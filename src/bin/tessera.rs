use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tessera::{AssetRegistry, Canvas, DirStore, Recipe, RenderSettings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tessera", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a recipe to a PNG.
    Bake(BakeArgs),
    /// Print the available recipe names.
    List,
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Recipe name (see `tessera list`).
    #[arg(long)]
    recipe: String,

    #[arg(long, default_value_t = 256)]
    width: u32,

    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Seed for reproducible output; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Render settings JSON file; flags below override it.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rasterize rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Supersample each pixel.
    #[arg(long, default_value_t = false)]
    antialias: bool,

    /// Reuse and fill a directory of previously baked PNGs.
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Bake(args) => cmd_bake(args),
        Command::List => {
            for recipe in Recipe::ALL {
                println!("{recipe}");
            }
            Ok(())
        }
    }
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let recipe: Recipe = args.recipe.parse()?;
    let settings = load_settings(&args)?;
    let canvas = Canvas::new(f64::from(args.width), f64::from(args.height));

    let mut registry = AssetRegistry::new(settings);
    if let Some(dir) = &args.cache_dir {
        registry = registry.with_store(DirStore::new(dir));
    }

    let key = cache_key(recipe, canvas, args.seed, registry.settings());
    let bitmap = registry.bake(&key, || match args.seed {
        Some(seed) => recipe.build_with_rng(canvas, &mut StdRng::seed_from_u64(seed)),
        None => recipe.build(canvas),
    })?;

    bitmap.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Store key covering every input that changes the baked pixels. Threading does not.
fn cache_key(
    recipe: Recipe,
    canvas: Canvas,
    seed: Option<u64>,
    settings: &RenderSettings,
) -> String {
    let mut key = format!("{recipe}-{}x{}", canvas.width, canvas.height);
    if let Some(seed) = seed {
        key.push_str(&format!("-{seed}"));
    }
    if settings.antialias {
        key.push_str("-aa");
    }
    key
}

fn load_settings(args: &BakeArgs) -> anyhow::Result<RenderSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read settings '{}'", path.display()))?;
            RenderSettings::from_json(&text)?
        }
        None => RenderSettings::default(),
    };
    settings.threading.parallel |= args.parallel;
    if args.threads.is_some() {
        settings.threading.threads = args.threads;
    }
    settings.antialias |= args.antialias;
    Ok(settings)
}
