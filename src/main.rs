use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use dungeon_tmx::ascii;
use dungeon_tmx::generation::{self, RoomsConfig};
use dungeon_tmx::template::TmxTemplate;
use dungeon_tmx::tmx::TmxWriter;

#[derive(Parser, Debug)]
#[command(name = "dungeon_tmx")]
#[command(about = "Generate layered dungeon maps and export them as Tiled TMX maps")]
struct Args {
    /// Width of the map in tiles
    #[arg(short = 'W', long, default_value = "60")]
    width: usize,

    /// Height of the map in tiles
    #[arg(short = 'H', long, default_value = "40")]
    height: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of rooms to place
    #[arg(long, default_value = "8")]
    rooms: usize,

    /// Place up/down stairs (the template must have ids for them)
    #[arg(long)]
    stairs: bool,

    /// Tile-set template as JSON (default: built-in DawnLike)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory containing one asset folder per tile set
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Export directory
    #[arg(short, long, default_value = "tmx_export")]
    out: PathBuf,

    /// Also write an annotated ASCII dump to this file
    #[arg(long)]
    ascii: Option<PathBuf>,

    /// Don't print the map to the console
    #[arg(long)]
    no_print: bool,

    /// Skip the TMX export
    #[arg(long)]
    no_export: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dungeon_tmx=info")),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("Generating dungeon with seed: {}", seed);
    println!("Map size: {}x{}", args.width, args.height);

    let config = RoomsConfig {
        max_rooms: args.rooms,
        stairs: args.stairs,
        ..RoomsConfig::default()
    };
    let dungeon = match generation::generate_rooms(args.width, args.height, &config, &mut rng) {
        Ok(dungeon) => dungeon,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            process::exit(1);
        }
    };
    println!("Placed {} rooms", dungeon.rooms.len());

    if !args.no_print {
        if let Err(e) = ascii::print_map(&dungeon.map) {
            eprintln!("Failed to print map: {}", e);
        }
    }

    if let Some(ref path) = args.ascii {
        match ascii::export_ascii_file(&dungeon.map, Some(seed), path) {
            Ok(()) => println!("ASCII map saved to: {}", path.display()),
            Err(e) => eprintln!("Failed to export ASCII map: {}", e),
        }
    }

    if args.no_export {
        return;
    }

    let template = match args.template {
        Some(ref path) => match TmxTemplate::from_json_file(path) {
            Ok(template) => template,
            Err(e) => {
                eprintln!("Failed to load template {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => TmxTemplate::dawnlike(),
    };

    let writer = TmxWriter::for_template(&args.assets, &template, &args.out);
    match writer.write(&dungeon.map, &template) {
        Ok(path) => println!("Exported TMX map to: {}", path.display()),
        Err(e) => {
            eprintln!("Failed to export TMX map: {}", e);
            process::exit(1);
        }
    }
}
