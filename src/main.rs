#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use fleet_engine::{
    cli::{print_player_view, run_game},
    init_logging, AiPlayer, CliPlayer, GameEngine, Phase,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Let a random AI play the human side and print a JSON summary.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rngs(seed: Option<u64>) -> (SmallRng, SmallRng) {
    match seed {
        Some(s) => (
            SmallRng::seed_from_u64(s),
            SmallRng::seed_from_u64(s.wrapping_add(1)),
        ),
        None => {
            let mut seed_rng = rand::rng();
            (
                SmallRng::from_rng(&mut seed_rng),
                SmallRng::from_rng(&mut seed_rng),
            )
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            init_logging(log::LevelFilter::Warn);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let (engine_rng, mut rng) = seeded_rngs(seed);
            let mut engine = GameEngine::with_rng(engine_rng);
            let mut player = CliPlayer::stdin();

            println!("Place your fleet: ships of length 5, 4, 3, 2 and 1.");
            println!("Ships may not touch each other, not even end to end.");
            run_game(&mut engine, &mut player, &mut rng, true)?;

            println!("\n==================== GAME OVER ====================\n");
            print_player_view(&engine);
            match engine.phase() {
                Phase::PlayerWon => {
                    println!("\nVICTORY! You have sunk all enemy ships!");
                }
                Phase::AiWon => {
                    println!("\nDEFEAT. All your ships have been destroyed.");
                }
                _ => println!("\nGame abandoned."),
            }
        }
        Commands::Auto { seed } => {
            init_logging(log::LevelFilter::Info);
            let (engine_rng, mut rng) = seeded_rngs(seed);
            let mut engine = GameEngine::with_rng(engine_rng);
            let mut player = AiPlayer::new();
            let summary = run_game(&mut engine, &mut player, &mut rng, false)?;
            log::info!("game finished in phase {:?}", summary.phase);
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
