use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vivarium_core::{Request, SimConfig};
use vivarium_lib::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the rng seed from the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run this many turns headless and print stats instead of a REPL
    #[arg(short, long)]
    turns: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "vivarium=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = SimConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut app = App::new(config);

    match args.turns {
        Some(turns) => {
            println!("Running {turns} turns headless...");
            let text = app.world.execute(Request::RunTurns { count: turns })?;
            if !text.is_empty() {
                println!("{text}");
            }
            println!("{}", app.world.execute(Request::ShowStats)?);
            println!("{}", app.world.execute(Request::ShowRecords)?);
        }
        None => {
            let stdin = std::io::stdin();
            app.run_repl(stdin.lock(), std::io::stdout())?;
            println!("Exited clean.");
        }
    }

    Ok(())
}
