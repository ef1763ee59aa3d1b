use clap::Parser;
use connect4::{terminal::Terminal, EngineConfig};

/// Two player Connect Four in the terminal
#[derive(Parser)]
#[command(name = "connect4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 6)]
    rows: usize,
    /// Number of columns
    #[arg(long, default_value_t = 7)]
    columns: usize,
    /// Marker of the first player
    #[arg(long, default_value = "X")]
    player_a: String,
    /// Marker of the second player
    #[arg(long, default_value = "O")]
    player_b: String,
    /// More log output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let config = EngineConfig {
        rows: cli.rows,
        columns: cli.columns,
        player_a: cli.player_a,
        player_b: cli.player_b,
    };

    let stdin = std::io::stdin();
    let result = Terminal::new(config, stdin.lock(), std::io::stdout())
        .and_then(|mut terminal| terminal.run());

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
