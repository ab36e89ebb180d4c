use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "learnlog", version, about = "learnlog CLI")]
struct Cli {
    /// Day to act on (YYYY-MM-DD or "today"); defaults to today
    #[arg(long, global = true)]
    day: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tracker state as JSON
    Status,
    /// Log the selected day as learned
    Learned,
    /// Log the selected day as freezed, spending one freeze
    Freeze,
    /// Show the week around the selected day
    Week {
        /// Page one week forward before showing
        #[arg(long, conflicts_with = "prev")]
        next: bool,
        /// Page one week back before showing
        #[arg(long)]
        prev: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the month around the selected day
    Month {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show another month, keeping the day of month where possible
    Jump {
        /// Month number (1-12)
        #[arg(long)]
        month: u32,
        /// Year
        #[arg(long)]
        year: i32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Learning goal
    Goal {
        #[command(subcommand)]
        action: commands::goal::GoalAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Forget all tracked state
    Discard,
    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LEARNLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let day = cli.day.as_deref();
    let result = match cli.command {
        Commands::Status => commands::activity::status(day),
        Commands::Learned => commands::activity::learned(day),
        Commands::Freeze => commands::activity::freeze(day),
        Commands::Week { next, prev, json } => commands::calendar::week(day, next, prev, json),
        Commands::Month { json } => commands::calendar::month(day, json),
        Commands::Jump { month, year, json } => commands::calendar::jump(day, month, year, json),
        Commands::Goal { action } => commands::goal::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Discard => commands::activity::discard(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "learnlog", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
