//! epochs CLI: Command-line interface for the animated historical timeline

use clap::{Parser, Subcommand};
use epochs_engine::{builtin_timeline, format_counter, Config, Timeline, TimelineState, CONFIG_FILE};
use epochs_tui::Theme;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Animated historical timeline for the terminal
#[derive(Parser)]
#[command(name = "epochs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: epochs.json in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Periods file to show instead of the built-in set
        #[arg(long)]
        periods: Option<PathBuf>,

        /// Colour theme
        #[arg(long, default_value = "dark", value_parser = ["dark", "light", "high-contrast"])]
        theme: String,
    },

    /// Print the periods
    List {
        /// Periods file to read instead of the built-in set
        #[arg(long)]
        periods: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a periods file
    Check {
        /// File to validate
        file: PathBuf,
    },

    /// Write the built-in periods as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the year counter frames of a transition from the first period
    Trace {
        /// Target period index (zero-based, clamped)
        #[arg(long)]
        to: i64,

        /// Frames per second
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Periods file to read instead of the built-in set
        #[arg(long)]
        periods: Option<PathBuf>,
    },
}

/// Upper bound on printed frames, in case of very long configured durations.
const MAX_TRACE_FRAMES: u32 = 10_000;

fn main() {
    let cli = Cli::parse();
    let _log_guard = init_logging();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        None => cmd_tui(&config, None, "dark"),
        Some(Commands::Tui { periods, theme }) => cmd_tui(&config, periods.as_deref(), &theme),
        Some(Commands::List { periods, json }) => cmd_list(&config, periods.as_deref(), json),
        Some(Commands::Check { file }) => cmd_check(&file),
        Some(Commands::Export { output }) => cmd_export(output.as_deref()),
        Some(Commands::Trace { to, fps, periods }) => {
            cmd_trace(&config, periods.as_deref(), to, fps)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to a file; the terminal belongs to the TUI.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::env::var_os("EPOCHS_LOG_DIR").map_or_else(std::env::temp_dir, PathBuf::from);
    let file_appender = tracing_appender::rolling::never(&log_dir, "epochs.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("EPOCHS_LOG")
                .unwrap_or_else(|_| EnvFilter::new("epochs=info,warn")),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .ok()?;

    Some(guard)
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(CONFIG_FILE))?,
    };
    debug!(?config, "config loaded");
    Ok(config)
}

/// `--periods`, then the config's `periods_file`, then the built-in set.
fn load_timeline(config: &Config, periods: Option<&Path>) -> Result<Timeline, Box<dyn Error>> {
    let path = periods.or(config.periods_file.as_deref());
    let timeline = match path {
        Some(path) => {
            info!(path = %path.display(), "loading periods");
            Timeline::load(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => builtin_timeline(),
    };
    Ok(timeline)
}

fn cmd_tui(config: &Config, periods: Option<&Path>, theme: &str) -> Result<(), Box<dyn Error>> {
    let timeline = load_timeline(config, periods)?;
    let theme = Theme::by_name(theme).ok_or_else(|| format!("unknown theme: {theme}"))?;
    let state = TimelineState::new(timeline, config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(epochs_tui::run_tui(state, config, theme))
}

fn cmd_list(config: &Config, periods: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    let timeline = load_timeline(config, periods)?;
    let timeline = match &config.title {
        Some(title) => timeline.with_title(title.clone()),
        None => timeline,
    };

    if json {
        println!("{}", timeline.to_json_pretty()?);
        return Ok(());
    }

    println!("{}\n", timeline.title());
    let total = timeline.count().get();
    for (index, period) in timeline.periods().iter().enumerate() {
        println!(
            "  {}  {}-{}  {} ({} events)",
            format_counter(index, total),
            period.from,
            period.to,
            period.title,
            period.events.len()
        );
    }
    Ok(())
}

fn cmd_check(file: &Path) -> Result<(), Box<dyn Error>> {
    let timeline = Timeline::load(file).map_err(|e| format!("{}: {e}", file.display()))?;

    for period in timeline.periods() {
        if period.from > period.to {
            println!(
                "  Warning: '{}' ends before it starts ({} > {})",
                period.title, period.from, period.to
            );
        }
        for event in &period.events {
            if !(period.from..=period.to).contains(&event.year) {
                println!(
                    "  Warning: event in {} lies outside '{}' ({}-{})",
                    event.year, period.title, period.from, period.to
                );
            }
        }
    }

    println!(
        "{}: ok, {} periods, {} events",
        file.display(),
        timeline.count(),
        timeline.event_count()
    );
    Ok(())
}

fn cmd_export(output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let json = builtin_timeline().to_json_pretty()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_trace(
    config: &Config,
    periods: Option<&Path>,
    to: i64,
    fps: u32,
) -> Result<(), Box<dyn Error>> {
    let timeline = load_timeline(config, periods)?;
    let mut state = TimelineState::new(timeline, config);
    let frame = Duration::from_secs(1) / fps.max(1);

    if !state.jump_to(to, Duration::ZERO) {
        println!("Already at {}", state.counter_label());
        return Ok(());
    }

    println!(
        "{} -> {}",
        state.timeline().period(0).title,
        state.active_period().title
    );
    for i in 0..=MAX_TRACE_FRAMES {
        let now = frame * i;
        state.tick(now);
        let view = state.view();
        println!(
            "{:>6} ms  {:>6} {:>6}  events {:.2}",
            now.as_millis(),
            view.years.from,
            view.years.to,
            view.events_opacity
        );
        if !state.is_animating() {
            break;
        }
    }
    Ok(())
}
