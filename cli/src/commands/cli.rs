use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "socrange",
    version,
    about = "SOC demonstration range: scenario catalog, simulation playback, and the trigger API"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to an alternate config file (default: ~/.socrange/config.toml,
    /// then ./config.toml, then built-in defaults).
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ListArgs {
    /// Substring match over title, category, and detection method.
    #[arg(long)]
    pub query: Option<String>,

    /// Keep only use cases in this category (exact, case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ShowArgs {
    /// Use case id, e.g. "1".
    pub id: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    /// Use case id to simulate.
    pub id: String,

    /// Replay feed interval in milliseconds (overrides [playback] feed_tick_ms).
    #[arg(long)]
    pub speed: Option<u64>,

    /// Skip the POST to the trigger endpoint before playback.
    #[arg(long, default_value_t = false)]
    pub no_trigger: bool,

    /// Print the session to stdout instead of opening the TUI.
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 5002)]
    pub port: u16,

    /// Session id recorded in the state file (default: a fresh UUID).
    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TriggerArgs {
    /// Script id to send as `scriptId`.
    pub id: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnomalyArgs {
    /// Skip training and only score the bundled prediction rows.
    #[arg(long, default_value_t = false)]
    pub predict_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the use case catalog.
    List(ListArgs),
    /// Show one use case in detail, including its transcript.
    Show(ShowArgs),
    /// Play a full simulation session (trigger, transcript, replay feed).
    Run(RunArgs),
    /// Serve the trigger API endpoint.
    Serve(ServeArgs),
    /// POST the trigger endpoint once and print the receipt.
    Trigger(TriggerArgs),
    /// Train and score the anomaly detector on the bundled demo logs.
    Anomaly(AnomalyArgs),
}
