use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
/// Reads a single registry value the same way the Node addon does.
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Which kind of value to read.
enum Commands {
    /// Reads a REG_SZ or REG_EXPAND_SZ value.
    String(Location),
    /// Reads a REG_DWORD value.
    Dword(Location),
}

#[derive(Args)]
/// Where the value lives.
struct Location {
    /// Root hive, e.g. HKEY_CURRENT_USER.
    hive: String,

    /// Key path below the hive, e.g. Environment.
    path: String,

    /// Value name; pass "" for the key's default value.
    name: String,
}

#[cfg(windows)]
impl Location {
    fn as_args(&self) -> [&str; 3] {
        [self.hive.as_str(), self.path.as_str(), self.name.as_str()]
    }
}

#[cfg(windows)]
const EXIT_ABSENT: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// Main entrypoint for the CLI.
fn main() {
    // `try_init` also routes the library's `log` records into tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("off,winregistry=info,winregistry_cli=info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .expect("Failed to initialize logging!");

    let cli = Cli::parse();
    std::process::exit(run(cli.command));
}

#[cfg(windows)]
fn run(command: Commands) -> i32 {
    let result = match command {
        Commands::String(location) => winregistry::get_string_reg_key(&location.as_args()),
        Commands::Dword(location) => winregistry::get_dword_reg_key(&location.as_args())
            .map(|value| value.map(|number| number.to_string())),
    };

    match result {
        Ok(Some(value)) => {
            println!("{value}");
            0
        }
        Ok(None) => {
            tracing::info!("Value not found, or not of the requested type.");
            EXIT_ABSENT
        }
        Err(err) => {
            error!("{err}");
            EXIT_ERROR
        }
    }
}

#[cfg(not(windows))]
fn run(command: Commands) -> i32 {
    let (Commands::String(location) | Commands::Dword(location)) = command;
    error!("Cannot read {}\\{}: the registry only exists on Windows.", location.hive, location.path);
    EXIT_ERROR
}
