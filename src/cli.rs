use crate::commands;
use crate::common::CommonParams;
use crate::log_debug;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use std::path::PathBuf;

const LOG_FILE: &str = "release-herald-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Release Herald: release notes to customer notifications",
    long_about = "Release Herald turns a semi-structured release note into validated, \
                  audience-specific artifacts: a customer notification email and an \
                  internal tracking comment.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
#[command(subcommand_negates_reqs = true)]
#[command(subcommand_precedence_over_arg = true)]
pub enum Commands {
    /// Run the full pipeline over one release record
    #[command(
        about = "Parse, validate and render one release record",
        long_about = "Read a release record ({title, body, tag, url} as JSON) from a file or \
                      stdin, run the content pipeline, and emit the labeled output map."
    )]
    Process {
        #[command(flatten)]
        common: CommonParams,

        /// Path to the release record JSON (stdin when omitted)
        #[arg(short, long, help = "Path to the release record JSON (stdin when omitted)")]
        input: Option<PathBuf>,

        /// Print human-readable artifacts instead of the JSON map
        #[arg(short, long, help = "Print human-readable artifacts instead of the JSON map")]
        pretty: bool,
    },

    /// Validate a release record without rendering
    #[command(
        about = "Validate one release record",
        long_about = "Extract facts from the record and print the validation verdict. \
                      Exits non-zero when the record is rejected."
    )]
    Validate {
        #[command(flatten)]
        common: CommonParams,

        /// Path to the release record JSON (stdin when omitted)
        #[arg(short, long, help = "Path to the release record JSON (stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Render artifacts without gating on validation
    #[command(
        about = "Render notification artifacts for one release record",
        long_about = "Best-effort rendering of the email and tracking artifacts, even for \
                      records that would fail validation."
    )]
    Render {
        #[command(flatten)]
        common: CommonParams,

        /// Path to the release record JSON (stdin when omitted)
        #[arg(short, long, help = "Path to the release record JSON (stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Configure the application settings
    #[command(about = "Configure the application settings")]
    Config {
        #[command(flatten)]
        common: CommonParams,

        /// Print the current configuration
        #[arg(short, long, help = "Print the current configuration")]
        print: bool,
    },

    /// Create or update a project-specific configuration file
    #[command(
        about = "Manage project-specific configuration",
        long_about = "Create or update a project-specific .heraldconfig file in the \
                      working directory."
    )]
    ProjectConfig {
        #[command(flatten)]
        common: CommonParams,

        /// Print the current project configuration
        #[arg(short, long, help = "Print the current project configuration")]
        print: bool,
    },
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Main function to parse arguments and handle the command
pub fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
    } else {
        crate::logger::disable_logging();
    }

    if cli.quiet {
        crate::ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command)
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["release-herald", "--help"]);
        Ok(())
    }
}

/// Dispatch a parsed subcommand to its handler
pub fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Process {
            common,
            input,
            pretty,
        } => {
            log_debug!("Dispatching 'process' (pretty: {})", pretty);
            commands::handle_process_command(&common, input.as_deref(), pretty)
        }
        Commands::Validate { common, input } => {
            commands::handle_validate_command(&common, input.as_deref())
        }
        Commands::Render { common, input } => {
            commands::handle_render_command(&common, input.as_deref())
        }
        Commands::Config { common, print } => commands::handle_config_command(&common, print),
        Commands::ProjectConfig { common, print } => {
            commands::handle_project_config_command(&common, print)
        }
    }
}
