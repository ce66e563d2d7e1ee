use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rhoraires
#[derive(Parser)]
#[command(
    name = "rhoraires",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract recurring weekly opening hours from French free-text descriptions",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Log every binding and override decision (same as RUST_LOG=debug)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Extract schedules from a CSV file of descriptions
    Extract {
        /// Input CSV file (with a header row)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        /// Output file; the JSON document goes to stdout when omitted
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Output format, for the file or for stdout when no output is given
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Column holding the record id (overrides the configuration)
        #[arg(long = "id-column", value_name = "NAME")]
        id_column: Option<String>,

        /// Column holding the description (overrides the configuration)
        #[arg(long = "text-column", value_name = "NAME")]
        text_column: Option<String>,

        /// Skip the override table
        #[arg(long = "no-overrides")]
        no_overrides: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Extract the schedule of a single description and print it as JSON
    Parse {
        /// Description text
        text: String,

        /// Record id, so that override rules for it apply
        #[arg(long)]
        id: Option<i64>,
    },

    /// Print the override table
    Overrides,
}
