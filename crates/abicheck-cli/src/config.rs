use std::ffi::OsString;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug)]
pub struct Config {
    pub log_file: Option<String>,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compare default and packed layouts of the catalog, or of the named structs only.
    Layout { structs: Vec<String>, quiet: bool },
    List { fields: bool },
    /// Key info of each character, or of the whole table when `None`.
    Ascii { chars: Option<String> },
    Type { text: String },
}

#[derive(Parser, Debug)]
#[clap(about = "Struct packing conformance checker and ASCII key-info table")]
#[clap(version, long_about = None)]
struct Args {
    /// A file receiving the logs, stderr when omitted
    #[clap(short, long, value_parser, global = true)]
    log_file: Option<String>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that catalogued structs keep their layout under 8-byte and 4-byte packing
    Layout {
        /// C name of a struct to check (repeatable), the whole catalog when omitted
        #[clap(long = "struct", value_parser)]
        structs: Vec<String>,

        /// Only print mismatches
        #[clap(short, long)]
        quiet: bool,
    },
    /// List catalogued structs with their default size
    List {
        /// Also print the offset of every member
        #[clap(long)]
        fields: bool,
    },
    /// Print scancode and modifiers producing each character
    Ascii {
        /// Characters to look up, the whole table when omitted
        #[clap(value_parser)]
        chars: Option<String>,
    },
    /// Print the key presses and releases typing the text would produce
    Type {
        #[clap(value_parser)]
        text: String,
    },
}

impl Config {
    pub fn parse_args() -> anyhow::Result<Self> {
        let args = Args::parse();

        Ok(Self::from_args(args))
    }

    /// Parses an explicit argument list, the first item being the program name.
    pub fn parse_from<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;

        Ok(Self::from_args(args))
    }

    fn from_args(args: Args) -> Self {
        let command = match args.command {
            Commands::Layout { structs, quiet } => Command::Layout { structs, quiet },
            Commands::List { fields } => Command::List { fields },
            Commands::Ascii { chars } => Command::Ascii { chars },
            Commands::Type { text } => Command::Type { text },
        };

        Self {
            log_file: args.log_file,
            command,
        }
    }
}
