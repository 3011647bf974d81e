use std::ffi::OsString;

pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile section to read connection settings from. Default is 'default'.
    /// If the profile is not configured, ENGSTER_BASE_URL must be set.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print request details and debug logs.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: ClapCommand,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Search English subtitle lines
    English {
        keyword: String,
        #[clap(long, help = "result page to fetch")]
        page: Option<u32>,
    },
    /// Search Korean translations
    Korean {
        keyword: String,
        #[clap(long, help = "result page to fetch")]
        page: Option<u32>,
    },
    /// Show the lines around a hit
    Context { content_id: i64, line_id: i64 },
    /// Read `en <keyword>` / `ko <keyword>` lines from stdin
    Interactive,
}

/// What the user asked the binary to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    English { keyword: String, page: Option<u32> },
    Korean { keyword: String, page: Option<u32> },
    Context { content_id: i64, line_id: i64 },
    Interactive,
}

impl From<ClapCommand> for SearchCommand {
    fn from(command: ClapCommand) -> Self {
        match command {
            ClapCommand::English { keyword, page } => SearchCommand::English { keyword, page },
            ClapCommand::Korean { keyword, page } => SearchCommand::Korean { keyword, page },
            ClapCommand::Context {
                content_id,
                line_id,
            } => SearchCommand::Context {
                content_id,
                line_id,
            },
            ClapCommand::Interactive => SearchCommand::Interactive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    command: SearchCommand,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            command: args.command.into(),
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> &SearchCommand {
        &self.command
    }
}
