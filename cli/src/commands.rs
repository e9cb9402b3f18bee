pub mod divide;
pub mod drill;

use clap::{Parser, Subcommand};

/// Operands the no-argument run uses: a division that is guaranteed to
/// exercise the division guard.
pub const DEFAULT_NUMERATOR: f64 = 10.0;
pub const DEFAULT_DENOMINATOR: f64 = 0.0;

#[derive(Parser)]
#[command(name = "faultr")]
#[command(about = "A layered fault-handling drill.")]
pub struct CommandLine {
    /// Reduce output (-q: warnings and errors, -qq: errors only)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full layered drill
    #[command(alias = "d")]
    Drill {
        #[arg(long, default_value_t = DEFAULT_NUMERATOR, allow_negative_numbers = true)]
        numerator: f64,
        #[arg(long, default_value_t = DEFAULT_DENOMINATOR, allow_negative_numbers = true)]
        denominator: f64,
    },
    /// Divide two numbers behind the guarded boundary
    Divide {
        #[arg(allow_negative_numbers = true)]
        numerator: f64,
        #[arg(allow_negative_numbers = true)]
        denominator: f64,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Drill {
            numerator: DEFAULT_NUMERATOR,
            denominator: DEFAULT_DENOMINATOR,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
