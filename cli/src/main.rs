mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, divide, drill};
use faultr_common::config::Config;
use faultr_common::error;
use faultr_common::fault::Fault;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };
    print::banner(&cfg);

    let outcome = match commands.command.unwrap_or_default() {
        Commands::Drill {
            numerator,
            denominator,
        } => {
            print::header("running fault drill", cfg.quiet);
            drill::run(numerator, denominator)
        }
        Commands::Divide {
            numerator,
            denominator,
        } => {
            print::header("guarded division", cfg.quiet);
            divide::run(numerator, denominator)
        }
    };

    // Last-resort handlers. The runtime family gets its own line; the
    // universal arm covers every other escaped value. Exit status stays 0.
    if let Err(report) = outcome {
        match report.downcast_ref::<Fault>() {
            Some(Fault::Runtime(fault)) => error!("unhandled runtime fault: {fault}"),
            _ => error!("unhandled fault: {report:#}"),
        }
    }

    print::end_of_program(cfg.quiet);
    ExitCode::SUCCESS
}
