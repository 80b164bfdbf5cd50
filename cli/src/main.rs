mod commands;
mod terminal;

use commands::{CommandLine, Commands, children, filter, journal, machines, shapes};
use solid_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(&cfg);

    let result = match commands.command {
        Commands::Filter { color, size, legacy } => {
            print::section("open/closed", &cfg);
            filter::filter(color, size, legacy, &cfg)
        }
        Commands::Children { name } => {
            print::section("dependency inversion", &cfg);
            children::children(&name, &cfg)
        }
        Commands::Machines => {
            print::section("interface segregation", &cfg);
            machines::machines(&cfg)
        }
        Commands::Shapes {
            width,
            height,
            side,
        } => {
            print::section("liskov substitution", &cfg);
            shapes::shapes(width, height, side, &cfg)
        }
        Commands::Journal {
            file,
            overwrite,
            entries,
        } => {
            print::section("single responsibility", &cfg);
            journal::journal(file, overwrite, entries, &cfg)
        }
    };

    print::footer(&cfg);
    result
}
