use std::fs;

use clap::Parser;
use crowflies::{
    console::{StdConsole, menu},
    measure,
};

/// crowflies measures the straight-line distance from the start of a route of
/// relative movement steps, written like `3F4R`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells crowflies to read the route from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// The route to measure. Leave it out to open the interactive menu.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = menu::run(&mut StdConsole) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let route = if args.file {
        fs::read_to_string(&contents).map(|text| text.trim_end().to_string())
                                     .unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                   &contents);
                                         std::process::exit(1);
                                     })
    } else {
        contents
    };

    match measure(&route) {
        Ok(distance) => println!("{distance}"),
        Err(e) => eprintln!("{e}"),
    }
}
