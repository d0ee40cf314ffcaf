use anyhow::Result;
use tracing::info;

use crate::cli::ExampleArgs;
use crate::util::{write_text_file, write_text_stdout};

pub const EXAMPLE_INPUT: &str = "Part 1: https://cdn.discordapp.com/example1.jpg?abc Example prompt one\n\
Part 2: Example prompt without url\n\
Part 3: https://cdn.discordapp.com/example3.png More text after URL\n";

pub fn run(args: ExampleArgs) -> Result<()> {
    match args.output {
        Some(path) => {
            write_text_file(&path, EXAMPLE_INPUT)?;
            info!(path = %path.display(), "wrote example prompt list");
            Ok(())
        }
        None => write_text_stdout(EXAMPLE_INPUT.trim_end()),
    }
}
