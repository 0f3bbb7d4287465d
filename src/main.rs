//! escolor - CLI entry point

use std::io::{self, Write};
use std::process;

use anyhow::Result;

use escolor::{output, usage, Error, Outcome};

fn main() {
    // Arguments that are not UTF-8 are kept with replacement characters
    let mut args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let program = usage::program_name(args.next().as_deref());

    if let Err(err) = run(&program, args) {
        match err.downcast_ref::<Error>() {
            Some(err) => eprintln!("{}: {}", program, err),
            None => eprintln!("{}: {:#}", program, err),
        }
        process::exit(1);
    }
}

fn run(program: &str, args: impl Iterator<Item = String>) -> Result<()> {
    let outcome = escolor::run(args)?;

    let mut stdout = io::stdout().lock();
    match outcome {
        Outcome::Help => stdout.write_all(usage::help(program).as_bytes())?,
        Outcome::Version => stdout.write_all(usage::about().as_bytes())?,
        Outcome::Rendered(rendered) => {
            output::emit(&mut stdout, &rendered.segments, rendered.flags)?
        }
    }
    stdout.flush()?;
    Ok(())
}
