use explorer::error::ShellError;
use explorer::flags::Flags;
use explorer::logging;
use explorer::shell::StdShell;
use std::env;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("explorer: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("explorer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(logging::level_for(
        flags.is_set("quiet"),
        flags.is_set("debug"),
    ))?;

    let mut shell = StdShell::from_flags(&flags)?;
    shell.run()
}
