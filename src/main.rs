// tinypar: syntax analyzer for a tiny imperative language

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tinypar::parser::ast;
use tinypar::Error;

#[derive(Parser)]
#[command(name = "tinypar", about = "Parse a lexed token stream into an AST dump", version)]
struct Cli {
    /// Token file produced by the lexer (one token per line)
    input: PathBuf,

    /// Destination for the AST dump (default: the input path with a `.par`
    /// extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the dump to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

fn run(cli: Cli) -> Result<(), Error> {
    let source = fs::read_to_string(&cli.input)?;
    let root = tinypar::parse_lex(&source)?;
    let dump = ast::dump(root.as_ref());

    if cli.stdout {
        print!("{dump}");
    } else {
        let path = cli
            .output
            .unwrap_or_else(|| cli.input.with_extension("par"));
        fs::write(&path, &dump)?;
        println!("Wrote AST dump to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
