//! Command-line driver: compile a Mini source file to `<input>.asm`.

use clap::Parser;
use minic::scanner::{Classifier, Scanner};
use minic::CompileError;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "minic", version, about = "Compile a Mini source file for the Mini VM")]
struct Args {
    /// The source file to compile.
    source: PathBuf,

    /// Where to write the listing; defaults to `<source>.asm`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the classified token stream instead of compiling.
    #[arg(long)]
    dump_tokens: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = match fs::read_to_string(&args.source) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("unable to open file {:?}: {}", args.source, err);
            process::exit(1);
        }
    };

    if args.dump_tokens {
        dump_tokens(&source);
        return;
    }

    match minic::compile(&source) {
        Ok(result) => {
            for diagnostic in &result.bindings {
                eprintln!("error: {}", diagnostic);
            }
            let output = args.output.clone().unwrap_or_else(|| {
                let mut name = args.source.clone().into_os_string();
                name.push(".asm");
                PathBuf::from(name)
            });
            if let Err(err) = fs::write(&output, result.listing) {
                eprintln!("unable to write {:?}: {}", output, err);
                process::exit(1);
            }
            println!("input accepted and compiled");
            println!("output intermediate code file: {}", output.display());
        }
        Err(err) => {
            eprintln!("{}", err);
            if let CompileError::Syntax { lexeme, .. } = &err {
                if lexeme == "$end" {
                    eprintln!("make sure the input ends with the file end character $");
                }
            }
            process::exit(1);
        }
    }
}

fn dump_tokens(source: &str) {
    let classifier = Classifier::new();
    for token in Scanner::new(source, &classifier) {
        println!("{}: {}", token.lexeme, token.symbol);
    }
}
