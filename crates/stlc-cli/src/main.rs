use std::fs;
use std::io::{self, Read};
use std::process::exit;

use clap::Parser;
use stlc_checker::{type_of, Ctx};
use stlc_parser::parse;
use stlc_tree::Node;

/// Checks a term, or echoes a type in canonical form.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the source file, or `-` for standard input.
    file: Option<String>,

    /// Print the parsed tree in its debug form instead of checking it.
    #[arg(long)]
    ast: bool,
}

fn main() {
    let cli = Cli::parse();

    let (file_name, code) = read_source(cli.file.as_deref()).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        exit(1)
    });

    let node = parse(&code).unwrap_or_else(|err| {
        eprintln!("{}", err.with_code(&code, &file_name));
        exit(1)
    });

    if cli.ast {
        println!("{:#?}", node);
        return;
    }

    match node {
        Node::Term(term) => match type_of(&term, &Ctx::default()) {
            Ok(ty) => println!("{} : {}", term, ty),
            Err(err) => {
                eprintln!("error: {}", err);
                exit(1);
            }
        },
        Node::Type(ty) => println!("{}", ty),
    }
}

fn read_source(file: Option<&str>) -> io::Result<(String, String)> {
    match file {
        Some(path) if path != "-" => Ok((path.to_string(), fs::read_to_string(path)?)),
        _ => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(("<stdin>".to_string(), code))
        }
    }
}
