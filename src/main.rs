use std::{fs, process::ExitCode};

use boolexpr::{
    get_result,
    interpreter::bindings::{Binding, Bindings},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// boolexpr evaluates boolean algebra expressions written with `+` (or), `*`
/// (and), `^` (xor), `-` (not), single-letter variables and the literals `T`
/// and `F`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Bind a variable, e.g. `-b a=true`. May be repeated.
    #[arg(short, long = "bind", value_name = "NAME=VALUE")]
    bindings: Vec<Binding>,

    /// Do not print the expression tree.
    #[arg(long)]
    no_tree: bool,

    /// The expression, or the file path with `--file`. A leading `-` is read
    /// as NOT unless it spells one of the flags above (`-b`, `-f`, `-h`,
    /// `-V`); put `--` before such an expression.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let mut bindings = Bindings::default();
    bindings.extend(args.bindings.iter().copied());

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let expressions =
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let mut failed = false;
    for (i, expression) in expressions.enumerate() {
        if i > 0 {
            println!();
        }
        match get_result(expression, &bindings) {
            Ok(evaluation) => {
                for name in &evaluation.unbound {
                    tracing::warn!(%name, "variable is not bound, treating it as false");
                }
                if args.no_tree {
                    println!("Postfix: {}", evaluation.postfix);
                    println!("Expression: {}", evaluation.infix);
                    println!("Result: {}", if evaluation.value { "True" } else { "False" });
                } else {
                    println!("{evaluation}");
                }
            },
            Err(e) => {
                eprintln!("{expression}: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
