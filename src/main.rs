use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser as _;
use treelox::{
    Observer,
    ast::Expr,
    error::Diagnostics,
    interpreter::{lexer::Token, parser::core::MAX_DEPTH},
    run_with,
};

/// Exit status for a lexical or syntax error in the script.
const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for a runtime error in the script.
const EXIT_SOFTWARE: i32 = 70;
/// Exit status when the script cannot be read.
const EXIT_IO_ERROR: i32 = 74;

/// treelox evaluates Lox expressions, either from a script file or
/// interactively.
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Prints every scanned token before parsing.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed expression tree before evaluating it.
    #[arg(long)]
    ast: bool,

    /// Nesting budget of the parser. A group costs four units, a prefix
    /// operator or binary operator one.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,
}

fn main() {
    let args = Args::parse();

    match &args.script {
        Some(path) => run_file(path, &args),
        None => run_prompt(&args),
    }
}

fn run_file(path: &Path, args: &Args) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                                             eprintln!("Failed to read the script '{}': {e}",
                                                       path.display());
                                             process::exit(EXIT_IO_ERROR);
                                         });

    let mut diagnostics = Diagnostics::new();
    run(&source, args, &mut diagnostics);

    if diagnostics.had_error() {
        process::exit(EXIT_DATA_ERROR);
    }
    if diagnostics.had_runtime_error() {
        process::exit(EXIT_SOFTWARE);
    }
}

fn run_prompt(args: &Args) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        // Every line starts clean; an error never ends the session.
        let mut diagnostics = Diagnostics::new();
        run(&line, args, &mut diagnostics);
    }
}

/// Prints the intermediate products requested on the command line.
struct Dump {
    tokens: bool,
    ast:    bool,
}

impl Observer for Dump {
    fn scanned(&mut self, tokens: &[Token]) {
        if self.tokens {
            for token in tokens {
                println!("{token}");
            }
        }
    }

    fn parsed(&mut self, expr: &Expr) {
        if self.ast {
            println!("{expr}");
        }
    }
}

/// Runs one source text, printing the result to stdout and every diagnostic
/// to stderr.
fn run(source: &str, args: &Args, diagnostics: &mut Diagnostics) {
    let mut dump = Dump { tokens: args.tokens,
                          ast:    args.ast, };

    if let Some(value) = run_with(source, args.max_depth, &mut dump, diagnostics) {
        println!("{value}");
    }

    for diagnostic in diagnostics.iter() {
        eprintln!("{diagnostic}");
    }
}
