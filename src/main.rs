use std::fs;

use clap::Parser;
use postfixa::interpreter::evaluator::Calculator;
use rustyline::{DefaultEditor, error::ReadlineError};

/// postfixa is an easy to use Reverse Polish Notation calculator with a
/// persistent operand stack.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the lines of a file on one calculator instead of starting
    /// the interactive prompt.
    #[arg(short, long)]
    file: Option<String>,

    /// Evaluates a single expression and exits.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut calculator = Calculator::new();

    if let Some(expression) = args.expression {
        print_result(&mut calculator, &expression);
        return;
    }

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });

        for line in script.lines() {
            print_result(&mut calculator, line);
        }
        return;
    }

    repl(&mut calculator);
}

/// Evaluates one line, printing the result to stdout and the call's
/// diagnostics to stderr.
fn print_result(calculator: &mut Calculator, line: &str) {
    let result = calculator.evaluate_input(line);

    for diagnostic in calculator.diagnostics() {
        eprintln!("{diagnostic}");
    }

    println!("{result}");
}

/// Runs the interactive prompt until `exit`, Ctrl-C or Ctrl-D.
fn repl(calculator: &mut Calculator) {
    let Ok(mut editor) = DefaultEditor::new() else {
        eprintln!("Failed to initialize the interactive prompt.");
        std::process::exit(1);
    };

    loop {
        match editor.readline("Input> ") {
            Ok(line) => {
                let input = line.trim();

                if input == "exit" {
                    println!("Exit.");
                    break;
                }
                if input.is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(input);
                print_result(calculator, input);
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Exit.");
                break;
            },
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}
