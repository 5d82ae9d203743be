use std::fs;

use clap::Parser;
use quill::{
    evaluate_in,
    interpreter::{evaluator::core::Context, value::core::DEFAULT_DATE_FORMAT},
};
use tracing::Level;

/// quill evaluates a single expression of the quill template language and
/// prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// Logs evaluation steps to stderr. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// strftime-style format used when a date is printed.
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut context = Context::new().with_date_format(args.date_format);

    match evaluate_in(&mut context, &source) {
        Ok(value) => println!("{}", value.render(context.date_format())),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
