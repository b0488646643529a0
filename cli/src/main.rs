use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ejson::constants::{DEFAULT_ARENA_CAPACITY, DEFAULT_MAX_DEPTH, DEFAULT_SCRATCH_CAPACITY};
use ejson::{Arena, MatchOptions, MatchOutcome, ParseOptions};

#[derive(Parser, Debug)]
#[command(name = "ejson", version, about = "Print and pattern-match JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a document and print it back.
    Print {
        #[command(flatten)]
        input: InputArgs,

        /// Render through a fixed-size buffer of this many bytes.
        #[arg(long, value_name = "bytes")]
        buffer: Option<usize>,
    },
    /// Match a document against a pattern and print the captured values.
    Match {
        /// Pattern, e.g. "[$n, true, {'name': $b}]".
        pattern: String,

        #[command(flatten)]
        input: InputArgs,

        /// Scratch capacity for decoding pattern literals.
        #[arg(long, value_name = "bytes", default_value_t = DEFAULT_SCRATCH_CAPACITY)]
        scratch_capacity: usize,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Accept single-quoted strings.
    #[arg(long)]
    single_quotes: bool,

    /// Arena capacity in bytes.
    #[arg(long, value_name = "bytes", default_value_t = DEFAULT_ARENA_CAPACITY)]
    arena_capacity: usize,

    /// Maximum nesting depth.
    #[arg(long, value_name = "number", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl InputArgs {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_single_quoted_strings(self.single_quotes)
            .with_max_depth(self.max_depth)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR  {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Print { input, buffer } => run_print(input, *buffer),
        Command::Match {
            pattern,
            input,
            scratch_capacity,
        } => run_match(pattern, input, *scratch_capacity),
    }
}

fn run_print(args: &InputArgs, buffer: Option<usize>) -> Result<ExitCode, Box<dyn Error>> {
    let source = read_input(args.input.as_deref())?;
    let mut arena = Arena::new(args.arena_capacity);
    let parsed = ejson::parse(&source, &mut arena, &args.parse_options())?;
    let root = arena.value(parsed.root);

    let mut out = match buffer {
        Some(size) => {
            let mut dst = vec![0u8; size];
            let required = ejson::write_to_slice(root, &mut dst);
            if required >= size {
                eprintln!("WARN  output truncated: {required} bytes needed, buffer holds {size}");
                dst.truncate(size.saturating_sub(1));
            } else {
                dst.truncate(required);
            }
            dst
        }
        None => ejson::to_vec(root),
    };
    out.push(b'\n');
    write_output(args.output.as_deref(), &out)?;
    Ok(ExitCode::SUCCESS)
}

fn run_match(
    pattern: &str,
    args: &InputArgs,
    scratch_capacity: usize,
) -> Result<ExitCode, Box<dyn Error>> {
    let source = read_input(args.input.as_deref())?;
    let mut arena = Arena::new(args.arena_capacity);
    let parsed = ejson::parse(&source, &mut arena, &args.parse_options())?;
    let root = arena.value(parsed.root);

    let options = MatchOptions::new()
        .with_scratch_capacity(scratch_capacity)
        .with_max_depth(args.max_depth);

    let result = match ejson::match_and_unpack_with(root, pattern, &options) {
        MatchOutcome::Match(captures) => {
            let mut out = Vec::new();
            for capture in &captures {
                serde_json::to_writer(&mut out, capture)?;
                out.push(b'\n');
            }
            write_output(args.output.as_deref(), &out)?;
            Ok(ExitCode::SUCCESS)
        }
        MatchOutcome::NoMatch => {
            eprintln!("no match");
            Ok(ExitCode::from(1))
        }
        MatchOutcome::BadFormat(message) => {
            eprintln!("ERROR  bad pattern: {message}");
            Ok(ExitCode::from(2))
        }
    };
    result
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read(path)?),
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => fs::write(path, data)?,
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(data)?;
            handle.flush()?;
        }
    }
    Ok(())
}
