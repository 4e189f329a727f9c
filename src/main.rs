use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::{Subcommand, ValueEnum};
use env_logger::Builder;
use log::{debug, info};

use rox::diagnostic::StderrReporter;
use rox::parser::Parser;
use rox::printer::{AstPrinter, RpnConverter, Transpiler};
use rox::runner::{Lox, RunStatus};
use rox::scanner::{scan_tokens, Scanner};
use rox::token::Token;

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Parses a Lox program and prints it in the chosen form
    Parse {
        filename: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Sexpr)]
        format: Format,
    },

    /// Runs input from a file as a Lox program
    Run { filename: PathBuf },

    /// Starts an interactive prompt
    Repl,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Parenthesized prefix form
    Sexpr,
    /// Reverse Polish notation (expression statements only)
    Rpn,
    /// Python-like source
    Python,
    /// The syntax tree as JSON
    Json,
}

/// Reads the contents of a file into a String
fn read_file(filename: &Path) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();

    let bytes = reader
        .read_to_string(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // `[module:line] - message`, module path without the crate prefix
    Builder::new()
        .format(|buf, record| {
            let module = record.module_path().unwrap_or("<unnamed>");
            let module = module.strip_prefix("rox::").unwrap_or(module);
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

fn tokenize(source: &str, json: bool) -> Result<i32> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut tokenized = true;

    for token in Scanner::new(source) {
        match token {
            Ok(token) => {
                debug!("Scanned token: {}", token);

                if !json {
                    println!("{}", token);
                }
                tokens.push(token);
            }

            Err(e) => {
                tokenized = false;

                debug!("Tokenization debug: {}", e);

                eprintln!("{}", e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    }

    if !tokenized {
        debug!("Tokenization failed, exiting with code 65");
        return Ok(RunStatus::StaticError.exit_code());
    }

    info!("Tokenization completed successfully");
    Ok(0)
}

fn parse(source: &str, format: Format) -> Result<i32> {
    let scanned = scan_tokens(source);
    let parsed = Parser::new(scanned.value).parse();

    let errors: Vec<_> = scanned.errors.into_iter().chain(parsed.errors).collect();
    if !errors.is_empty() {
        for e in &errors {
            debug!("Parse debug: {}", e);
            eprintln!("{}", e);
        }
        return Ok(RunStatus::StaticError.exit_code());
    }

    let statements = parsed.value;
    let rendered = match format {
        Format::Sexpr => AstPrinter::print_program(&statements),
        Format::Rpn => RpnConverter::convert_program(&statements),
        Format::Python => Transpiler::transpile(&statements),
        Format::Json => serde_json::to_string_pretty(&statements)?,
    };

    debug!("Rendered program as {:?}", format);
    println!("{}", rendered);

    Ok(0)
}

fn repl() -> Result<i32> {
    info!("Starting REPL");

    let mut lox = Lox::new();
    let mut reporter = StderrReporter;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        // Errors are reported and the session keeps going.
        let status = lox.run(&line, &mut reporter);
        debug!("REPL line finished with {:?}", status);
    }

    println!();
    Ok(0)
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    let code = match &args.commands {
        Commands::Tokenize { filename, json } => {
            info!("Running Tokenize subcommand");
            tokenize(&read_file(filename)?, *json)?
        }

        Commands::Parse { filename, format } => {
            info!("Running Parse subcommand");
            parse(&read_file(filename)?, *format)?
        }

        Commands::Run { filename } => {
            info!("Running Run subcommand");
            let source = read_file(filename)?;

            let mut lox = Lox::new();
            let status = lox.run(&source, &mut StderrReporter);

            info!("Run finished with {:?}", status);
            status.exit_code()
        }

        Commands::Repl => repl()?,
    };

    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
