use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flatdb_core::parser::parser::parse;
use flatdb_core::Database;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flatdb", version, about = "Flat-file table manager")]
struct Args {
    /// Directory holding catalog.json and tables/
    #[arg(long, env = "FLATDB_DATA_DIR", default_value = "./flatdb")]
    data_dir: PathBuf,
}

const HELP: &str = "\
Commands:
  create_table <table> <col:type> ...                  -> create a table (types: int|str|bool)
  list_tables                                          -> list tables
  drop_table <table>                                   -> drop a table and its records
  info <table>                                         -> show columns and record count
  insert into <table> values (<v1>, <v2>, ...)         -> add a record
  select from <table> [where <col>=<value> [and ...]]  -> show records
  update <table> set <col>=<value>[, ...] [where ...]  -> change records
  delete from <table> where <col>=<value> [and ...]    -> remove records
  parse <cmd>                                          -> show parsed command (debug)
  help                                                 -> this help
  exit|quit                                            -> quit";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut db = Database::open(&args.data_dir)
        .with_context(|| format!("failed to open database at {}", args.data_dir.display()))?;
    tracing::info!(path = %db.path().display(), "database opened");

    println!("flatdb (type 'help' or 'exit')");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    loop {
        print!("db> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                println!("Failed to read input: {e}");
                continue;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            println!("{HELP}");
            continue;
        }

        // ---- PARSE DEBUG MODE ----
        if let Some(rest) = input.strip_prefix("parse ") {
            match parse(rest) {
                Ok(cmd) => println!("Parsed as: {cmd:?}"),
                Err(e) => eprintln!("Parse error: {e}"),
            }
            continue;
        }

        // ---- NORMAL EXECUTION MODE ----
        match db.execute(input) {
            Ok(out) => println!("{out}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    Ok(())
}
