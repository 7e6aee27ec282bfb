use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, process};

use anyhow::{anyhow, Result};
use steno_tool::{
    encode::{encode, queue_len},
    keycodes::{self, used_by_encoder, KeycodeDesc},
    read_text,
    simulate::{simulate, SimOptions},
};

/// Inspect how text is typed by the steno keyboard firmware
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the key actions that type some text
    Encode(EncodeArgs),
    /// Type text against a simulated host and show each report it is sent
    Simulate(SimulateArgs),
    /// List keycode names
    Keys(KeysArgs),
}

#[derive(Args)]
struct TextArgs {
    /// The text to type
    #[clap()]
    text: Option<String>,

    /// Read the text from a file instead
    #[clap(long, short)]
    file: Option<PathBuf>,
}

impl TextArgs {
    fn read(&self) -> Result<String> {
        read_text(self.text.as_deref(), self.file.as_deref())
    }
}

#[derive(Args)]
struct EncodeArgs {
    #[command(flatten)]
    text: TextArgs,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    text: TextArgs,

    /// Milliseconds between scheduler ticks
    #[clap(long, default_value_t = 1)]
    tick_ms: u32,

    /// Milliseconds to wait on a busy host before reporting a stall
    #[clap(long, default_value_t = steno_common::scheduler::KEY_TIMEOUT_MS)]
    timeout_ms: u32,

    /// Submission attempts (counted from 1) the host refuses
    #[clap(long, short, value_delimiter = ',')]
    reject: Vec<usize>,

    /// Give up after this many ticks
    #[clap(long, default_value_t = 100_000)]
    max_ticks: u32,
}

#[derive(Args)]
struct KeysArgs {
    /// Include the keycode hex value
    #[clap(long, short)]
    verbose: bool,

    /// Only list keys the text encoder can press
    #[clap(long, short)]
    used: bool,

    /// Show the keycode for a key name or alias instead of listing
    #[clap(long, short)]
    lookup: Option<String>,

    /// Only list key names that contain pattern (case insensitive)
    #[clap()]
    pattern: Option<String>,
}

fn encode_text(args: &EncodeArgs) -> Result<()> {
    let text = args.text.read()?;
    for line in encode(&text) {
        println!("{line}");
    }
    println!("queue slots: {}", queue_len(&text));
    Ok(())
}

fn simulate_text(args: &SimulateArgs) -> Result<()> {
    let text = args.text.read()?;
    let opts = SimOptions {
        tick_ms: args.tick_ms,
        timeout_ms: args.timeout_ms,
        reject: args.reject.clone(),
        max_ticks: args.max_ticks,
        ..Default::default()
    };
    let sim = simulate(&text, &opts)?;
    for s in &sim.submissions {
        println!("{s}");
    }
    println!(
        "ticks: {}, reports: {}, rejected: {}",
        sim.ticks,
        sim.accepted().count(),
        sim.submissions.len() - sim.accepted().count()
    );
    if sim.evicted != 0 {
        return Err(anyhow!("{} actions were dropped; text too long", sim.evicted));
    }
    Ok(())
}

fn lookup_key(name: &str) -> Result<String> {
    let code = keycodes::key_code(name).ok_or_else(|| anyhow!("Unknown key name {name:?}"))?;
    Ok(format!(
        "{code:02X}: {}",
        keycodes::key_name(code).unwrap_or(name)
    ))
}

fn list_keys(args: &KeysArgs) -> Result<()> {
    if let Some(name) = &args.lookup {
        println!("{}", lookup_key(name)?);
        return Ok(());
    }
    let pattern = args.pattern.as_deref().map(str::to_lowercase);
    let mut codes: Vec<KeycodeDesc> = keycodes::keycodes_iter()
        .filter(|d| !args.used || used_by_encoder(d.code))
        .filter(|d| match &pattern {
            Some(p) => d.name.to_lowercase().contains(p.as_str()),
            None => true,
        })
        .collect();
    codes.sort_by(|a, b| a.code.cmp(&b.code).then(a.name.cmp(b.name)));

    if args.verbose {
        let mut prev_code = None;
        let mut names = vec![];
        for d in codes {
            if prev_code != Some(d.code) {
                if let Some(code) = prev_code {
                    println!("{code:02X}: {}", names.join(", "));
                    names.clear();
                }
                prev_code = Some(d.code);
            }
            names.push(d.name);
        }
        if let Some(code) = prev_code {
            println!("{code:02X}: {}", names.join(", "));
        }
    } else {
        for d in codes {
            println!("{}", d.name);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Encode(args) => encode_text(args),
        Commands::Simulate(args) => simulate_text(args),
        Commands::Keys(args) => list_keys(args),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_simulate() {
        let cli = Cli::try_parse_from([
            "steno-tool",
            "simulate",
            "Hi!",
            "--tick-ms",
            "5",
            "--reject",
            "3,4",
        ])
        .unwrap();
        let Commands::Simulate(args) = &cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.text.text.as_deref(), Some("Hi!"));
        assert_eq!(args.tick_ms, 5);
        assert_eq!(args.timeout_ms, 50);
        assert_eq!(args.reject, [3, 4]);

        run(&cli).unwrap();
    }

    #[test]
    fn encode_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Hello. ").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["steno-tool", "encode", "--file", path]).unwrap();
        run(&cli).unwrap();

        let cli = Cli::try_parse_from(["steno-tool", "encode"]).unwrap();
        assert!(run(&cli).is_err());
    }

    #[test]
    fn keys_cmd() {
        let cli = Cli::try_parse_from(["steno-tool", "keys", "-v", "-u", "shift"]).unwrap();
        run(&cli).unwrap();

        let cli = Cli::try_parse_from(["steno-tool", "keys", "--lookup", "lshift"]).unwrap();
        run(&cli).unwrap();
    }

    #[test]
    fn lookup_by_alias() {
        assert_eq!(lookup_key("lshift").unwrap(), "E1: LeftShift");
        assert_eq!(lookup_key("left_brace").unwrap(), "2F: LeftBrace");
        assert_eq!(lookup_key("\\").unwrap(), "31: Backslash");
        assert_eq!(
            lookup_key("hyper").unwrap_err().to_string(),
            "Unknown key name \"hyper\""
        );
    }
}
