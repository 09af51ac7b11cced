// cambridge-pseudo: Cambridge pseudocode validator, formatter and evaluator

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use cambridge_pseudo::config::ExecutionLimits;
use cambridge_pseudo::events::EventKind;
use cambridge_pseudo::ui::App;
use cambridge_pseudo::{formatter, interpreter, validator};

#[derive(Debug, Parser)]
#[command(
    name = "cambridge-pseudo",
    version,
    about = "Validate, format and run Cambridge pseudocode",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,

    /// Open this file in the playground
    file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open a file in the terminal playground
    Tui { file: PathBuf },

    /// Print the formatted file
    Fmt {
        file: PathBuf,
        /// Print nothing; fail if the file is not already formatted
        #[arg(long)]
        check: bool,
    },

    /// Report style warnings and syntax errors
    Check {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },

    /// Execute the file and print its events
    Run {
        file: PathBuf,
        #[arg(long)]
        json: bool,
        /// Override the step cap
        #[arg(long)]
        max_steps: Option<usize>,
        /// Override the wall-clock cap
        #[arg(long)]
        max_time_ms: Option<u64>,
    },
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "cambridge_pseudo=warn",
        1 => "cambridge_pseudo=debug",
        _ => "cambridge_pseudo=trace",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let command = match (cli.command, cli.file) {
        (Some(command), _) => command,
        (None, Some(file)) => Command::Tui { file },
        (None, None) => {
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let succeeded = match command {
        Command::Tui { file } => run_tui(&file)?,
        Command::Fmt { file, check } => run_fmt(&file, check)?,
        Command::Check { file, json } => run_check(&file, json)?,
        Command::Run {
            file,
            json,
            max_steps,
            max_time_ms,
        } => {
            let mut limits = ExecutionLimits::default();
            if let Some(steps) = max_steps {
                limits = limits.with_max_steps(steps);
            }
            if let Some(ms) = max_time_ms {
                limits = limits.with_max_time_ms(ms);
            }
            run_program(&file, json, limits)?
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}

fn read_source(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e).into())
}

fn run_fmt(path: &Path, check: bool) -> Result<bool, Box<dyn Error>> {
    let source = read_source(path)?;
    tracing::info!(file = %path.display(), check, "formatting");

    if check {
        let formatted = formatter::is_formatted(&source);
        if !formatted {
            eprintln!("{} is not formatted", path.display());
        }
        return Ok(formatted);
    }

    print!("{}", formatter::format(&source));
    Ok(true)
}

fn run_check(path: &Path, json: bool) -> Result<bool, Box<dyn Error>> {
    let source = read_source(path)?;
    tracing::info!(file = %path.display(), "validating");
    let result = validator::validate(&source);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for diagnostic in result.diagnostics() {
            println!("{}: {}", path.display(), diagnostic);
        }
        println!(
            "{} error(s), {} warning(s)",
            result.errors.len(),
            result.warnings.len()
        );
    }
    Ok(result.is_valid)
}

fn run_program(path: &Path, json: bool, limits: ExecutionLimits) -> Result<bool, Box<dyn Error>> {
    let source = read_source(path)?;
    tracing::info!(
        file = %path.display(),
        max_steps = limits.max_steps,
        "executing"
    );
    let response = interpreter::execute_with_limits(&source, limits);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        // Program output on stdout; faults and system notices on stderr
        for event in &response.events {
            match event.kind {
                EventKind::Output => println!("{}", event.text),
                EventKind::Error | EventKind::System => eprintln!("{}", event.text),
            }
        }
    }
    Ok(response.success)
}

fn run_tui(path: &Path) -> Result<bool, Box<dyn Error>> {
    let source = read_source(path)?;
    tracing::info!(file = %path.display(), "opening playground");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source, Some(path.to_path_buf()), ExecutionLimits::default());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        return Ok(false);
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_file_opens_playground() {
        let cli = Cli::try_parse_from(["cambridge-pseudo", "prog.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("prog.txt")));
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "cambridge-pseudo",
            "run",
            "prog.txt",
            "--json",
            "--max-steps",
            "50",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Run {
                json, max_steps, max_time_ms, ..
            }) => {
                assert!(json);
                assert_eq!(max_steps, Some(50));
                assert_eq!(max_time_ms, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
