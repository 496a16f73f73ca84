use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use habit_savings::{
    amount::format_currency,
    app::DEFAULT_EXPORT_PATH,
    export::{self, Report},
    ui::ui,
    App, Calculator, Field,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::EnvFilter;

/// Work out how much swapping one habit for a cheaper one saves you.
#[derive(Parser, Debug)]
#[command(name = "habit-savings", version)]
struct Cli {
    /// Cost of the old habit, per occurrence
    #[arg(long)]
    old: Option<String>,

    /// Cost of the new habit, per occurrence
    #[arg(long)]
    new: Option<String>,

    /// Occurrences per week
    #[arg(long, default_value = "1")]
    frequency: String,

    /// Print the projection and exit instead of opening the calculator
    #[arg(long)]
    print: bool,

    /// With --print, emit JSON
    #[arg(long, requires = "print")]
    json: bool,

    /// Where `e` on the results screen writes; `.json` selects JSON
    #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
    export_path: PathBuf,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn calculator(&self) -> Calculator {
        let mut calc = Calculator::new();
        if let Some(old) = &self.old {
            calc.set_amount(Field::OldHabitCost, old);
        }
        if let Some(new) = &self.new {
            calc.set_amount(Field::NewHabitCost, new);
        }
        calc.set_frequency(&self.frequency);
        calc
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let calculator = cli.calculator();
    if cli.print {
        return print_projection(calculator, cli.json, io::stdout().lock());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(calculator, cli.export_path);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if app.handle_event(event::read()?)? {
            return Ok(());
        }
    }
}

fn print_projection<W: Write>(mut calc: Calculator, json: bool, mut out: W) -> Result<()> {
    calc.calculate()?;
    let report = Report::from_calculator(&calc);
    if json {
        export::write_json(&mut out, &report)?;
        writeln!(out)?;
    } else {
        for (label, value) in report.rows() {
            writeln!(out, "{:<10} {}", label, format_currency(value))?;
        }
    }
    Ok(())
}
