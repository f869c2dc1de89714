mod form;
mod report;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write, stderr, stdin, stdout};
use std::path::{Path, PathBuf};

use speed_threshold_core::{Mode, SpeedRules};

use form::{DEFAULT_ACTIONS, DEFAULT_MODE, DEFAULT_TRIGGERS, DEFAULT_TURNS, FormState};
use report::{ReportFormat, write_failure, write_success};
use session::Session;

#[derive(Debug, Parser)]
#[command(name = "speed-threshold", version = "0.1.0")]
#[command(about = "Minimum speed needed to take a target number of actions")]
struct Args {
    /// Game mode ("Forgotten Hall" or "Anomaly Arbitration")
    #[arg(long, default_value = DEFAULT_MODE)]
    mode: String,

    /// Total turns elapsed
    #[arg(long, default_value = DEFAULT_TURNS)]
    turns: String,

    /// Number of actions the unit should take
    #[arg(long, default_value = DEFAULT_ACTIONS)]
    actions: String,

    /// Occurrences of the recurring 25% advance trigger
    #[arg(long, alias = "wind", default_value = DEFAULT_TRIGGERS)]
    triggers: String,

    /// Apply the one-time 40% advance bonus
    #[arg(long, alias = "vonwacq")]
    bonus: bool,

    /// Custom advance values (comma-separated, e.g. "24,,0.1"); blanks count as 0
    #[arg(long)]
    custom: Option<String>,

    /// JSON ruleset overriding the built-in formula constants
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// List the supported modes and exit
    #[arg(long)]
    list_modes: bool,

    /// Edit the form line by line (calc, reset, quit) instead of a single run
    #[arg(short, long)]
    interactive: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_modes(&args)? {
        return Ok(());
    }

    let rules = load_rules(args.rules.as_deref())?;
    let form = build_form(&args, &rules);

    if args.interactive {
        let mut out = stdout();
        return Session::new(form, &rules).run(stdin().lock(), &mut out);
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let passed = match form.submit(&rules) {
        Ok(breakdown) => {
            write_success(&mut output_target, args.report, &breakdown)?;
            true
        }
        Err(err) => {
            log::debug!("calculation rejected: {err:?}");
            write_failure(&mut output_target, &mut stderr(), args.report, &err)?;
            false
        }
    };
    output_target.flush_inner()?;

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn maybe_list_modes(args: &Args) -> Result<bool> {
    if !args.list_modes {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available modes:")?;
    for mode in Mode::ALL {
        writeln!(output_target.writer(), "  {:25} - {}", mode.as_str(), mode.label())?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn load_rules(path: Option<&Path>) -> Result<SpeedRules> {
    let Some(path) = path else {
        return Ok(SpeedRules::load_from_static());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules {}", path.display()))?;
    let rules = SpeedRules::from_json(&json)
        .with_context(|| format!("invalid rules in {}", path.display()))?;
    log::info!("loaded rules from {}", path.display());
    Ok(rules)
}

fn build_form(args: &Args, rules: &SpeedRules) -> FormState {
    let mut form = FormState::with_slots(rules.custom_slots);
    form.mode.clone_from(&args.mode);
    form.turns.clone_from(&args.turns);
    form.actions.clone_from(&args.actions);
    form.triggers.clone_from(&args.triggers);
    form.bonus = args.bonus;
    if let Some(custom) = args.custom.as_deref() {
        form.fill_custom(split_fields(custom));
    }
    form
}

/// Split on commas, keeping blank entries so positions map to slots.
fn split_fields(s: &str) -> Vec<String> {
    s.split(',').map(|x| x.trim().to_string()).collect()
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
