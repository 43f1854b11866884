//! askterm CLI
//!
//! Ask one question (or a whole survey) on the terminal and print the answers.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use askterm::config::min_length;
use askterm::error::PromptError;
use askterm::prompt::{ConfirmPrompt, PasswordPrompt, Prompt, SelectPrompt, TextPrompt};
use askterm::report::{format_answers, AnswerSheet, OutputFormat};
use askterm::schema::{Form, Schema};
use askterm::theme::Theme;

#[derive(Parser)]
#[command(name = "askterm")]
#[command(about = "Ask questions on the terminal and print the answers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    format: OutputFormatArg,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Write logs here (filter with RUST_LOG, default "warn")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a line of text
    Text {
        question: String,

        /// Pre-filled answer
        #[arg(long)]
        default: Option<String>,

        /// Reject answers shorter than this
        #[arg(long)]
        min_length: Option<usize>,

        /// Hint shown while the answer is empty
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// Ask for a secret (input is masked)
    Password {
        question: String,

        /// Reject answers shorter than this
        #[arg(long)]
        min_length: Option<usize>,
    },

    /// Ask a yes/no question
    Confirm {
        question: String,

        /// Make Enter mean yes
        #[arg(long)]
        default_yes: bool,
    },

    /// Pick one option from a list
    Select {
        question: String,

        /// Options to choose from
        #[arg(required = true)]
        options: Vec<String>,

        /// Options visible at once
        #[arg(long, default_value_t = 7)]
        page_size: usize,
    },

    /// Run the walkthrough: name, confirmation, list, password
    Demo,

    /// Fill a record from its field declarations
    Survey,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let theme = if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    };

    let result = match cli.command {
        Commands::Text {
            question,
            default,
            min_length,
            placeholder,
        } => cmd_text(question, default, min_length, placeholder, theme),
        Commands::Password { question, min_length } => cmd_password(question, min_length, theme),
        Commands::Confirm { question, default_yes } => cmd_confirm(question, default_yes, theme),
        Commands::Select {
            question,
            options,
            page_size,
        } => cmd_select(question, options, page_size, theme),
        Commands::Demo => cmd_demo(theme),
        Commands::Survey => cmd_survey(theme),
    };

    match result {
        Ok(sheet) => {
            print!("{}", format_answers(&sheet, cli.format.into()));
            ExitCode::SUCCESS
        }
        Err(PromptError::Interrupted) => {
            eprintln!("Interrupted.");
            ExitCode::from(130)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Send tracing output to `path`. Without a path nothing is logged, so
/// log lines never land on the terminal the prompts are drawing on.
fn init_logging(path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .map_err(|e| format!("Cannot create log file {}: {}", path.display(), e))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("Cannot initialize logging: {}", e))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_text(
    question: String,
    default: Option<String>,
    min: Option<usize>,
    placeholder: Option<String>,
    theme: Theme,
) -> Result<AnswerSheet, PromptError> {
    let mut prompt = TextPrompt::new(question).with_theme(theme);
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    if let Some(min) = min {
        prompt = prompt.with_validator(min_length(min));
    }
    if let Some(placeholder) = placeholder {
        prompt = prompt.with_placeholder(placeholder);
    }

    let answer = prompt.run()?;
    let mut sheet = AnswerSheet::new();
    sheet.push(prompt.question(), answer);
    Ok(sheet)
}

fn cmd_password(question: String, min: Option<usize>, theme: Theme) -> Result<AnswerSheet, PromptError> {
    let mut prompt = PasswordPrompt::new(question).with_theme(theme);
    if let Some(min) = min {
        prompt = prompt.with_validator(min_length(min));
    }

    let answer = prompt.run()?;
    let mut sheet = AnswerSheet::new();
    sheet.push(prompt.question(), answer);
    Ok(sheet)
}

fn cmd_confirm(question: String, default_yes: bool, theme: Theme) -> Result<AnswerSheet, PromptError> {
    let prompt = ConfirmPrompt::new(question)
        .with_default(default_yes)
        .with_theme(theme);

    let answer = prompt.run()?;
    let mut sheet = AnswerSheet::new();
    sheet.push(prompt.question(), answer);
    Ok(sheet)
}

fn cmd_select(
    question: String,
    options: Vec<String>,
    page_size: usize,
    theme: Theme,
) -> Result<AnswerSheet, PromptError> {
    let prompt = SelectPrompt::new(question, options)
        .with_page_size(page_size)
        .with_theme(theme);

    let answer = prompt.run()?;
    let mut sheet = AnswerSheet::new();
    sheet.push(prompt.question(), answer);
    Ok(sheet)
}

fn cmd_demo(theme: Theme) -> Result<AnswerSheet, PromptError> {
    let mut sheet = AnswerSheet::new();

    let name = TextPrompt::new("What is your name?").with_theme(theme).run()?;
    sheet.push("name", name);

    let proceed = ConfirmPrompt::new("Do you want to continue?")
        .with_default(true)
        .with_theme(theme)
        .run()?;
    sheet.push("continue", proceed);

    let options = (1..=5).map(|i| format!("Option {}", i));
    let choice = SelectPrompt::new("Choose an option:", options)
        .with_theme(theme)
        .run()?;
    sheet.push("choice", choice);

    let password = PasswordPrompt::new("Enter a password (min 8 characters):")
        .with_validator(min_length(8))
        .with_theme(theme)
        .run()?;
    sheet.push("password", password);

    Ok(sheet)
}

// ============================================================================
// SURVEY RECORD
// ============================================================================

#[derive(Debug, Default)]
struct Survey {
    name: String,
    password: String,
    proceed: bool,
    choice: String,
}

impl Schema for Survey {
    fn form() -> Form<Self> {
        Form::new()
            .field("Name", "text", |s: &mut Survey, v: String| s.name = v)
            .field("Password", "password", |s: &mut Survey, v: String| s.password = v)
            .field("Continue", "confirm", |s: &mut Survey, v: bool| s.proceed = v)
            .field("Choice", "list[option 1,option2,option 3]", |s: &mut Survey, v: String| {
                s.choice = v
            })
    }
}

fn cmd_survey(theme: Theme) -> Result<AnswerSheet, PromptError> {
    let mut survey = Survey::default();
    Survey::form().with_theme(theme).fill(&mut survey)?;

    let mut sheet = AnswerSheet::new();
    sheet.push("Name", survey.name);
    sheet.push("Password", survey.password);
    sheet.push("Continue", survey.proceed);
    sheet.push("Choice", survey.choice);
    Ok(sheet)
}
