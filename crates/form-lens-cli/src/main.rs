// crates/form-lens-cli/src/main.rs
// ============================================================================
// Module: Form-Lens CLI Entry Point
// Description: Command dispatcher for form overview and locale management.
// Purpose: Provide a localized terminal view of a form's branching logic.
// Dependencies: clap, form-lens-client, form-lens-core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The `form-lens` binary loads a form definition by ID, URL, or local file
//! and prints a localized overview of its branching logic. All user-facing
//! strings resolve through the message catalogs; the active locale comes
//! from the flag, environment, or persisted preference, in that order.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use form_lens_cli::overview::overview_lines;
use form_lens_cli::prefs;
use form_lens_client::ProxyClient;
use form_lens_client::ProxyClientConfig;
use form_lens_client::parse_form_id;
use form_lens_core::FieldIndex;
use form_lens_core::FormDocument;
use form_lens_core::Locale;
use form_lens_core::LocaleStore;
use form_lens_core::MessageArg;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the display locale.
const LANG_ENV: &str = "FORM_LENS_LANG";

/// System environment variable consulted as a last-resort locale hint.
const SYSTEM_LANG_ENV: &str = "LANG";

/// Environment variable overriding the relay proxy endpoint.
const PROXY_URL_ENV: &str = "FORM_LENS_PROXY_URL";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Localized viewer for form branching logic.
#[derive(Debug, Parser)]
#[command(name = "form-lens", version, about = "Readable overviews of Typeform branching logic")]
struct Cli {
    /// Display locale override.
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Locale values accepted on the command line.
#[derive(Debug, Copy, Clone, ValueEnum)]
enum LangArg {
    /// English.
    En,
    /// French.
    Fr,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Fr => Self::Fr,
        }
    }
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Loads a form and prints its logic overview.
    Show(ShowCommand),
    /// Manages the persisted display locale.
    Lang {
        /// Locale subcommand to execute.
        #[command(subcommand)]
        command: LangCommand,
    },
}

/// Arguments of the `show` command.
#[derive(Debug, Parser)]
struct ShowCommand {
    /// Form ID or share URL to load.
    input: Option<String>,
    /// Personal access token forwarded to the proxy.
    #[arg(long)]
    token: Option<String>,
    /// Local form-definition JSON file to load instead of fetching.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Relay proxy endpoint override.
    #[arg(long)]
    proxy_url: Option<String>,
}

/// Subcommands of `lang`.
#[derive(Debug, Subcommand)]
enum LangCommand {
    /// Prints the active locale.
    Get,
    /// Persists a new locale for future sessions.
    Set {
        /// Locale code to persist (for example `en` or `fr`).
        locale: String,
    },
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let app_env = std::env::var(LANG_ENV).ok();
    let system_env = std::env::var(SYSTEM_LANG_ENV).ok();
    let locale = resolve_locale(
        cli.lang,
        app_env.as_deref(),
        prefs::load_locale(),
        system_env.as_deref(),
    )?;
    let store = LocaleStore::new(locale);

    match cli.command {
        Commands::Show(command) => command_show(&command, &store),
        Commands::Lang {
            command,
        } => command_lang(&command, &store),
    }
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the display locale from flag, environment, and preference.
///
/// Order: explicit flag, then the application environment variable, then the
/// persisted preference, then a best-effort match of the system language
/// tag, then English.
fn resolve_locale(
    flag: Option<LangArg>,
    app_env: Option<&str>,
    stored: Option<Locale>,
    system_env: Option<&str>,
) -> CliResult<Locale> {
    if let Some(flag) = flag {
        return Ok(flag.into());
    }
    if let Some(value) = app_env {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(LocaleStore::default().resolve_with(
                "errors.unsupportedLocale",
                &[MessageArg::new("value", value)],
            ))
        });
    }
    if let Some(stored) = stored {
        return Ok(stored);
    }
    if let Some(locale) = system_env.and_then(Locale::parse) {
        return Ok(locale);
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Show Command
// ============================================================================

/// Executes the `show` command.
fn command_show(command: &ShowCommand, store: &LocaleStore) -> CliResult<ExitCode> {
    let document = match &command.file {
        Some(path) => load_document(path, store)?,
        None => fetch_document(command, store)?,
    };
    let fields = FieldIndex::from_document(&document);
    let lines =
        overview_lines(&document, &fields, store).map_err(|err| CliError::new(err.to_string()))?;
    for line in &lines {
        write_stdout_line(line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Loads a form definition from a local JSON file.
fn load_document(path: &Path, store: &LocaleStore) -> CliResult<FormDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|err| CliError::new(format!("{}: {err}", store.resolve("errors.fileError"))))?;
    serde_json::from_str(&contents)
        .map_err(|err| CliError::new(format!("{}: {err}", store.resolve("errors.fileError"))))
}

/// Fetches a form definition through the relay proxy.
fn fetch_document(command: &ShowCommand, store: &LocaleStore) -> CliResult<FormDocument> {
    let Some(input) = command.input.as_deref() else {
        return Err(CliError::new(store.resolve("errors.urlRequired")));
    };
    let Some(form_id) = parse_form_id(input) else {
        return Err(CliError::new(store.resolve("errors.invalidUrl")));
    };
    let mut config = ProxyClientConfig::default();
    if let Some(proxy_url) = resolve_proxy_url(command.proxy_url.as_deref()) {
        config.proxy_url = proxy_url;
    }
    let client =
        ProxyClient::with_config(config).map_err(|err| CliError::new(err.localized_message(store)))?;
    client
        .fetch_form(&form_id, command.token.as_deref())
        .map_err(|err| CliError::new(err.localized_message(store)))
}

/// Resolves the proxy endpoint from the flag or environment.
fn resolve_proxy_url(flag: Option<&str>) -> Option<String> {
    if let Some(value) = flag {
        return Some(value.to_string());
    }
    std::env::var(PROXY_URL_ENV).ok().filter(|value| !value.trim().is_empty())
}

// ============================================================================
// SECTION: Lang Command
// ============================================================================

/// Executes the `lang` subcommands.
fn command_lang(command: &LangCommand, store: &LocaleStore) -> CliResult<ExitCode> {
    match command {
        LangCommand::Get => {
            write_stdout_line(store.active().as_str())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        LangCommand::Set {
            locale,
        } => {
            let Some(parsed) = Locale::parse(locale) else {
                return Err(CliError::new(store.resolve_with(
                    "errors.unsupportedLocale",
                    &[MessageArg::new("value", locale.clone())],
                )));
            };
            prefs::store_locale(parsed).map_err(|err| CliError::new(err.to_string()))?;
            write_stdout_line(parsed.as_str())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
