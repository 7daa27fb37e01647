use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command_signature_core::{SignatureResult, validate_signature};
use command_signature_parser::{MatcherKind, ParserConfig, SignatureParser};
use tracing::debug;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

/// CLI-specific matcher enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliMatcher {
    Scan,
    Regex,
}

impl From<CliMatcher> for MatcherKind {
    fn from(matcher: CliMatcher) -> Self {
        match matcher {
            CliMatcher::Scan => Self::Scan,
            CliMatcher::Regex => Self::Regex,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "signature-parse")]
#[command(about = "Inspect how command signature strings are parsed")]
struct Cli {
    /// Parser configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Matcher backend (overrides the configuration file).
    #[arg(long, global = true)]
    matcher: Option<CliMatcher>,
    /// Log parser diagnostics to stderr.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the parsed signature.
    Parse(ParseArgs),
    /// Report definitions a console host would reject.
    Validate(SignatureInput),
}

#[derive(Debug, Args)]
struct SignatureInput {
    /// Signature string, e.g. "greet {name} {--yell=}".
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    signature: Option<String>,
    /// Read the signature from stdin.
    #[arg(long)]
    stdin: bool,
}

#[derive(Debug, Args)]
struct ParseArgs {
    #[command(flatten)]
    input: SignatureInput,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = build_parser(cli.config.as_ref(), cli.matcher).and_then(|parser| match cli.command {
        Command::Parse(args) => run_parse(&parser, args),
        Command::Validate(args) => run_validate(&parser, args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn build_parser(
    config_path: Option<&PathBuf>,
    matcher: Option<CliMatcher>,
) -> Result<SignatureParser, String> {
    let mut config = match config_path {
        Some(path) => ParserConfig::load(path)
            .map_err(|err| format!("Failed to load config {}: {err}", path.display()))?,
        None => ParserConfig::default(),
    };
    if let Some(matcher) = matcher {
        config.matcher = matcher.into();
    }
    debug!(?config, "Building signature parser");
    SignatureParser::from_config(&config).map_err(|err| err.to_string())
}

fn read_signature(input: SignatureInput) -> Result<String, String> {
    if !input.stdin {
        return input
            .signature
            .ok_or_else(|| "no signature given".to_string());
    }
    let mut signature = String::new();
    std::io::stdin()
        .read_to_string(&mut signature)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    let trimmed_len = signature.trim_end_matches(['\n', '\r']).len();
    signature.truncate(trimmed_len);
    Ok(signature)
}

fn parse(parser: &SignatureParser, input: SignatureInput) -> Result<SignatureResult, String> {
    let signature = read_signature(input)?;
    parser.parse(&signature).map_err(|err| err.to_string())
}

fn run_parse(parser: &SignatureParser, args: ParseArgs) -> Result<(), String> {
    let result = parse(parser, args.input)?;
    let rendered = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&result).map_err(|err| err.to_string())?,
        CliOutputFormat::Yaml => serde_yaml::to_string(&result).map_err(|err| err.to_string())?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn run_validate(parser: &SignatureParser, input: SignatureInput) -> Result<(), String> {
    let result = parse(parser, input)?;
    let errors = validate_signature(&result);
    if errors.is_empty() {
        println!(
            "Signature '{}' is valid: {} argument(s), {} option(s).",
            result.name,
            result.arguments.len(),
            result.options.len()
        );
        return Ok(());
    }

    for err in &errors {
        println!("  {err}");
    }
    Err(format!(
        "signature '{}' has {} problem(s)",
        result.name,
        errors.len()
    ))
}
