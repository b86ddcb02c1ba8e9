use clap::{Parser, Subcommand, ValueEnum};
use option_field::{
    FieldOptions, FieldValue, FormValues, OptionField, ValidationResult, build_view,
    render_json_ui, render_text, validate,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

const LOG_ENV: &str = "OPTIONFIELD_LOG";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Inspect option field schemas",
    long_about = "Loads an option field schema, evaluates its conditional choices against a values document, and prints the resulting field state"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the field state after applying an optional value.
    Show {
        /// Path to the field options JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
        /// Field id; also the key of the toggle created when no choices are declared.
        #[arg(long, default_value = "field")]
        id: String,
        /// JSON document holding the values of the other fields in the form.
        #[arg(long, value_name = "VALUES")]
        values: Option<PathBuf>,
        /// Value to assign, as JSON (`"red"`, `true`, `["a","b"]`) or a bare key.
        #[arg(long, value_name = "VALUE")]
        value: Option<String>,
        /// Output mode.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
    },
    /// Check a field schema for duplicate keys and malformed conditions.
    Validate {
        /// Path to the field options JSON.
        #[arg(long, value_name = "SCHEMA")]
        schema: PathBuf,
    },
    /// Print the JSON Schema describing field options.
    Schema,
}

fn main() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Command::Show {
            schema,
            id,
            values,
            value,
            format,
        } => run_show(&schema, id, values.as_deref(), value.as_deref(), format),
        Command::Validate { schema } => run_validate(&schema),
        Command::Schema => run_schema(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(path: &Path) -> CliResult<FieldOptions> {
    let contents = fs::read_to_string(path)?;
    Ok(FieldOptions::from_json(&contents)?)
}

fn load_values(path: Option<&Path>) -> CliResult<FormValues> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            let root: Value = serde_json::from_str(&contents)?;
            Ok(FormValues::new(root))
        }
        None => Ok(FormValues::default()),
    }
}

fn parse_value(raw: &str) -> CliResult<FieldValue> {
    let json = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    FieldValue::from_json(&json)
        .ok_or_else(|| format!("'{}' is not a key, a flag, or a list of keys", raw).into())
}

fn run_show(
    schema_path: &Path,
    id: String,
    values_path: Option<&Path>,
    value: Option<&str>,
    format: RenderMode,
) -> CliResult<()> {
    let options = load_options(schema_path)?;
    let values = load_values(values_path)?;
    let mut field = OptionField::init(id, options)?;

    if let Some(raw) = value {
        let value = parse_value(raw)?;
        debug!(?value, "assigning value from command line");
        field.set_selected_choice(value);
    }

    let view = build_view(&field, &values);
    match format {
        RenderMode::Text => println!("{}", render_text(&view)),
        RenderMode::Json => println!("{}", serde_json::to_string_pretty(&render_json_ui(&view))?),
    }
    Ok(())
}

fn run_validate(schema_path: &Path) -> CliResult<()> {
    let options = load_options(schema_path)?;
    let result = validate(&options);
    println!(
        "Validation result: {}",
        if result.valid { "valid" } else { "invalid" }
    );
    describe_validation(&result);

    if result.valid {
        Ok(())
    } else {
        Err("validation failed".into())
    }
}

fn describe_validation(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("Errors:");
        for error in &result.errors {
            println!(
                "  {} - {}",
                error.path.as_deref().unwrap_or("<unknown>"),
                error.message
            );
        }
    }
}

fn run_schema() -> CliResult<()> {
    let schema = schemars::schema_for!(FieldOptions);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_accepts_json_and_bare_keys() {
        assert_eq!(parse_value("\"red\"").unwrap(), FieldValue::Key("red".into()));
        assert_eq!(parse_value("red").unwrap(), FieldValue::Key("red".into()));
        assert_eq!(parse_value("true").unwrap(), FieldValue::Flag(true));
        assert_eq!(
            parse_value("[\"a\",\"b\"]").unwrap(),
            FieldValue::Keys(vec!["a".into(), "b".into()])
        );
        assert!(parse_value("{\"a\": 1}").is_err());
    }
}
