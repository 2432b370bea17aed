//! Facetkit demo: filter a JSON file from the command line.
//!
//! Loads an array of JSON objects, applies textual actions in order and prints
//! the rendered filter bar and results.
//!
//! ```text
//! facetkit products.json --config shop.toml search=shoe filter:brand=Acme,Zeta sort=price:desc
//! ```

use clap::Parser;
use facetkit::observability::init_tracing;
use facetkit::{Config, FacetError, FilterAction, FilterController, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Filter, sort and paginate a JSON array of objects
#[derive(Parser, Debug)]
#[command(name = "facetkit")]
#[command(version)]
#[command(about = "Filter, sort and paginate a JSON array of objects")]
pub struct Args {
    /// Path to a JSON file holding an array of objects
    pub items: PathBuf,

    /// Actions applied in order, e.g. `search=shoe`, `range:price=25..60`, `sort=price:desc`
    pub actions: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in theme name, overriding the configuration
    #[arg(long)]
    pub theme: Option<String>,

    /// Output width in columns
    #[arg(short, long, default_value = "100", value_parser = clap::value_parser!(u16).range(20..))]
    pub width: u16,

    /// Print the final state and current page as JSON instead of rendering
    #[arg(long)]
    pub json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "facetkit failed");
            eprintln!("facetkit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(theme) = &args.theme {
        config.theme_name = Some(theme.clone());
        config.theme_file = None;
    }

    init_tracing(&config);

    let actions = args
        .actions
        .iter()
        .map(|arg| FilterAction::from_arg(arg))
        .collect::<Result<Vec<_>>>()?;

    let items = load_items(&args.items)?;
    tracing::info!(items = items.len(), actions = actions.len(), "loaded items");

    let mut controller = FilterController::from_config(items, &config);
    for action in actions {
        let transition = controller.dispatch(action);
        tracing::debug!(?transition, total = controller.total_count(), "applied action");
    }

    if args.json {
        let snapshot = serde_json::json!({
            "state": controller.state(),
            "total": controller.total_count(),
            "page_count": controller.page_count(),
            "items": controller.filtered_data(),
        });
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(facetkit::ui::render(&controller, &config.theme(), usize::from(args.width)))
}

fn load_items(path: &Path) -> Result<Vec<Value>> {
    let source = std::fs::read_to_string(path)?;
    match serde_json::from_str(&source)? {
        Value::Array(items) => Ok(items),
        other => Err(FacetError::Config(format!(
            "{} must hold a JSON array, found {}",
            path.display(),
            kind_name(&other)
        ))),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn items_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_trailing_actions() {
        let args = Args::parse_from(["facetkit", "items.json", "search=hat", "page=2", "--width", "60"]);
        assert_eq!(args.items, PathBuf::from("items.json"));
        assert_eq!(args.actions, vec!["search=hat", "page=2"]);
        assert_eq!(args.width, 60);
        assert!(!args.json);
    }

    #[test]
    fn json_output_reflects_actions() {
        let file = items_file(r#"[{"title": "Red Hat", "price": 10}, {"title": "Blue Hat", "price": 30}]"#);
        let args = Args::parse_from([
            "facetkit",
            file.path().to_str().unwrap(),
            "search=hat",
            "sort=price:desc",
            "--json",
        ]);

        let output: Value = serde_json::from_str(&run(&args).unwrap()).unwrap();
        assert_eq!(output["total"], 2);
        assert_eq!(output["items"][0]["title"], "Blue Hat");
        assert_eq!(output["state"]["sort_direction"], "descending");
    }

    #[test]
    fn rejects_non_array_items() {
        let file = items_file(r#"{"title": "Red Hat"}"#);
        let err = load_items(file.path()).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn bad_action_is_reported() {
        let file = items_file("[]");
        let args = Args::parse_from(["facetkit", file.path().to_str().unwrap(), "page=two"]);
        assert!(matches!(run(&args), Err(FacetError::InvalidAction { .. })));
    }
}
