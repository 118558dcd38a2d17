use serde_json::Value;

use crate::bind::binder::Binder;
use crate::node::node_model::WidgetNode;
use crate::trace::logger::TraceLogger;

// ============================================================================
// extract subcommand
// ============================================================================

/// Read the current values out of a widget tree and write them as JSON.
pub fn cmd_extract(
    schema_path: &str,
    output: Option<&str>,
    pretty: bool,
    verbose: u8,
    trace: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = load_tree(schema_path)?;
    let binder = build_binder(trace);

    if verbose > 0 {
        eprintln!("Extracting values from {}...", schema_path);
    }

    let value = binder.serialize(&tree)?;
    write_value(&value, output, pretty)
}

// ============================================================================
// apply subcommand
// ============================================================================

/// Apply a JSON document to a widget tree, then re-read and emit the result.
pub fn cmd_apply(
    schema_path: &str,
    values_path: &str,
    output: Option<&str>,
    pretty: bool,
    verbose: u8,
    trace: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = load_tree(schema_path)?;
    let document = load_document(values_path)?;
    let binder = build_binder(trace);

    if verbose > 0 {
        eprintln!("Applying {} to {}...", values_path, schema_path);
    }

    binder.deserialize(&mut tree, &document)?;
    let value = binder.serialize(&tree)?;
    write_value(&value, output, pretty)
}

// ============================================================================
// check subcommand
// ============================================================================

/// Apply a document and verify it reads back structurally equal.
/// Returns whether the round trip held.
pub fn cmd_check(
    schema_path: &str,
    values_path: &str,
    verbose: u8,
    trace: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut tree = load_tree(schema_path)?;
    let document = load_document(values_path)?;
    let binder = build_binder(trace);

    binder.deserialize(&mut tree, &document)?;
    let readback = binder.serialize(&tree)?;

    let ok = readback == document;
    if ok {
        if verbose > 0 {
            eprintln!("Round trip held for {}", values_path);
        }
        println!("ok: {} round-trips through {}", values_path, schema_path);
    } else {
        println!(
            "mismatch: {} does not round-trip through {}",
            values_path, schema_path
        );
        if verbose > 0 {
            eprintln!("expected: {}", document);
            eprintln!("got:      {}", readback);
        }
    }

    Ok(ok)
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a widget tree description from a YAML file.
pub fn load_tree(path: &str) -> Result<WidgetNode, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let tree: WidgetNode = serde_yaml::from_str(&content)?;
    Ok(tree)
}

/// Load a JSON document from a file.
pub fn load_document(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;
    Ok(document)
}

fn build_binder(trace: Option<&str>) -> Binder<WidgetNode> {
    match trace {
        Some(path) => Binder::new().with_tracer(TraceLogger::new(path)),
        None => Binder::new(),
    }
}

fn write_value(
    value: &Value,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => std::fs::write(path, rendered + "\n")?,
        None => println!("{}", rendered),
    }

    Ok(())
}
