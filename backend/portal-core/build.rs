use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

const API_MESSAGES_TOML: &str = "api_messages.toml";
const API_MESSAGES_GENERATED_FILE: &str = "api_messages.rs";

fn main() {
    generate_api_messages();
}

fn generate_api_messages() {
    // Read configuration file
    let config_path = PathBuf::from(API_MESSAGES_TOML);
    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {API_MESSAGES_TOML}: {e}"));

    let config: MessagesConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Failed to parse {API_MESSAGES_TOML}: {e}"));

    validate_table("field_labels", &config.field_labels);
    validate_table("friendly_messages", &config.friendly_messages);

    let code = generate_rust_code(&config);

    // Write to OUT_DIR
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let dest_path = out_dir.join(API_MESSAGES_GENERATED_FILE);
    fs::write(&dest_path, code)
        .unwrap_or_else(|e| panic!("Failed to write {API_MESSAGES_GENERATED_FILE}: {e}"));

    // Rebuild if config changes
    println!("cargo:rerun-if-changed={API_MESSAGES_TOML}");
}

#[derive(serde::Deserialize)]
struct MessagesConfig {
    field_labels: BTreeMap<String, String>,
    friendly_messages: BTreeMap<String, String>,
}

/// Reject entries that would render as an empty sentence.
fn validate_table(name: &str, table: &BTreeMap<String, String>) {
    if table.is_empty() {
        panic!("[{name}] in {API_MESSAGES_TOML} has no entries");
    }

    for (key, value) in table {
        if key.trim().is_empty() {
            panic!("[{name}] contains an empty key");
        }
        if value.trim().is_empty() {
            panic!("[{name}] entry '{key}' maps to an empty string");
        }
    }
}

/// Emit one lazily built map per table. Literals go through `{:?}` so quotes
/// and non-ASCII punctuation are escaped the way rustc expects.
fn generate_rust_code(config: &MessagesConfig) -> String {
    let mut code = String::new();

    code.push_str("// Generated by build.rs - DO NOT EDIT\n");
    code.push_str("// Source: api_messages.toml\n\n");

    push_table(
        &mut code,
        "Validation field name → sentence label",
        "FIELD_LABELS",
        &config.field_labels,
    );
    push_table(
        &mut code,
        "Exact API message → friendly sentence",
        "FRIENDLY_MESSAGES",
        &config.friendly_messages,
    );

    code
}

fn push_table(code: &mut String, doc: &str, name: &str, table: &BTreeMap<String, String>) {
    code.push_str(&format!("/// {doc}\n"));
    code.push_str(&format!(
        "static {name}: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {{\n    let mut m = HashMap::with_capacity({});\n",
        table.len()
    ));
    for (key, value) in table {
        code.push_str(&format!("    m.insert({key:?}, {value:?});\n"));
    }
    code.push_str("    m\n});\n\n");
}
