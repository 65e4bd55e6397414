use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

/// Expected `[section] key` entries and the TOML type each must have.
const KEYS: &[(&str, &str, &str)] = &[
    ("links", "permalink_base", "string"),
    ("html", "escape", "boolean"),
];

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_PATH);

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid default_config.toml: {}", e));

    // Config::compiled_default falls back to code defaults on a mismatch,
    // so a wrong type here must fail the build instead
    for (section, key, expected) in KEYS {
        let value = table
            .get(*section)
            .and_then(|s| s.as_table())
            .and_then(|s| s.get(*key))
            .unwrap_or_else(|| panic!("default_config.toml: missing [{section}] {key}"));

        if value.type_str() != *expected {
            panic!(
                "default_config.toml: [{section}] {key} must be a {expected}, found {}",
                value.type_str()
            );
        }
    }
}
