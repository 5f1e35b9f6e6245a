use std::path::Path;

pub fn run(config: &Path) -> anyhow::Result<()> {
    println!("{}", render(config)?);
    Ok(())
}

fn render(config: &Path) -> anyhow::Result<String> {
    let namespace = super::load_namespace(config, &[])?;

    let mut entries: Vec<&str> = namespace.map().keys().collect();
    entries.sort_unstable();
    let selectors: Vec<&str> = namespace.selector_paths().collect();

    let output = serde_json::json!({
        "entries": entries,
        "selectors": selectors,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
