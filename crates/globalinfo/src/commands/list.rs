use std::collections::BTreeMap;
use std::path::Path;

pub fn run(config: &Path, select: &[String]) -> anyhow::Result<()> {
    println!("{}", render(config, select)?);
    Ok(())
}

fn render(config: &Path, select: &[String]) -> anyhow::Result<String> {
    let namespace = super::load_namespace(config, select)?;

    // One enumeration pass; sorted for stable output
    let values: BTreeMap<_, _> = namespace.map().snapshot()?.into_iter().collect();
    tracing::debug!(entries = values.len(), "evaluated namespace");
    Ok(serde_json::to_string_pretty(&values)?)
}
