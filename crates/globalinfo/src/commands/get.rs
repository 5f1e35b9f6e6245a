use std::path::Path;

pub fn run(config: &Path, key: &str, select: &[String]) -> anyhow::Result<()> {
    println!("{}", render(config, key, select)?);
    Ok(())
}

fn render(config: &Path, key: &str, select: &[String]) -> anyhow::Result<String> {
    let namespace = super::load_namespace(config, select)?;
    let value = namespace.get(key)?;
    Ok(serde_json::to_string(&value)?)
}
