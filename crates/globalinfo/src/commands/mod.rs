pub mod get;
pub mod keys;
pub mod list;
pub mod version;

use globalinfo_config::{parse_selections, Namespace, NamespaceConfig};
use std::path::Path;

/// Load the namespace at `config`, applying `PATH=CANDIDATE` overrides
pub fn load_namespace(config: &Path, select: &[String]) -> anyhow::Result<Namespace> {
    let overrides = parse_selections(select)?;

    let namespace = NamespaceConfig::load(config)?.build_with(&overrides)?;
    Ok(namespace)
}
