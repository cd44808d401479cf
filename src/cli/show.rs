//! Print or write the JSON build artifact.

use super::ShowArgs;
use crate::config::{Registry, artifact};
use crate::log;
use anyhow::Result;

pub fn show_config(registry: &Registry, args: &ShowArgs) -> Result<()> {
    let registry = if args.active_only {
        registry.active_only()
    } else {
        registry.clone()
    };

    let json = artifact::to_json(&registry, args.pretty)?;
    match &args.output {
        Some(path) => {
            artifact::write_json(&json, path)?;
            log!("show"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
