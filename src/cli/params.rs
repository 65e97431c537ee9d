//! Params command.
//!
//! Lists the records setup writes. Values are never shown.

use serde::Serialize;

use crate::cli::output;
use crate::core::parameter::ParameterKind;
use crate::core::prompt::Answers;
use crate::error::Result;

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    kind: ParameterKind,
    description: &'static str,
    overwrite: bool,
}

fn entries() -> Vec<Entry> {
    Answers::default()
        .into_parameters()
        .iter()
        .map(|p| Entry {
            name: p.name(),
            kind: p.kind(),
            description: p.description(),
            overwrite: p.overwrite(),
        })
        .collect()
}

/// List parameter names, types and descriptions.
pub fn execute(json: bool) -> Result<()> {
    let entries = entries();

    if json {
        let rendered = serde_json::to_string_pretty(&entries)?;
        println!("{}", rendered);
        return Ok(());
    }

    output::section("Parameters");
    for entry in &entries {
        output::list_item(&format!(
            "{}  {} ({})",
            output::key(entry.name),
            entry.description,
            entry.kind.as_ssm()
        ));
    }
    Ok(())
}
