//! Config command implementation

use crate::cli::ConfigArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use tabled::Tabled;
use walknav_core::config::MapConfigLoader;

#[derive(Tabled, serde::Serialize)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(_args: ConfigArgs, loader: &MapConfigLoader, output: &OutputWriter) -> Result<()> {
    let mut rows: Vec<ConfigRow> = loader
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(&rows);
    }

    output.section("Resolved Configuration");
    output.table(rows);

    if loader.api_key.value.trim().is_empty() {
        output.warning("No API key configured; view/locate/route will refuse to start");
    }

    Ok(())
}
