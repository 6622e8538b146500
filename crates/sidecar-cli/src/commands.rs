use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sidecar_core::{NthOfType, NthOfTypeResult};
use sidecar_ingest::{collect_inputs, load_sidecars};

use crate::cli::Cli;

pub fn run_nth_of_type(cli: &Cli) -> Result<NthOfTypeResult> {
    // Expressions are parsed before any file is touched.
    let nth = NthOfType::new(&cli.options()).context("parse sort and group expressions")?;

    let discover_start = Instant::now();
    let files = info_span!("discover", input_count = cli.paths.len())
        .in_scope(|| collect_inputs(&cli.paths, &cli.extension, cli.recursive))
        .context("discover sidecars")?;
    if files.is_empty() {
        warn!(extension = %cli.extension, "no sidecar files found");
    }
    info!(
        file_count = files.len(),
        duration_ms = discover_start.elapsed().as_millis(),
        "discovery complete"
    );

    let load_start = Instant::now();
    let sidecars = info_span!("load", file_count = files.len())
        .in_scope(|| load_sidecars(&files))
        .context("load sidecars")?;
    info!(
        sidecar_count = sidecars.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "load complete"
    );

    let result = nth.run(sidecars);
    if result.missing > 0 {
        info!(
            property = result.sort.property(),
            missing = result.missing,
            "sidecars missing the sort property were placed last"
        );
    }
    info!(
        sort = %result.sort,
        group_by = %result.group,
        representation = %result.representation,
        group_count = result.groups.len(),
        "nth-of-type complete"
    );
    Ok(result)
}
