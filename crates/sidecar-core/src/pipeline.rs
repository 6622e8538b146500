//! One-call pipeline: order, group, then label positions.

use std::time::Instant;

use sidecar_model::{GroupSpec, NthOfTypeOptions, Result, Sidecar, SortSpec};
use tracing::{debug, info_span};

use crate::grouping::{GroupTable, group_sidecars};
use crate::inference::Representation;
use crate::ordering::order_sidecars;
use crate::ordinal::{Position, assign_positions};

/// Parsed sort and group specifications, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NthOfType {
    sort: SortSpec,
    group: GroupSpec,
}

impl NthOfType {
    /// Parse both expressions up front so a bad direction fails before any
    /// sidecar is touched.
    pub fn new(options: &NthOfTypeOptions) -> Result<Self> {
        Ok(Self {
            sort: SortSpec::parse(&options.sort_by)?,
            group: GroupSpec::parse(&options.group_by),
        })
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort
    }

    pub fn group_spec(&self) -> &GroupSpec {
        &self.group
    }

    pub fn run(&self, sidecars: Vec<Sidecar>) -> NthOfTypeResult {
        let start = Instant::now();

        let sorted = info_span!("order", sort = %self.sort)
            .in_scope(|| order_sidecars(sidecars, &self.sort));
        let representation = sorted.rule.representation();
        let missing = sorted.missing;
        let ordered = sorted.sidecars;

        let groups = info_span!("group", group_by = %self.group)
            .in_scope(|| group_sidecars(ordered.clone(), &self.group));

        debug!(
            sidecar_count = ordered.len(),
            group_count = groups.len(),
            duration_ms = start.elapsed().as_millis(),
            "nth-of-type complete"
        );

        NthOfTypeResult {
            sort: self.sort.clone(),
            group: self.group.clone(),
            representation,
            missing,
            ordered,
            groups,
        }
    }
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct NthOfTypeResult {
    pub sort: SortSpec,
    pub group: GroupSpec,
    pub representation: Representation,
    /// Sidecars missing the sort property (they close `ordered`).
    pub missing: usize,
    pub ordered: Vec<Sidecar>,
    pub groups: GroupTable,
}

impl NthOfTypeResult {
    pub fn positions(&self) -> Vec<Position<'_>> {
        assign_positions(&self.groups)
    }
}
