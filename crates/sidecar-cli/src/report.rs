//! Machine-readable report of a pipeline run.

use serde::Serialize;

use sidecar_core::{NthOfTypeResult, Representation};
use sidecar_model::{GroupKey, GroupSpec, SortSpec};

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub sort: &'a SortSpec,
    pub group_by: &'a GroupSpec,
    pub representation: Representation,
    pub sidecar_count: usize,
    pub missing: usize,
    pub groups: Vec<GroupReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GroupReport<'a> {
    /// Missing components serialize as `null`.
    pub key: &'a GroupKey,
    pub members: Vec<MemberReport>,
}

#[derive(Debug, Serialize)]
pub struct MemberReport {
    pub position: usize,
    pub ordinal: String,
    pub path: String,
}

impl<'a> Report<'a> {
    pub fn from_result(result: &'a NthOfTypeResult) -> Self {
        let mut groups: Vec<GroupReport<'a>> = Vec::with_capacity(result.groups.len());
        for position in result.positions() {
            let member = MemberReport {
                position: position.index,
                ordinal: position.ordinal.clone(),
                path: position.sidecar.path().display().to_string(),
            };
            match groups.last_mut() {
                Some(group) if group.key == position.key => group.members.push(member),
                _ => groups.push(GroupReport {
                    key: position.key,
                    members: vec![member],
                }),
            }
        }
        Self {
            sort: &result.sort,
            group_by: &result.group,
            representation: result.representation,
            sidecar_count: result.ordered.len(),
            missing: result.missing,
            groups,
        }
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(result: &NthOfTypeResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::from_result(result))
}
