//! Ordinal positions within groups ("1st", "2nd", ...).

use sidecar_model::{GroupKey, Sidecar};

use crate::grouping::GroupTable;

/// English ordinal for a 1-based position.
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Position of one sidecar within its group.
#[derive(Debug, Clone, PartialEq)]
pub struct Position<'a> {
    pub key: &'a GroupKey,
    /// 1-based index within the group.
    pub index: usize,
    pub group_size: usize,
    pub ordinal: String,
    pub sidecar: &'a Sidecar,
}

impl Position<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    pub fn is_last(&self) -> bool {
        self.index == self.group_size
    }
}

/// Label every member of every group with its position.
///
/// Groups are visited in first-seen order and members in group order.
pub fn assign_positions(table: &GroupTable) -> Vec<Position<'_>> {
    table
        .iter()
        .flat_map(|(key, members)| {
            let group_size = members.len();
            members.iter().enumerate().map(move |(i, sidecar)| Position {
                key,
                index: i + 1,
                group_size,
                ordinal: ordinal(i + 1),
                sidecar,
            })
        })
        .collect()
}
