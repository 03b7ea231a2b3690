//! Folding partial definitions into their canonical definition.

use crate::ast::Definition;
use std::fmt;

/// A partial that could not be merged and was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeWarning {
    pub name: String,
    pub message: String,
}

impl fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merged {
    pub definitions: Vec<Definition>,
    pub warnings: Vec<MergeWarning>,
}

/// Merge every partial definition into the first earlier non-partial
/// definition of the same name. Canonical definitions keep their source
/// order; merged members are appended in the order the partials appear.
///
/// A partial with no earlier canonical entry, or whose target has no
/// member list, is dropped and reported in [`Merged::warnings`].
pub fn merge_partials(definitions: Vec<Definition>) -> Merged {
    let mut merged = Merged::default();

    for def in definitions {
        if !def.is_partial() {
            merged.definitions.push(def);
            continue;
        }

        // Only definitions with a member list can take a partial; this skips
        // `implements` statements, which are named after their target.
        let target = merged
            .definitions
            .iter_mut()
            .filter(|canonical| canonical.name() == def.name())
            .find_map(Definition::members_mut);

        match (target, def.members()) {
            (Some(members), Some(extra)) => {
                tracing::debug!(name = def.name(), members = extra.len(), "merged partial definition");
                members.extend_from_slice(extra);
            }
            _ => {
                let message =
                    format!("Partial definition comes before the real one ({})", def.name());
                tracing::warn!("{}", message);
                merged.warnings.push(MergeWarning { name: def.name().to_string(), message });
            }
        }
    }

    merged
}
