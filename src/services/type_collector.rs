//! Interactive collection of missing type annotations.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::domain::models::{Manifest, ManifestSection, Selection, TypedEntry, ValueType};
use crate::domain::ports::TypePrompt;

/// Counts reported after a collection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Entries the user was asked about
    pub prompted: usize,
    /// Entries that received a type
    pub assigned: usize,
}

/// Asks for a type for every untyped entry in the selected sections.
pub struct TypeCollector<P> {
    prompt: P,
}

impl<P: TypePrompt> TypeCollector<P> {
    pub const fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Prompt for missing types in each section the selection allows.
    ///
    /// Entries are visited in ascending name order. Entries that already
    /// carry a type are not asked about, and a cancelled prompt leaves the
    /// entry untyped.
    pub fn collect(&mut self, manifest: &mut Manifest, selection: Selection) -> CollectionSummary {
        let mut summary = CollectionSummary::default();

        if selection.prompts_for(ManifestSection::Inputs) {
            self.collect_section(ManifestSection::Inputs, &mut manifest.inputs, &mut summary);
        }
        if selection.prompts_for(ManifestSection::Outputs) {
            self.collect_section(ManifestSection::Outputs, &mut manifest.outputs, &mut summary);
        }

        info!(
            prompted = summary.prompted,
            assigned = summary.assigned,
            "Type collection finished"
        );
        summary
    }

    fn collect_section<E: TypedEntry>(
        &mut self,
        section: ManifestSection,
        entries: &mut HashMap<String, E>,
        summary: &mut CollectionSummary,
    ) {
        let mut names: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.value_type().is_none())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_unstable();

        let options = ValueType::options();
        for name in names {
            let message = prompt_message(section, &name);
            summary.prompted += 1;

            let Some(answer) = self.prompt.select_one(&message, &options) else {
                continue;
            };
            let value_type = match answer.parse::<ValueType>() {
                Ok(value_type) => value_type,
                Err(err) => {
                    warn!(field = %section.field_path(&name), %err, "Ignoring prompt answer");
                    continue;
                }
            };

            if let Some(entry) = entries.get_mut(&name) {
                if entry.assign_type(value_type) {
                    summary.assigned += 1;
                }
            }
        }
    }
}

/// Prompt label for one entry, e.g. `Type of "inputs.repo":`.
pub fn prompt_message(section: ManifestSection, name: &str) -> String {
    format!("Type of \"{}\":", section.field_path(name))
}
