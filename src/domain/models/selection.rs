use super::manifest::ManifestSection;

/// Which tables to render, derived from the `-input` / `-output` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tables {
    Both,
    InputsOnly,
    OutputsOnly,
}

/// The raw `-input` / `-output` flag pair.
///
/// Rendering and prompting read the flags differently: `-input` wins when
/// both are given for rendering, while prompting for a section is skipped
/// whenever the *other* flag is set. With both flags set nothing is prompted
/// and only the inputs table is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub only_inputs: bool,
    pub only_outputs: bool,
}

impl Selection {
    pub const fn new(only_inputs: bool, only_outputs: bool) -> Self {
        Self {
            only_inputs,
            only_outputs,
        }
    }

    pub const fn tables(self) -> Tables {
        if self.only_inputs {
            Tables::InputsOnly
        } else if self.only_outputs {
            Tables::OutputsOnly
        } else {
            Tables::Both
        }
    }

    /// Whether missing types in `section` should be collected interactively.
    pub const fn prompts_for(self, section: ManifestSection) -> bool {
        match section {
            ManifestSection::Inputs => !self.only_outputs,
            ManifestSection::Outputs => !self.only_inputs,
        }
    }
}
