use std::convert::Infallible;
use std::str::FromStr;

use log::debug;

use crate::sort::categorize::ImportType;

const DEFAULT_ORDER: [ImportType; 3] = [
    ImportType::Standard,
    ImportType::External,
    ImportType::Internal,
];

/// Left-to-right emission order of import sections.
///
/// Always a total order naming each section exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOrder([ImportType; 3]);

impl SectionOrder {
    /// Resolve a comma-separated order specification.
    ///
    /// Recognized tokens (`standard`, `external`, `internal`) are taken in
    /// encounter order; unrecognized tokens and duplicate mentions are
    /// silently dropped. Sections left unmentioned are appended after the
    /// mentioned ones in declaration order, so a partial or fully malformed
    /// specification still resolves to a total order.
    pub fn parse(spec: &str) -> Self {
        let mut sections: Vec<ImportType> = Vec::with_capacity(3);
        for token in spec.split(',') {
            let section = match token.trim() {
                "standard" => ImportType::Standard,
                "external" => ImportType::External,
                "internal" => ImportType::Internal,
                unknown => {
                    debug!("Ignoring unrecognized section token: '{unknown}'");
                    continue;
                }
            };
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        for section in DEFAULT_ORDER {
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        Self(sections.try_into().unwrap_or(DEFAULT_ORDER))
    }

    /// Position of a section in the resolved order.
    pub fn rank(&self, section: ImportType) -> usize {
        self.0
            .iter()
            .position(|candidate| *candidate == section)
            .unwrap_or(self.0.len())
    }

    /// The sections in emission order.
    pub fn iter(&self) -> impl Iterator<Item = ImportType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self(DEFAULT_ORDER)
    }
}

impl FromStr for SectionOrder {
    type Err = Infallible;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(spec))
    }
}
