use tracing::{info_span, warn};

use crate::{application::ports::ArtifactWriter, domain::EmittedArtifact, error::StoregenResult};

use super::Generator;

/// Runs a fixed, ordered list of child generators.
///
/// Children are built once at construction and run strictly in that order.
/// The first failure is returned as-is; artifacts written by earlier
/// children stay on disk.
pub struct CompositeGenerator<'a> {
    label: &'static str,
    children: Vec<Box<dyn Generator + 'a>>,
}

impl<'a> CompositeGenerator<'a> {
    pub fn new(label: &'static str, children: Vec<Box<dyn Generator + 'a>>) -> Self {
        Self { label, children }
    }
}

#[cfg(test)]
impl CompositeGenerator<'_> {
    fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child labels in run order.
    fn labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label()).collect()
    }
}

impl Generator for CompositeGenerator<'_> {
    fn label(&self) -> &str {
        self.label
    }

    fn run(&self, writer: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>> {
        let _span = info_span!("composite", label = self.label).entered();
        let mut emitted = Vec::new();

        for child in &self.children {
            match child.run(writer) {
                Ok(artifacts) => emitted.extend(artifacts),
                Err(e) => {
                    warn!(
                        failed = child.label(),
                        kept = emitted.len(),
                        "Generation stopped; earlier artifacts were kept"
                    );
                    return Err(e);
                }
            }
        }

        Ok(emitted)
    }
}
