use tracing::{debug, info, instrument};

use crate::{
    application::ports::ArtifactWriter,
    domain::{ArtifactSpec, Context, EmittedArtifact},
    error::StoregenResult,
};

use super::Generator;

/// Emits the single artifact described by its [`ArtifactSpec`].
///
/// Every artifact kind goes through this one type; kinds differ only in the
/// sections their spec carries and the package they target.
#[derive(Debug, Clone)]
pub struct LeafGenerator<'a> {
    context: &'a Context,
    spec: ArtifactSpec,
}

impl<'a> LeafGenerator<'a> {
    pub fn new(context: &'a Context, spec: ArtifactSpec) -> Self {
        Self { context, spec }
    }
}

impl Generator for LeafGenerator<'_> {
    fn label(&self) -> &str {
        &self.spec.name
    }

    #[instrument(skip_all, fields(artifact = %self.spec.name, kind = %self.spec.kind))]
    fn run(&self, writer: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>> {
        let descriptor = self.spec.describe(self.context)?;
        debug!(
            path = %descriptor.path.display(),
            lines = descriptor.content.line_count(),
            "Artifact assembled"
        );

        writer.create_new(&descriptor.path, descriptor.content.as_str())?;
        info!(path = %descriptor.path.display(), "Artifact written");

        Ok(vec![descriptor.emitted()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockArtifactWriter},
        domain::{BaseName, NameFamily, templates},
    };
    use std::path::{Path, PathBuf};

    fn leaf(ctx: &Context) -> LeafGenerator<'_> {
        let names = NameFamily::derive(&BaseName::parse("Station").unwrap());
        LeafGenerator::new(ctx, templates::entity_class(ctx, &names, "stations").unwrap())
    }

    #[test]
    fn writes_rendered_content_to_resolved_path() {
        let ctx = Context::new("com.example.app", "/out").unwrap();
        let mut writer = MockArtifactWriter::new();
        writer
            .expect_create_new()
            .withf(|path: &Path, content: &str| {
                path == Path::new("/out/entity/StationEntity.java")
                    && content.contains("public class StationEntity")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let emitted = leaf(&ctx).run(&writer).unwrap();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].path, PathBuf::from("/out/entity/StationEntity.java"));
    }

    #[test]
    fn writer_failure_propagates_unchanged() {
        let ctx = Context::new("com.example.app", "/out").unwrap();
        let mut writer = MockArtifactWriter::new();
        writer.expect_create_new().returning(|path, _| {
            Err(ApplicationError::Collision {
                path: path.to_path_buf(),
            }
            .into())
        });

        let err = leaf(&ctx).run(&writer).unwrap_err();
        assert!(err.is_collision());
    }

    #[test]
    fn label_is_artifact_name() {
        let ctx = Context::new("com.example.app", "/out").unwrap();
        assert_eq!(leaf(&ctx).label(), "StationEntity");
    }
}
