//! Generator tree.
//!
//! A [`LeafGenerator`] emits exactly one artifact; a [`CompositeGenerator`]
//! owns an ordered list of children and runs them in that order. Both
//! implement [`Generator`], so trees compose without caring which is which.
//!
//! ```text
//! entity add
//! ├── entity class                 (leaf)
//! ├── repository interfaces        (composite)
//! │   ├── base / source / destination
//! └── datastore classes            (composite)
//!     └── base / source / destination
//! ```

mod composite;
mod leaf;

pub use composite::CompositeGenerator;
pub use leaf::LeafGenerator;

use crate::{
    application::ports::ArtifactWriter,
    domain::{Context, EmittedArtifact, NameFamily, StoreSide, templates},
    error::StoregenResult,
};

/// Anything that can be run to produce zero or more artifacts.
pub trait Generator {
    /// Short human-readable label used in logs.
    fn label(&self) -> &str;

    /// Emit every artifact through `writer`, stopping at the first failure.
    fn run(&self, writer: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>>;
}

/// Entity class for `names`, mapped to `collection`.
pub fn entity_class_generator<'a>(
    context: &'a Context,
    names: &NameFamily,
    collection: &str,
) -> StoregenResult<LeafGenerator<'a>> {
    let spec = templates::entity_class(context, names, collection)?;
    Ok(LeafGenerator::new(context, spec))
}

/// Base, source and destination repository interfaces.
pub fn repository_interfaces_generator<'a>(
    context: &'a Context,
    names: &NameFamily,
    id_type: &str,
) -> StoregenResult<CompositeGenerator<'a>> {
    let children = StoreSide::ALL
        .into_iter()
        .map(|side| {
            let spec = templates::repository_interface(context, names, side, id_type)?;
            Ok(Box::new(LeafGenerator::new(context, spec)) as Box<dyn Generator + 'a>)
        })
        .collect::<StoregenResult<Vec<_>>>()?;

    Ok(CompositeGenerator::new("repository interfaces", children))
}

/// Base, source and destination datastore classes.
pub fn datastore_classes_generator<'a>(
    context: &'a Context,
    names: &NameFamily,
    id_type: &str,
) -> StoregenResult<CompositeGenerator<'a>> {
    let children = StoreSide::ALL
        .into_iter()
        .map(|side| {
            let spec = templates::datastore_class(context, names, side, id_type)?;
            Ok(Box::new(LeafGenerator::new(context, spec)) as Box<dyn Generator + 'a>)
        })
        .collect::<StoregenResult<Vec<_>>>()?;

    Ok(CompositeGenerator::new("datastore classes", children))
}
