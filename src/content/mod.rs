//! Source content model and the arena index built over it.

pub(crate) mod arena;
/// Content tree and flow descriptors.
pub mod model;
