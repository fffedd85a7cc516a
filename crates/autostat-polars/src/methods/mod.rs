//! Table operations behind [`crate::CarFrameExt`]

pub(crate) mod aggregate;
pub(crate) mod columns;
pub(crate) mod compare;
pub(crate) mod derive;
pub(crate) mod inspect;
pub(crate) mod loader;
pub(crate) mod rank;
pub(crate) mod summary;
