pub(crate) mod sources;
pub(crate) mod split;
pub(crate) mod terminal;
pub(crate) mod transforms;

// Only re-export files with top-level functions
pub use sources::*;
pub use split::*;
