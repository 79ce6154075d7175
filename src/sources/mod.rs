//! Source catalog and the hand-curated supplemental channel list

pub mod curated;
pub mod registry;

pub use curated::{curated_records, CuratedChannel, CURATED_CHANNELS};
pub use registry::SourceRegistry;
