//! Version lineages.
//!
//! Groups stored snapshots into lineages by base name (the snapshot name
//! without its `_v<digits>` suffix), numbers versions chronologically, and
//! resolves user selections of 2 to 5 snapshots into comparison order.

pub mod grouper;
pub mod model;
pub mod selection;

pub use grouper::{base_name, group_lineages};
pub use model::{find_version, LineageVersion, VersionLineage};
pub use selection::{chain_pairs, resolve_pair, resolve_sequence, MAX_SELECTION, MIN_SELECTION};
