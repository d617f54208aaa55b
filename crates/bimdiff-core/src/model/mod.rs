pub mod element;
pub mod snapshot;
pub mod value;

pub use element::{identity_key, Element};
pub use snapshot::VersionSnapshot;
pub use value::{Properties, PropertyValue, ValueKind};
