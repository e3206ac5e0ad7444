//! Foundation types shared by every formwork crate.
//!
//! - [`Value`]: the dynamic value type used for properties, option lists and
//!   collaborator data (a re-export of `serde_json::Value`).
//! - [`AttributeStore`]: ordered HTML attribute bag with class-set handling and
//!   attribute-string serialization.
//! - [`escape`]: quote-safe HTML escaping that leaves existing entities alone.

pub mod attributes;
pub mod escape;
pub mod value;

pub use attributes::{AttrValue, AttributeStore};
pub use escape::escape;
pub use value::{Map, Value, ValueExt};
