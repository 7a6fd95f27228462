//! Canonical documents → typed entity graph → JSON-LD.

pub mod builder;
pub mod index;
pub mod jsonld;
pub mod slug;
pub mod store;
pub mod term;

pub use builder::{build_graph, GraphBuild};
pub use index::{EntityIndex, JoinIndex};
pub use jsonld::{to_jsonld, to_jsonld_string};
pub use slug::slug;
pub use store::Graph;
pub use term::{coerce, Value, XSD_NAMESPACE};
