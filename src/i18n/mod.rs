//! Languages, catalogs and the language stack.
//!
//! # Architecture
//!
//! - `language`: `Language` records, ids, direction and date patterns
//! - `registry`: the set of languages a catalog knows about
//! - `catalog`: the `Catalog` trait and the in-memory implementation
//! - `stack`: the non-empty language stack behind push/pop/set
//! - `validator`: placeholder and completeness checks across languages
//! - `metrics`: lookup counters
//!
//! # Example
//!
//! ```rust
//! use babel::i18n::{Catalog, LanguageRegistry, MemoryCatalog, TextId};
//!
//! let registry = LanguageRegistry::builtin();
//! let english = registry.get_by_code("en").unwrap().id;
//! let catalog = MemoryCatalog::new(registry)
//!     .with_text(english, TextId::new(1), "Welcome")
//!     .unwrap();
//! assert_eq!(catalog.text(english, TextId::new(1)), Some("Welcome"));
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod stack;
mod validator;

pub use catalog::{Catalog, CatalogFile, MemoryCatalog, TextId, WordId};
pub use language::{DatePatterns, Direction, Language, LanguageId};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::LanguageRegistry;
pub use stack::LanguageStack;
pub use validator::{CatalogValidator, ValidationReport};
