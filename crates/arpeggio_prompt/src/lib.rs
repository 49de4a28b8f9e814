//! Prompt template rendering and composition for Arpeggio.
//!
//! Templates are TOML files whose text may contain `{{placeholder}}`
//! references into a variable mapping. A rendered template parses as either
//! a single role/content record or a `[[message]]` list of such records; the
//! [`PromptComposer`] flattens one or more templates into a single ordered
//! message list for a generation backend.
//!
//! # Examples
//!
//! A single-record template:
//!
//! ```toml
//! role = "user"
//! content = '''
//! Here is the puzzle:
//!
//! {{problem_representation}}
//! '''
//! ```
//!
//! A multi-turn template:
//!
//! ```toml
//! [[message]]
//! role = "system"
//! content = "You solve abstract reasoning puzzles."
//!
//! [[message]]
//! role = "user"
//! content = "{{problem_representation}}"
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod renderer;
mod store;

pub use composer::PromptComposer;
pub use renderer::{TemplateRenderer, TemplateVars};
pub use store::FileTemplateStore;
