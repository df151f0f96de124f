//! iconkit — fetch SVG icons from a remote icon CDN, customize their
//! attributes, and cache the result per resolver.

pub mod cache;
pub mod config;
pub mod markup;
pub mod resolver;
pub mod source;
pub mod suggest;
pub mod types;

pub use cache::IconCache;
pub use config::{ResolverConfig, DEFAULT_BASE_URL};
pub use markup::{customize, extract_paths, fallback_icon};
pub use resolver::IconResolver;
pub use source::{CdnSource, IconSource};
pub use suggest::suggest;
pub use types::*;
