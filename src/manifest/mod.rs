//! Manifest formats understood by the walker.
//!
//! A package directory declares its dependencies in one of two files:
//! `package.js` (a single call-like expression listing paths) or
//! `deploy.json` (a JSON object referencing a `package.js` plus a list of
//! assets). The structured kind takes priority when both are present.

pub mod expression;
pub mod structured;

/// File name of the structured manifest.
pub const STRUCTURED_MANIFEST: &str = "deploy.json";

/// File name of the expression manifest.
pub const EXPRESSION_MANIFEST: &str = "package.js";

pub use structured::StructuredManifest;
