//! Core types shared across depwalk modules

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The result of resolving a package tree: scripts, stylesheets and assets
/// as absolute paths in manifest declaration order.
///
/// Order carries meaning and duplicates are never filtered; a path declared
/// twice is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCollection {
    pub scripts: Vec<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
    pub assets: Vec<PathBuf>,
}

impl DependencyCollection {
    /// Create a collection with three empty lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push every entry of `source` onto `self`, per category, keeping
    /// declaration order. `source` is left untouched.
    pub fn append(&mut self, source: &DependencyCollection) {
        self.scripts.extend_from_slice(&source.scripts);
        self.stylesheets.extend_from_slice(&source.stylesheets);
        self.assets.extend_from_slice(&source.assets);
    }

    /// Build a new collection holding `self`'s entries followed by
    /// `other`'s. Neither input is modified.
    pub fn merge(&self, other: &DependencyCollection) -> DependencyCollection {
        let mut merged = self.clone();
        merged.append(other);
        merged
    }

    /// Total number of entries across all three categories.
    pub fn len(&self) -> usize {
        self.scripts.len() + self.stylesheets.len() + self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Events emitted while a package tree is being walked
#[derive(Debug, Clone)]
pub enum WalkEvent {
    /// A deploy.json manifest is being parsed
    StructuredManifest(PathBuf),
    /// A package.js manifest is being parsed
    ExpressionManifest(PathBuf),
    /// A dependency entry was recorded as a script
    Script(PathBuf),
    /// A dependency entry was recorded as a stylesheet
    Stylesheet(PathBuf),
    /// A dependency entry had an unrecognized extension and was skipped
    Ignored(String),
    /// Asset expansion started under a directory
    CollectingAssets(PathBuf),
    /// An asset file was recorded
    Asset(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collection_is_empty() {
        let deps = DependencyCollection::new();
        assert!(deps.scripts.is_empty());
        assert!(deps.stylesheets.is_empty());
        assert!(deps.assets.is_empty());
        assert!(deps.is_empty());
    }

    #[test]
    fn test_append_keeps_order_and_duplicates() {
        let mut target = DependencyCollection {
            scripts: vec![PathBuf::from("/a.js"), PathBuf::from("/b.js")],
            stylesheets: vec![PathBuf::from("/a.css")],
            assets: vec![PathBuf::from("/img")],
        };
        let source = DependencyCollection {
            scripts: vec![PathBuf::from("/a.js")],
            stylesheets: vec![PathBuf::from("/a.css")],
            assets: vec![],
        };

        target.append(&source);

        assert_eq!(
            target.scripts,
            vec![
                PathBuf::from("/a.js"),
                PathBuf::from("/b.js"),
                PathBuf::from("/a.js"),
            ]
        );
        assert_eq!(
            target.stylesheets,
            vec![PathBuf::from("/a.css"), PathBuf::from("/a.css")]
        );
        assert_eq!(target.assets, vec![PathBuf::from("/img")]);

        // source must not have been drained
        assert_eq!(source.scripts, vec![PathBuf::from("/a.js")]);
        assert_eq!(source.stylesheets, vec![PathBuf::from("/a.css")]);
    }

    #[test]
    fn test_merge_concatenates_without_touching_inputs() {
        let a = DependencyCollection {
            scripts: vec![PathBuf::from("/1.js"), PathBuf::from("/2.js")],
            stylesheets: vec![PathBuf::from("/1.css")],
            assets: vec![PathBuf::from("/icon.png")],
        };
        let b = DependencyCollection {
            scripts: vec![PathBuf::from("/3.js")],
            stylesheets: vec![],
            assets: vec![PathBuf::from("/icon.png")],
        };

        let merged = a.merge(&b);

        assert_eq!(
            merged.scripts,
            vec![
                PathBuf::from("/1.js"),
                PathBuf::from("/2.js"),
                PathBuf::from("/3.js"),
            ]
        );
        assert_eq!(merged.stylesheets, vec![PathBuf::from("/1.css")]);
        assert_eq!(
            merged.assets,
            vec![PathBuf::from("/icon.png"), PathBuf::from("/icon.png")]
        );

        assert_eq!(a.scripts.len(), 2);
        assert_eq!(b.scripts.len(), 1);
        assert_eq!(b.stylesheets.len(), 0);
    }
}
