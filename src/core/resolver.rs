//! Directory resolution: manifest selection, dependency classification and
//! asset expansion.
//!
//! The walk is synchronous and depth-first. A directory is resolved by
//! parsing the one manifest it holds; extensionless dependency entries
//! re-enter the resolver, so nesting depth is unbounded. No memoization is
//! performed; a sub-package referenced from several places is re-read each
//! time.

use crossbeam_channel::Sender;
use std::path::Path;

use crate::core::WalkError;
use crate::core::types::{DependencyCollection, WalkEvent};
use crate::fs::{normalize_path, walk_directory};
use crate::manifest::{self, EXPRESSION_MANIFEST, STRUCTURED_MANIFEST, StructuredManifest};

/// Resolve every script, stylesheet and asset referenced by the manifests
/// under `path`.
///
/// The top-level path is canonicalized, so every returned path is absolute
/// and normalized. Trace events are sent to `events` when a sender is
/// given; pass `None` to walk silently.
pub fn resolve_dependencies(
    path: &Path,
    events: Option<Sender<WalkEvent>>,
) -> Result<DependencyCollection, WalkError> {
    let root = path.canonicalize().map_err(|_| WalkError::NotADirectory {
        path: path.to_path_buf(),
    })?;

    Walker { events }.parse_dir(&root)
}

struct Walker {
    events: Option<Sender<WalkEvent>>,
}

impl Walker {
    fn notify(&self, event: WalkEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// Entry point of the recursion: pick the manifest present in `dir` and
    /// parse it. A structured manifest wins over an expression manifest.
    fn parse_dir(&self, dir: &Path) -> Result<DependencyCollection, WalkError> {
        if !dir.is_dir() {
            return Err(WalkError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }

        let structured = dir.join(STRUCTURED_MANIFEST);
        if structured.is_file() {
            return self.parse_structured(&structured);
        }

        let expression = dir.join(EXPRESSION_MANIFEST);
        if expression.is_file() {
            return self.parse_expression(&expression);
        }

        Err(WalkError::ManifestNotFound {
            path: dir.to_path_buf(),
        })
    }

    /// Parse a `deploy.json`: scripts and stylesheets come from the
    /// referenced expression manifest, assets from expanding the asset
    /// list. Both are resolved relative to the manifest's directory.
    fn parse_structured(&self, location: &Path) -> Result<DependencyCollection, WalkError> {
        let base = location.parent().unwrap_or_else(|| Path::new("."));
        self.notify(WalkEvent::StructuredManifest(location.to_path_buf()));

        let structured = StructuredManifest::load(location)?;
        let packagejs = normalize_path(&base.join(&structured.packagejs));

        let mut deps = self.parse_expression(&packagejs)?;
        let assets = self.expand_assets(base, &structured.assets);
        deps.append(&assets);

        Ok(deps)
    }

    /// Parse a `package.js`, classifying each listed entry in declaration
    /// order into one shared collection.
    fn parse_expression(&self, location: &Path) -> Result<DependencyCollection, WalkError> {
        let base = location.parent().unwrap_or_else(|| Path::new("."));
        self.notify(WalkEvent::ExpressionManifest(location.to_path_buf()));

        let mut deps = DependencyCollection::new();
        for entry in manifest::expression::parse(location)? {
            self.classify(&mut deps, base, &entry)?;
        }

        Ok(deps)
    }

    /// Extension dispatch for one dependency entry. Scripts and stylesheets
    /// are recorded without checking that the target exists; an
    /// extensionless entry names a sub-package directory and recurses.
    fn classify(
        &self,
        deps: &mut DependencyCollection,
        base: &Path,
        entry: &str,
    ) -> Result<(), WalkError> {
        let location = normalize_path(&base.join(entry));

        match location.extension().and_then(|ext| ext.to_str()) {
            Some("js") => {
                self.notify(WalkEvent::Script(location.clone()));
                deps.scripts.push(location);
            }
            Some("css") => {
                self.notify(WalkEvent::Stylesheet(location.clone()));
                deps.stylesheets.push(location);
            }
            Some("less") => {
                // where a .less file is declared, a compiled sibling with a
                // .css suffix is assumed
                let compiled = location.with_extension("css");
                self.notify(WalkEvent::Stylesheet(compiled.clone()));
                deps.stylesheets.push(compiled);
            }
            Some(_) => {
                self.notify(WalkEvent::Ignored(entry.to_string()));
            }
            None => {
                let nested = self.parse_dir(&location)?;
                deps.append(&nested);
            }
        }

        Ok(())
    }

    /// Expand asset entries relative to `base`: a directory contributes
    /// every contained file depth-first in lexical name order, anything
    /// else is recorded as-is. Only the `assets` list of the returned
    /// collection is populated.
    fn expand_assets(&self, base: &Path, locations: &[String]) -> DependencyCollection {
        self.notify(WalkEvent::CollectingAssets(base.to_path_buf()));

        let mut deps = DependencyCollection::new();
        for location in locations {
            let full = normalize_path(&base.join(location));
            if full.is_dir() {
                for file in walk_directory(&full) {
                    self.notify(WalkEvent::Asset(file.clone()));
                    deps.assets.push(file);
                }
            } else {
                self.notify(WalkEvent::Asset(full.clone()));
                deps.assets.push(full);
            }
        }

        deps
    }
}
