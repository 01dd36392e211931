//! Slug derivation from document storage names.
//!
//! A slug is the document's path relative to its source root with the final extension
//! removed, using `/` as the separator on every platform:
//! - `hello-world.md` becomes `hello-world`
//! - `2024/recap.md` becomes `2024/recap`
//! - `notes.draft.md` becomes `notes.draft`
//!
//! Slugs are otherwise left as-is. Names that can't produce a slug (empty stems, non-UTF-8
//! components, absolute or parent-relative paths) yield `None`.

use std::path::{Component, Path};

/// Derives a slug from a path relative to the source root.
pub fn slug_from_path(rel_path: &Path) -> Option<String> {
    let stem = rel_path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if let Some(parent) = rel_path.parent() {
        for component in parent.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
    }
    parts.push(stem);

    Some(parts.join("/"))
}

/// Derives a slug from a `/`-separated storage identifier such as `posts/hello.md`.
///
/// Leading `./` segments are ignored.
pub fn slug_from_identifier(identifier: &str) -> Option<String> {
    slug_from_path(Path::new(identifier))
}
