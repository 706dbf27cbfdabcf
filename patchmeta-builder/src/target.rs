use patchmeta_types::{ContentHash, ContentItem, ContentModification};

/// Anything that accumulates an ordered list of content modifications.
///
/// Implemented by [`PatchBuilder`](crate::PatchBuilder) and
/// [`PatchElementBuilder`](crate::PatchElementBuilder). Modifications are appended in call order;
/// duplicates are kept.
pub trait ModificationTarget: Sized {
    fn push_modification(&mut self, modification: ContentModification);

    fn modifications(&self) -> &[ContentModification];

    fn add_content_modification(mut self, modification: ContentModification) -> Self {
        self.push_modification(modification);
        self
    }

    fn add_module(self, name: &str, slot: &str, content_hash: ContentHash) -> Self {
        self.add_content_modification(ContentModification::add(
            ContentItem::module(name, slot),
            content_hash,
        ))
    }

    fn modify_module(
        self,
        name: &str,
        slot: &str,
        existing_hash: ContentHash,
        new_hash: ContentHash,
    ) -> Self {
        self.add_content_modification(ContentModification::modify(
            ContentItem::module(name, slot),
            existing_hash,
            new_hash,
        ))
    }

    fn remove_module(self, name: &str, slot: &str, existing_hash: ContentHash) -> Self {
        self.add_content_modification(ContentModification::remove(
            ContentItem::module(name, slot),
            existing_hash,
        ))
    }

    fn add_bundle(self, name: &str, slot: &str, content_hash: ContentHash) -> Self {
        self.add_content_modification(ContentModification::add(
            ContentItem::bundle(name, slot),
            content_hash,
        ))
    }

    fn modify_bundle(
        self,
        name: &str,
        slot: &str,
        existing_hash: ContentHash,
        new_hash: ContentHash,
    ) -> Self {
        self.add_content_modification(ContentModification::modify(
            ContentItem::bundle(name, slot),
            existing_hash,
            new_hash,
        ))
    }

    fn remove_bundle(self, name: &str, slot: &str, existing_hash: ContentHash) -> Self {
        self.add_content_modification(ContentModification::remove(
            ContentItem::bundle(name, slot),
            existing_hash,
        ))
    }

    /// Add a misc file. `path` is the parent directory, split into segments.
    fn add_file(
        self,
        name: &str,
        path: &[&str],
        content_hash: ContentHash,
        is_directory: bool,
    ) -> Self {
        self.add_content_modification(ContentModification::add(
            ContentItem::misc(name, segments(path), is_directory),
            content_hash,
        ))
    }

    fn modify_file(
        self,
        name: &str,
        path: &[&str],
        existing_hash: ContentHash,
        new_hash: ContentHash,
    ) -> Self {
        self.add_content_modification(ContentModification::modify(
            ContentItem::misc(name, segments(path), false),
            existing_hash,
            new_hash,
        ))
    }

    fn remove_file(self, name: &str, path: &[&str], existing_hash: ContentHash) -> Self {
        self.add_content_modification(ContentModification::remove(
            ContentItem::misc(name, segments(path), false),
            existing_hash,
        ))
    }
}

fn segments(path: &[&str]) -> Vec<String> {
    path.iter().map(|s| s.to_string()).collect()
}
