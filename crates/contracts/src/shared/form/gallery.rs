//! Ordered image gallery of a multi-image form field.
//!
//! Slots are either images already stored on the server or files picked in
//! the browser and not uploaded yet. Each slot has a stable key so the UI can
//! attach previews and file handles to it while the order changes.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Stored path, relative to the API base URL
    Existing(String),
    /// A file chosen in the browser, owned by the UI under the slot key
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSlot {
    pub key: Uuid,
    pub source: MediaSource,
}

impl MediaSlot {
    pub fn is_pending(&self) -> bool {
        self.source == MediaSource::Pending
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaGallery {
    slots: Vec<MediaSlot>,
}

impl MediaGallery {
    pub fn from_paths(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            slots: paths
                .into_iter()
                .map(|path| MediaSlot {
                    key: Uuid::new_v4(),
                    source: MediaSource::Existing(path),
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[MediaSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a slot for a newly chosen file and return its key
    pub fn push_pending(&mut self) -> Uuid {
        let key = Uuid::new_v4();
        self.slots.push(MediaSlot {
            key,
            source: MediaSource::Pending,
        });
        key
    }

    pub fn remove(&mut self, key: Uuid) -> Option<MediaSlot> {
        let index = self.slots.iter().position(|s| s.key == key)?;
        Some(self.slots.remove(index))
    }

    /// Drag `from` onto `to`; out of range indices are ignored
    pub fn move_slot(&mut self, from: usize, to: usize) {
        if from == to || from >= self.slots.len() || to >= self.slots.len() {
            return;
        }
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
    }

    /// Server paths still in the gallery, in display order
    pub fn kept_paths(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter_map(|s| match &s.source {
                MediaSource::Existing(path) => Some(path.clone()),
                MediaSource::Pending => None,
            })
            .collect()
    }

    /// Keys of files to upload, in display order
    pub fn pending_keys(&self) -> Vec<Uuid> {
        self.slots
            .iter()
            .filter(|s| s.is_pending())
            .map(|s| s.key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> MediaGallery {
        MediaGallery::from_paths(vec!["/a.png".to_string(), "/b.png".to_string()])
    }

    #[test]
    fn test_kept_and_pending() {
        let mut g = gallery();
        let key = g.push_pending();
        assert_eq!(g.len(), 3);
        assert_eq!(g.kept_paths(), vec!["/a.png", "/b.png"]);
        assert_eq!(g.pending_keys(), vec![key]);
    }

    #[test]
    fn test_move_and_remove() {
        let mut g = gallery();
        let pending = g.push_pending();
        g.move_slot(2, 0);
        assert_eq!(g.slots()[0].key, pending);
        assert_eq!(g.kept_paths(), vec!["/a.png", "/b.png"]);

        g.move_slot(2, 1);
        assert_eq!(g.kept_paths(), vec!["/b.png", "/a.png"]);

        let first_kept = g.slots()[1].key;
        assert!(g.remove(first_kept).is_some());
        assert_eq!(g.kept_paths(), vec!["/a.png"]);
        assert!(g.remove(first_kept).is_none());
    }

    #[test]
    fn test_move_out_of_range_is_ignored() {
        let mut g = gallery();
        g.move_slot(0, 5);
        assert_eq!(g.kept_paths(), vec!["/a.png", "/b.png"]);
    }
}
