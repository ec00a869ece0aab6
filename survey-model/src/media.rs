//! References to media owned outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use survey_types::MediaId;

/// A foreign reference to a media/attachment entity.
///
/// Holding a `MediaRef` says nothing about whether the media exists; the
/// owning system manages its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef {
    id: MediaId,
}

impl MediaRef {
    pub const fn new(id: MediaId) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> MediaId {
        self.id
    }
}

impl From<MediaId> for MediaRef {
    fn from(id: MediaId) -> Self {
        Self::new(id)
    }
}

/// Lookup capability against whichever store owns the media.
pub trait MediaLookup {
    type Media;

    fn lookup(&self, id: &MediaId) -> Option<Self::Media>;

    fn contains(&self, id: &MediaId) -> bool {
        self.lookup(id).is_some()
    }
}

impl<M: Clone> MediaLookup for HashMap<MediaId, M> {
    type Media = M;

    fn lookup(&self, id: &MediaId) -> Option<M> {
        self.get(id).cloned()
    }

    fn contains(&self, id: &MediaId) -> bool {
        self.contains_key(id)
    }
}
