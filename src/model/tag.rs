//! Canonical tag classification for the tracking forum.
//!
//! Every handler consults the same `TagTable` (carried in `Config`) to decide whether a tag is a
//! status tag. Nothing else in the crate keeps its own list of status tag IDs.

use std::{collections::HashSet, fmt};

use serenity::all::ForumTagId;

use crate::error::config::ConfigError;

/// Workflow state of a bug report. At most one of these is applied to a thread at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTag {
    Pending,
    InProgress,
    Investigating,
    Fixed,
    Resolved,
    Duplicate,
}

impl StatusTag {
    pub const ALL: [StatusTag; 6] = [
        StatusTag::Pending,
        StatusTag::InProgress,
        StatusTag::Investigating,
        StatusTag::Fixed,
        StatusTag::Resolved,
        StatusTag::Duplicate,
    ];

    /// Human-readable tag name as used in log lines and user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            StatusTag::Pending => "Pending",
            StatusTag::InProgress => "In Progress",
            StatusTag::Investigating => "Investigating",
            StatusTag::Fixed => "Fixed",
            StatusTag::Resolved => "Resolved",
            StatusTag::Duplicate => "Duplicate",
        }
    }

    /// Whether reaching this status closes the thread.
    pub fn closes_thread(self) -> bool {
        matches!(
            self,
            StatusTag::Fixed | StatusTag::Resolved | StatusTag::Duplicate
        )
    }
}

impl fmt::Display for StatusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-status tags describing what kind of report a thread is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelTag {
    Bug,
    Feature,
    Feedback,
}

impl LabelTag {
    pub const ALL: [LabelTag; 3] = [LabelTag::Bug, LabelTag::Feature, LabelTag::Feedback];
}

/// Classification of a single applied tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Status(StatusTag),
    Label(LabelTag),
    /// A tag the forum has but the bot was not configured with.
    Unclassified,
}

/// Configured tag IDs, indexed by status and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTable {
    status: [ForumTagId; 6],
    labels: [ForumTagId; 3],
}

impl TagTable {
    /// Builds the table from IDs listed in `StatusTag::ALL` and `LabelTag::ALL` order.
    ///
    /// # Returns
    /// - `Ok(TagTable)` - Every configured ID is distinct
    /// - `Err(ConfigError::DuplicateTag)` - Two tags share an ID
    pub fn new(status: [ForumTagId; 6], labels: [ForumTagId; 3]) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for id in status.iter().chain(labels.iter()) {
            if !seen.insert(*id) {
                return Err(ConfigError::DuplicateTag(*id));
            }
        }

        Ok(Self { status, labels })
    }

    pub fn id(&self, status: StatusTag) -> ForumTagId {
        self.status[status as usize]
    }

    pub fn label_id(&self, label: LabelTag) -> ForumTagId {
        self.labels[label as usize]
    }

    pub fn classify(&self, tag: ForumTagId) -> TagKind {
        if let Some(status) = StatusTag::ALL.into_iter().find(|s| self.id(*s) == tag) {
            return TagKind::Status(status);
        }

        LabelTag::ALL
            .into_iter()
            .find(|l| self.label_id(*l) == tag)
            .map_or(TagKind::Unclassified, TagKind::Label)
    }

    pub fn is_status(&self, tag: ForumTagId) -> bool {
        matches!(self.classify(tag), TagKind::Status(_))
    }

    /// Returns the first status tag found among `tags`, if any.
    pub fn current_status(&self, tags: &[ForumTagId]) -> Option<StatusTag> {
        tags.iter().find_map(|tag| match self.classify(*tag) {
            TagKind::Status(status) => Some(status),
            _ => None,
        })
    }
}
