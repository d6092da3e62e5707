use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;

use super::EntryId;

/// Number of description characters shown in the page title.
const TITLE_PREFIX_CHARS: usize = 20;

/// Board column an entry lives in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStatus {
    #[default]
    #[strum(ascii_case_insensitive, serialize = "pending")]
    Pending,
    #[strum(ascii_case_insensitive, serialize = "in-progress")]
    InProgress,
    #[strum(ascii_case_insensitive, serialize = "finished")]
    Finished,
}

impl EntryStatus {
    /// Every valid status, in board column order.
    pub const ALL: [EntryStatus; 3] = [Self::Pending, Self::InProgress, Self::Finished];

    /// Capitalized form used for column headers and radio labels.
    pub fn label(&self) -> String {
        let raw = self.to_string();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A user-created record on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    pub status: EntryStatus,
    pub created_at: OffsetDateTime,
}

impl Entry {
    pub fn new(
        id: impl Into<EntryId>,
        description: impl Into<String>,
        status: EntryStatus,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status,
            created_at,
        }
    }

    /// Title for the entry's detail page.
    pub fn title(&self) -> String {
        let prefix: String = self.description.chars().take(TITLE_PREFIX_CHARS).collect();
        format!("{prefix}...")
    }

    /// Applies the present fields of `update`, keeping stored values otherwise.
    pub fn merged(&self, update: EntryUpdate) -> Self {
        Self {
            id: self.id,
            description: update.description.unwrap_or_else(|| self.description.clone()),
            status: update.status.unwrap_or(self.status),
            created_at: self.created_at,
        }
    }
}

/// Data for creating a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub description: String,
    pub status: EntryStatus,
}

impl NewEntry {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: EntryStatus::default(),
        }
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial update of an entry. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub description: Option<String>,
    pub status: Option<EntryStatus>,
}

impl EntryUpdate {
    pub fn status(status: EntryStatus) -> Self {
        Self {
            description: None,
            status: Some(status),
        }
    }
}

/// True when a description has no visible content.
pub fn is_blank(description: &str) -> bool {
    description.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn entry(description: &str) -> Entry {
        Entry::new(
            1,
            description,
            EntryStatus::Pending,
            datetime!(2026-01-01 12:00 UTC),
        )
    }

    #[test]
    fn status_round_trips_through_kebab_case() {
        assert_eq!(EntryStatus::InProgress.to_string(), "in-progress");
        assert_eq!(
            "In-Progress".parse::<EntryStatus>().unwrap(),
            EntryStatus::InProgress
        );
        assert!("done".parse::<EntryStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&EntryStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn labels_capitalize_only_the_first_letter() {
        let labels: Vec<_> = EntryStatus::ALL.iter().map(EntryStatus::label).collect();
        assert_eq!(labels, ["Pending", "In-progress", "Finished"]);
    }

    #[test]
    fn title_truncates_to_twenty_characters() {
        assert_eq!(
            entry("Write the quarterly report for finance").title(),
            "Write the quarterly ..."
        );
        assert_eq!(entry("Short").title(), "Short...");
        // Multi-byte characters count as one.
        assert_eq!(entry("ñññññññññññññññññññññ").title(), "ññññññññññññññññññññ...");
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let original = entry("Buy milk");

        let moved = original.merged(EntryUpdate::status(EntryStatus::Finished));
        assert_eq!(moved.description, "Buy milk");
        assert_eq!(moved.status, EntryStatus::Finished);
        assert_eq!(moved.created_at, original.created_at);

        let edited = original.merged(EntryUpdate {
            description: Some("Buy oat milk".into()),
            status: None,
        });
        assert_eq!(edited.description, "Buy oat milk");
        assert_eq!(edited.status, EntryStatus::Pending);
    }

    #[test]
    fn whitespace_only_descriptions_are_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" a "));
    }
}
