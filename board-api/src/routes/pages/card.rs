use crate::{domain::models::Entry, utils::relative_time::format_distance_to_now};

use super::layout::escape;

/// A board card for `entry`.
///
/// The card is the drag source: it carries the entry id for the board
/// script and links to the entry's detail page.
pub fn entry_card(entry: &Entry) -> String {
    format!(
        r#"<a class="entry-card" href="/entries/{id}" draggable="true" data-entry-id="{id}">
<p class="description">{description}</p>
<div class="card-actions"><span>{created}</span></div>
</a>"#,
        id = entry.id,
        description = escape(&entry.description),
        created = escape(&format_distance_to_now(entry.created_at)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::EntryStatus;
    use time::{Duration, OffsetDateTime};

    #[test]
    fn card_is_a_draggable_link_to_the_entry() {
        let entry = Entry::new(
            7,
            "Water the plants",
            EntryStatus::Pending,
            OffsetDateTime::now_utc() - Duration::minutes(5),
        );

        let html = entry_card(&entry);

        assert!(html.contains(r#"href="/entries/7""#));
        assert!(html.contains(r#"draggable="true""#));
        assert!(html.contains(r#"data-entry-id="7""#));
        assert!(html.contains(&escape("5 minutes ago")));
    }

    #[test]
    fn card_escapes_descriptions() {
        let entry = Entry::new(
            1,
            "<img src=x onerror=alert(1)>",
            EntryStatus::Pending,
            OffsetDateTime::now_utc(),
        );

        assert!(!entry_card(&entry).contains("<img"));
    }
}
