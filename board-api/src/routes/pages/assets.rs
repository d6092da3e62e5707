//! Inline stylesheet and scripts shipped with the pages.

pub const STYLESHEET: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #121212; color: #eee; }
header { padding: 0.75rem 1.5rem; background: #1e1e1e; border-bottom: 1px solid #333; }
header a { color: inherit; text-decoration: none; font-weight: 600; }
main { padding: 1.5rem; }
.board { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.column { background: #1e1e1e; border-radius: 6px; padding: 0.75rem; min-height: 70vh; }
.column h2 { margin-top: 0; font-size: 1.1rem; }
.board.dragging .column { outline: 1px dashed #666; opacity: 0.8; }
.entry-card { display: block; margin-bottom: 0.5rem; padding: 0.75rem 1rem; border-radius: 4px; background: #2a2a2a; color: inherit; text-decoration: none; cursor: grab; }
.entry-card .description { margin: 0 0 0.5rem; white-space: pre-line; }
.entry-card .card-actions { display: flex; justify-content: end; padding-right: 0.5rem; font-size: 0.85rem; color: #aaa; }
.card { max-width: 40rem; margin: 1rem auto; background: #1e1e1e; border-radius: 6px; padding: 1rem 1.5rem; }
.card .subheader { color: #aaa; margin-top: -0.5rem; }
.field { margin: 1rem 0 0.5rem; }
.field textarea { width: 100%; min-height: 6rem; box-sizing: border-box; background: #121212; color: inherit; border: 1px solid #555; border-radius: 4px; padding: 0.5rem; }
.field .helper { display: none; color: #f44336; font-size: 0.85rem; }
.field.error textarea { border-color: #f44336; }
.field.error .helper { display: block; }
.status-group { border: none; padding: 0; margin: 1rem 0; }
.status-group label { margin-right: 1rem; }
.save { width: 100%; padding: 0.6rem; border: none; border-radius: 4px; background: #1976d2; color: #fff; font-weight: 600; }
.save:disabled { background: #444; color: #888; }
.delete { position: fixed; bottom: 2rem; right: 2rem; border: none; border-radius: 50%; width: 3rem; height: 3rem; background: #b71c1c; color: #fff; font-size: 1.2rem; }
.flash { margin: 0 0 1rem; padding: 0.5rem 1rem; border-radius: 4px; background: #2e7d32; }
.new-entry { margin-bottom: 1rem; }
.new-entry textarea { width: 100%; box-sizing: border-box; }
"#;

/// Drag-and-drop between columns.
///
/// A card being dragged stores its entry id under the `text` key and flags
/// the board root with `dragging`; dropping on a column sends the column's
/// status to the API and reloads the board.
pub const BOARD_SCRIPT: &str = r##"
(() => {
  const board = document.querySelector("[data-board]");
  if (!board) return;

  board.querySelectorAll("[data-entry-id]").forEach((card) => {
    card.addEventListener("dragstart", (event) => {
      event.dataTransfer.setData("text", card.dataset.entryId);
      board.classList.add("dragging");
    });
    card.addEventListener("dragend", () => board.classList.remove("dragging"));
  });

  board.querySelectorAll("[data-status]").forEach((column) => {
    column.addEventListener("dragover", (event) => event.preventDefault());
    column.addEventListener("drop", async (event) => {
      event.preventDefault();
      board.classList.remove("dragging");
      const id = event.dataTransfer.getData("text");
      if (!id) return;
      const response = await fetch(`/api/entries/${id}`, {
        method: "PUT",
        headers: { "content-type": "application/json" },
        body: JSON.stringify({ status: column.dataset.status }),
      });
      if (response.ok) window.location.reload();
    });
  });
})();
"##;

/// Validation on blur for the entry form.
pub const ENTRY_SCRIPT: &str = r##"
(() => {
  const field = document.querySelector("[data-description-field]");
  if (!field) return;
  const input = field.querySelector("textarea");
  const save = document.querySelector("[data-save]");

  const refresh = () => {
    const touched = field.dataset.touched === "true";
    field.classList.toggle("error", touched && input.value.trim().length <= 0);
    save.disabled = input.value.length <= 0;
  };

  input.addEventListener("blur", () => {
    field.dataset.touched = "true";
    refresh();
  });
  input.addEventListener("input", refresh);
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_flags_whitespace_only_descriptions() {
        assert!(ENTRY_SCRIPT.contains("touched && input.value.trim().length <= 0"));
        assert!(!ENTRY_SCRIPT.contains("touched && input.value.length"));
    }
}
