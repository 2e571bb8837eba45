use chrono::NaiveDate;
use common::editor::upload::MemoryStore;
use common::model::record::{Record, RecordId};
use common::profile::content::ProfileContent;
use common::profile::{experience, guestbook, WidgetKind};

fn ids(editor: &common::editor::RecordEditor) -> Vec<RecordId> {
    editor.list().map(Record::id).collect()
}

#[test]
fn append_then_remove_middle_keeps_relative_order() {
    let content = ProfileContent::embedded().unwrap();
    let mut editor = content.editor(WidgetKind::Experience).unwrap();
    let mut store = MemoryStore::new();
    let seeds = ids(&editor);
    assert_eq!(seeds.len(), 2);

    editor.update("startDate", "Jun 2024").unwrap();
    editor.update("title", "Director").unwrap();
    editor.update("company", "Acme").unwrap();
    let added = editor.submit().unwrap();
    assert!(!seeds.contains(&added));
    assert_eq!(ids(&editor), [seeds[0], seeds[1], added]);
    assert!(editor.draft().is_blank());

    assert!(editor.remove(seeds[1], &mut store));
    assert_eq!(ids(&editor), [seeds[0], added]);

    let headings: Vec<String> = editor
        .rows(experience::format)
        .iter()
        .map(|row| row.view.heading_text())
        .collect();
    assert_eq!(
        headings,
        [
            "Jan 2020 - Present [Senior Product Manager] Tech Innovations Inc.",
            "Jun 2024 -  [Director] Acme",
        ]
    );
}

#[test]
fn guestbook_prepends_and_keeps_order_after_removal() {
    let content = ProfileContent::embedded().unwrap();
    let mut editor = content.editor(WidgetKind::Guestbook).unwrap();
    let mut store = MemoryStore::new();

    // Seeds keep the order of the content file; only new entries go on top.
    let footnotes: Vec<Option<String>> = editor
        .rows(guestbook::format)
        .into_iter()
        .map(|row| row.view.footnote)
        .collect();
    assert_eq!(
        footnotes,
        [
            Some("12/15/2023 - 14:30hrs".to_string()),
            Some("01/05/2024 - 09:45hrs".to_string()),
        ]
    );
    let seeds = ids(&editor);

    editor.update(guestbook::COMMENT, "Hello from the tests").unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap();
    let added = editor.submit_at(now).unwrap();
    assert_eq!(ids(&editor), [added, seeds[0], seeds[1]]);

    assert!(editor.remove(seeds[0], &mut store));
    assert_eq!(ids(&editor), [added, seeds[1]]);
}

#[test]
fn widgets_do_not_share_state() {
    let content = ProfileContent::embedded().unwrap();
    let mut first = content.editor(WidgetKind::Guestbook).unwrap();
    let second = content.editor(WidgetKind::Guestbook).unwrap();
    let mut store = MemoryStore::new();

    let victim = ids(&first)[0];
    assert!(first.remove(victim, &mut store));
    assert_eq!(first.list().len(), 1);
    assert_eq!(second.list().len(), 2);
}
