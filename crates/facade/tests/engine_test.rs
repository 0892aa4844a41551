use facade::{MemoryTable, SortEngine, SortState, TableAdapter};
use rankify::{ColumnKey, Direction, Row};
use vaultify::Markup;

fn projects() -> Vec<Row> {
    vec![
        Row::new("CLOSED")
            .with_id("p1")
            .with_file("budget.xlsx")
            .with_language("de")
            .with_created("2025-01-01T10:00:00Z")
            .with_customer("acme")
            .with_translator("jana"),
        Row::new("COMPLETED")
            .with_id("p2")
            .with_file("contract.pdf")
            .with_language("fr")
            .with_created("2025-01-02T10:00:00Z")
            .with_customer(""),
        Row::new("ASSIGNED")
            .with_id("p3")
            .with_file("agenda.docx")
            .with_language("cs")
            .with_created("2025-01-03T10:00:00Z")
            .with_customer("globex")
            .with_translator("petr"),
        Row::new("COMPLETED")
            .with_id("p4")
            .with_file("brochure.pdf")
            .with_language("de")
            .with_created("2025-01-04T10:00:00Z")
            .with_customer("initech"),
    ]
}

fn started() -> SortEngine<MemoryTable> {
    let markup = Markup::default();
    let table = MemoryTable::projects(&markup, &projects());
    let mut engine = SortEngine::new(table, markup);
    engine.start();
    engine
}

#[test]
fn start_applies_default_order_and_marks_state_header() {
    let engine = started();
    assert!(engine.is_started());
    assert_eq!(engine.adapter().row_keys(), ["p4", "p2", "p3", "p1"]);
    assert_eq!(engine.state(), SortState::new(ColumnKey::State, Direction::Asc));

    let state = engine.adapter().header("State").unwrap();
    assert!(state.has_class("active"));
    assert_eq!(state.attribute("data-sort-dir"), Some("asc"));
    assert_eq!(engine.bound_columns().count(), 6);
}

#[test]
fn header_clicks_toggle_and_reset_direction() {
    let mut engine = started();

    engine.activate(ColumnKey::File);
    assert_eq!(engine.state(), SortState::new(ColumnKey::File, Direction::Asc));
    assert_eq!(engine.adapter().row_keys(), ["p3", "p4", "p1", "p2"]);

    engine.activate(ColumnKey::File);
    assert_eq!(engine.state(), SortState::new(ColumnKey::File, Direction::Desc));
    assert_eq!(engine.adapter().row_keys(), ["p2", "p1", "p4", "p3"]);
    let file = engine.adapter().header("File").unwrap();
    assert_eq!(file.attribute("data-sort-dir"), Some("desc"));

    engine.activate(ColumnKey::Language);
    assert_eq!(
        engine.state(),
        SortState::new(ColumnKey::Language, Direction::Asc)
    );
    // two "de" rows fall back to file name
    assert_eq!(engine.adapter().row_keys(), ["p3", "p4", "p1", "p2"]);

    let table = engine.adapter();
    assert!(!table.header("File").unwrap().has_class("active"));
    assert_eq!(
        table.header("File").unwrap().attribute("data-sort-dir"),
        Some("none")
    );
    assert!(table.header("Language").unwrap().has_class("active"));
}

#[test]
fn empty_customer_sorts_last_then_first() {
    let mut engine = started();

    engine.activate_key("customer");
    assert_eq!(engine.adapter().row_keys().last(), Some(&"p2"));

    engine.activate_key("customer");
    assert_eq!(engine.adapter().row_keys().first(), Some(&"p2"));
}

#[test]
fn clicking_state_flips_from_the_initial_state() {
    let mut engine = started();
    engine.activate(ColumnKey::State);

    assert_eq!(engine.state(), SortState::new(ColumnKey::State, Direction::Desc));
    // equal-rank COMPLETED rows are tie-broken by file, descending
    assert_eq!(engine.adapter().row_keys(), ["p1", "p3", "p2", "p4"]);
}

#[test]
fn clicks_on_uniform_column_keep_previous_order() {
    let markup = Markup::default();
    let rows: Vec<Row> = ["a", "b", "c", "d"]
        .iter()
        .map(|id| Row::new("CREATED").with_id(*id).with_translator("same"))
        .collect();
    let mut table = MemoryTable::projects(&markup, &rows);
    table.reorder_rows(&[3, 1, 0, 2]);

    let mut engine = SortEngine::new(table, markup);
    engine.start();
    let before: Vec<String> = engine
        .adapter()
        .row_keys()
        .iter()
        .map(|key| key.to_string())
        .collect();

    for _ in 0..3 {
        engine.activate(ColumnKey::Translator);
        assert_eq!(engine.adapter().row_keys(), before);
    }
}

#[test]
fn queued_activations_run_in_arrival_order() {
    let mut engine = started();
    let sender = engine.activations();
    sender.send(ColumnKey::File).unwrap();
    sender.send(ColumnKey::File).unwrap();
    sender.send(ColumnKey::Created).unwrap();
    sender.send(ColumnKey::Created).unwrap();

    assert_eq!(engine.pump(), 4);
    assert_eq!(engine.state(), SortState::new(ColumnKey::Created, Direction::Desc));
    assert_eq!(engine.adapter().row_keys(), ["p4", "p3", "p2", "p1"]);
    assert_eq!(engine.pump(), 0);
}

#[test]
fn missing_table_is_a_silent_no_op() {
    let markup = Markup::default();
    let table = MemoryTable::projects(&markup, &projects()).without_body();
    let mut engine = SortEngine::new(table.clone(), markup.clone());
    engine.start();
    engine.activate(ColumnKey::File);

    assert!(!engine.is_started());
    assert_eq!(engine.state(), SortState::default());
    assert_eq!(engine.into_adapter(), table);

    let mut other = Markup::default();
    other.table_id = "archive".into();
    let original = MemoryTable::projects(&Markup::default(), &projects());
    let mut engine = SortEngine::new(original.clone(), other);
    engine.start();
    assert_eq!(engine.into_adapter(), original);
}

#[test]
fn unknown_and_missing_header_keys_are_not_bound() {
    let markup = Markup::default();
    let table = MemoryTable::new("projects-table")
        .with_header("File", Some(("data-sort-key", "file")))
        .with_header("Status", Some(("data-sort-key", "status")))
        .with_header("Actions", None);
    let mut engine = SortEngine::new(table, markup);
    engine.start();

    assert_eq!(engine.bound_columns().collect::<Vec<_>>(), [ColumnKey::File]);

    engine.activate(ColumnKey::Language);
    engine.activate_key("status");
    assert_eq!(engine.state(), SortState::default());

    let status = engine.adapter().header("Status").unwrap();
    assert!(status.classes.is_empty());
    assert!(engine.adapter().header("File").unwrap().has_class("sortable"));
}

#[test]
fn rows_are_reordered_not_rebuilt() {
    let mut engine = started();
    let mut before: Vec<_> = engine.adapter().rows().to_vec();
    engine.activate(ColumnKey::Translator);
    let mut after: Vec<_> = engine.adapter().rows().to_vec();

    assert_eq!(engine.adapter().row_count(), 4);
    before.sort_by(|a, b| a.key.cmp(&b.key));
    after.sort_by(|a, b| a.key.cmp(&b.key));
    assert_eq!(before, after);
}
