//! A header row of several cells driven the way a grid drives them: the
//! grid owns the sort list, selection and widths, and feeds them back into
//! the cells after every signal.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_grid::prelude::*;

/// State a grid keeps for its header row.
#[derive(Default)]
struct GridState {
    sort_columns: Vec<SortColumn>,
    selected: Option<CellPosition>,
    widths: Vec<(ColumnKey, ColumnWidth)>,
    reorders: Vec<ColumnReorder>,
}

struct HeaderRow {
    cells: Vec<HeaderCell>,
    state: Arc<Mutex<GridState>>,
}

impl HeaderRow {
    fn new(columns: Vec<Column>) -> Self {
        let state = Arc::new(Mutex::new(GridState::default()));
        let config = Arc::new(HeaderCellConfig::default());

        let cells = columns
            .into_iter()
            .map(|column| {
                let cell = HeaderCell::new(column)
                    .with_row_idx(1)
                    .with_config(config.clone())
                    .with_sort_columns(Vec::new());

                let s = state.clone();
                cell.sort_columns_changed.connect(move |next| {
                    s.lock().sort_columns = next.clone();
                });
                let s = state.clone();
                cell.cell_selected.connect(move |position| {
                    s.lock().selected = Some(*position);
                });
                let s = state.clone();
                cell.column_resized.connect(move |resize| {
                    let width = (resize.column_key.clone(), resize.width);
                    s.lock().widths.push(width);
                });
                let s = state.clone();
                cell.columns_reordered.connect(move |reorder| {
                    s.lock().reorders.push(reorder.clone());
                });
                cell
            })
            .collect();

        Self { cells, state }
    }

    /// Pushes the grid's state back into every cell.
    fn sync(&mut self) {
        let state = self.state.lock();
        for cell in &mut self.cells {
            cell.set_sort_columns(Some(state.sort_columns.clone()));
            let selected = state
                .selected
                .is_some_and(|p| p.idx == cell.column().idx && p.row_idx == cell.row_idx());
            cell.set_cell_selected(selected);
            cell.set_should_focus_grid(state.selected.is_none());
        }
    }

    fn dispatch(&mut self, idx: usize, mut event: HeaderCellEvent, host: &mut TestHost) -> bool {
        let handled = self.cells[idx].event(&mut event, host);
        self.sync();
        handled
    }

    fn sort_columns(&self) -> Vec<SortColumn> {
        self.state.lock().sort_columns.clone()
    }
}

struct TestHost {
    bounds: Rect,
    captured: Vec<PointerId>,
}

impl HeaderCellHost for TestHost {
    fn set_pointer_capture(&mut self, pointer_id: PointerId) {
        self.captured.push(pointer_id);
    }

    fn release_pointer_capture(&mut self, _pointer_id: PointerId) {}

    fn cell_bounds(&self) -> Rect {
        self.bounds
    }
}

fn host() -> TestHost {
    TestHost {
        bounds: Rect::new(0.0, 0.0, 150.0, 35.0),
        captured: Vec::new(),
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", 0)
            .with_name("Name")
            .sortable()
            .resizable(),
        Column::new("age", 1)
            .with_name("Age")
            .sortable()
            .sort_descending_first(),
        Column::new("city", 2)
            .with_name("City")
            .sortable()
            .draggable(),
    ]
}

fn handle_pointer(x: f32) -> PointerEvent {
    PointerEvent::mouse(PointerId(1), Point::new(x, 10.0), HitRegion::ResizeHandle)
}

fn click(modifiers: KeyboardModifiers) -> HeaderCellEvent {
    let at = Point::new(20.0, 10.0);
    HeaderCellEvent::Click(ClickEvent::new(at, modifiers, HitRegion::Cell))
}

#[test]
fn test_multi_column_sort_across_cells() {
    let mut row = HeaderRow::new(columns());
    let mut host = host();

    row.dispatch(0, click(KeyboardModifiers::NONE), &mut host);
    row.dispatch(1, click(KeyboardModifiers::CTRL), &mut host);
    row.dispatch(2, click(KeyboardModifiers::META), &mut host);
    assert_eq!(
        row.sort_columns(),
        vec![
            SortColumn::new("name", SortDirection::Ascending),
            SortColumn::new("age", SortDirection::Descending),
            SortColumn::new("city", SortDirection::Ascending),
        ]
    );

    // Priorities are shown, aria-sort is not.
    let view = row.cells[1].render();
    assert_eq!(view.aria.sort_priority, Some(2));
    assert_eq!(view.aria.sort, None);

    // Ctrl-click on age flips it in place, then removes it.
    row.dispatch(1, click(KeyboardModifiers::CTRL), &mut host);
    assert_eq!(
        row.sort_columns()[1],
        SortColumn::new("age", SortDirection::Ascending)
    );
    row.dispatch(1, click(KeyboardModifiers::CTRL), &mut host);
    assert_eq!(
        row.sort_columns(),
        vec![
            SortColumn::new("name", SortDirection::Ascending),
            SortColumn::new("city", SortDirection::Ascending),
        ]
    );

    // A plain click collapses to a single key.
    row.dispatch(2, click(KeyboardModifiers::NONE), &mut host);
    assert_eq!(
        row.sort_columns(),
        vec![SortColumn::new("city", SortDirection::Descending)]
    );
    assert_eq!(
        row.cells[2].render().aria.sort,
        Some(horizon_grid::widget::AriaSort::Descending)
    );
}

#[test]
fn test_selection_follows_clicks_and_focus() {
    let mut row = HeaderRow::new(columns());
    row.sync();
    let mut host = host();

    // Nothing selected: every header is a tab stop, focusing one selects the
    // first column.
    for cell in &row.cells {
        assert_eq!(cell.tab_index(), TabIndex::Sequential);
    }
    row.dispatch(
        2,
        HeaderCellEvent::FocusIn(FocusInEvent::new(FocusTarget::Cell)),
        &mut host,
    );
    assert_eq!(row.state.lock().selected, Some(CellPosition::new(0, 1)));
    assert_eq!(row.cells[0].tab_index(), TabIndex::Sequential);
    assert_eq!(row.cells[2].tab_index(), TabIndex::Programmatic);

    row.dispatch(1, click(KeyboardModifiers::NONE), &mut host);
    assert_eq!(row.state.lock().selected, Some(CellPosition::new(1, 1)));
    assert_eq!(row.cells[1].tab_index(), TabIndex::Sequential);
    assert_eq!(row.cells[0].tab_index(), TabIndex::Programmatic);
}

#[test]
fn test_resize_drag_then_auto_fit() {
    let mut row = HeaderRow::new(columns());
    let mut host = host();

    let down = HeaderCellEvent::PointerDown(handle_pointer(146.0));
    assert!(row.dispatch(0, down, &mut host));
    assert_eq!(host.captured, vec![PointerId(1)]);

    for x in [176.0, 206.0] {
        let drag = HeaderCellEvent::PointerMove(handle_pointer(x));
        row.dispatch(0, drag, &mut host);
    }
    let lost = HeaderCellEvent::LostPointerCapture(PointerId(1));
    row.dispatch(0, lost, &mut host);

    let double = ClickEvent::new(
        Point::new(146.0, 10.0),
        KeyboardModifiers::NONE,
        HitRegion::ResizeHandle,
    );
    row.dispatch(0, HeaderCellEvent::DoubleClick(double), &mut host);

    let widths: Vec<_> = row.state.lock().widths.iter().map(|(_, w)| *w).collect();
    assert_eq!(
        widths,
        vec![
            ColumnWidth::Pixels(180.0),
            ColumnWidth::Pixels(210.0),
            ColumnWidth::MaxContent,
        ]
    );
    // The resize never touched the sort list.
    assert!(row.sort_columns().is_empty());
}

#[test]
fn test_drag_column_onto_another() {
    let mut columns = columns();
    columns[0].draggable = true;
    let mut row = HeaderRow::new(columns);
    let mut host = host();
    let key = row.cells[0].drag_drop_key().to_string();

    let mut start = HeaderCellEvent::Drag(DragEvent::new(DragPhase::Start, DataTransfer::new()));
    row.cells[2].event(&mut start, &mut host);
    assert!(matches!(
        &start,
        HeaderCellEvent::Drag(e) if e.data_transfer.data(&key) == Some("city")
    ));

    let mut transfer = DataTransfer::new();
    transfer.set_data(&key, "city");
    let drop = DragEvent::new(DragPhase::Drop, transfer.clone());
    row.dispatch(0, HeaderCellEvent::Drag(drop), &mut host);

    // Dropping a column on itself does nothing.
    let drop = DragEvent::new(DragPhase::Drop, transfer);
    row.dispatch(2, HeaderCellEvent::Drag(drop), &mut host);

    assert_eq!(
        row.state.lock().reorders,
        vec![ColumnReorder {
            source_key: ColumnKey::from("city"),
            target_key: ColumnKey::from("name"),
        }]
    );
}

#[test]
fn test_config_file_drives_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.toml");
    std::fs::write(
        &path,
        r#"
        header_row_height = 40.0

        [classes]
        cell = "orders-header"
        "#,
    )
    .unwrap();

    let config = Arc::new(HeaderCellConfig::load(&path).unwrap());
    let cell = HeaderCell::new(Column::new("id", 0))
        .with_config(config)
        .with_row_idx(3);

    let view = cell.render();
    assert!(view.classes.contains("orders-header"));
    assert_eq!(view.style.padding_block_start, 80.0);
}
