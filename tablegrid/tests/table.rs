use tablegrid::{
    Axis, Field, GridError, Point, PointerState, Rect, Table, TableConfig, DEFAULT_COLUMN_WIDTH,
    DEFAULT_ROW_HEIGHT,
};

/// The drill settings table: three columns under a single header row.
fn settings_table() -> Table {
    Table::new(
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        &[225.0, 200.0, 200.0],
        &[32.0],
        None,
        None,
    )
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_settings_table_rect() {
    let table = settings_table();

    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.table_rect(), Rect::new(10.0, 0.0, 845.0, 32.0));
    assert!(!table.is_dirty());
}

#[test]
fn test_table_width_is_widths_plus_spacing() {
    let widths = [40.0, 75.5, 12.0, 60.0];
    let table = Table::new(Point::ZERO, Point::new(3.0, 0.0), &widths, &[10.0], None, None);

    let expected = widths.iter().sum::<f32>() + 3.0 * (widths.len() - 1) as f32;
    assert_eq!(table.table_rect().width, expected);
}

#[test]
fn test_column_count_repeats_last_width() {
    let table = Table::new(
        Point::ZERO,
        Point::ZERO,
        &[50.0, 80.0],
        &[20.0],
        Some(4),
        None,
    );

    assert_eq!(table.column_count(), 4);
    assert_eq!(table.column_width(2), Some(80.0));
    assert_eq!(table.column_width(3), Some(80.0));
    assert_eq!(table.table_rect().width, 290.0);
}

#[test]
fn test_row_count_repeats_last_height() {
    let table = Table::new(Point::ZERO, Point::ZERO, &[50.0], &[20.0, 24.0], None, Some(5));

    assert_eq!(table.row_count(), 5);
    assert_eq!(table.row_height(4), Some(24.0));
}

#[test]
fn test_row_count_without_heights_uses_default() {
    let table = Table::new(Point::ZERO, Point::ZERO, &[50.0], &[], None, Some(3));

    assert_eq!(table.row_count(), 3);
    for row in table.rows() {
        assert_eq!(row.height(), DEFAULT_ROW_HEIGHT);
    }
}

#[test]
fn test_counts_below_list_lengths_do_not_truncate() {
    let table = Table::new(
        Point::ZERO,
        Point::ZERO,
        &[10.0, 10.0, 10.0],
        &[5.0, 5.0],
        Some(1),
        Some(0),
    );

    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_invalid_initial_sizes_fall_back() {
    let table = Table::new(
        Point::ZERO,
        Point::ZERO,
        &[0.0, 40.0, -3.0],
        &[-1.0],
        None,
        None,
    );

    assert_eq!(table.column_width(0), Some(DEFAULT_COLUMN_WIDTH));
    assert_eq!(table.column_width(1), Some(40.0));
    assert_eq!(table.column_width(2), Some(40.0), "falls back to previous column");
    assert_eq!(table.row_height(0), Some(DEFAULT_ROW_HEIGHT));
}

#[test]
fn test_config_builds_same_table() {
    let mut from_config = TableConfig::new(&[225.0, 200.0, 200.0])
        .origin(10.0, 0.0)
        .spacing(10.0, 10.0)
        .row_heights(&[32.0])
        .build();
    let mut direct = settings_table();

    assert_eq!(from_config.table_rect(), direct.table_rect());
    assert_eq!(from_config.field_rect(2, 3), direct.field_rect(2, 3));
    assert!(from_config.update_enabled());
}

#[test]
fn test_config_updates_suspended() {
    let table = TableConfig::new(&[10.0])
        .row_heights(&[10.0])
        .row_count(3)
        .updates_suspended()
        .build();

    assert!(!table.update_enabled());
    assert!(!table.is_dirty(), "construction still computes geometry once");
    assert_eq!(table.table_rect().height, 30.0);
}

// ============================================================================
// Reads
// ============================================================================

#[test]
fn test_field_rect_scenario() {
    let mut table = settings_table();

    assert_eq!(table.field_rect(0, 0), Rect::new(10.0, 0.0, 225.0, 32.0));
    assert_eq!(table.field_rect(1, 0), Rect::new(245.0, 0.0, 200.0, 32.0));
    assert_eq!(table.header_rect(2), Rect::new(455.0, 0.0, 200.0, 32.0));
}

#[test]
fn test_row_rect_grows_rows() {
    let mut table = settings_table();
    let before = table.field_rect(1, 0);

    let row = table.row_rect(2);

    assert_eq!(table.row_count(), 3);
    assert_eq!(row, Rect::new(10.0, 84.0, 845.0, 32.0));
    assert_eq!(table.row_rect(1), Rect::new(10.0, 42.0, 845.0, 32.0));
    assert_eq!(table.field_rect(1, 0), before, "existing field undisturbed");
    assert_eq!(table.table_rect().height, 116.0);
}

#[test]
fn test_growth_repeats_last_row_height() {
    let mut table = Table::new(Point::ZERO, Point::ZERO, &[10.0], &[32.0, 20.0], None, None);

    table.row_rect(4);

    assert_eq!(table.row_count(), 5);
    assert_eq!(table.row_height(2), Some(20.0));
    assert_eq!(table.row_height(4), Some(20.0));
}

#[test]
fn test_growth_from_empty_uses_default_height() {
    let mut table = Table::new(Point::ZERO, Point::ZERO, &[10.0], &[], None, None);
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.table_rect().height, 0.0);

    let rect = table.field_rect(0, 1);

    assert_eq!(table.row_count(), 2);
    assert_eq!(rect, Rect::new(0.0, DEFAULT_ROW_HEIGHT, 10.0, DEFAULT_ROW_HEIGHT));
}

#[test]
fn test_field_rect_matches_column_and_row() {
    let mut table = settings_table();

    for row in 0..6 {
        let row_rect = table.row_rect(row);
        for column in 0..table.column_count() {
            let column_rect = table.column_rect(column).unwrap();
            let field = table.field_rect(column, row);
            assert_eq!(
                field,
                Rect::new(column_rect.x, row_rect.y, column_rect.width, row_rect.height),
                "field ({column}, {row})"
            );
        }
    }
}

#[test]
fn test_field_rect_out_of_bounds_column() {
    let mut table = settings_table();

    assert_eq!(table.field_rect(3, 5), Rect::INVALID);
    assert_eq!(table.row_count(), 1, "bad column does not create rows");
    assert_eq!(
        table.try_field_rect(7, 0),
        Err(GridError::ColumnOutOfBounds { index: 7, count: 3 })
    );
    assert_eq!(table.header_rect(3), Rect::INVALID);
}

#[test]
fn test_row_reads_past_addressable_rows() {
    let mut table = settings_table();
    let pointer = PointerState::at(Point::new(300.0, 10.0));

    assert_eq!(table.row_rect(usize::MAX), Rect::INVALID);
    assert_eq!(table.row_rect(usize::MAX - 1), Rect::INVALID, "unallocatable");
    assert_eq!(table.field_rect(1, usize::MAX), Rect::INVALID);
    assert_eq!(table.field(1, usize::MAX), None);
    assert!(!table.is_mouse_over_row(usize::MAX, &pointer));
    assert_eq!(
        table.try_field_rect(1, usize::MAX),
        Err(GridError::RowOutOfBounds {
            index: usize::MAX,
            count: 1,
        })
    );
    assert_eq!(table.row_count(), 1, "no rows created");
    assert_eq!(table.field_rect(1, 0), Rect::new(245.0, 0.0, 200.0, 32.0));
}

#[test]
fn test_field_resolves_against_table() {
    let mut table = settings_table();

    let field = table.field(2, 1).unwrap();
    assert_eq!(field, Field::new(2, 1));
    assert_eq!(table.row_count(), 2);
    assert_eq!(field.rect(&table), Rect::new(455.0, 42.0, 200.0, 32.0));
    assert_eq!(table.field(3, 0), None);
}

#[test]
fn test_bottom() {
    let mut table = settings_table();
    assert_eq!(table.bottom(), 32.0);

    table.row_rect(1);
    assert_eq!(table.bottom(), 74.0);
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_set_column_width_recomputes() {
    let mut table = settings_table();

    table.set_column_width(0, 100.0);

    assert_eq!(table.column_width(0), Some(100.0));
    assert_eq!(table.table_rect().width, 520.0);
    assert_eq!(table.field_rect(1, 0).x, 120.0);
    assert_eq!(table.column_rect(2), Some(Rect::new(330.0, 0.0, 200.0, 32.0)));
}

#[test]
fn test_set_column_width_rejects_non_positive() {
    let mut table = settings_table();
    let before = table.table_rect();

    table.set_column_width(1, 0.0);
    table.set_column_width(1, -25.0);
    table.set_column_width(1, f32::NAN);

    assert_eq!(table.column_width(1), Some(200.0));
    assert_eq!(table.table_rect(), before);
    assert_eq!(
        table.try_set_column_width(1, -1.0),
        Err(GridError::InvalidSize {
            axis: Axis::Column,
            index: 1,
            size: -1.0,
        })
    );
}

#[test]
fn test_set_column_width_out_of_bounds() {
    let mut table = settings_table();

    table.set_column_width(9, 50.0);

    assert_eq!(table.column_count(), 3);
    assert_eq!(
        table.try_set_column_width(9, 50.0),
        Err(GridError::ColumnOutOfBounds { index: 9, count: 3 })
    );
}

#[test]
fn test_set_row_height() {
    let mut table = settings_table();
    table.row_rect(2);

    table.set_row_height(1, 50.0);

    assert_eq!(table.row_rect(1), Rect::new(10.0, 42.0, 845.0, 50.0));
    assert_eq!(table.row_rect(2).y, 102.0, "rows below shift down");
    assert_eq!(table.field_rect(2, 1).height, 50.0);
}

#[test]
fn test_set_row_height_rejects_non_positive() {
    let mut table = settings_table();

    table.set_row_height(0, 0.0);

    assert_eq!(table.row_height(0), Some(32.0));
    assert_eq!(
        table.try_set_row_height(0, -4.0),
        Err(GridError::InvalidSize {
            axis: Axis::Row,
            index: 0,
            size: -4.0,
        })
    );
}

#[test]
fn test_set_row_height_does_not_grow() {
    let mut table = settings_table();

    assert_eq!(
        table.try_set_row_height(3, 10.0),
        Err(GridError::RowOutOfBounds { index: 3, count: 1 })
    );
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_add_row() {
    let mut table = settings_table();

    table.add_row(20.0, 2);

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.row_rect(2), Rect::new(10.0, 72.0, 845.0, 20.0));
}

#[test]
fn test_add_row_zero_count_is_noop() {
    let mut table = settings_table();

    table.add_row(20.0, 0);

    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_add_row_rejects_invalid_height() {
    let mut table = settings_table();

    table.add_row(-20.0, 3);

    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_remove_last_row_keeps_other_rows() {
    let mut table = settings_table();
    table.row_rect(3);
    let kept = table.row_rect(2);

    let removed = table.remove_last_row();

    assert_eq!(removed.map(|r| r.height()), Some(32.0));
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.row_rect(2), kept);
    assert_eq!(table.table_rect().height, 116.0);
}

#[test]
fn test_remove_last_row_on_empty_table() {
    let mut table = Table::new(Point::ZERO, Point::ZERO, &[10.0], &[], None, None);

    assert_eq!(table.remove_last_row(), None);
}

#[test]
fn test_set_spacing_and_origin() {
    let mut table = settings_table();

    table.set_spacing(Point::new(0.0, 0.0));
    assert_eq!(table.spacing(), Point::ZERO);
    assert_eq!(table.table_rect().width, 625.0);

    table.set_origin(Point::new(0.0, 50.0));
    assert_eq!(table.origin(), Point::new(0.0, 50.0));
    assert_eq!(table.field_rect(1, 0), Rect::new(225.0, 50.0, 200.0, 32.0));
}

// ============================================================================
// Update suspension
// ============================================================================

#[test]
fn test_suspended_updates_defer_geometry() {
    let mut table = settings_table();
    table.set_update_enabled(false);

    table.set_column_width(0, 100.0);

    assert_eq!(table.column_width(0), Some(100.0), "size recorded");
    assert_eq!(table.table_rect().width, 845.0, "geometry not yet recomputed");
    assert!(table.is_dirty());

    table.force_update();

    assert_eq!(table.table_rect().width, 520.0);
    assert!(!table.is_dirty());
}

#[test]
fn test_reenabling_waits_for_next_mutation() {
    let mut table = settings_table();
    table.set_update_enabled(false);
    table.set_column_width(0, 100.0);

    table.set_update_enabled(true);
    assert!(table.is_dirty(), "re-enabling alone does not recompute");

    table.set_column_width(1, 100.0);
    assert!(!table.is_dirty());
    assert_eq!(table.table_rect().width, 420.0);
}

#[test]
fn test_update_respects_suspension() {
    let mut table = settings_table();
    table.set_update_enabled(false);
    table.set_row_height(0, 40.0);

    table.update();
    assert_eq!(table.table_rect().height, 32.0);

    table.set_update_enabled(true);
    table.update();
    assert_eq!(table.table_rect().height, 40.0);
}

#[test]
fn test_rows_created_while_suspended_have_no_extent() {
    let mut table = settings_table();
    table.set_update_enabled(false);

    let rect = table.row_rect(2);

    assert_eq!(table.row_count(), 3);
    assert_eq!(rect, Rect::default());
    assert_eq!(table.field_rect(1, 2), Rect::new(245.0, 0.0, 200.0, 0.0));

    table.force_update();
    assert_eq!(table.row_rect(2).y, 84.0);
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_is_mouse_over_row() {
    let mut table = settings_table();
    let pointer = PointerState::at(Point::new(300.0, 50.0));

    assert!(table.is_mouse_over_row(1, &pointer));
    assert!(!table.is_mouse_over_row(0, &pointer));
    assert!(!table.is_mouse_over_row(2, &pointer));
    assert_eq!(table.row_count(), 3, "hover test grows rows like any read");
}

#[test]
fn test_is_mouse_over_row_without_position() {
    let mut table = settings_table();

    assert!(!table.is_mouse_over_row(0, &PointerState::new()));
}

#[test]
fn test_hovered_row_and_field() {
    let mut table = settings_table();
    table.row_rect(3);

    let pointer = PointerState::at(Point::new(300.0, 90.0));
    assert_eq!(table.hovered_row(&pointer), Some(2));
    assert_eq!(table.hovered_field(&pointer), Some(Field::new(1, 2)));

    let in_gap = PointerState::at(Point::new(300.0, 36.0));
    assert_eq!(table.hovered_row(&in_gap), None, "spacing between rows");

    let outside = PointerState::at(Point::new(300.0, 500.0));
    assert_eq!(table.hovered_row(&outside), None);
    assert_eq!(table.row_count(), 4, "hovered_row never creates rows");
}

#[test]
fn test_hovered_row_after_removal_while_suspended() {
    let mut table = settings_table();
    table.row_rect(3);
    table.set_update_enabled(false);

    table.remove_last_row();
    table.remove_last_row();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.hovered_row(&PointerState::at(Point::new(300.0, 130.0))), None);
    assert_eq!(table.hovered_row(&PointerState::at(Point::new(300.0, 90.0))), None);
    assert_eq!(table.hovered_field(&PointerState::at(Point::new(300.0, 90.0))), None);
    assert_eq!(table.hovered_row(&PointerState::at(Point::new(300.0, 50.0))), Some(1));
}
