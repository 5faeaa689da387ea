/// Centralized check of whether a row starting at `cursor_y` has to move to
/// the next page.
///
/// * `cursor_y`: The row's top cursor, measured from the top page edge.
/// * `overflow_line`: The last cursor position a row may start at.
///
/// The comparison is strict: a row starting exactly on the line still fits.
pub fn row_overflows(cursor_y: f32, overflow_line: f32) -> bool {
    cursor_y > overflow_line
}
