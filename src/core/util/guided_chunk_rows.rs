/// Rows the next guided claim should take: an even share of what is left,
/// never below `min_rows` and never more than remains.
pub fn guided_chunk_rows(rows_left: usize, workers: usize, min_rows: usize) -> usize {
    let share = rows_left / workers.max(1);

    share.max(min_rows.max(1)).min(rows_left)
}
