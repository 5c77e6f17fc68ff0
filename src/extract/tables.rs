//! Table segmentation over classified lines.

use crate::model::Table;

use super::classify::{is_table_row, split_columns};

/// Segmenter state.
#[derive(Debug)]
enum State {
    Outside,
    /// Accumulated rows of the current run, header first
    Inside(Vec<Vec<String>>),
}

/// Group contiguous table-row lines into tables.
///
/// A run closes on the first line that is not a table row, or at the end
/// of input. Runs shorter than `min_rows` lines are dropped.
pub fn segment_tables<'a, I>(lines: I, min_rows: usize) -> Vec<Table>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tables = Vec::new();
    let mut state = State::Outside;

    for line in lines {
        let line = line.trim();

        if is_table_row(line) {
            let columns = split_columns(line);
            match &mut state {
                State::Inside(rows) => push_row(rows, columns),
                State::Outside => {
                    let mut rows = Vec::new();
                    push_row(&mut rows, columns);
                    state = State::Inside(rows);
                }
            }
        } else if let State::Inside(rows) = std::mem::replace(&mut state, State::Outside) {
            close_run(rows, min_rows, &mut tables);
        }
    }

    if let State::Inside(rows) = state {
        close_run(rows, min_rows, &mut tables);
    }

    log::debug!("segmented {} table(s)", tables.len());
    tables
}

fn push_row(rows: &mut Vec<Vec<String>>, columns: Vec<String>) {
    if columns.len() > 1 {
        rows.push(columns);
    }
}

fn close_run(mut rows: Vec<Vec<String>>, min_rows: usize, tables: &mut Vec<Table>) {
    if rows.is_empty() || rows.len() < min_rows {
        log::trace!("dropping table run of {} row(s)", rows.len());
        return;
    }

    let headers = rows.remove(0);
    tables.push(Table::new(tables.len() + 1, headers, rows));
}
