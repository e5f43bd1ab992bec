//! Plain-text rendering of the Shown View.

use std::fmt::Write;

use seltab_engine::{Column, SelectionTable};
use unicode_width::UnicodeWidthStr;

const ID_HEADER: &str = "Id";

fn pad(out: &mut String, text: &str, width: usize) {
	out.push_str(text);
	for _ in text.width()..width {
		out.push(' ');
	}
}

/// Render the summary line, the rows of the Shown View and a pagination hint.
///
/// Selected rows are marked with `*`.
pub fn render_view(table: &SelectionTable, columns: &[Column], filter_label: &str) -> String {
	let rows: Vec<(bool, Vec<&str>)> = table
		.shown()
		.iter()
		.map(|record| {
			let mut cells = Vec::with_capacity(columns.len() + 1);
			cells.push(record.id.as_str());
			cells.extend(
				columns
					.iter()
					.map(|column| record.get(&column.field).unwrap_or_default()),
			);
			(table.is_selected(&record.id), cells)
		})
		.collect();

	let headers: Vec<&str> = std::iter::once(ID_HEADER)
		.chain(columns.iter().map(|column| column.label.as_str()))
		.collect();
	let mut widths: Vec<usize> = headers.iter().map(|header| header.width()).collect();
	for (_, cells) in &rows {
		for (width, cell) in widths.iter_mut().zip(cells) {
			*width = (*width).max(cell.width());
		}
	}

	let mut out = String::new();
	let _ = writeln!(out, "{}", table.summary().render(filter_label));
	push_line(&mut out, ' ', &headers, &widths);
	for (selected, cells) in &rows {
		push_line(&mut out, if *selected { '*' } else { ' ' }, cells, &widths);
	}

	if table.shown().is_empty() {
		let _ = writeln!(out, "  (no records)");
	}
	if table.more_available() {
		let _ = writeln!(
			out,
			"  ... {} of {} loaded, `more` for the next page",
			table.state().pagination().cursor(),
			table.num_records_total()
		);
	}
	out
}

fn push_line(out: &mut String, marker: char, cells: &[&str], widths: &[usize]) {
	let mut line = String::new();
	line.push(marker);
	for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
		line.push(' ');
		if idx + 1 == cells.len() {
			line.push_str(cell);
		} else {
			pad(&mut line, cell, *width);
		}
	}
	out.push_str(line.trim_end());
	out.push('\n');
}
