use std::fmt::Write;

use crate::creators::CreatorRecord;

const EMPTY_MESSAGE: &str = "No creators yet. Add one with `creatorctl add`.";
const SUMMARY_WIDTH: usize = 72;

/// The list view: one line per record.
pub fn render_list(records: &[CreatorRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let id_width = records
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{:>width$}  {}  <{}>",
            record.id,
            record.name,
            record.url,
            width = id_width
        );
        let _ = writeln!(
            out,
            "{:>width$}  {}",
            "",
            render_summary(&record.description),
            width = id_width
        );
    }
    out
}

/// The detail view for a single record.
pub fn render_detail(record: &CreatorRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(out, "{}", "=".repeat(record.name.chars().count()));
    let _ = writeln!(out, "Id:      {}", record.id);
    let _ = writeln!(out, "Website: {}", record.url);
    if let Some(image) = &record.image_url {
        let _ = writeln!(out, "Image:   {}", image);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "About");
    let _ = writeln!(out, "{}", record.description);
    out
}

/// Description cut to one line, ending in an ellipsis when shortened.
pub fn render_summary(description: &str) -> String {
    let line = description.lines().next().unwrap_or("").trim();
    if line.chars().count() <= SUMMARY_WIDTH && !description.trim().contains('\n') {
        return line.to_string();
    }
    let cut: String = line.chars().take(SUMMARY_WIDTH - 1).collect();
    format!("{}…", cut.trim_end())
}
