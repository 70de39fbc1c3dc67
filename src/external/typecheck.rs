//! Type-check output filtering
//!
//! The type checker runs over the whole project, so its output may report
//! pre-existing errors in unrelated files. Only the lines that name the edited
//! file count.

/// Lines of `output` reporting diagnostics for `relative_path`.
///
/// Diagnostics look like `resources/js/app.ts(12,5): error TS2322: ...`; the
/// path must be followed by `(` or `:` so `app.ts` does not match `app.tsx`.
pub fn relevant_lines<'a>(output: &'a str, relative_path: &str) -> Vec<&'a str> {
    output
        .lines()
        .filter(|line| {
            let line = line.trim_start().trim_start_matches("./");
            line.strip_prefix(relative_path)
                .is_some_and(|rest| rest.starts_with('(') || rest.starts_with(':'))
        })
        .collect()
}

/// Join at most `max_lines` lines, noting how many were dropped
pub fn truncate_lines(lines: &[&str], max_lines: usize) -> String {
    if lines.len() <= max_lines {
        return lines.join("\n");
    }

    format!(
        "{}\n... {} more lines",
        lines[..max_lines].join("\n"),
        lines.len() - max_lines
    )
}
