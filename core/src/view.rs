//! Pure renderer for the employee list.
//!
//! # Design
//! The whole view is a function of the whole collection: hosts replace
//! their displayed table with the returned string on every successful list
//! fetch. There are no incremental row patches, so the display can never
//! drift from the last server state it was built from.

use crate::types::Employee;

/// Render the full employee table, one row per record in input order.
///
/// Each row shows id, first name, last name, and the delete command that
/// targets it. Returns a placeholder line for an empty collection.
pub fn render_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "(no employees)\n".to_string();
    }

    let first_w = column_width("FIRST NAME", employees.iter().map(|e| e.first_name.len()));
    let last_w = column_width("LAST NAME", employees.iter().map(|e| e.last_name.len()));

    let mut out = String::new();
    out.push_str(&format!("{:<6}  {:<first_w$}  {:<last_w$}\n", "ID", "FIRST NAME", "LAST NAME"));
    for e in employees {
        out.push_str(&format!(
            "{:<6}  {:<first_w$}  {:<last_w$}  [delete {}]\n",
            e.employee_id, e.first_name, e.last_name, e.employee_id,
        ));
    }
    out
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.fold(header.len(), usize::max)
}
