//! Employee anonymization for combined/invoice exports.
//!
//! Invoice renderings replace each employee's display name with a stable
//! label ("Assistent" plus the first letter of the name) and scrub free-text
//! notes of every employee's name. Substitution runs longest-name-first so
//! a full name is replaced before its bare first name can match inside it.

use crate::models::Employee;

/// Scrubs a free-text note of every employee's full name, first name, and
/// last name.
///
/// First and last names shorter than three characters are left alone; they
/// would otherwise shred unrelated words. Each match is replaced with the
/// owning employee's anonymized label.
///
/// # Example
///
/// ```
/// use dienstplan_engine::export::scrub_note;
/// use dienstplan_engine::models::Employee;
///
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Anna Müller".to_string(),
/// }];
/// assert_eq!(
///     scrub_note("Anna Müller war hier", &employees),
///     "Assistent A war hier"
/// );
/// assert_eq!(scrub_note("Anna", &employees), "Assistent A");
/// ```
pub fn scrub_note(note: &str, employees: &[Employee]) -> String {
    let mut patterns: Vec<(&str, String)> = Vec::new();
    for employee in employees {
        let label = employee.anonymized_label();
        let full = employee.name.trim();
        if !full.is_empty() {
            patterns.push((full, label.clone()));
        }
        if let Some(first) = employee.first_name() {
            if first.chars().count() > 2 && first != full {
                patterns.push((first, label.clone()));
            }
        }
        if let Some(last) = employee.last_name() {
            if last.chars().count() > 2 {
                patterns.push((last, label.clone()));
            }
        }
    }

    // Longest pattern first so "Anna Müller" is consumed before "Anna".
    patterns.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });

    let mut scrubbed = note.to_string();
    for (pattern, label) in patterns {
        scrubbed = scrubbed.replace(pattern, &label);
    }
    scrubbed
}
