//! Export boundary for the document renderer.
//!
//! The renderer itself is an external collaborator; this module assembles
//! everything it could ask for: the selected template (named column set
//! plus anonymization flag), display labels, the flat classification rows,
//! per-employee statistics, and combined totals. Every numeric field is
//! always supplied regardless of which subset a template emits.

mod anonymize;

pub use anonymize::scrub_note;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClassificationRow, Employee, EmployeeStatistics, PeriodStatistics};

/// A named numeric column the renderer may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Confirmed worked hours.
    TotalHours,
    /// Night-window hours.
    NightHours,
    /// Sunday hours.
    SundayHours,
    /// Public-holiday hours.
    HolidayHours,
    /// Planned hours for plan-vs-actual comparison.
    PlannedHours,
    /// Number of sick days.
    SickDays,
    /// Planned hours of sick shifts.
    SickHours,
    /// Number of vacation days.
    VacationDays,
    /// Planned hours of vacation shifts.
    VacationHours,
    /// Number of dates covered for other employees.
    BackupDays,
}

impl ColumnKind {
    /// Every column the engine can supply.
    pub const ALL: [ColumnKind; 10] = [
        ColumnKind::TotalHours,
        ColumnKind::NightHours,
        ColumnKind::SundayHours,
        ColumnKind::HolidayHours,
        ColumnKind::PlannedHours,
        ColumnKind::SickDays,
        ColumnKind::SickHours,
        ColumnKind::VacationDays,
        ColumnKind::VacationHours,
        ColumnKind::BackupDays,
    ];
}

/// Selects which named columns a rendering emits and whether employee
/// anonymization is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    /// The template name (e.g. "standard", "invoice").
    pub name: String,
    /// The columns to emit, in order.
    pub columns: Vec<ColumnKind>,
    /// Whether names are anonymized and notes scrubbed.
    pub anonymize: bool,
}

/// The renderer-facing output of one export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportBundle {
    /// The template this bundle was built for.
    pub template: TemplateDescriptor,
    /// Display label per employee id: the real name, or the anonymized
    /// label in invoice mode.
    pub labels: BTreeMap<String, String>,
    /// The combined, date-sorted flat classification list.
    pub rows: Vec<ClassificationRow>,
    /// Statistics per employee id.
    pub per_employee: BTreeMap<String, EmployeeStatistics>,
    /// Combined totals across all employees.
    pub totals: EmployeeStatistics,
}

/// Assembles the export bundle for a computed period.
///
/// In anonymized mode every row's display name becomes the employee's
/// stable label and every note is scrubbed of employee names; the
/// statistics themselves are unchanged in either mode.
///
/// # Example
///
/// ```
/// use dienstplan_engine::export::{ColumnKind, TemplateDescriptor, build_export};
/// use dienstplan_engine::models::{EmployeeStatistics, PeriodStatistics};
/// use std::collections::BTreeMap;
///
/// let stats = PeriodStatistics {
///     per_employee: BTreeMap::new(),
///     entries: vec![],
///     totals: EmployeeStatistics::default(),
/// };
/// let template = TemplateDescriptor {
///     name: "standard".to_string(),
///     columns: ColumnKind::ALL.to_vec(),
///     anonymize: false,
/// };
/// let bundle = build_export(&stats, &[], &template);
/// assert!(bundle.rows.is_empty());
/// ```
pub fn build_export(
    stats: &PeriodStatistics,
    employees: &[Employee],
    template: &TemplateDescriptor,
) -> ExportBundle {
    let label_for = |employee: &Employee| -> String {
        if template.anonymize {
            employee.anonymized_label()
        } else {
            employee.name.clone()
        }
    };

    let labels: BTreeMap<String, String> = employees
        .iter()
        .map(|e| (e.id.clone(), label_for(e)))
        .collect();

    let rows: Vec<ClassificationRow> = stats
        .entries
        .iter()
        .map(|entry| {
            let mut row = entry.clone();
            if template.anonymize {
                row.employee_name = labels
                    .get(&entry.employee_id)
                    .cloned()
                    .unwrap_or_else(|| "Assistent ?".to_string());
                row.note = row.note.map(|note| scrub_note(&note, employees));
            }
            row
        })
        .collect();

    ExportBundle {
        template: template.clone(),
        labels,
        rows,
        per_employee: stats.per_employee.clone(),
        totals: stats.totals.clone(),
    }
}
