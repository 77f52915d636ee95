//! Configuration types for the shift calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::export::{ColumnKind, TemplateDescriptor};
use crate::models::hhmm;

/// A recurring daily premium window, possibly crossing midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PremiumWindow {
    /// The wall-clock start of the window.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// The wall-clock end of the window; at or before the start means the
    /// window crosses midnight.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// One named export template as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// The columns the template emits, in order.
    pub columns: Vec<ColumnKind>,
    /// Whether the template anonymizes employees.
    #[serde(default)]
    pub anonymize: bool,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// The night premium window.
    pub night_window: PremiumWindow,
    /// Named export templates.
    #[serde(default)]
    pub templates: HashMap<String, TemplateConfig>,
}

impl EngineConfig {
    /// Resolves a named export template into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TemplateNotFound`] for unknown names.
    pub fn template(&self, name: &str) -> EngineResult<TemplateDescriptor> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| EngineError::TemplateNotFound {
                name: name.to_string(),
            })?;
        Ok(TemplateDescriptor {
            name: name.to_string(),
            columns: template.columns.clone(),
            anonymize: template.anonymize,
        })
    }
}

impl Default for EngineConfig {
    /// The shipped defaults: the 23:00–06:00 night window, a "standard"
    /// template with every column, and an anonymized "invoice" template
    /// with the premium hour columns.
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            "standard".to_string(),
            TemplateConfig {
                columns: ColumnKind::ALL.to_vec(),
                anonymize: false,
            },
        );
        templates.insert(
            "invoice".to_string(),
            TemplateConfig {
                columns: vec![
                    ColumnKind::TotalHours,
                    ColumnKind::NightHours,
                    ColumnKind::SundayHours,
                    ColumnKind::HolidayHours,
                ],
                anonymize: true,
            },
        );
        Self {
            night_window: PremiumWindow {
                start: NaiveTime::from_hms_opt(23, 0, 0).expect("valid window start"),
                end: NaiveTime::from_hms_opt(6, 0, 0).expect("valid window end"),
            },
            templates,
        }
    }
}
