use chrono::{Months, NaiveDate};
use serde::Serialize;

use super::dates::HireDateParts;
use super::domain::EligibleCollaborator;

/// Projected OAB annuity payment for one eligible collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuesProjection {
    pub name: String,
    pub hire_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Negative once the due date has passed.
    pub days_until_due: i64,
}

/// Annuity payments fall due six months after admission, minus one day.
/// Returns `None` when the parts do not form a real calendar date.
pub fn project_due_date(parts: HireDateParts) -> Option<NaiveDate> {
    let month = u32::try_from(parts.month).ok()?;
    let day = u32::try_from(parts.day).ok()?;
    let hire = NaiveDate::from_ymd_opt(parts.year, month, day)?;
    hire.checked_add_months(Months::new(6))?.pred_opt()
}

/// Project annuities for every eligible collaborator with a usable hire date,
/// ordered nearest due date first. Records whose date did not parse or does
/// not exist on the calendar are skipped.
pub fn project_annuities(eligible: &[EligibleCollaborator], today: NaiveDate) -> Vec<DuesProjection> {
    let mut projections: Vec<DuesProjection> = eligible
        .iter()
        .filter_map(|entry| {
            let parts = entry.hire_date_parts?;
            let due_date = project_due_date(parts)?;
            let month = u32::try_from(parts.month).ok()?;
            let day = u32::try_from(parts.day).ok()?;
            let hire_date = NaiveDate::from_ymd_opt(parts.year, month, day)?;
            Some(DuesProjection {
                name: entry.record.name.clone(),
                hire_date,
                due_date,
                days_until_due: (due_date - today).num_days(),
            })
        })
        .collect();

    projections.sort_by_key(|projection| projection.days_until_due.abs());
    projections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_date_is_six_months_minus_one_day() {
        let parts = HireDateParts {
            year: 2020,
            month: 1,
            day: 10,
        };
        assert_eq!(
            project_due_date(parts),
            NaiveDate::from_ymd_opt(2020, 7, 9)
        );
    }

    #[test]
    fn month_end_admissions_clamp_instead_of_overflowing() {
        let parts = HireDateParts {
            year: 2023,
            month: 8,
            day: 31,
        };
        // Aug 31 + 6 months clamps to Feb 29 (2024 is a leap year), minus one day.
        assert_eq!(
            project_due_date(parts),
            NaiveDate::from_ymd_opt(2024, 2, 28)
        );
    }

    #[test]
    fn impossible_dates_yield_no_projection() {
        let parts = HireDateParts {
            year: 2024,
            month: 13,
            day: 40,
        };
        assert_eq!(project_due_date(parts), None);
    }
}
