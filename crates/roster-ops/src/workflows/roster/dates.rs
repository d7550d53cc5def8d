use serde::Serialize;

/// Calendar components recovered from a raw hire-date string.
///
/// Parsing only proves the three components are integers; it does not
/// range-check them. Consumers that need a real calendar date (the dues
/// projection) validate separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HireDateParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HireDateError {
    #[error("expected three '{separator}'-separated components, found {found}")]
    WrongArity { separator: char, found: usize },
    #[error("component '{value}' is not an integer")]
    NotNumeric { value: String },
}

/// Decompose a raw hire date into integer components.
///
/// Any time-of-day suffix after the first `T` is discarded. A remainder
/// containing `/` is read as DD/MM/YYYY; otherwise it is split on `-` as
/// YYYY-MM-DD.
pub fn parse_hire_date(raw: &str) -> Result<HireDateParts, HireDateError> {
    let date_part = raw.split('T').next().unwrap_or_default();

    let separator = if date_part.contains('/') { '/' } else { '-' };
    let components: Vec<&str> = date_part.split(separator).collect();
    if components.len() != 3 {
        return Err(HireDateError::WrongArity {
            separator,
            found: components.len(),
        });
    }

    let mut numbers = [0i32; 3];
    for (slot, component) in numbers.iter_mut().zip(&components) {
        *slot = component
            .trim()
            .parse::<i32>()
            .map_err(|_| HireDateError::NotNumeric {
                value: (*component).to_string(),
            })?;
    }

    let [first, second, third] = numbers;
    let parts = if separator == '/' {
        HireDateParts {
            day: first,
            month: second,
            year: third,
        }
    } else {
        HireDateParts {
            year: first,
            month: second,
            day: third,
        }
    };

    Ok(parts)
}

/// Diagnostic captured when an eligible collaborator's hire date failed to
/// decompose. Collected and reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub name: String,
    pub raw: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamp_parses_to_parts() {
        let parts = parse_hire_date("2024-03-15T00:00:00").expect("parses");
        assert_eq!(
            parts,
            HireDateParts {
                year: 2024,
                month: 3,
                day: 15
            }
        );
    }

    #[test]
    fn slash_layout_reads_day_first() {
        let parts = parse_hire_date("15/03/2024").expect("parses");
        assert_eq!(
            parts,
            HireDateParts {
                year: 2024,
                month: 3,
                day: 15
            }
        );
    }

    #[test]
    fn out_of_range_components_are_not_rejected() {
        let parts = parse_hire_date("2024-13-40").expect("integer check only");
        assert_eq!(parts.month, 13);
        assert_eq!(parts.day, 40);
    }

    #[test]
    fn free_text_is_reported_as_non_numeric() {
        match parse_hire_date("not-a-date") {
            Err(HireDateError::NotNumeric { value }) => assert_eq!(value, "not"),
            other => panic!("expected non-numeric error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_component_count_is_an_arity_error() {
        match parse_hire_date("2024/03") {
            Err(HireDateError::WrongArity {
                separator: '/',
                found: 2,
            }) => {}
            other => panic!("expected arity error, got {other:?}"),
        }

        match parse_hire_date("") {
            Err(HireDateError::WrongArity { found: 1, .. }) => {}
            other => panic!("expected arity error, got {other:?}"),
        }
    }
}
