use crate::utils::error::{Fault, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Fault::config(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

/// 兩個互斥的選項必須剛好給一個
pub fn validate_exactly_one<A, B>(
    first_name: &str,
    first: &Option<A>,
    second_name: &str,
    second: &Option<B>,
) -> Result<()> {
    match (first.is_some(), second.is_some()) {
        (true, false) | (false, true) => Ok(()),
        (true, true) => Err(Fault::config(format!(
            "{} and {} cannot be used together",
            first_name, second_name
        ))),
        (false, false) => Err(Fault::config(format!(
            "one of {} or {} is required",
            first_name, second_name
        ))),
    }
}

pub fn validate_query_string(field_name: &str, query: &str) -> Result<()> {
    validate_non_empty_string(field_name, query)?;

    if query.contains(char::is_whitespace) {
        return Err(Fault::config(format!(
            "{} must be URL-encoded (found whitespace in {:?})",
            field_name, query
        )));
    }
    Ok(())
}
