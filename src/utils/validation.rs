use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::employee::Employee;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

// Optional leading +, then 7 to 15 digits.
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid mobile regex"));

const ALLOWED_GENDERS: [&str; 4] = ["Male", "Female", "Non-binary", "Other"];

/// Applies the field-level business validations, stopping at the first
/// failure. The check order determines which message a multi-fault payload
/// gets back.
pub fn validate_employee(emp: &Employee) -> Result<(), &'static str> {
    if emp.name.is_empty() {
        return Err("name is required");
    }
    if emp.department.is_empty() {
        return Err("department is required");
    }
    if emp.age <= 0 {
        return Err("age must be a positive integer");
    }
    if emp.email.is_empty() || !EMAIL_RE.is_match(&emp.email) {
        return Err("invalid email address");
    }
    if emp.mobile_number.is_empty() || !MOBILE_RE.is_match(&emp.mobile_number) {
        return Err("invalid mobile number");
    }
    if !ALLOWED_GENDERS.contains(&emp.gender.as_str()) {
        return Err("gender must be one of the allowed values");
    }
    Ok(())
}
