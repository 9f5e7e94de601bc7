use crate::error::ApiError;
use regex::Regex;
use std::sync::OnceLock;

/// Phone fields use one fixed mask: +7 (999) 999-99-99
fn phone_mask() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+7 \(\d{3}\) \d{3}-\d{2}-\d{2}$").expect("valid regex"))
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_mask().is_match(phone)
}

/// Optional phone field: absent/empty passes, present must match the mask.
pub fn check_optional_phone(phone: Option<&str>) -> Result<(), ApiError> {
    match phone {
        None => Ok(()),
        Some(p) if p.is_empty() => Ok(()),
        Some(p) if is_valid_phone(p) => Ok(()),
        Some(_) => Err(ApiError::Validation(
            "Phone must match +7 (999) 999-99-99".into(),
        )),
    }
}

/// Required phone field (booking contact).
pub fn check_required_phone(phone: &str) -> Result<(), ApiError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ApiError::Validation(
            "Phone must match +7 (999) 999-99-99".into(),
        ))
    }
}

pub fn check_username(username: &str) -> Result<(), ApiError> {
    let len = username.chars().count();
    if !(3..=32).contains(&len) {
        return Err(ApiError::Validation(
            "Username must be 3-32 characters".into(),
        ));
    }
    Ok(())
}

pub fn check_new_password(password: &str, confirm: &str) -> Result<(), ApiError> {
    if password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    if password != confirm {
        return Err(ApiError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_mask_accepts_exact_format() {
        assert!(is_valid_phone("+7 (999) 123-45-67"));
        assert!(is_valid_phone("+7 (000) 000-00-00"));
    }

    #[test]
    fn phone_mask_rejects_everything_else() {
        for bad in [
            "",
            "89991234567",
            "+7 999 123-45-67",
            "+7 (999) 123 45 67",
            "+7 (999) 123-45-678",
            " +7 (999) 123-45-67",
            "+7 (999) 123-45-67 ",
            "+8 (999) 123-45-67",
            "+7 (99) 123-45-67",
        ] {
            assert!(!is_valid_phone(bad), "should reject {:?}", bad);
        }
    }

    #[test]
    fn optional_phone_allows_absent_and_empty() {
        assert!(check_optional_phone(None).is_ok());
        assert!(check_optional_phone(Some("")).is_ok());
        assert!(check_optional_phone(Some("nope")).is_err());
    }

    #[test]
    fn password_rules() {
        assert!(check_new_password("longenough", "longenough").is_ok());
        assert!(check_new_password("short", "short").is_err());
        assert!(check_new_password("longenough", "different").is_err());
    }
}
