//! Explicit input validation.
//!
//! Each input type gets a plain function that checks its fields in
//! declaration order and reports the first violation with the field
//! name in the message. Rule messages live in one place here rather
//! than being derived from annotations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DomainError;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").expect("url pattern must compile")
});

/// Maximum accepted image upload size: 2 MB
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Require a string length within `min..=max` characters.
pub fn require_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::validation(
            field,
            format!("length must be between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Require a well-formed http(s)/ftp URL.
pub fn require_url(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    if !URL_PATTERN.is_match(value) {
        return Err(DomainError::validation(field, "must be a valid URL"));
    }
    Ok(())
}

/// Require the value to contain no spaces.
pub fn require_no_space(field: &str, value: &str) -> Result<(), DomainError> {
    if value.contains(' ') {
        return Err(DomainError::validation(field, "must not contain spaces"));
    }
    Ok(())
}

/// Require an integer no smaller than `min`.
pub fn require_min(field: &str, value: i64, min: i64) -> Result<(), DomainError> {
    if value < min {
        return Err(DomainError::validation(
            field,
            format!("must be at least {min}"),
        ));
    }
    Ok(())
}

/// Registration input rules: name 5..=50, username 5..=15 without
/// spaces, password 5..=15.
pub fn validate_register(name: &str, username: &str, password: &str) -> Result<(), DomainError> {
    require_length("name", name, 5, 50)?;
    require_length("username", username, 5, 15)?;
    require_no_space("username", username)?;
    require_length("password", password, 5, 15)?;
    Ok(())
}

/// Login input rules: username 5..=15, password 5..=15.
pub fn validate_login(username: &str, password: &str) -> Result<(), DomainError> {
    require_length("username", username, 5, 15)?;
    require_length("password", password, 5, 15)?;
    Ok(())
}

/// Product input rules.
pub fn validate_product(
    name: &str,
    price: i64,
    image_url: &str,
    stock: i64,
) -> Result<(), DomainError> {
    require_length("name", name, 5, 60)?;
    require_min("price", price, 0)?;
    require_url("imageUrl", image_url)?;
    require_min("stock", stock, 0)?;
    Ok(())
}

/// Bank account input rules.
pub fn validate_bank_account(
    bank_name: &str,
    bank_account_name: &str,
    bank_account_number: &str,
) -> Result<(), DomainError> {
    require_length("bankName", bank_name, 5, 15)?;
    require_length("bankAccountName", bank_account_name, 5, 15)?;
    require_length("bankAccountNumber", bank_account_number, 5, 60)?;
    Ok(())
}

/// Purchase input rules: positive quantity and a well-formed proof URL.
pub fn validate_purchase(quantity: i64, payment_proof_image_url: &str) -> Result<(), DomainError> {
    require_min("quantity", quantity, 1)?;
    require_url("paymentProofImageUrl", payment_proof_image_url)?;
    Ok(())
}

/// Image upload rules: jpg/jpeg only, at most [`MAX_IMAGE_BYTES`].
pub fn validate_image(filename: &str, size: usize) -> Result<(), DomainError> {
    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return Err(DomainError::validation(
            "file",
            "format must be JPG or JPEG",
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(DomainError::validation("file", "size cannot exceed 2MB"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(require_length("username", "abcde", 5, 15).is_ok());
        assert!(require_length("username", "abcd", 5, 15).is_err());
        assert!(require_length("username", &"a".repeat(15), 5, 15).is_ok());
        assert!(require_length("username", &"a".repeat(16), 5, 15).is_err());
    }

    #[test]
    fn test_empty_field_reports_required() {
        let err = require_length("name", "", 5, 50).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_url_validation() {
        assert!(require_url("imageUrl", "https://cdn.example.com/a.jpg").is_ok());
        assert!(require_url("imageUrl", "http://x.co/a").is_ok());
        assert!(require_url("imageUrl", "not a url").is_err());
        assert!(require_url("imageUrl", "javascript:alert(1)").is_err());
    }

    #[test]
    fn test_username_rejects_spaces() {
        let err = validate_register("Valid Name", "user name", "secret1").unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "username"));
    }

    #[test]
    fn test_purchase_rules() {
        assert!(validate_purchase(1, "https://cdn.example.com/proof.jpg").is_ok());
        assert!(validate_purchase(0, "https://cdn.example.com/proof.jpg").is_err());
        assert!(validate_purchase(2, "proof").is_err());
    }

    #[test]
    fn test_product_rules_allow_free_items() {
        assert!(validate_product("Vintage lamp", 0, "https://x.co/a.jpg", 0).is_ok());
        assert!(validate_product("Vintage lamp", -1, "https://x.co/a.jpg", 0).is_err());
    }

    #[test]
    fn test_image_rules() {
        assert!(validate_image("photo.JPG", 1024).is_ok());
        assert!(validate_image("photo.jpeg", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image("photo.png", 1024).is_err());
        assert!(validate_image("photo.jpg", MAX_IMAGE_BYTES + 1).is_err());
    }
}
