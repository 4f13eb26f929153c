//! Form validation for login, registration, and board posts.
//!
//! Each validator checks fields in the order the form shows them and stops at
//! the first problem, so the user sees one message at a time.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use regex::Regex;

use super::dates;
use crate::net::types::{Gender, SignUpPayload};

pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 20;
pub const POST_TITLE_MAX_CHARS: usize = 100;
pub const POST_CONTENT_MAX_CHARS: usize = 300;
pub const IMAGE_MAX_BYTES: u64 = 10 * 1024 * 1024;
pub const PHONE_MAX_DIGITS: usize = 11;
pub const BIRTH_DIGITS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter your email and password.")]
    MissingCredentials,
    #[error("Please check the email format.")]
    InvalidEmail,
    #[error("Password must be 8 to 20 characters.")]
    PasswordLength,
    #[error("Please confirm your password.")]
    MissingConfirmation,
    #[error("Password and confirmation do not match.")]
    PasswordMismatch,
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a nickname.")]
    MissingNickname,
    #[error("Phone number must be 10 or 11 digits without hyphens.")]
    InvalidPhone,
    #[error("Enter your birth date as 8 digits (YYYYMMDD).")]
    InvalidBirth,
    #[error("Please select a gender.")]
    MissingGender,
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please enter some content.")]
    MissingContent,
    #[error("Title must be at most 100 characters.")]
    TitleTooLong,
    #[error("Content must be at most 300 characters.")]
    ContentTooLong,
    #[error("Only image files can be uploaded.")]
    NotAnImage,
    #[error("The file is too large. Please keep it under 10MB.")]
    ImageTooLarge,
    #[error("Please enter an ingredient name.")]
    MissingIngredient,
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_email(raw: &str) -> bool {
    Regex::new(r"^\S+@\S+\.\S+$").is_ok_and(|re| re.is_match(raw))
}

/// Keep only ASCII digits, truncated to `max` of them.
pub fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// # Errors
///
/// `FormError::MissingCredentials` when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(FormError::MissingCredentials);
    }
    Ok(())
}

/// Raw registration inputs as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub name: String,
    pub nickname: String,
    pub phone: String,
    /// `YYYYMMDD`.
    pub birth8: String,
    pub gender: Option<Gender>,
}

impl SignUpForm {
    /// Validate and build the sign-up payload.
    ///
    /// # Errors
    ///
    /// The first failing check, in form order.
    pub fn validate(&self) -> Result<SignUpPayload, FormError> {
        if !is_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        let password_chars = self.password.chars().count();
        if !(PASSWORD_MIN_CHARS..=PASSWORD_MAX_CHARS).contains(&password_chars) {
            return Err(FormError::PasswordLength);
        }
        if self.confirm.is_empty() {
            return Err(FormError::MissingConfirmation);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.nickname.trim().is_empty() {
            return Err(FormError::MissingNickname);
        }
        let phone_ok = (10..=PHONE_MAX_DIGITS).contains(&self.phone.len())
            && self.phone.bytes().all(|b| b.is_ascii_digit());
        if !phone_ok {
            return Err(FormError::InvalidPhone);
        }
        let birth = dates::format_birth8(&self.birth8).ok_or(FormError::InvalidBirth)?;
        let gender = self.gender.ok_or(FormError::MissingGender)?;

        Ok(SignUpPayload {
            email: self.email.clone(),
            password: self.password.clone(),
            checked_password: self.confirm.clone(),
            name: self.name.clone(),
            nickname: self.nickname.clone(),
            phone_num: self.phone.clone(),
            birth,
            gender,
        })
    }
}

/// What the picker reports about a chosen image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub mime: String,
    pub size: u64,
}

/// # Errors
///
/// `NotAnImage` for a non-`image/*` type, `ImageTooLarge` above 10 MiB.
pub fn validate_image(meta: &ImageMeta) -> Result<(), FormError> {
    if !meta.mime.starts_with("image/") {
        return Err(FormError::NotAnImage);
    }
    if meta.size > IMAGE_MAX_BYTES {
        return Err(FormError::ImageTooLarge);
    }
    Ok(())
}

/// # Errors
///
/// The first failing check: title, content, then the optional image.
pub fn validate_post(title: &str, content: &str, image: Option<&ImageMeta>) -> Result<(), FormError> {
    let (title, content) = (title.trim(), content.trim());
    if title.is_empty() {
        return Err(FormError::MissingTitle);
    }
    if content.is_empty() {
        return Err(FormError::MissingContent);
    }
    if title.chars().count() > POST_TITLE_MAX_CHARS {
        return Err(FormError::TitleTooLong);
    }
    if content.chars().count() > POST_CONTENT_MAX_CHARS {
        return Err(FormError::ContentTooLong);
    }
    image.map_or(Ok(()), validate_image)
}
