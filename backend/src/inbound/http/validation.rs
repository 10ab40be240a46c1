//! Request validation for inbound HTTP payloads.
//!
//! [`RequestValidator`] is built once by the composition root and shared
//! through [`crate::inbound::http::state::HttpState`]. It checks field rules
//! and converts accepted payloads into domain values. Every failing field is
//! reported, one message per field, joined with `"; "`.

use regex::Regex;

use crate::domain::{AuthorDraft, BookDraft, Error, LoginCredentials, Registration};
use crate::inbound::http::auth::{LoginForm, SignupForm};
use crate::inbound::http::authors::AuthorRequest;
use crate::inbound::http::books::BookRequest;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Minimum password length for signup and login.
pub const MIN_PASSWORD_CHARS: usize = 7;
/// Minimum author name and book title length.
pub const MIN_NAME_CHARS: usize = 3;

/// Failed rules collected while checking one payload.
#[derive(Debug, Default)]
struct FieldViolations(Vec<String>);

impl FieldViolations {
    fn push(&mut self, field: &str, rule: &str) {
        self.0.push(format!("{field} {rule}"));
    }

    fn required(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, "is required");
            return false;
        }
        true
    }

    fn min_chars(&mut self, field: &str, value: &str, min: usize) -> bool {
        if value.chars().count() < min {
            self.push(field, &format!("must be at least {min} characters"));
            return false;
        }
        true
    }

    fn matches(&mut self, field: &str, value: &str, other_field: &str, other: &str) -> bool {
        if value != other {
            self.push(field, &format!("must match {other_field}"));
            return false;
        }
        true
    }

    fn finish(self) -> Result<(), Error> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::bad_request(self.0.join("; ")))
        }
    }
}

/// Validates request payloads and builds the matching domain values.
///
/// # Examples
/// ```
/// use bookshelf::inbound::http::authors::AuthorRequest;
/// use bookshelf::inbound::http::validation::RequestValidator;
///
/// let validator = RequestValidator::new().expect("email pattern compiles");
/// let err = validator
///     .author(&AuthorRequest { full_name: "Al".into() })
///     .expect_err("too short");
/// assert_eq!(err.message(), "full_name must be at least 3 characters");
/// ```
#[derive(Debug, Clone)]
pub struct RequestValidator {
    email: Regex,
}

impl RequestValidator {
    /// Compile the validation rules.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the email pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    fn email(&self, violations: &mut FieldViolations, field: &str, value: &str) -> bool {
        if !violations.required(field, value) {
            return false;
        }
        if !self.email.is_match(value.trim()) {
            violations.push(field, "must be a valid email address");
            return false;
        }
        true
    }

    /// Check a signup form.
    ///
    /// # Errors
    ///
    /// [`Error::bad_request`] listing every failing field.
    pub fn signup(&self, form: &SignupForm) -> Result<Registration, Error> {
        let mut violations = FieldViolations::default();
        violations.required("full_name", &form.full_name);
        self.email(&mut violations, "email", &form.email);
        violations.matches(
            "email_confirmation",
            form.email_confirmation.trim(),
            "email",
            form.email.trim(),
        );
        violations.min_chars("password", &form.password, MIN_PASSWORD_CHARS);
        violations.matches(
            "password_confirmation",
            &form.password_confirmation,
            "password",
            &form.password,
        );
        violations.finish()?;
        Ok(Registration::new(&form.full_name, &form.email, &form.password))
    }

    /// Check a login form.
    ///
    /// # Errors
    ///
    /// [`Error::bad_request`] listing every failing field.
    pub fn login(&self, form: &LoginForm) -> Result<LoginCredentials, Error> {
        let mut violations = FieldViolations::default();
        self.email(&mut violations, "email", &form.email);
        violations.min_chars("password", &form.password, MIN_PASSWORD_CHARS);
        violations.finish()?;
        Ok(LoginCredentials::new(&form.email, &form.password))
    }

    /// Check an author payload.
    ///
    /// # Errors
    ///
    /// [`Error::bad_request`] listing every failing field.
    pub fn author(&self, body: &AuthorRequest) -> Result<AuthorDraft, Error> {
        let mut violations = FieldViolations::default();
        violations.min_chars("full_name", body.full_name.trim(), MIN_NAME_CHARS);
        violations.finish()?;
        Ok(AuthorDraft::new(&body.full_name))
    }

    /// Check a book payload.
    ///
    /// # Errors
    ///
    /// [`Error::bad_request`] listing every failing field.
    pub fn book(&self, body: &BookRequest) -> Result<BookDraft, Error> {
        let mut violations = FieldViolations::default();
        violations.min_chars("title", body.title.trim(), MIN_NAME_CHARS);
        violations.required("publication_year", &body.publication_year);
        if body.author_id == 0 {
            violations.push("author_id", "is required");
        }
        violations.finish()?;
        Ok(BookDraft::new(
            &body.title,
            &body.publication_year,
            body.author_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn validator() -> RequestValidator {
        RequestValidator::new().expect("pattern compiles")
    }

    fn signup(email: &str, confirm: &str, password: &str, password_confirm: &str) -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_owned(),
            email: email.to_owned(),
            email_confirmation: confirm.to_owned(),
            password: password.to_owned(),
            password_confirmation: password_confirm.to_owned(),
        }
    }

    #[rstest]
    fn accepts_valid_signup(validator: RequestValidator) {
        let form = signup("ada@example.com", "ada@example.com", "engine-1843", "engine-1843");
        let registration = validator.signup(&form).expect("valid");
        assert_eq!(registration.email(), "ada@example.com");
        assert_eq!(registration.name(), "Ada Lovelace");
    }

    #[rstest]
    #[case(
        signup("not-an-email", "not-an-email", "engine-1843", "engine-1843"),
        "email must be a valid email address"
    )]
    #[case(
        signup("ada@example.com", "ada@example.org", "engine-1843", "engine-1843"),
        "email_confirmation must match email"
    )]
    #[case(
        signup("ada@example.com", "ada@example.com", "short", "short"),
        "password must be at least 7 characters"
    )]
    #[case(
        signup("ada@example.com", "ada@example.com", "engine-1843", "engine-1844"),
        "password_confirmation must match password"
    )]
    #[case(
        signup("", "", "engine-1843", "engine-1843"),
        "email is required"
    )]
    fn rejects_invalid_signup(
        validator: RequestValidator,
        #[case] form: SignupForm,
        #[case] expected: &str,
    ) {
        let err = validator.signup(&form).expect_err("invalid");
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn reports_every_failing_field(validator: RequestValidator) {
        let body = BookRequest {
            title: "It".to_owned(),
            publication_year: " ".to_owned(),
            author_id: 0,
        };
        let err = validator.book(&body).expect_err("invalid");
        assert_eq!(
            err.message(),
            "title must be at least 3 characters; publication_year is required; author_id is required"
        );
    }

    #[rstest]
    #[case("Al", false)]
    #[case("  Al  ", false)]
    #[case("Ann", true)]
    #[case("Ursula K. Le Guin", true)]
    fn author_name_needs_three_characters(
        validator: RequestValidator,
        #[case] full_name: &str,
        #[case] accepted: bool,
    ) {
        let body = AuthorRequest {
            full_name: full_name.to_owned(),
        };
        assert_eq!(validator.author(&body).is_ok(), accepted);
    }

    #[rstest]
    #[case("grace@example.com", "cobol-1959", true)]
    #[case("grace@example.com", "cobol", false)]
    #[case("grace", "cobol-1959", false)]
    fn login_rules(
        validator: RequestValidator,
        #[case] email: &str,
        #[case] password: &str,
        #[case] accepted: bool,
    ) {
        let form = LoginForm {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        assert_eq!(validator.login(&form).is_ok(), accepted);
    }
}
