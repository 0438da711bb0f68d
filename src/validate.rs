use crate::consts::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The registration fields checked before submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub username:        String,
    pub password:        String,
    pub verify_password: String,
    /// The "I agree to the user registration agreement" checkbox
    #[serde(rename = "checkbox", default)]
    pub agreed:          bool,
}

/// Length bounds applied by [`RegistrationForm::validate`], all inclusive and
/// counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    pub username_min: usize,
    pub username_max: usize,
    pub password_min: usize,
    pub password_max: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            username_min: USERNAME_MIN_LEN,
            username_max: USERNAME_MAX_LEN,
            password_min: PASSWORD_MIN_LEN,
            password_max: PASSWORD_MAX_LEN,
        }
    }
}

/// First rule a submission broke. The message is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("请先阅读并同意《用户注册协议》！")]
    AgreementRequired,

    #[error("密码不一致")]
    PasswordMismatch,

    #[error("用户名长度不合法，太短或者太长。")]
    UsernameLength { len: usize },

    #[error("密码强度太弱，最多30位，最少8位")]
    PasswordTooShort { len: usize },

    #[error("密码强度太弱，最多30位，最少8位")]
    PasswordTooLong { len: usize },
}

/// A blocking notice shown to the user, such as a modal alert box.
pub trait Alert {
    fn alert(&mut self, message: &str);
}

impl<F: FnMut(&str)> Alert for F {
    fn alert(&mut self, message: &str) {
        self(message);
    }
}

impl RegistrationForm {
    /// Runs the submit checks in priority order and stops at the first failure:
    /// agreement, matching passwords, username length, then password length.
    ///
    /// # Errors
    /// Returns the first [`Rejection`] that applies.
    pub fn validate(&self, rules: &ValidationRules) -> Result<(), Rejection> {
        if !self.agreed {
            return Err(Rejection::AgreementRequired);
        }
        if self.password != self.verify_password {
            return Err(Rejection::PasswordMismatch);
        }

        let len = self.username.chars().count();
        if len < rules.username_min || len > rules.username_max {
            return Err(Rejection::UsernameLength { len });
        }

        let len = self.verify_password.chars().count();
        if len < rules.password_min {
            return Err(Rejection::PasswordTooShort { len });
        }
        if len > rules.password_max {
            return Err(Rejection::PasswordTooLong { len });
        }
        Ok(())
    }
}

/// Submit handler: returns whether the form may be submitted. On rejection
/// exactly one message is passed to `alert` and the form is left untouched.
pub fn check_form(form: &RegistrationForm, rules: &ValidationRules, alert: &mut impl Alert) -> bool {
    match form.validate(rules) {
        Ok(()) => true,
        Err(rejection) => {
            debug!(?rejection, "registration rejected");
            alert.alert(&rejection.to_string());
            false
        }
    }
}
