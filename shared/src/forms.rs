use std::fmt::Display;
use std::future::Future;

use crate::constants::{BUSY_LOGIN, BUSY_REGISTER};
use crate::errors::SubmitError;
use crate::notices::{Notice, NoticeSink};
use crate::submission::{submit, SubmitControl};
use crate::types::{RegistrationFields, RequiredField};
use crate::utils::is_blank;

pub fn validate_selection(fields: &RegistrationFields) -> Result<(), SubmitError> {
    if is_blank(&fields.country) {
        return Err(SubmitError::Validation(RequiredField::Country));
    }
    if is_blank(&fields.region) {
        return Err(SubmitError::Validation(RequiredField::Region));
    }
    Ok(())
}

/// Only compared when both are filled in.
pub fn validate_passwords(fields: &RegistrationFields) -> Result<(), SubmitError> {
    if !fields.password.is_empty() && !fields.confirm_password.is_empty() && fields.password != fields.confirm_password {
        return Err(SubmitError::PasswordMismatch);
    }
    Ok(())
}

pub async fn login<C, N, W, T, E>(control: &C, notices: &N, work: W) -> Result<bool, SubmitError>
    where
        C: SubmitControl + ?Sized,
        N: NoticeSink + ?Sized,
        W: Future<Output = Result<T, E>>,
        E: Display,
{
    match submit(control, BUSY_LOGIN, work).await? {
        Ok(_) => {
            notices.notify(Notice::login_ok());
            Ok(true)
        }
        Err(err) => {
            log::error!("login failed: {err}");
            notices.notify(Notice::error(err.to_string()));
            Ok(false)
        }
    }
}

/// Validation failures never touch the control.
pub async fn register<C, N, F, W, T, E, S>(
    control: &C,
    notices: &N,
    fields: &RegistrationFields,
    work: F,
    on_created: S,
) -> Result<bool, SubmitError>
    where
        C: SubmitControl + ?Sized,
        N: NoticeSink + ?Sized,
        F: FnOnce(&RegistrationFields) -> W,
        W: Future<Output = Result<T, E>>,
        E: Display,
        S: FnOnce(),
{
    if let Err(err) = validate_selection(fields) {
        log::warn!("registration rejected: {err}");
        notices.notify(Notice::invalid_selection());
        return Err(err);
    }
    if let Err(err) = validate_passwords(fields) {
        log::warn!("registration rejected: {err}");
        notices.notify(Notice::password_mismatch());
        return Err(err);
    }

    match submit(control, BUSY_REGISTER, work(fields)).await? {
        Ok(_) => {
            notices.notify(Notice::account_created(fields.country.trim(), fields.region.trim()));
            on_created();
            Ok(true)
        }
        Err(err) => {
            log::error!("registration failed: {err}");
            notices.notify(Notice::error(err.to_string()));
            Ok(false)
        }
    }
}
