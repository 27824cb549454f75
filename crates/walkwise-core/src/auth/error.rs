use thiserror::Error;

/// Failures surfaced by sign-in and sign-up.
///
/// Both variants are presented to the user verbatim and invite resubmission;
/// neither leaves any partial session state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    DuplicateAccount,
}
