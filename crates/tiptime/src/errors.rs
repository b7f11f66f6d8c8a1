//! Error handling and exit codes.

use tiptime_core::constants::exit_codes;
use tiptime_core::TipError;

/// Map a calculator configuration error to its exit code.
pub fn handle_error(err: &TipError) -> i32 {
    match err {
        TipError::Config(_) | TipError::UnknownLocale(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Map any application error to an exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TipError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&TipError::Config("bad".into())), 4);
        assert_eq!(handle_error(&TipError::UnknownLocale("xx".into())), 4);
    }

    #[test]
    fn anyhow_wrapped_config_error() {
        let err = anyhow::Error::new(TipError::UnknownLocale("xx".into()));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::Error::new(std::io::Error::other("disk full"));
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
        assert_ne!(exit_code(&err), exit_codes::SUCCESS);
    }
}
