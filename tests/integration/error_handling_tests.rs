//! Error handling integration tests
//!
//! Verifies that refusals and failures surface as the right error kinds.

#[cfg(test)]
mod tests {
    use saanvika_authz::{Action, AuthzError, SubjectStatus};

    #[test]
    fn test_denials_are_classified() {
        assert!(AuthzError::forbidden("no").is_denial());

        let transition = SubjectStatus::Active.transition(Action::Verify).unwrap_err();
        assert!(transition.is_denial());
        assert_eq!(
            transition.to_string(),
            "Invalid transition: cannot verify a subject in status active"
        );

        assert!(!AuthzError::not_found("Subject 1").is_denial());
        assert!(!AuthzError::validation("Name is required").is_denial());
        assert!(!AuthzError::config("bad").is_denial());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthzError::conflict("Email already registered: a@b.co").to_string(),
            "Conflict: Email already registered: a@b.co"
        );
        assert_eq!(
            AuthzError::store("connection reset").to_string(),
            "Store error: connection reset"
        );
    }

    #[test]
    fn test_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AuthzError = json_err.into();
        assert!(matches!(err, AuthzError::Serialization(_)));

        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err: AuthzError = yaml_err.into();
        assert!(matches!(err, AuthzError::Yaml(_)));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AuthzError = io_err.into();
        assert!(matches!(err, AuthzError::Io(_)));
    }

    #[test]
    fn test_errors_cross_anyhow_boundary() {
        let result: anyhow::Result<()> = Err(AuthzError::forbidden("admin cannot see admin").into());
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Forbidden"));
        assert!(err.downcast_ref::<AuthzError>().is_some());
    }
}
