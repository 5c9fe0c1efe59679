use super::*;

#[test]
fn test_error_conversion() {
    let err = Error::param("key", "must be 16, 24 or 32 bytes");
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, .. } => assert_eq!(context, "key"),
        other => panic!("unexpected {:?}", other),
    }

    let err = Error::Length {
        context: "GCM tag",
        expected: 16,
        actual: 12,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "GCM tag");
            assert_eq!(expected, 16);
            assert_eq!(actual, 12);
        }
        other => panic!("unexpected {:?}", other),
    }

    let err = Error::Processing {
        operation: "CBC decrypt",
        details: "bad padding",
    };
    assert!(matches!(
        CoreError::from(err),
        CoreError::DecryptionFailed { .. }
    ));
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "olen", "ok").is_ok());
    match validate::parameter(false, "olen", "too short").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "olen");
            assert_eq!(reason, "too short");
        }
        other => panic!("unexpected {:?}", other),
    }

    assert!(validate::length("block", 16, 16).is_ok());
    assert!(matches!(
        validate::length("block", 15, 16),
        Err(Error::Length {
            expected: 16,
            actual: 15,
            ..
        })
    ));
    assert!(validate::min_length("tag", 3, 4).is_err());
    assert!(validate::max_length("tag", 17, 16).is_err());
    assert!(validate::authentication(false, "AES-GCM").is_err());
}

#[test]
fn test_to_core_result_replaces_context() {
    let r: Result<()> = Err(Error::Authentication { algorithm: "AES-GCM" });
    let core = to_core_result(r, "ECIES decrypt").unwrap_err();
    assert_eq!(core.context(), "ECIES decrypt");
    assert!(matches!(core, CoreError::AuthenticationFailed { .. }));
}

#[test]
fn test_display() {
    let err = Error::MacError {
        algorithm: "HMAC",
        details: "tag length below 4",
    };
    assert_eq!(err.to_string(), "MAC error in HMAC: tag length below 4");
}
