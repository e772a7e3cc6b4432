//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
///
/// This macro unwraps a Result, providing a better error message
/// if the result is an error.
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a JSON body is a failure envelope with the given message
#[macro_export]
macro_rules! assert_failure {
    ($body:expr, $message:expr) => {
        assert_eq!(
            $body["success"],
            serde_json::Value::Bool(false),
            "Expected failure envelope, got {}",
            $body
        );
        assert_eq!($body["message"], $message, "Unexpected message in {}", $body);
        assert!(
            $body.get("data").is_none(),
            "Failure envelope must not carry data: {}",
            $body
        );
    };
}
