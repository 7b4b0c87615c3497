use std::panic::{catch_unwind, UnwindSafe};

/// Run `f` and return the panic message, or `None` if it returned normally
#[allow(dead_code)]
pub fn catch_failure<F>(f: F) -> Option<String>
where
    F: FnOnce() + UnwindSafe,
{
    let payload = catch_unwind(f).err()?;
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default();
    Some(message)
}

/// Assert that `f` fails with exactly `expected` as its diagnostic
#[allow(dead_code)]
pub fn assert_fails_with<F>(f: F, expected: &str)
where
    F: FnOnce() + UnwindSafe,
{
    match catch_failure(f) {
        Some(message) => assert_eq!(message, expected),
        None => panic!("Expected panic, but code did not panic"),
    }
}

/// Assert that `f` fails, whatever the diagnostic
#[allow(dead_code)]
pub fn assert_fails<F>(f: F)
where
    F: FnOnce() + UnwindSafe,
{
    assert!(
        catch_failure(f).is_some(),
        "Expected panic, but code did not panic"
    );
}

/// Whether `f` fails
#[allow(dead_code)]
pub fn fails<F>(f: F) -> bool
where
    F: FnOnce() + UnwindSafe,
{
    catch_failure(f).is_some()
}
