use justin::{Error, ErrorKind};
use std::fmt::Debug;

/// Assert that a result failed with the given error kind, returning the
/// error for further inspection.
#[track_caller]
pub fn expect_err_kind<T: Debug>(result: Result<T, Error>, kind: ErrorKind) -> Error {
    match result {
        Err(err) if err.kind == kind => err,
        Err(err) => panic!("expected {kind:?} error, got {:?}: {err:?}", err.kind),
        Ok(value) => panic!("expected {kind:?} error, got Ok({value:?})"),
    }
}
