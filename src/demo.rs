//! Example programs built on [`Optional`]
//!
//! These are the scenarios run by the `optional` binary. They double as
//! usage examples: each one returns its result instead of printing, so
//! they can be tested.

use std::cell::Cell;

use log::{debug, info};

use crate::{Optional, UnwrapError};

/// Divide `a` by `b`, or nothing if the division is undefined.
///
/// Both division by zero and `i64::MIN / -1` yield an empty container.
pub fn safe_divide(a: i64, b: i64) -> Optional<i64> {
    let res = Optional::from_option(a.checked_div(b));
    if res.is_none() {
        debug!("no quotient for {a} / {b}");
    }
    res
}

/// Divide `a` by `b`, failing with a descriptive error.
pub fn divide(a: i64, b: i64) -> Result<i64, UnwrapError> {
    safe_divide(a, b).expect(format!("cannot divide {a} by {b}"))
}

/// Look up a file descriptor
///
/// Stands in for a lookup that may come up empty.
pub fn find_descriptor(available: bool) -> Optional<u32> {
    if available {
        Optional::some(3)
    } else {
        Optional::none()
    }
}

/// Describe the result of [`find_descriptor`].
pub fn describe_descriptor(available: bool) -> String {
    find_descriptor(available).match_with(
        |fd| format!("file descriptor: {fd}"),
        || String::from("file descriptor not found"),
    )
}

fn show(res: Result<i32, UnwrapError>) -> String {
    match res {
        Ok(x) => x.to_string(),
        Err(e) => format!("error: {}", e.message()),
    }
}

/// Walk through every operation of [`Optional`]
///
/// Returns one line per step. The final step shows the chaining hazard:
/// `if_some` followed by `if_none` fires both closures on a populated
/// container.
pub fn tour() -> Vec<String> {
    let mut out = Vec::new();

    let mut opt = Optional::some(255);
    out.push(format!("unwrap: {}", show(opt.unwrap())));
    out.push(format!("unwrap again: {}", show(opt.unwrap())));

    opt.set(128);
    out.push(format!("set then unwrap: {}", show(opt.unwrap())));
    out.push(format!(
        "expect: {}",
        show(opt.expect("Sorry, option is empty"))
    ));

    let mut opt = Optional::none();
    out.push(format!("unwrap_def: {}", opt.unwrap_def(777)));

    let calls = Cell::new(0);
    let producer = || {
        calls.set(calls.get() + 1);
        0
    };
    let mut opt = Optional::some(255);
    let first = opt.unwrap_or(producer);
    out.push(format!("unwrap_or: {first} (producer calls: {})", calls.get()));
    let second = opt.unwrap_or(producer);
    out.push(format!("unwrap_or: {second} (producer calls: {})", calls.get()));

    let mut opt = Optional::some(255);
    for _ in 0..2 {
        let s = opt.match_with(|v| format!("{v:#x}"), || String::from("none"));
        out.push(format!("match: {s}"));
    }

    let mut events = Vec::new();
    Optional::some(9)
        .if_none(|| events.push(String::from("none")))
        .if_some(|v| events.push(format!("some({v})")));
    out.push(format!("if_none -> if_some: {}", events.join(", ")));

    let mut events = Vec::new();
    Optional::some(9)
        .if_some(|v| events.push(format!("some({v})")))
        .if_none(|| events.push(String::from("none")));
    out.push(format!("if_some -> if_none: {}", events.join(", ")));

    for line in &out {
        info!("{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_by_zero() {
        assert!(safe_divide(25, 0).is_none());
        let err = divide(25, 0).unwrap_err();
        assert_eq!(err.message(), "cannot divide 25 by 0");
    }

    #[test]
    fn divide_overflow() {
        assert!(safe_divide(i64::MIN, -1).is_none());
    }

    #[test]
    fn divide_ok() {
        assert_eq!(safe_divide(25, 25).unwrap(), Ok(1));
        assert_eq!(divide(-9, 3), Ok(-3));
    }

    #[test]
    fn descriptor() {
        assert_eq!(describe_descriptor(true), "file descriptor: 3");
        assert_eq!(describe_descriptor(false), "file descriptor not found");
    }
}
