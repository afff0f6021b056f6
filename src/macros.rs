/// Construct an [`Optional`](crate::Optional)
///
/// `optional!()` is empty, `optional!(value)` holds `value`.
///
/// ```
/// use optional::{optional, Optional};
///
/// let none: Optional<u8> = optional!();
/// assert!(none.is_none());
/// assert_eq!(optional!(3), Optional::some(3));
/// ```
#[macro_export]
macro_rules! optional {
    () => {
        $crate::Optional::none()
    };
    ($value:expr $(,)?) => {
        $crate::Optional::some($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::Optional;

    #[test]
    fn empty_and_populated() {
        let a: Optional<String> = optional!();
        assert!(a.is_none());

        let mut b = optional!(String::from("abc"),);
        assert_eq!(b.unwrap().as_deref(), Ok("abc"));
    }
}
