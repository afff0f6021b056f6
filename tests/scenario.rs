mod common;

use bytes::Bytes;
use insta::assert_snapshot;
use optional::{optional, Optional};

#[test]
fn byte_sequence() {
    common::init();

    let mut opt: Optional<Bytes> = optional!(Bytes::from_static(&[1, 2, 3]));
    let bytes = opt.unwrap().expect("holds bytes");
    assert_eq!(&bytes[..], &[1, 2, 3]);
    assert!(!opt.is_some());

    let err = opt.unwrap().unwrap_err();
    assert_eq!(err.message(), "Option is None value");
}

#[test]
fn repopulate_after_extraction() {
    let mut opt = Optional::some(Bytes::from_static(b"abc"));
    let _ = opt.unwrap();
    opt.set(Bytes::from_static(b"def"));
    assert_eq!(opt.unwrap_def(Bytes::new()), Bytes::from_static(b"def"));
    assert_eq!(opt.unwrap_def(Bytes::new()), Bytes::new());
}

#[test]
fn pointer_payload() {
    let app = String::from("app --verbose");
    let mut opt = Optional::some(&app);
    let args = opt.match_with(|a| a.split(' ').count(), || 0);
    assert_eq!(args, 2);
    opt.if_none(|| ()).if_some(|_| panic!("already unwrapped"));
}

#[test]
fn debug_output() {
    let opt = Optional::some(vec![1, 2]);
    assert_snapshot!(format!("{opt:?}"), @"Some([1, 2])");
    assert_snapshot!(format!("{:?}", Optional::<u8>::none()), @"None");
}
