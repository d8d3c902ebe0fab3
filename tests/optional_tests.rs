use rs2_optional_stream::{shared, Optional, StreamError};

#[test]
fn test_of_is_present() {
    let opt = Optional::of(42);
    assert!(opt.is_present());
    assert_eq!(opt.get(), 42);
}

#[test]
fn test_of_zero_values_are_present() {
    let zero = Optional::of(0);
    let blank = Optional::of(String::new());

    assert!(zero.is_present());
    assert_eq!(zero.get(), 0);
    assert!(blank.is_present());
    assert_eq!(blank.get(), "");
}

#[test]
fn test_of_nullable_none_is_absent() {
    let number = Optional::<i32>::of_nullable(None);
    let text = Optional::<String>::of_nullable(None);

    assert!(!number.is_present());
    assert!(!text.is_present());
}

#[test]
fn test_of_nullable_aliases_caller_storage() {
    let cell = shared(10);
    let opt = Optional::of_nullable(Some(&cell));
    assert_eq!(opt.get(), 10);

    *cell.borrow_mut() = 20;
    assert!(opt.is_present());
    assert!(opt.is_aliased());
    assert_eq!(opt.get(), 20);
}

#[test]
fn test_of_takes_an_independent_copy() {
    let mut value = vec![1, 2];
    let opt = Optional::of(value.clone());
    value.push(3);

    assert!(!opt.is_aliased());
    assert_eq!(opt.get(), vec![1, 2]);
}

#[test]
fn test_empty_get_returns_default() {
    let number: Optional<i32> = Optional::empty();
    let text: Optional<String> = Optional::empty();

    assert!(!number.is_present());
    assert_eq!(number.get(), 0);
    assert_eq!(text.get(), "");
}

#[test]
fn test_try_get() {
    assert_eq!(Optional::of(7).try_get(), Ok(7));
    assert_eq!(Optional::<i32>::empty().try_get(), Err(StreamError::NoValue));
}

#[test]
fn test_display() {
    assert_eq!(Optional::of(5).to_string(), "Optional[5]");
    assert_eq!(Optional::of("hi").to_string(), "Optional[hi]");
    assert_eq!(Optional::<i32>::empty().to_string(), "Optional.empty");

    let cell = shared(1.5);
    let aliased = Optional::of_nullable(Some(&cell));
    *cell.borrow_mut() = 2.5;
    assert_eq!(aliased.to_string(), "Optional[2.5]");
}

#[test]
fn test_option_conversions() {
    let present: Optional<u8> = Some(3).into();
    let absent: Optional<u8> = None.into();

    assert_eq!(present.to_option(), Some(3));
    assert_eq!(absent.to_option(), None);
    assert!(!Optional::<u8>::default().is_present());
}

#[test]
fn test_serialize() {
    let present = serde_json::to_string(&Optional::of(3)).unwrap();
    let absent = serde_json::to_string(&Optional::<i32>::empty()).unwrap();

    assert_eq!(present, "3");
    assert_eq!(absent, "null");
}

#[test]
fn test_display_of_empty_string_is_present() {
    assert_eq!(Optional::of(String::new()).to_string(), "Optional[]");
    assert_eq!(Optional::of(0).to_string(), "Optional[0]");
}

#[test]
#[should_panic]
fn test_get_panics_while_cell_is_mutably_borrowed() {
    let cell = shared(1);
    let opt = Optional::of_nullable(Some(&cell));
    let _guard = cell.borrow_mut();
    opt.get();
}
