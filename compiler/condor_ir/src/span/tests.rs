use super::Span;

#[test]
fn width_and_slice_range() {
    let span = Span::new(4, 9);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert_eq!(&"int a = 1;"[span.to_range()], "a = 1");
}

#[test]
fn eof_span_is_empty() {
    assert!(Span::new(12, 12).is_empty());
    assert_eq!(Span::DUMMY.len(), 0);
}

#[test]
fn merge_covers_both_in_any_order() {
    let keyword = Span::new(0, 3);
    let name = Span::new(4, 7);
    assert_eq!(keyword.merge(name), Span::new(0, 7));
    assert_eq!(name.merge(keyword), Span::new(0, 7));
}

#[test]
fn oversized_offsets_saturate() {
    let span = Span::from_range(3..usize::MAX);
    assert_eq!(span, Span::new(3, u32::MAX));
}

#[test]
fn displays_as_range() {
    assert_eq!(Span::new(2, 5).to_string(), "2..5");
    assert_eq!(format!("{:?}", Span::new(2, 5)), "2..5");
}
