use matchkit::bytesconv::{slice_from_bytes, slice_to_bytes, ByteError, ByteRepr};
use matchkit::listext::{min_max, VecExt};
use matchkit::stringext::{Joiner, StrExt};

#[test]
fn test_include() {
    let mut list = vec![1, 2];

    assert!(list.include(3));
    assert!(!list.include(2));
    assert_eq!(list, vec![1, 2, 3]);
}

#[test]
fn test_include_or_replace() {
    let mut list = vec![(1, "a"), (2, "b")];

    let pushed = list.include_or_replace((2, "c"), |item| item.0 == 2);
    assert!(!pushed);
    assert_eq!(list, vec![(1, "a"), (2, "c")]);

    let pushed = list.include_or_replace((3, "d"), |item| item.0 == 3);
    assert!(pushed);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_exclude_if() {
    let mut list = vec![1, 2, 3, 4, 5];
    list.exclude_if(|n| n % 2 == 0);

    assert_eq!(list, vec![1, 3, 5]);
}

#[test]
fn test_to_unique() {
    let list = vec![3, 1, 3, 2, 1];

    assert_eq!(list.to_unique(), vec![3, 1, 2]);
}

#[test]
fn test_index_where() {
    let list = vec![10, 20, 30];

    assert_eq!(list.index_where(|n| *n > 15), Some(1));
    assert_eq!(list.index_where(|n| *n > 99), None);
}

#[test]
fn test_move_item() {
    let mut list = vec!["a", "b", "c", "d"];
    list.move_item(0, 3);
    assert_eq!(list, vec!["b", "c", "a", "d"]);

    let mut list = vec!["a", "b", "c", "d"];
    list.move_item(3, 0);
    assert_eq!(list, vec!["d", "a", "b", "c"]);

    // Out of range leaves the vector unchanged.
    let mut list = vec!["a", "b"];
    list.move_item(5, 0);
    assert_eq!(list, vec!["a", "b"]);
}

#[test]
fn test_promote_and_demote() {
    let mut list = vec![1, 2, 3];

    assert!(list.promote(1));
    assert_eq!(list, vec![2, 1, 3]);

    assert!(!list.promote(0));
    assert!(!list.demote(2));
    assert!(list.demote(0));
    assert_eq!(list, vec![1, 2, 3]);
}

#[test]
fn test_promote_if_guard() {
    let mut list = vec![1, 9, 2];

    // Only promote when the element outranks its predecessor.
    assert!(list.promote_if(1, |a, b| a > b));
    assert_eq!(list, vec![9, 1, 2]);

    assert!(!list.promote_if(1, |a, b| a > b));
    assert_eq!(list, vec![9, 1, 2]);
}

#[test]
fn test_min_max() {
    let items = vec![("a", 3), ("b", 1), ("c", 2)];

    assert_eq!(min_max(&items, |item| item.1), Some((1, 3)));
    assert_eq!(min_max::<(&str, i32), i32, _>(&[], |item| item.1), None);
}

#[test]
fn test_beginning_and_ending() {
    assert_eq!("hello".beginning(3), "hel");
    assert_eq!("hi".beginning(5), "hi");
    assert_eq!("hello".ending(3), "llo");
    assert_eq!("hi".ending(5), "hi");

    // Character counts, not byte counts.
    assert_eq!("héllo".beginning(2), "hé");
    assert_eq!("héllo".ending(4), "éllo");
}

#[test]
fn test_remove_words() {
    assert_eq!(
        "one two three two".remove_words(&["two ", "three "]),
        "one two"
    );
}

#[test]
fn test_retain_chars() {
    assert_eq!("a1b2c3".retain_chars("0123456789"), "123");
    assert_eq!("abc".retain_chars(""), "");
}

#[test]
fn test_number_of_lines() {
    assert_eq!("no breaks".number_of_lines(), 0);
    assert_eq!("a\nb\nc".number_of_lines(), 2);
    assert_eq!("a\r\nb".number_of_lines(), 1);
    assert_eq!("a\r\nb\n\nc".number_of_lines(), 3);
}

#[test]
fn test_joiner_separator_between_items() {
    let mut joiner = Joiner::new(", ");
    joiner.add("a").add("b").add("c");

    assert_eq!(joiner.to_string(), "a, b, c");
    assert_eq!(joiner.count(), 3);
}

#[test]
fn test_joiner_affixes_and_bounds() {
    let mut joiner = Joiner::new(", ").prefix("'").suffix("'").bounds("(", ")");
    joiner.add("x").add("y");

    assert_eq!(joiner.to_string(), "('x', 'y')");
}

#[test]
fn test_joiner_add_opt_and_raw() {
    let mut joiner = Joiner::new("|");
    joiner.add_opt(None).add("a").add_opt(Some("b")).add_raw("!");

    assert_eq!(joiner.to_string(), "a|b!");
    assert_eq!(joiner.count(), 2);
}

#[test]
fn test_byte_repr_roundtrip() {
    let bytes = 0x1234_5678_i32.to_bytes();
    assert_eq!(bytes.len(), i32::WIDTH);
    assert_eq!(i32::from_bytes(&bytes).unwrap(), 0x1234_5678);

    let bytes = (-2.5_f64).to_bytes();
    assert_eq!(f64::from_bytes(&bytes).unwrap(), -2.5);

    assert_eq!(bool::from_bytes(&true.to_bytes()).unwrap(), true);
}

#[test]
fn test_byte_repr_wrong_length() {
    let err = i32::from_bytes(&[1, 2]).unwrap_err();

    assert_eq!(
        err,
        ByteError::WrongLength {
            expected: 4,
            actual: 2
        }
    );
}

#[test]
fn test_slice_roundtrip() {
    let values: Vec<u16> = vec![1, 2, 515];
    let bytes = slice_to_bytes(&values);

    assert_eq!(bytes.len(), values.len() * u16::WIDTH);
    assert_eq!(slice_from_bytes::<u16>(&bytes).unwrap(), values);
}

#[test]
fn test_slice_misaligned() {
    let err = slice_from_bytes::<u32>(&[1, 2, 3]).unwrap_err();

    assert_eq!(err, ByteError::Misaligned { len: 3, width: 4 });
}
