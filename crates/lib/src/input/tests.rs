use arrayvec::{ArrayString, ArrayVec};

use super::{ErrorKind, IStr, NonEmpty, Ws, W};
use crate::env::Size;

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

#[test]
fn test_words_and_numbers() {
    let mut p = input("Card  12: 41 48 |  83");

    let W(card) = p.next::<W<&str>>().unwrap();
    assert_eq!(card, "Card");
    assert_eq!(p.next::<W<&str>>().unwrap().0, "12:");
    assert!(p.next::<[u32; 2]>().is_err());
}

#[test]
fn test_numbers_until_exhausted() {
    let mut p = input(" 41 48 83\t86 17 ");
    let values = p.next::<Vec<u32>>().unwrap();
    assert_eq!(values, [41, 48, 83, 86, 17]);
    assert!(p.try_next::<u32>().unwrap().is_none());
}

#[test]
fn test_not_integer() {
    let mut p = input("12 abc");
    assert_eq!(p.next::<u32>().unwrap(), 12);

    let error = p.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("abc")));
}

#[test]
fn test_lines_without_trailing_newline() {
    let mut p = input("467..114..\n...*......");
    assert_eq!(p.line::<&[u8]>().unwrap(), b"467..114..");
    assert_eq!(p.line::<&[u8]>().unwrap(), b"...*......");
    assert!(p.try_line::<&[u8]>().unwrap().is_none());
    assert!(matches!(
        p.line::<&[u8]>().unwrap_err().kind(),
        ErrorKind::ExpectedLine
    ));
}

#[test]
fn test_line_index_tracks_start() {
    let mut p = input("ab\ncd\n");
    let first = p.line::<IStr>().unwrap();
    let second = p.line::<IStr>().unwrap();
    assert_eq!(first.as_data(), b"ab");
    assert_eq!(second.as_data(), b"cd");

    #[cfg(not(prod))]
    {
        assert_eq!(first.index(), Size::new(0));
        assert_eq!(second.index(), Size::new(3));
        assert_eq!(p.index(), Size::new(6));
    }
}

#[test]
fn test_array_string_capacity() {
    let mut p = input("two1nine\neightwothree\n");
    let line = p.line::<ArrayString<8>>().unwrap();
    assert_eq!(line.as_str(), "two1nine");

    let error = p.line::<ArrayString<8>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::StringCapacity(8)));
}

#[test]
fn test_array_vec_capacity() {
    let mut p = input("1 2 3");
    let error = p.next::<ArrayVec<u8, 2>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ArrayCapacity(2)));
}

#[test]
fn test_whitespace_counts_newlines() {
    let mut p = input("  \n\n \t12");
    let Ws(n) = p.next::<Ws>().unwrap();
    assert_eq!(n, 2);
    assert_eq!(p.next::<u32>().unwrap(), 12);
}

#[test]
fn test_non_empty() {
    let mut p = input("abc\n\n");
    assert!(p.try_line::<NonEmpty<&str>>().unwrap().is_some());
    assert!(p.try_line::<NonEmpty<&str>>().unwrap().is_none());
}
