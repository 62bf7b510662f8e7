use keylabels::labels::{canonical_names, Grouping, Hand, KeyLabel, Row, KEY_COUNT};
use rstest::rstest;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(KeyLabel::Lt5, Hand::Left, Row::Top, 5)]
#[case(KeyLabel::Lt0, Hand::Left, Row::Top, 0)]
#[case(KeyLabel::Rt0, Hand::Right, Row::Top, 0)]
#[case(KeyLabel::Rm3, Hand::Right, Row::Middle, 3)]
#[case(KeyLabel::Lb1, Hand::Left, Row::Bottom, 1)]
#[case(KeyLabel::Rb5, Hand::Right, Row::Bottom, 5)]
#[case(KeyLabel::Lh2, Hand::Left, Row::Thumb, 2)]
#[case(KeyLabel::Lh0, Hand::Left, Row::Thumb, 0)]
#[case(KeyLabel::Rh0, Hand::Right, Row::Thumb, 0)]
#[case(KeyLabel::Rh2, Hand::Right, Row::Thumb, 2)]
fn test_label_parts(
    #[case] label: KeyLabel,
    #[case] hand: Hand,
    #[case] row: Row,
    #[case] column: u8,
) {
    assert_eq!(label.hand(), hand);
    assert_eq!(label.row(), row);
    assert_eq!(label.column(), column);
    assert_eq!(KeyLabel::from_parts(hand, row, column), Some(label));
}

#[test]
fn test_label_count_and_split() {
    assert_eq!(KeyLabel::iter().count(), KEY_COUNT);
    assert_eq!(KeyLabel::iter().filter(|l| l.is_thumb()).count(), 6);
    assert_eq!(
        KeyLabel::iter().filter(|l| l.hand() == Hand::Left).count(),
        KEY_COUNT / 2
    );
}

#[test]
fn test_mnemonic_matches_parts() {
    for label in KeyLabel::iter() {
        let hand = match label.hand() {
            Hand::Left => 'L',
            Hand::Right => 'R',
        };
        let expected = format!("{}{}{}", hand, label.row().mnemonic(), label.column());
        assert_eq!(label.to_string(), expected);
    }
}

#[test]
fn test_parse_label() {
    assert_eq!(KeyLabel::from_str("LT0").unwrap(), KeyLabel::Lt0);
    assert_eq!(KeyLabel::from_str("rh2").unwrap(), KeyLabel::Rh2);
    assert!(KeyLabel::from_str("LT6").is_err());
    assert!(KeyLabel::from_str("LH3").is_err());
}

#[test]
fn test_out_of_range_parts() {
    assert_eq!(KeyLabel::from_parts(Hand::Left, Row::Thumb, 3), None);
    assert_eq!(KeyLabel::from_parts(Hand::Right, Row::Top, 6), None);
}

#[test]
fn test_ordinals() {
    for (i, label) in KeyLabel::iter().enumerate() {
        assert_eq!(label.ordinal(), i);
        assert_eq!(KeyLabel::from_ordinal(i), Some(label));
    }
    assert_eq!(KeyLabel::from_ordinal(KEY_COUNT), None);
    assert_eq!(canonical_names()[6], "RT0");
}

#[test]
fn test_grouping_names() {
    assert_eq!(Grouping::KeysLeft.to_string(), "KEYS_L");
    assert_eq!(Grouping::from_str("THUMBS").unwrap(), Grouping::Thumbs);
    assert!(Grouping::KeysLeft
        .labels()
        .iter()
        .all(|l| l.hand() == Hand::Left && !l.is_thumb() && l.column() < 5));
    assert!(Grouping::KeysRight
        .labels()
        .iter()
        .all(|l| l.hand() == Hand::Right && !l.is_thumb() && l.column() < 5));
    assert!(Grouping::Thumbs.labels().iter().all(|l| l.is_thumb()));
}
