use super::{Choice, parse_choice};

#[test]
fn accepts_in_range_numbers_as_zero_based_indices() {
    assert_eq!(parse_choice("1", 3), Choice::Selected(0));
    assert_eq!(parse_choice("3", 3), Choice::Selected(2));
    assert_eq!(parse_choice("  2 \n", 3), Choice::Selected(1));
}

#[test]
fn rejects_out_of_range_numbers() {
    assert_eq!(parse_choice("0", 3), Choice::OutOfRange);
    assert_eq!(parse_choice("4", 3), Choice::OutOfRange);
}

#[test]
fn rejects_non_numeric_input() {
    assert_eq!(parse_choice("", 3), Choice::NotANumber);
    assert_eq!(parse_choice("root", 3), Choice::NotANumber);
    assert_eq!(parse_choice("1.5", 3), Choice::NotANumber);
    assert_eq!(parse_choice("-1", 3), Choice::NotANumber);
}
