use tristate::datatype::{Integer, Text};
use tristate::value::{Textual, Value};

#[test]
fn arithmetic_with_unset_is_unset() {
    let unset = Integer::new();
    let one = Integer::of(1);
    assert!(!unset.add(&one).is_set());
    assert!(!one.sub(&unset).is_set());
    assert!(!unset.mul(&unset).is_set());
    assert!(!(one + unset).is_set());
    assert!(!unset.negate().is_set());
}

#[test]
fn arithmetic_on_set_values() {
    let a = Integer::of(17);
    let b = Integer::of(5);
    assert_eq!(a.add(&b).get(), Some(22));
    assert_eq!(a.sub(&b).get(), Some(12));
    assert_eq!(a.mul(&b).get(), Some(85));
    assert_eq!(a.div(&b).get(), Some(3));
    assert_eq!(a.rem(&b).get(), Some(2));
    assert_eq!((a + b).get(), Some(22));
    assert_eq!((-a).get(), Some(-17));
    assert_eq!(Integer::of(-7).abs().get(), Some(7));
}

#[test]
fn remainder_and_modulus_differ_in_sign() {
    let minus_seven = Integer::of(-7);
    let three = Integer::of(3);
    assert_eq!(minus_seven.rem(&three).get(), Some(-1));
    assert_eq!(minus_seven.modulo(&three).get(), Some(2));
    assert_eq!(Integer::of(7).modulo(&Integer::of(-3)).get(), Some(-2));
}

#[test]
fn modulus_near_the_bounds_is_set() {
    assert_eq!(Integer::of(5).modulo(&Integer::of(i64::MAX)).get(), Some(5));
    assert_eq!(Integer::of(-1).modulo(&Integer::of(i64::MIN)).get(), Some(-1));
    assert_eq!(Integer::of(-1).modulo(&Integer::of(i64::MAX)).get(), Some(i64::MAX - 1));
    assert_eq!(Integer::of(i64::MIN).modulo(&Integer::of(-1)).get(), Some(0));
    assert_eq!(Integer::of(i64::MIN).rem(&Integer::of(-1)).get(), Some(0));
    assert_eq!(Integer::of(i64::MAX).modulo(&Integer::of(i64::MIN)).get(), Some(-1));
}

#[test]
fn division_by_zero_and_overflow_are_unset() {
    let zero = Integer::of(0);
    assert!(!Integer::of(4).div(&zero).is_set());
    assert!(!Integer::of(4).rem(&zero).is_set());
    assert!(!Integer::of(4).modulo(&zero).is_set());
    assert!(!Integer::of(i64::MAX).add(&Integer::of(1)).is_set());
    assert!(!Integer::of(i64::MIN).negate().is_set());
    assert!(!Integer::of(i64::MIN).abs().is_set());
    assert!(!Integer::of(i64::MIN).div(&Integer::of(-1)).is_set());
}

#[test]
fn compound_assignment() {
    let mut total = Integer::of(10);
    total.add_assign(&Integer::of(5));
    assert_eq!(total.get(), Some(15));
    total.sub_assign(&Integer::of(3));
    total.mul_assign(&Integer::of(2));
    assert_eq!(total.get(), Some(24));
    total.div_assign(&Integer::of(0));
    assert!(!total.is_set(), "division by zero leaves the receiver unset");
    total.add_assign(&Integer::of(1));
    assert!(!total.is_set());

    let mut other = Integer::of(1);
    other.add_assign(&Integer::new());
    assert!(!other.is_set());
}

#[test]
fn increment_and_decrement() {
    let mut counter = Integer::of(0);
    counter.inc().inc().dec();
    assert_eq!(counter.get(), Some(1));
    let mut unset = Integer::new();
    unset.inc();
    assert!(!unset.is_set());
    let mut top = Integer::of(i64::MAX);
    top.inc();
    assert!(!top.is_set());
}

#[test]
fn pipe_accumulates() {
    let mut sum = Integer::new();
    for n in [Integer::of(1), Integer::new(), Integer::of(2), Integer::of(3)] {
        sum.pipe(&n);
    }
    assert_eq!(sum.get(), Some(6));
    sum.merge(&Integer::new());
    assert_eq!(sum.get(), Some(6));
    sum.merge(&Integer::of(-1));
    assert_eq!(sum.get(), Some(-1));
}

#[test]
fn overflowing_pipe_unsets_like_add_assign() {
    let mut piped = Integer::of(i64::MAX);
    piped.pipe(&Integer::of(1));
    let mut assigned = Integer::of(i64::MAX);
    assigned.add_assign(&Integer::of(1));
    assert!(!piped.is_set());
    assert!(!assigned.is_set());
    piped.pipe(&Integer::of(3));
    assert_eq!(piped.get(), Some(3), "an unset receiver adopts the next piped value");
}

#[test]
fn comparison_and_queries() {
    let a = Integer::of(3);
    let b = Integer::of(9);
    assert_eq!(a.compare(&b).get(), Some(-1));
    assert!(a.less_or_equal(&b).is_true());
    assert!(b.greater_than(&a).is_true());
    assert!(a.equals(&Integer::of(3)).is_true());
    assert!(!a.equals(&Integer::new()).is_set());
    assert!(Integer::of(0).is_zero().is_true());
    assert!(!Integer::new().is_zero().is_set());
    assert_eq!(Integer::of(-120).length().get(), Some(4));
    assert_eq!(a.fuzzy(&b), a.compare(&b));
}

#[test]
fn parse_and_text_round_trip() {
    assert_eq!(Integer::parse("42").get(), Some(42));
    assert_eq!(Integer::parse("-42").get(), Some(-42));
    assert!(!Integer::parse(" -42 ").is_set());
    assert!(!Integer::parse("+3").is_set());
    assert!(!Integer::parse("4x2").is_set());
    assert!(!Integer::parse("").is_set());
    assert!(!Integer::parse("99999999999999999999").is_set());
    assert!(!Integer::from_text(&Text::new()).is_set());
    let value = Integer::of(-981);
    let text = value.as_text();
    assert_eq!(text.get(), Some("-981"));
    assert_eq!(Integer::from_text(&text), value);
    assert_eq!(value.to_json(), Some(serde_json::json!(-981)));
    assert_eq!(value.hash_code(), Integer::of(-981).hash_code());
    assert!(!Integer::new().hash_code().is_set());
}
