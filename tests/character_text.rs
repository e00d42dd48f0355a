use tristate::datatype::{Character, Integer, Text};
use tristate::value::{Textual, Value};

#[test]
fn character_case_and_stepping() {
    let a = Character::of('a');
    assert_eq!(a.upper_case().get(), Some('A'));
    assert_eq!(Character::of('Q').lower_case().get(), Some('q'));
    assert_eq!(Character::of('ß').upper_case().get(), Some('ß'), "multi-char mapping keeps the character");
    assert!(!Character::new().upper_case().is_set());

    let mut c = Character::of('a');
    c.inc();
    assert_eq!(c.get(), Some('b'));
    c.dec().dec();
    assert_eq!(c.get(), Some('`'));

    let mut gap = Character::of('\u{D7FF}');
    gap.inc();
    assert!(!gap.is_set(), "stepping into the surrogate range is unset");
    let mut bottom = Character::of('\0');
    bottom.dec();
    assert!(!bottom.is_set());
    let mut top = Character::of(char::MAX);
    top.inc();
    assert!(!top.is_set());
}

#[test]
fn character_length_promotion_and_parse() {
    let c = Character::of('x');
    assert_eq!(c.length().get(), Some(1));
    assert_eq!(c.promote().get(), Some("x"));
    assert!(!Character::new().promote().is_set());
    assert_eq!(Character::parse("z").get(), Some('z'));
    assert!(!Character::parse("").is_set());
    assert!(!Character::parse("zz").is_set());
    assert_eq!(Character::from_text(&c.as_text()), c);
}

#[test]
fn character_fuzzy_ignores_case() {
    let a = Character::of('a');
    assert_eq!(a.fuzzy(&Character::of('A')).get(), Some(0));
    assert_eq!(a.fuzzy(&Character::of('b')).get(), Some(1));
    assert!(!a.fuzzy(&Character::new()).is_set());
    assert_eq!(a.compare(&Character::of('b')).get(), Some(-1));
}

#[test]
fn text_concatenation() {
    let hello = Text::of("Hello");
    let world = Text::of(" World");
    assert_eq!(hello.concat(&world).get(), Some("Hello World"));
    assert_eq!((hello.clone() + world.clone()).get(), Some("Hello World"));
    assert_eq!(hello.add_char(&Character::of('!')).get(), Some("Hello!"));
    assert!(!hello.concat(&Text::new()).is_set());
    assert!(!hello.add_char(&Character::new()).is_set());

    let mut greeting = Text::of("Hi");
    greeting.add_assign(&Text::of(" there"));
    assert_eq!(greeting.get(), Some("Hi there"));
    greeting.add_assign(&Text::new());
    assert!(!greeting.is_set());
}

#[test]
fn text_pipe_appends() {
    let mut log = Text::new();
    for part in [Text::of("a"), Text::new(), Text::of("b"), Text::of("c")] {
        log.pipe(&part);
    }
    assert_eq!(log.get(), Some("abc"));
}

#[test]
fn text_queries() {
    let text = Text::of("Straße");
    assert_eq!(text.length().get(), Some(6), "length counts characters");
    assert!(text.contains(&Text::of("aß")).is_true());
    assert!(text.contains(&Text::of("x")).is_false());
    assert!(!text.contains(&Text::new()).is_set());
    assert_eq!(text.first().get(), Some('S'));
    assert_eq!(text.last().get(), Some('e'));
    assert!(!Text::of("").first().is_set());
    assert_eq!(Text::of("banana").count(&Character::of('a')).get(), Some(3));
    assert!(Text::of("   ").is_empty().is_true());
    assert!(Text::of("").is_empty().is_true());
    assert!(Text::of(" x ").is_empty().is_false());
    assert!(!Text::new().is_empty().is_set());
}

#[test]
fn text_transformations() {
    assert_eq!(Text::of("MiXed").upper_case().get(), Some("MIXED"));
    assert_eq!(Text::of("MiXed").lower_case().get(), Some("mixed"));
    assert_eq!(Text::of("  padded \t").trim().get(), Some("padded"));
    assert_eq!(Text::of("7").left_padded(&Integer::of(3)).get(), Some("  7"));
    assert_eq!(Text::of("7").right_padded(&Integer::of(3)).get(), Some("7  "));
    assert_eq!(Text::of("long").left_padded(&Integer::of(2)).get(), Some("long"));
    assert!(!Text::of("7").left_padded(&Integer::new()).is_set());
    assert_eq!(Text::of("7").left_padded(&Integer::of(-4)).get(), Some("7"));
}

#[test]
fn unallocatable_padding_is_unset() {
    let x = Text::of("x");
    assert!(!x.left_padded(&Integer::of(i64::MAX)).is_set());
    assert!(!x.right_padded(&Integer::of(i64::MAX)).is_set());
    assert!(!x.left_padded(&Integer::of(i64::MAX / 2)).is_set());
}

#[test]
fn text_comparison_and_fuzzy() {
    let apple = Text::of("apple");
    let banana = Text::of("banana");
    assert_eq!(apple.compare(&banana).get(), Some(-1));
    assert!(apple.equals(&Text::of("apple")).is_true());
    assert!(!apple.equals(&Text::new()).is_set());
    assert_eq!(Text::of("kitten").fuzzy(&Text::of("sitting")).get(), Some(3));
    assert_eq!(Text::of("Steve").fuzzy(&Text::of("steve")).get(), Some(0));
    assert_eq!(Text::of("").fuzzy(&Text::of("abc")).get(), Some(3));
}

#[test]
fn text_chars_iterates_in_order() {
    let mut chars = Text::of("ok").chars();
    assert!(chars.has_next().is_true());
    assert_eq!(chars.next().unwrap().get(), Some('o'));
    assert_eq!(chars.next().unwrap().get(), Some('k'));
    assert!(chars.has_next().is_false());
    assert!(!Text::of("").chars().is_set());
    assert!(!Text::new().chars().is_set());
}

#[test]
fn text_parse_is_identity() {
    let parsed = Text::parse("anything at all");
    assert_eq!(parsed.get(), Some("anything at all"));
    assert_eq!(Text::parse(&parsed.as_text().to_string()), parsed);
    assert_eq!(parsed.to_json(), Some(serde_json::json!("anything at all")));
    assert_eq!(parsed.hash_code(), Text::of("anything at all").hash_code());
}
