use mapper::{Mapper, TwoWay, TwoWayMapper, mapper, two_way_mapper};
use pretty_assertions::assert_eq;

fn digits(source: Option<String>) -> Option<i32> {
    source?
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()
}

#[test]
fn optional_string_and_int() {
    let mapper = two_way_mapper::<Option<String>, Option<i32>>(digits, |n| n.map(|n| n.to_string()));

    assert_eq!(mapper.map_forward(Some("qwer00rty00-=*".to_owned())), Some(0));
    assert_eq!(mapper.map_forward(Some("1q2w3e4r5r6t7y8-9=*".to_owned())), Some(123456789));
    assert_eq!(mapper.map_forward(None), None);
    assert_eq!(mapper.map_backward(Some(0)), Some("0".to_owned()));
    assert_eq!(mapper.map_backward(Some(123)), Some("123".to_owned()));
    assert_eq!(mapper.map_backward(None), None);
}

#[test]
fn round_trip_is_not_guaranteed() {
    let mapper = two_way_mapper::<Option<String>, Option<i32>>(digits, |n| n.map(|n| n.to_string()));
    let source = Some("a1b2".to_owned());
    assert_eq!(mapper.map_backward(mapper.map_forward(source)), Some("12".to_owned()));
}

#[test]
fn built_from_existing_mappers() {
    let forward = mapper(|s: String| s.len());
    let backward = mapper(|n: usize| "#".repeat(n));
    let mapper = TwoWay::new(forward, backward);

    assert_eq!(mapper.forward().map("abc".to_owned()), 3);
    assert_eq!(mapper.backward().map(2), "##");
    assert_eq!(mapper.map_backward(mapper.map_forward("hello".to_owned())), "#####");
}

fn reverse(mapper: &impl TwoWayMapper<String, Vec<char>>, chars: Vec<char>) -> String {
    mapper.map_backward(chars.into_iter().rev().collect())
}

#[test]
fn usable_through_the_trait() {
    let mapper = two_way_mapper::<String, Vec<char>>(|s| s.chars().collect(), |c| c.into_iter().collect());
    let chars = mapper.map_forward("stressed".to_owned());
    assert_eq!(reverse(&mapper, chars), "desserts");
}
