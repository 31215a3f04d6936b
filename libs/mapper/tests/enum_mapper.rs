use mapper::{EnumMapper, Enumerable, MapperError, TwoWayMapper, enum_mapper, enum_mapper_all};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerable)]
enum Number {
    One,
    Two,
    Three,
    Four,
    Unknown,
}

fn number_value(number: Number) -> Option<i32> {
    match number {
        Number::One => Some(1),
        Number::Two => Some(2),
        Number::Three => Some(3),
        Number::Four => Some(4),
        Number::Unknown => None,
    }
}

// ---------------------------------------------------------------------------
// derive
// ---------------------------------------------------------------------------

#[test]
fn derived_entries_in_declaration_order() {
    assert_eq!(
        Number::ENTRIES,
        &[Number::One, Number::Two, Number::Three, Number::Four, Number::Unknown]
    );
}

// ---------------------------------------------------------------------------
// forward / backward
// ---------------------------------------------------------------------------

#[test]
fn numbers_both_directions() {
    let mapper = enum_mapper_all(Number::Unknown, number_value);

    assert_eq!(mapper.map_forward(Number::Unknown), None);
    assert_eq!(mapper.map_forward(Number::One), Some(1));
    assert_eq!(mapper.map_forward(Number::Two), Some(2));
    assert_eq!(mapper.map_backward(Some(3)), Number::Three);
    assert_eq!(mapper.map_backward(Some(4)), Number::Four);
    assert_eq!(mapper.map_backward(Some(123)), Number::Unknown);
}

#[test]
fn every_member_round_trips_when_values_are_distinct() {
    let mapper = enum_mapper_all(Number::One, number_value);
    for &number in Number::ENTRIES {
        assert_eq!(mapper.map_backward(mapper.map_forward(number)), number);
    }
}

#[test]
fn explicit_member_list_matches_derived() {
    let explicit = enum_mapper(Number::Unknown, Number::ENTRIES.iter().copied(), number_value);
    let derived = EnumMapper::from_enum(Number::Unknown, number_value);

    let explicit: Vec<_> = explicit.associations().map(|(m, v)| (*m, *v)).collect();
    let derived: Vec<_> = derived.associations().map(|(m, v)| (*m, *v)).collect();
    assert_eq!(explicit, derived);
}

#[test]
fn default_is_exposed() {
    let mapper = enum_mapper_all(Number::Unknown, number_value);
    assert_eq!(*mapper.default(), Number::Unknown);
}

// ---------------------------------------------------------------------------
// shared values
// ---------------------------------------------------------------------------

fn parity(number: Number) -> &'static str {
    match number {
        Number::One | Number::Three => "odd",
        Number::Two | Number::Four => "even",
        Number::Unknown => "?",
    }
}

#[test]
fn shared_value_resolves_to_earliest_member() {
    let mapper = enum_mapper_all(Number::Unknown, parity);
    assert_eq!(mapper.map_backward("odd"), Number::One);
    assert_eq!(mapper.map_backward("even"), Number::Two);
}

#[test]
fn earliest_means_list_order() {
    let reordered = [Number::Four, Number::Three, Number::Two, Number::One, Number::Unknown];
    let mapper = enum_mapper(Number::Unknown, reordered, parity);
    assert_eq!(mapper.map_backward("odd"), Number::Three);
    assert_eq!(mapper.map_backward("even"), Number::Four);
}

// ---------------------------------------------------------------------------
// misses
// ---------------------------------------------------------------------------

#[test]
fn miss_falls_back_without_error() {
    let mapper = enum_mapper_all(Number::Two, parity);
    assert_eq!(mapper.map_backward("prime"), Number::Two);
    assert_eq!(mapper.map_backward(""), Number::Two);
}

#[test]
fn try_map_backward_reports_miss() {
    let mapper = enum_mapper_all(Number::Unknown, number_value);
    assert_eq!(mapper.try_map_backward(&Some(1)), Ok(Number::One));
    assert_eq!(mapper.try_map_backward(&None), Ok(Number::Unknown));
    assert_eq!(mapper.try_map_backward(&Some(123)), Err(MapperError::Unassociated));
}

#[test]
fn mapper_can_be_shared_across_threads() {
    let mapper = enum_mapper_all(Number::Unknown, number_value);
    std::thread::scope(|scope| {
        for &number in Number::ENTRIES {
            let mapper = &mapper;
            scope.spawn(move || {
                assert_eq!(mapper.map_backward(mapper.map_forward(number)), number);
            });
        }
    });
}
