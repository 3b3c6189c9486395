use anyhow::Result;
use lazyseq::testing::*;
use lazyseq::*;
use std::cell::Cell;

#[test]
fn empty_once_and_literals() -> Result<()> {
    assert_yields(&mut empty::<&str>(), &[]);
    assert_yields(&mut once("one"), &["one"]);
    assert_yields(&mut seq!["one", "two", "three"], &["one", "two", "three"]);
    let mut nothing: LazySeq<'_, i32> = seq![];
    assert_yields(&mut nothing, &[]);
    Ok(())
}

#[test]
fn generate_calls_supplier_once_per_pull() -> Result<()> {
    let calls = Cell::new(0);
    let mut ones = generate(|| {
        calls.set(calls.get() + 1);
        "one"
    })
    .limit(4);
    assert_eq!(calls.get(), 0);
    assert_yields(&mut ones, &["one"; 4]);
    assert_eq!(calls.get(), 4);
    Ok(())
}

#[test]
fn iterate_grows_from_seed() -> Result<()> {
    let mut plus = iterate("+".to_string(), |s| format!("{s}+")).limit(3);
    assert_yields(&mut plus, &["+".to_string(), "++".to_string(), "+++".to_string()]);
    Ok(())
}

#[test]
fn iterate_applies_step_only_when_pulled() -> Result<()> {
    let steps = Cell::new(0);
    let values = iterate(1u64, |n| {
        steps.set(steps.get() + 1);
        n * 3
    })
    .limit(4)
    .to_vec()?;
    assert_eq!(values, vec![1, 3, 9, 27]);
    assert_eq!(steps.get(), 3);
    Ok(())
}

#[test]
fn iterate_while_stops_before_first_failure() -> Result<()> {
    let mut powers = iterate_while(1u32, |n| *n < 100, |n| n * 2);
    assert_yields(&mut powers, &[1, 2, 4, 8, 16, 32, 64]);

    let mut none = iterate_while(5, |n| *n < 0, |n| n + 1);
    assert_yields(&mut none, &[]);
    Ok(())
}

#[test]
fn seeded_random_ints_are_reproducible() -> Result<()> {
    let a = random_ints_seeded(42).limit(8).to_vec()?;
    let b = random_ints_seeded(42).limit(8).to_vec()?;
    assert_eq!(a.len(), 8);
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn random_ints_in_stay_in_range() -> Result<()> {
    let all_in_range = random_ints_in(-3..3)?.limit(200).all_match(|n| (-3..3).contains(n))?;
    assert!(all_in_range);
    assert_eq!(random_ints().limit(5).count()?, 5);
    Ok(())
}

#[test]
fn random_ints_in_rejects_empty_range() {
    let err = random_ints_in(4..4).expect_err("empty range");
    assert!(matches!(err, SeqError::EmptyRange { start: 4, end: 4 }));
    #[allow(clippy::reversed_empty_ranges)]
    let reversed = random_ints_in(5..1);
    assert!(reversed.is_err());
}

#[test]
fn chars_in_encounter_order() -> Result<()> {
    assert_yields(&mut chars("hello"), &['h', 'e', 'l', 'l', 'o']);
    assert_yields(&mut chars("né🦀"), &['n', 'é', '🦀']);
    assert_yields(&mut chars(""), &[]);
    Ok(())
}

#[test]
fn from_iter_is_lazy_and_detects_unbounded_iterators() -> Result<()> {
    let bounded = from_iter(vec![1, 2, 3]);
    assert!(bounded.is_bounded());

    let mut naturals = from_iter(0u64..);
    assert!(!naturals.is_bounded());
    assert_eq!(naturals.find_first()?, Some(0));

    let mut evens = from_iter(0u64..).filter(|n| n % 2 == 0).limit(3);
    assert!(evens.is_bounded());
    assert_yields(&mut evens, &[0, 2, 4]);
    Ok(())
}

#[test]
fn infinite_sources_report_unbounded_plans() {
    assert!(!generate(|| 1).is_bounded());
    assert!(!iterate(0, |n| n + 1).is_bounded());
    assert!(!random_ints().is_bounded());
    assert!(generate(|| 1).limit(2).is_bounded());
    assert!(iterate(0, |n| n + 1).take_while(|n| *n < 3).is_bounded());
    assert!(of([1]).is_bounded());
}
