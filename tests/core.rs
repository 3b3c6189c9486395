use anyhow::Result;
use lazyseq::testing::*;
use lazyseq::*;
use std::cell::RefCell;

fn ages(values: &[u32]) -> Vec<Record> {
    values
        .iter()
        .enumerate()
        .map(|(i, age)| Record::new(format!("p{i}"), *age))
        .collect()
}

#[test]
fn of_then_for_each_visits_values_in_order() -> Result<()> {
    let mut seen = Vec::new();
    of(["one", "two", "three"]).for_each(|s| seen.push(s))?;
    assert_collections_equal(&seen, &["one", "two", "three"]);
    Ok(())
}

#[test]
fn map_preserves_count_and_order() -> Result<()> {
    let mut via_map = Vec::new();
    from_vec(sample_records())
        .map(|r| r.name().len())
        .for_each(|n| via_map.push(n))?;

    let mut direct = Vec::new();
    from_vec(sample_records()).for_each(|r| direct.push(r.name().len()))?;

    assert_eq!(via_map, direct);
    assert_eq!(via_map, vec![3, 3, 5]);
    Ok(())
}

#[test]
fn filter_keeps_relative_order() -> Result<()> {
    let adults = from_vec(sample_records())
        .filter(|r| r.age() > 20)
        .to_vec()?;
    assert_collections_equal(&adults, &[Record::new("Bob", 30), Record::new("Carol", 60)]);
    Ok(())
}

#[test]
fn filter_rejecting_everything_is_empty() -> Result<()> {
    let mut seq = from_vec(sample_records()).filter(|_| false);
    assert_yields(&mut seq, &[]);
    Ok(())
}

#[test]
fn intermediate_operations_do_not_pull() -> Result<()> {
    let pulled = RefCell::new(0);
    let mut seq = generate(|| {
        *pulled.borrow_mut() += 1;
        7
    })
    .map(|x| x * 2)
    .filter(|x| *x > 0)
    .peek(|_| {})
    .limit(3);

    assert_eq!(*pulled.borrow(), 0);
    assert_eq!(seq.to_vec()?, vec![14, 14, 14]);
    assert_eq!(*pulled.borrow(), 3);
    Ok(())
}

#[test]
fn each_element_passes_all_stages_before_the_next_is_pulled() -> Result<()> {
    let log = RefCell::new(Vec::new());
    from_vec(vec![1, 2])
        .peek(|x| log.borrow_mut().push(format!("a{x}")))
        .map(|x| x * 10)
        .peek(|x| log.borrow_mut().push(format!("b{x}")))
        .for_each(|x| log.borrow_mut().push(format!("t{x}")))?;
    assert_eq!(
        log.into_inner(),
        vec!["a1", "b10", "t10", "a2", "b20", "t20"]
    );
    Ok(())
}

#[test]
fn map_peek_filter_pipeline_over_ages() -> Result<()> {
    let peeked = RefCell::new(Vec::new());
    let mut adults = Vec::new();
    from_vec(sample_records())
        .map(|r| r.age())
        .peek(|age| peeked.borrow_mut().push(*age))
        .filter(|age| *age > 20)
        .for_each(|age| adults.push(age))?;
    assert_eq!(peeked.into_inner(), vec![30, 19, 60]);
    assert_eq!(adults, vec![30, 60]);
    Ok(())
}

#[test]
fn peek_skipped_for_elements_never_pulled() -> Result<()> {
    let peeked = RefCell::new(Vec::new());
    let found = of([1, 2, 3, 4])
        .peek(|x| peeked.borrow_mut().push(*x))
        .any_match(|x| *x == 2)?;
    assert!(found);
    assert_eq!(peeked.into_inner(), vec![1, 2]);
    Ok(())
}

#[test]
fn matchers_over_ages() -> Result<()> {
    let people = ages(&[20, 30, 60]);
    assert!(from_vec(people.clone()).any_match(|p| p.age() > 20)?);
    assert!(!from_vec(people.clone()).all_match(|p| p.age() > 20)?);
    assert!(!from_vec(people).none_match(|p| p.age() > 20)?);
    Ok(())
}

#[test]
fn matchers_on_empty_sequence() -> Result<()> {
    assert!(!empty::<u32>().any_match(|_| true)?);
    assert!(empty::<u32>().all_match(|_| false)?);
    assert!(empty::<u32>().none_match(|_| true)?);
    Ok(())
}

#[test]
fn any_match_stops_pulling_at_first_hit() -> Result<()> {
    let pulled = RefCell::new(0);
    let hit = iterate(1u32, |n| n + 1)
        .peek(|_| *pulled.borrow_mut() += 1)
        .any_match(|n| *n == 4)?;
    assert!(hit);
    assert_eq!(*pulled.borrow(), 4);
    Ok(())
}

#[test]
fn all_match_stops_at_first_counterexample() -> Result<()> {
    let pulled = RefCell::new(0);
    let all = iterate(1u32, |n| n + 1)
        .peek(|_| *pulled.borrow_mut() += 1)
        .all_match(|n| *n < 3)?;
    assert!(!all);
    assert_eq!(*pulled.borrow(), 3);
    Ok(())
}

#[test]
fn reduce_sums_ages() -> Result<()> {
    let total = from_vec(sample_records())
        .map(|r| r.age())
        .reduce(0, |a, b| a + b)?;
    assert_eq!(total, 109);
    Ok(())
}

#[test]
fn reduce_of_empty_returns_identity() -> Result<()> {
    let total = empty::<u32>().reduce(0, |a, b| a + b)?;
    assert_eq!(total, 0);
    Ok(())
}

#[test]
fn reduce_folds_left_to_right() -> Result<()> {
    let joined = of(["a", "b", "c"])
        .map(str::to_string)
        .reduce(String::new(), |acc, s| acc + &s)?;
    assert_eq!(joined, "abc");
    Ok(())
}

#[test]
fn find_first_returns_first_adult() -> Result<()> {
    let first = from_vec(sample_records())
        .filter(|r| r.age() > 20)
        .find_first()?;
    assert_eq!(first, Some(Record::new("Bob", 30)));
    Ok(())
}

#[test]
fn find_any_returns_some_adult() -> Result<()> {
    let any = from_vec(sample_records())
        .filter(|r| r.age() > 20)
        .find_any()?
        .expect("an adult");
    assert!(any == Record::new("Bob", 30) || any == Record::new("Carol", 60));
    Ok(())
}

#[test]
fn find_on_empty_is_none() -> Result<()> {
    assert_eq!(empty::<u8>().find_first()?, None);
    assert_eq!(of([1, 3]).filter(|x| x % 2 == 0).find_any()?, None);
    Ok(())
}

#[test]
fn fold_count_collect_sum() -> Result<()> {
    let names = from_vec(sample_records()).fold(String::new(), |mut acc, r| {
        acc.push_str(r.name());
        acc
    })?;
    assert_eq!(names, "BobJimCarol");
    assert_eq!(from_vec(sample_records()).count()?, 3);
    let set: std::collections::BTreeSet<u32> = of([3, 1, 3]).collect()?;
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(from_vec(sample_records()).map(|r| r.age()).sum::<u32>()?, 109);
    Ok(())
}

#[test]
fn min_max_and_keyed_extremes() -> Result<()> {
    assert_eq!(of([4, 2, 9]).min()?, Some(2));
    assert_eq!(of([4, 2, 9]).max()?, Some(9));
    assert_eq!(empty::<i32>().max()?, None);

    let youngest = from_vec(sample_records()).min_by_key(|r| r.age())?;
    assert_eq!(youngest, Some(Record::new("Jim", 19)));
    let oldest = from_vec(sample_records()).max_by_key(|r| r.age())?;
    assert_eq!(oldest, Some(Record::new("Carol", 60)));
    Ok(())
}

#[test]
fn reduce_opt_without_identity() -> Result<()> {
    assert_eq!(of([1, 2, 3]).reduce_opt(|a, b| a * b)?, Some(6));
    assert_eq!(empty::<i32>().reduce_opt(|a, b| a * b)?, None);
    Ok(())
}

#[test]
fn into_iter_pulls_results() -> Result<()> {
    let values = of([1, 2, 3])
        .map(|x| x + 1)
        .into_iter()
        .collect::<lazyseq::Result<Vec<_>>>()?;
    assert_eq!(values, vec![2, 3, 4]);
    Ok(())
}

#[test]
fn record_accessors_and_display() {
    let bob = Record::new("Bob", 30);
    assert_eq!(bob.name(), "Bob");
    assert_eq!(bob.age(), 30);
    assert_eq!(bob.to_string(), "Bob/30");
}

#[test]
fn sequences_may_borrow_local_data() -> Result<()> {
    let threshold = 20;
    let people = sample_records();
    let names: Vec<&str> = from_iter(people.iter())
        .filter(|r| r.age() > threshold)
        .map(|r| r.name())
        .to_vec()?;
    assert_eq!(names, vec!["Bob", "Carol"]);
    Ok(())
}
