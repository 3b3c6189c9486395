use anyhow::Result;
use lazyseq::testing::*;
use lazyseq::*;

#[test]
fn debug_inspect_passes_elements_through() -> Result<()> {
    init_test_tracing();
    let doubled = of(1..=20)
        .debug_inspect("source")
        .map(|x| x * 2)
        .debug_inspect("doubled")
        .to_vec()?;
    assert_eq!(doubled.len(), 20);
    assert_eq!(doubled[19], 40);
    Ok(())
}

#[test]
fn debug_inspect_appears_in_plan() {
    let seq = chars("abc").debug_inspect("letters");
    let stages = seq.plan().stages();
    assert_eq!(stages.last(), Some(&Stage::Inspect("letters".to_string())));
    assert!(seq.explain().to_string().contains("letters"));
}

#[test]
fn debug_inspect_keeps_laziness() -> Result<()> {
    init_test_tracing();
    let first = iterate(0u32, |n| n + 1).debug_inspect("naturals").find_first()?;
    assert_eq!(first, Some(0));
    Ok(())
}
