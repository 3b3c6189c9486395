use anyhow::Result;
use lazyseq::testing::*;
use lazyseq::*;

#[test]
fn builder_chains_adds_and_accepts() -> Result<()> {
    let mut builder = SeqBuilder::new();
    builder.add("one")?.add("two")?.add("three")?;
    builder.accept("four")?;
    assert_eq!(builder.len(), 4);

    let mut built = builder.build()?;
    assert!(builder.is_built());
    assert_yields(&mut built, &["one", "two", "three", "four"]);
    Ok(())
}

#[test]
fn builder_rejects_use_after_build() -> Result<()> {
    let mut builder = SeqBuilder::new();
    builder.add(1)?;
    let _seq = builder.build()?;

    assert_closed(builder.add(2).map(|_| ()));
    assert_closed(builder.accept(3));
    assert_closed(builder.build());
    assert!(builder.is_empty());
    Ok(())
}

#[test]
fn empty_builder_builds_empty_sequence() -> Result<()> {
    let mut builder = SeqBuilder::<String>::default();
    assert!(builder.is_empty());
    assert_yields(&mut builder.build()?, &[]);
    Ok(())
}

#[test]
fn built_sequence_is_fixed_at_build_time() -> Result<()> {
    let mut builder = SeqBuilder::new();
    builder.add(10)?;
    let mut seq = builder.build()?;
    let _ = builder.add(20);
    assert_yields(&mut seq, &[10]);
    Ok(())
}
