use anyhow::Result;
use lazyseq::testing::*;
use lazyseq::*;
use regex::Regex;

#[test]
fn splits_book_into_words() -> Result<()> {
    let words = split(sample_book(), r"[^\p{L}]")?.to_vec()?;
    assert_eq!(words.len(), 15);
    assert_eq!(words.first(), Some(&"Here"));
    assert_eq!(words.last(), Some(&"book"));
    Ok(())
}

#[test]
fn interior_empty_pieces_are_kept() -> Result<()> {
    assert_yields(&mut split("a,,b", ",")?, &["a", "", "b"]);
    assert_yields(&mut split(",a", ",")?, &["", "a"]);
    Ok(())
}

#[test]
fn trailing_empty_pieces_are_dropped() -> Result<()> {
    assert_yields(&mut split("a,b,,", ",")?, &["a", "b"]);
    assert_yields(&mut split(",,,", ",")?, &[]);
    Ok(())
}

#[test]
fn no_match_yields_whole_text() -> Result<()> {
    assert_yields(&mut split("abc", ",")?, &["abc"]);
    assert_yields(&mut split("", ",")?, &[""]);
    assert_yields(&mut split("", "")?, &[""]);
    Ok(())
}

#[test]
fn zero_width_matches_split_between_characters() -> Result<()> {
    assert_yields(&mut split("abc", "")?, &["a", "b", "c"]);
    assert_yields(&mut split("axb", "x*")?, &["a", "", "b"]);
    assert_yields(&mut split("héllo", "")?, &["h", "é", "l", "l", "o"]);
    Ok(())
}

#[test]
fn empty_match_after_a_match_separates_an_empty_piece() -> Result<()> {
    assert_yields(&mut split("a,b", ",*")?, &["a", "", "b"]);
    assert_yields(&mut split("aab", "a*")?, &["", "", "b"]);
    assert_yields(&mut split("a", "a*")?, &[]);
    Ok(())
}

#[test]
fn precompiled_regex_is_reusable() -> Result<()> {
    let comma = Regex::new(r"\s*,\s*")?;
    assert_yields(&mut split_regex("a , b,c", &comma), &["a", "b", "c"]);
    assert_yields(&mut split_regex("x,y", &comma), &["x", "y"]);
    Ok(())
}

#[test]
fn invalid_pattern_is_reported() {
    let err = split("abc", "(").expect_err("unbalanced group");
    assert!(matches!(err, SeqError::InvalidPattern { ref pattern, .. } if pattern == "("));
}

#[test]
fn split_is_pulled_lazily() -> Result<()> {
    let first = split("alpha beta gamma", " ")?.find_first()?;
    assert_eq!(first, Some("alpha"));
    Ok(())
}
