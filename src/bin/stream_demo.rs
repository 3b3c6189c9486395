//! Walk through the ways to build, transform and consume a lazy sequence.
//!
//! Exits non-zero when the lines file (or the optional people file) cannot be
//! read.

use anyhow::{Context, Result};
use clap::Parser;
use lazyseq::testing::{sample_book, sample_records};
use lazyseq::*;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "stream_demo", about = "Lazy sequence demonstrations")]
struct Args {
    /// Text file whose lines are printed by the file example.
    #[arg(long, default_value = "/tmp/mytextfile.txt")]
    lines_path: PathBuf,

    /// JSONL file of `{"name": ..., "age": ...}` records; defaults to the
    /// built-in Bob/Jim/Carol set.
    #[arg(long)]
    people: Option<PathBuf>,

    /// Bound applied to the infinite examples.
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Seed for the random example.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let people = load_people(&args)?;
    examples_of_streams(&args)?;
    simple_map_reduce(&people)?;
    examples_of_matchers(&people)?;
    examples_of_find(&people)?;
    examples_of_reduce(&people)?;
    example_of_lines(&args)?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

fn load_people(args: &Args) -> Result<Vec<Record>> {
    match &args.people {
        Some(path) => read_jsonl::<Record>(path)
            .and_then(|mut people| people.to_vec())
            .with_context(|| format!("load people from {}", path.display())),
        None => Ok(sample_records()),
    }
}

fn examples_of_streams(args: &Args) -> Result<()> {
    println!("== construction ==");

    let none: Vec<&str> = empty().to_vec()?;
    println!("empty: {none:?}");
    println!("singleton: {:?}", once("one").to_vec()?);
    println!("several: {:?}", seq!["one", "two", "three"].to_vec()?);

    let constant = generate(|| "one").limit(args.limit).to_vec()?;
    println!("generate: {constant:?}");

    let growing = iterate("+".to_string(), |s| format!("{s}+"))
        .limit(args.limit)
        .to_vec()?;
    println!("iterate: {growing:?}");

    let random = match args.seed {
        Some(seed) => random_ints_seeded(seed),
        None => random_ints(),
    };
    println!("random: {:?}", random.limit(args.limit).to_vec()?);

    println!("chars: {:?}", chars("hello").to_vec()?);

    let words = split(sample_book(), r"[^\p{L}]")?.to_vec()?;
    println!("split: {words:?}");

    let mut builder = SeqBuilder::new();
    builder.add("one")?.add("two")?.add("three")?;
    builder.accept("four")?;
    builder.build()?.for_each(|s| println!("built: {s}"))?;

    let plan = iterate(1u64, |n| n * 2).filter(|n| n % 3 != 0).limit(args.limit);
    println!("{}", plan.explain());
    Ok(())
}

fn simple_map_reduce(people: &[Record]) -> Result<()> {
    println!("== map / peek / filter ==");
    from_vec(people.to_vec())
        .map(|p| p.age())
        .peek(|age| println!("peek: {age}"))
        .filter(|age| *age > 20)
        .for_each(|age| println!("adult age: {age}"))?;

    from_vec(people.to_vec())
        .filter(|p| p.age() > 20)
        .for_each(|p| println!("adult: {p}"))?;
    Ok(())
}

fn examples_of_matchers(people: &[Record]) -> Result<()> {
    println!("== matchers ==");
    let any = from_vec(people.to_vec()).any_match(|p| p.age() > 20)?;
    let all = from_vec(people.to_vec()).all_match(|p| p.age() > 20)?;
    let none = from_vec(people.to_vec()).none_match(|p| p.age() > 20)?;
    println!("any: {any}, all: {all}, none: {none}");
    Ok(())
}

fn examples_of_find(people: &[Record]) -> Result<()> {
    println!("== find ==");
    let first = from_vec(people.to_vec()).filter(|p| p.age() > 20).find_first()?;
    let any = from_vec(people.to_vec()).filter(|p| p.age() > 20).find_any()?;
    println!("first: {first:?}, any: {any:?}");
    Ok(())
}

fn examples_of_reduce(people: &[Record]) -> Result<()> {
    println!("== reduce ==");
    let total = from_vec(people.to_vec()).map(|p| p.age()).reduce(0, |a, b| a + b)?;
    let total_par = from_vec(people.to_vec()).map(|p| p.age()).reduce_par(0, |a, b| a + b)?;
    println!("sum of ages: {total} (parallel: {total_par})");
    Ok(())
}

fn example_of_lines(args: &Args) -> Result<()> {
    println!("== lines of {} ==", args.lines_path.display());
    lines(&args.lines_path)
        .and_then(|mut file| file.for_each(|line| println!("{line}")))
        .with_context(|| format!("read {}", args.lines_path.display()))
}
