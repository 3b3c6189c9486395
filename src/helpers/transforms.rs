use crate::sequence::LazySeq;
use crate::stage::Stage;
use std::collections::HashSet;
use std::hash::Hash;

impl<'a, T: 'a> LazySeq<'a, T> {
    /// Stop after at most `n` elements. This is the usual way to bound an
    /// infinite source.
    pub fn limit(self, n: usize) -> LazySeq<'a, T> {
        self.chain(Stage::Limit(n), move |pull| Box::new(pull.take(n)))
    }

    /// Discard the first `n` elements.
    pub fn skip(self, n: usize) -> LazySeq<'a, T> {
        self.chain(Stage::Skip(n), move |pull| Box::new(pull.skip(n)))
    }

    /// Replace each element with the elements of `f(element)`.
    pub fn flat_map<O, I, F>(self, mut f: F) -> LazySeq<'a, O>
    where
        O: 'a,
        I: IntoIterator<Item = O>,
        I::IntoIter: 'a,
        F: FnMut(T) -> I + 'a,
    {
        self.chain(Stage::FlatMap, move |pull| {
            Box::new(pull.flat_map(move |item| -> crate::sequence::Pull<'a, O> {
                match item {
                    Ok(value) => Box::new(f(value).into_iter().map(Ok)),
                    Err(err) => Box::new(std::iter::once(Err(err))),
                }
            }))
        })
    }

    /// Yield elements while `pred` holds; stop at the first one that fails it.
    ///
    /// Read errors pass through without being tested.
    pub fn take_while<P>(self, mut pred: P) -> LazySeq<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Stage::TakeWhile, move |pull| {
            Box::new(pull.take_while(move |item| item.as_ref().map_or(true, &mut pred)))
        })
    }

    /// Discard elements while `pred` holds, then yield everything after.
    pub fn drop_while<P>(self, mut pred: P) -> LazySeq<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(Stage::DropWhile, move |pull| {
            Box::new(pull.skip_while(move |item| item.as_ref().is_ok_and(&mut pred)))
        })
    }

    /// Drop elements equal to one already yielded. Keeps the first occurrence.
    pub fn distinct(self) -> LazySeq<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        self.chain(Stage::Distinct, move |pull| {
            let mut seen = HashSet::new();
            Box::new(pull.filter(move |item| match item {
                Ok(value) => seen.insert(value.clone()),
                Err(_) => true,
            }))
        })
    }
}
