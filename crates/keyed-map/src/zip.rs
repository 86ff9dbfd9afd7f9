use rust_utils::iter::map_collect_vec;

/// Aligns several iterables by position.
///
/// Each item is a row holding the n-th element of every iterable.
/// Iteration stops as soon as any of them is exhausted.
/// With no iterables at all, the rows are empty and never run out.
pub struct Rows<I> {
    iters: Vec<I>,
}

pub fn rows<T>(iterables: impl IntoIterator<Item = T>) -> Rows<T::IntoIter>
where
    T: IntoIterator,
{
    Rows {
        iters: map_collect_vec(iterables, IntoIterator::into_iter),
    }
}

impl<I> Iterator for Rows<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iters.iter_mut().map(Iterator::next).collect()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.iters.is_empty() {
            return (usize::MAX, None);
        }
        let lo = self.iters.iter().map(|it| it.size_hint().0).min().unwrap_or(0);
        let hi = self.iters.iter().filter_map(|it| it.size_hint().1).min();
        (lo, hi)
    }
}
