//! Square sequence producer

use crate::core::data::NumericSequence;

/// Lazy adaptor yielding the square of each input value in order
#[derive(Debug, Clone)]
pub struct Squares<I> {
    inner: I,
}

impl<I> Squares<I>
where
    I: Iterator<Item = f64>,
{
    pub fn new<T>(numbers: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: numbers.into_iter(),
        }
    }
}

impl<I> Iterator for Squares<I>
where
    I: Iterator<Item = f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next().map(|n| n * n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> ExactSizeIterator for Squares<I> where I: ExactSizeIterator<Item = f64> {}

/// Square every number, preserving order and length. NaN stays NaN.
pub fn squares(numbers: &[f64]) -> NumericSequence {
    Squares::new(numbers.iter().copied()).collect()
}
