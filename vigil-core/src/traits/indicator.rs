use crate::errors::VigilResult;

/// Wraps a single health source in an indicator.
///
/// The preferred form is a plain closure: any `Fn(B) -> I` is a factory
/// through the blanket impl below. Fallible strategies surface their
/// failures through [`VigilResult`].
pub trait IndicatorFactory<B> {
    /// Indicator type this factory produces.
    type Indicator;

    /// Wrap one source in an indicator.
    fn create_indicator(&self, source: B) -> VigilResult<Self::Indicator>;
}

impl<B, I, F> IndicatorFactory<B> for F
where
    F: Fn(B) -> I,
{
    type Indicator = I;

    /// The result is exactly `factory(source)`.
    fn create_indicator(&self, source: B) -> VigilResult<I> {
        Ok(self(source))
    }
}
