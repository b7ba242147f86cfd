//! Fallback indicator factory for call sites that predate explicit
//! factories: the indicator is derived from the source type itself.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use vigil_core::errors::{CompositionError, VigilResult};
use vigil_core::traits::IndicatorFactory;

/// Derives indicators through the indicator type's own `TryFrom<B>`
/// conversion.
///
/// Both type names are resolved once at construction and reused in every
/// diagnostic afterwards. Prefer an explicit closure factory; this strategy
/// exists for call sites written before factories were injectable.
pub struct ConvertFactory<B, I> {
    indicator_type: &'static str,
    source_type: &'static str,
    _strategy: PhantomData<fn(B) -> I>,
}

impl<B, I> ConvertFactory<B, I> {
    pub fn new() -> Self {
        Self {
            indicator_type: type_name::<I>(),
            source_type: type_name::<B>(),
            _strategy: PhantomData,
        }
    }

    /// Resolved indicator type name.
    pub fn indicator_type(&self) -> &'static str {
        self.indicator_type
    }

    /// Resolved source type name.
    pub fn source_type(&self) -> &'static str {
        self.source_type
    }
}

impl<B, I> Default for ConvertFactory<B, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, I> Clone for ConvertFactory<B, I> {
    fn clone(&self) -> Self {
        Self {
            indicator_type: self.indicator_type,
            source_type: self.source_type,
            _strategy: PhantomData,
        }
    }
}

impl<B, I> fmt::Debug for ConvertFactory<B, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertFactory")
            .field("indicator_type", &self.indicator_type)
            .field("source_type", &self.source_type)
            .finish()
    }
}

impl<B, I> IndicatorFactory<B> for ConvertFactory<B, I>
where
    I: TryFrom<B>,
    I::Error: std::error::Error + Send + Sync + 'static,
{
    type Indicator = I;

    /// Run the conversion; a failure names both resolved types and carries
    /// the underlying cause.
    fn create_indicator(&self, source: B) -> VigilResult<I> {
        I::try_from(source).map_err(|cause| {
            CompositionError::IndicatorConstruction {
                indicator_type: self.indicator_type,
                source_type: self.source_type,
                source: Box::new(cause),
            }
            .into()
        })
    }
}
