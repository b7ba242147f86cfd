//! Dispatch between the single-indicator and composite assembly paths.

use std::collections::HashMap;

use vigil_core::errors::{CompositionError, VigilResult};
use vigil_core::traits::{CompositeFactory, IndicatorFactory};

use crate::convert::ConvertFactory;

/// Builds one contributor out of a set of named health sources.
///
/// Holds an indicator factory for the sole-source case and a composite
/// factory for everything else. Both are fixed at construction; the builder
/// keeps no other state, so sharing it across threads is safe whenever the
/// factories themselves are.
#[derive(Debug, Clone)]
pub struct ContributorBuilder<IF, CF> {
    indicators: IF,
    composites: CF,
}

impl<IF, CF> ContributorBuilder<IF, CF> {
    /// Create a builder from an explicit indicator factory (usually a
    /// closure) and a composite factory.
    pub fn new(indicators: IF, composites: CF) -> Self {
        Self {
            indicators,
            composites,
        }
    }

    /// Combine the given named sources into a single contributor.
    ///
    /// Exactly one entry wraps that source as an indicator; more than one
    /// delegates to the composite factory with the mapping unchanged. An
    /// empty mapping fails with [`CompositionError::EmptySources`].
    pub fn create_contributor<B>(
        &self,
        sources: HashMap<String, B>,
    ) -> VigilResult<CF::Contributor>
    where
        IF: IndicatorFactory<B>,
        CF: CompositeFactory<B>,
        IF::Indicator: Into<CF::Contributor>,
    {
        if sources.len() > 1 {
            tracing::debug!(
                event = "composite_selected",
                source_count = sources.len(),
                "combining sources into a composite contributor"
            );
            return Ok(self.composites.create_composite(sources));
        }
        match sources.into_iter().next() {
            Some((name, source)) => {
                tracing::debug!(
                    event = "indicator_selected",
                    source = %name,
                    "wrapping sole source as an indicator"
                );
                Ok(self.indicators.create_indicator(source)?.into())
            }
            None => Err(CompositionError::EmptySources.into()),
        }
    }

    /// Wrap one source using the configured indicator factory.
    pub fn create_indicator<B>(&self, source: B) -> VigilResult<IF::Indicator>
    where
        IF: IndicatorFactory<B>,
    {
        self.indicators.create_indicator(source)
    }
}

impl<B, I, CF> ContributorBuilder<ConvertFactory<B, I>, CF> {
    /// Create a builder that derives indicators from the source type itself
    /// via the indicator's [`TryFrom`] conversion.
    #[deprecated(
        note = "supply an explicit indicator factory through `ContributorBuilder::new`"
    )]
    pub fn converting(composites: CF) -> Self {
        Self {
            indicators: ConvertFactory::new(),
            composites,
        }
    }
}
