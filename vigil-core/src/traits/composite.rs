use std::collections::HashMap;

/// Combines several named health sources into one contributor.
///
/// Supplied by each call site; the assembly layer never inspects the
/// result. Any `Fn(HashMap<String, B>) -> C` qualifies through the blanket
/// impl below.
pub trait CompositeFactory<B> {
    /// Contributor type this factory produces.
    type Contributor;

    /// Combine all named sources into a single contributor.
    fn create_composite(&self, sources: HashMap<String, B>) -> Self::Contributor;
}

impl<B, C, F> CompositeFactory<B> for F
where
    F: Fn(HashMap<String, B>) -> C,
{
    type Contributor = C;

    fn create_composite(&self, sources: HashMap<String, B>) -> C {
        self(sources)
    }
}
