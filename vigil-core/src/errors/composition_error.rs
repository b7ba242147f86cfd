/// Contributor assembly errors.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
    #[error("health sources must not be empty")]
    EmptySources,

    #[error("unable to create health indicator {indicator_type} for source type {source_type}")]
    IndicatorConstruction {
        indicator_type: &'static str,
        source_type: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
