//! Sample health-check domain used by the workspace integration tests.
//!
//! Models a tiny probe system: named sources, one-probe indicators, and a
//! probe group playing the composite contributor role.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vigil_core::errors::VigilResult;
use vigil_core::traits::{CompositeFactory, IndicatorFactory};

/// Reported state of a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Up,
    Down,
}

/// A health-check source: one endpoint an indicator can interrogate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub endpoint: String,
    pub reachable: bool,
}

impl Probe {
    pub fn up(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reachable: true,
        }
    }

    pub fn down(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reachable: false,
        }
    }
}

/// Why a probe could not be wrapped in an indicator.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("probe endpoint must not be empty")]
    MissingEndpoint,
}

/// Health indicator for a single probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeIndicator {
    pub endpoint: String,
    pub status: ProbeStatus,
    pub checked_at: DateTime<Utc>,
}

impl ProbeIndicator {
    /// Interrogate one probe, stamping the check time.
    pub fn new(probe: Probe) -> Self {
        let status = if probe.reachable {
            ProbeStatus::Up
        } else {
            ProbeStatus::Down
        };
        Self {
            endpoint: probe.endpoint,
            status,
            checked_at: Utc::now(),
        }
    }
}

impl TryFrom<Probe> for ProbeIndicator {
    type Error = ProbeError;

    fn try_from(probe: Probe) -> Result<Self, Self::Error> {
        if probe.endpoint.is_empty() {
            return Err(ProbeError::MissingEndpoint);
        }
        Ok(Self::new(probe))
    }
}

/// Composite contributor: the indicators for every named probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeGroup {
    pub members: HashMap<String, ProbeIndicator>,
}

impl ProbeGroup {
    /// Wrap every named probe; unreachable probes still join the group.
    pub fn from_probes(probes: HashMap<String, Probe>) -> Self {
        let members = probes
            .into_iter()
            .map(|(name, probe)| (name, ProbeIndicator::new(probe)))
            .collect();
        Self { members }
    }

    /// Worst status across members: down if any member is down.
    pub fn status(&self) -> ProbeStatus {
        if self.members.values().any(|m| m.status == ProbeStatus::Down) {
            ProbeStatus::Down
        } else {
            ProbeStatus::Up
        }
    }
}

/// Anything that can sit at the top of the probe health tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeContributor {
    Indicator(ProbeIndicator),
    Group(ProbeGroup),
}

impl ProbeContributor {
    /// Overall status of this contributor.
    pub fn status(&self) -> ProbeStatus {
        match self {
            Self::Indicator(indicator) => indicator.status,
            Self::Group(group) => group.status(),
        }
    }
}

impl From<ProbeIndicator> for ProbeContributor {
    fn from(indicator: ProbeIndicator) -> Self {
        Self::Indicator(indicator)
    }
}

impl From<ProbeGroup> for ProbeContributor {
    fn from(group: ProbeGroup) -> Self {
        Self::Group(group)
    }
}

/// Explicit indicator factory for probes, in its named-strategy form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeIndicatorFactory;

impl IndicatorFactory<Probe> for ProbeIndicatorFactory {
    type Indicator = ProbeIndicator;

    fn create_indicator(&self, source: Probe) -> VigilResult<ProbeIndicator> {
        Ok(ProbeIndicator::new(source))
    }
}

/// Composite factory producing a [`ProbeGroup`] contributor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeGroupFactory;

impl CompositeFactory<Probe> for ProbeGroupFactory {
    type Contributor = ProbeContributor;

    fn create_composite(&self, sources: HashMap<String, Probe>) -> ProbeContributor {
        ProbeContributor::Group(ProbeGroup::from_probes(sources))
    }
}
