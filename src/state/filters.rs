// Endpoint filters for the endpoints tab.
// Flat single-select over "all" plus each group or status value.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{ApiGroup, Endpoint, EndpointStatus};
use crate::error::DashError;

/// Group filter: everything, or a single PSD2 service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(ApiGroup),
}

impl GroupFilter {
    /// Filter buttons in display order.
    pub const OPTIONS: [GroupFilter; 4] = [
        GroupFilter::All,
        GroupFilter::Only(ApiGroup::Ais),
        GroupFilter::Only(ApiGroup::Pis),
        GroupFilter::Only(ApiGroup::Piis),
    ];

    pub fn matches(&self, group: ApiGroup) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(g) => *g == group,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupFilter::All => "All",
            GroupFilter::Only(g) => g.label(),
        }
    }

    /// Next option, wrapping back to `All`.
    pub fn next(&self) -> Self {
        let i = Self::OPTIONS.iter().position(|f| f == self).unwrap_or(0);
        Self::OPTIONS[(i + 1) % Self::OPTIONS.len()]
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GroupFilter {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(GroupFilter::All),
            "ais" => Ok(GroupFilter::Only(ApiGroup::Ais)),
            "pis" => Ok(GroupFilter::Only(ApiGroup::Pis)),
            "piis" => Ok(GroupFilter::Only(ApiGroup::Piis)),
            _ => Err(DashError::UnknownFilter(s.to_string())),
        }
    }
}

/// Status filter: everything, or a single endpoint status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EndpointStatus),
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(EndpointStatus::Compliant),
        StatusFilter::Only(EndpointStatus::InProgress),
        StatusFilter::Only(EndpointStatus::Planned),
    ];

    pub fn matches(&self, status: EndpointStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(s) => s.label(),
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::OPTIONS.iter().position(|f| f == self).unwrap_or(0);
        Self::OPTIONS[(i + 1) % Self::OPTIONS.len()]
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "compliant" => Ok(StatusFilter::Only(EndpointStatus::Compliant)),
            "in-progress" => Ok(StatusFilter::Only(EndpointStatus::InProgress)),
            "planned" => Ok(StatusFilter::Only(EndpointStatus::Planned)),
            _ => Err(DashError::UnknownFilter(s.to_string())),
        }
    }
}

/// Lazily filter endpoints by both predicates, preserving source order.
pub fn filter_endpoints(
    endpoints: &[Endpoint],
    group: GroupFilter,
    status: StatusFilter,
) -> impl Iterator<Item = &Endpoint> {
    endpoints
        .iter()
        .filter(move |e| group.matches(e.group) && status.matches(e.status))
}
