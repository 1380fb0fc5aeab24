// Static reference data types.
// Endpoints, consent stages, SCA methods, compliance checklist, and roadmap.

use serde::{Deserialize, Serialize};

/// PSD2 service category an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiGroup {
    /// Account Information Service.
    Ais,
    /// Payment Initiation Service.
    Pis,
    /// Payment Instrument Issuer confirmation.
    Piis,
}

impl ApiGroup {
    pub const ALL: [ApiGroup; 3] = [ApiGroup::Ais, ApiGroup::Pis, ApiGroup::Piis];

    pub fn label(&self) -> &'static str {
        match self {
            ApiGroup::Ais => "AIS",
            ApiGroup::Pis => "PIS",
            ApiGroup::Piis => "PIIS",
        }
    }
}

/// Implementation status of an API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndpointStatus {
    Compliant,
    InProgress,
    Planned,
}

impl EndpointStatus {
    pub const ALL: [EndpointStatus; 3] = [
        EndpointStatus::Compliant,
        EndpointStatus::InProgress,
        EndpointStatus::Planned,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EndpointStatus::Compliant => "Compliant",
            EndpointStatus::InProgress => "In Progress",
            EndpointStatus::Planned => "Planned",
        }
    }
}

/// Legal entity operating the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    /// Luxembourg (CSSF supervised).
    #[serde(rename = "LU")]
    Luxembourg,
    /// Ireland (CBI supervised).
    #[serde(rename = "IE")]
    Ireland,
}

impl Entity {
    pub fn code(&self) -> &'static str {
        match self {
            Entity::Luxembourg => "LU",
            Entity::Ireland => "IE",
        }
    }
}

/// Delivery priority tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "MVP")]
    Mvp,
    #[serde(rename = "Phase 2")]
    Phase2,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Mvp => "MVP",
            Priority::Phase2 => "Phase 2",
        }
    }
}

/// An Open Banking API endpoint and its compliance status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: u32,
    /// Method and path, e.g. `GET /accounts`.
    pub name: String,
    pub group: ApiGroup,
    /// Berlin Group NextGenPSD2 operation this endpoint maps to.
    pub berlin: String,
    pub status: EndpointStatus,
    /// SCA requirement description.
    pub sca: String,
    pub entity: Entity,
    pub priority: Priority,
    /// Median latency in milliseconds, once live.
    #[serde(default)]
    pub latency: Option<u32>,
    /// Uptime percentage, once live.
    #[serde(default)]
    pub uptime: Option<f64>,
}

/// One step of the consent lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentStage {
    pub id: String,
    pub label: String,
    pub desc: String,
    pub icon: String,
    /// Hex color, `#RRGGBB`.
    pub color: String,
    /// Protocol details shown under the stage description.
    #[serde(default)]
    pub facts: Vec<StageFact>,
}

/// A titled technical note attached to a consent stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageFact {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaStrength {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaFlow {
    Redirect,
    Decoupled,
    Embedded,
}

/// An SCA approach supported by the ASPSP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaMethod {
    pub method: String,
    pub desc: String,
    pub strength: ScaStrength,
    pub flow: ScaFlow,
    pub recommended: bool,
}

/// Progress of a checklist item or roadmap phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistStatus {
    Done,
    InProgress,
    Planned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub req: String,
    pub status: ChecklistStatus,
}

/// A regulatory area and its requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSection {
    pub area: String,
    pub items: Vec<ComplianceItem>,
}

/// A delivery phase on the go-live roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    /// Human period label, e.g. `Oct–Dec 2025`.
    pub period: String,
    pub status: ChecklistStatus,
    pub scope: String,
}
