// Built-in mock data set.
// Mirrors the compliance programme as of the April 2026 go-live plan.

use chrono::NaiveDate;

use super::Catalog;
use super::types::{
    ApiGroup, ChecklistStatus, ComplianceItem, ComplianceSection, ConsentStage, Endpoint,
    EndpointStatus, Entity, Priority, RoadmapPhase, ScaFlow, ScaMethod, ScaStrength, StageFact,
};

#[allow(clippy::too_many_arguments)]
fn endpoint(
    id: u32,
    name: &str,
    group: ApiGroup,
    berlin: &str,
    status: EndpointStatus,
    sca: &str,
    entity: Entity,
    priority: Priority,
    live: Option<(u32, f64)>,
) -> Endpoint {
    Endpoint {
        id,
        name: name.to_string(),
        group,
        berlin: berlin.to_string(),
        status,
        sca: sca.to_string(),
        entity,
        priority,
        latency: live.map(|(latency, _)| latency),
        uptime: live.map(|(_, uptime)| uptime),
    }
}

#[rustfmt::skip]
fn endpoints() -> Vec<Endpoint> {
    use ApiGroup::*;
    use EndpointStatus::*;
    use Entity::*;
    use Priority::*;

    vec![
        endpoint(1, "GET /accounts", Ais, "Account List", Compliant, "Required (first access)", Luxembourg, Mvp, Some((142, 99.98))),
        endpoint(2, "GET /accounts/{id}", Ais, "Account Details", Compliant, "Exemption eligible", Luxembourg, Mvp, Some((98, 99.99))),
        endpoint(3, "GET /accounts/{id}/balances", Ais, "Balance Report", Compliant, "Exemption eligible", Luxembourg, Mvp, Some((115, 99.97))),
        endpoint(4, "GET /accounts/{id}/transactions", Ais, "Transaction List", Compliant, "Required (>90 days)", Luxembourg, Mvp, Some((210, 99.95))),
        endpoint(5, "POST /payments/sepa-credit-transfers", Pis, "SEPA CT Initiation", Compliant, "Always required", Luxembourg, Mvp, Some((320, 99.94))),
        endpoint(6, "GET /payments/{paymentId}/status", Pis, "Payment Status", Compliant, "Not required", Luxembourg, Mvp, Some((88, 99.99))),
        endpoint(7, "DELETE /payments/{paymentId}", Pis, "Payment Cancellation", InProgress, "Required", Luxembourg, Mvp, None),
        endpoint(8, "POST /consents", Ais, "Consent Creation", Compliant, "Always required", Luxembourg, Mvp, Some((185, 99.96))),
        endpoint(9, "GET /consents/{consentId}", Ais, "Consent Status", Compliant, "Not required", Luxembourg, Mvp, Some((72, 99.99))),
        endpoint(10, "DELETE /consents/{consentId}", Ais, "Consent Revocation", Compliant, "Not required", Luxembourg, Mvp, Some((65, 99.99))),
        endpoint(11, "POST /signing-baskets", Pis, "Signing Basket", Planned, "Required", Ireland, Phase2, None),
        endpoint(12, "POST /funds-confirmations", Piis, "Funds Confirmation", InProgress, "Required", Luxembourg, Mvp, None),
        endpoint(13, "GET /card-accounts", Ais, "Card Account List", Planned, "Required", Ireland, Phase2, None),
    ]
}

fn stage(
    id: &str,
    label: &str,
    desc: &str,
    icon: &str,
    color: &str,
    facts: [(&str, &str); 2],
) -> ConsentStage {
    ConsentStage {
        id: id.to_string(),
        label: label.to_string(),
        desc: desc.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        facts: facts
            .iter()
            .map(|(title, detail)| StageFact {
                title: title.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
    }
}

#[rustfmt::skip]
fn consent_stages() -> Vec<ConsentStage> {
    vec![
        stage("request", "Consent Requested", "TPP initiates POST /consents with access scope", "📋", "#6EE7B7", [
            ("POST /consents", "TPP sends access scope: accounts, balances, transactions"),
            ("Response: 201 Created", "consentId + _links.scaRedirect returned"),
        ]),
        stage("redirect", "PSU Redirect", "ASPSP redirects PSU to authentication portal", "🔗", "#93C5FD", [
            ("OAuth2 Redirect", "PSU browser redirected to ASPSP authorization URL via gateway"),
            ("ASPSP Auth Portal", "Authentication handled through bank's digital identity platform"),
        ]),
        stage("sca", "SCA Challenge", "Strong Customer Authentication via device binding", "🔐", "#FCD34D", [
            ("2-Factor Auth", "Knowledge (password) + Possession (device) or Inherence (biometric)"),
            ("Device Binding", "SCA device registered and bound to PSU identity"),
        ]),
        stage("authorised", "Consent Authorised", "PSU grants explicit consent, valid up to 90 days", "✅", "#34D399", [
            ("Consent Status: valid", "GET /consents/{consentId} returns status=valid"),
            ("Validity: 90 days", "Consent valid until expiry or PSU revocation"),
        ]),
        stage("active", "Data Access Active", "TPP accesses accounts (max 4x/day without PSU)", "📊", "#818CF8", [
            ("AIS Access", "TPP can access accounts up to 4x/day without PSU presence"),
            ("Rate Limiting", "Beyond 4x/day requires fresh SCA from PSU"),
        ]),
        stage("expired", "Expired / Revoked", "Consent expires or PSU revokes via dashboard", "⏱", "#F87171", [
            ("DELETE /consents/{consentId}", "PSU can revoke consent at any time via ASPSP dashboard"),
            ("Auto-Expiry", "System automatically expires consents after 90 days"),
        ]),
    ]
}

fn sca_methods() -> Vec<ScaMethod> {
    vec![
        ScaMethod {
            method: "Redirect (OAuth2)".to_string(),
            desc: "PSU redirected to ASPSP portal for authentication".to_string(),
            strength: ScaStrength::High,
            flow: ScaFlow::Redirect,
            recommended: true,
        },
        ScaMethod {
            method: "Decoupled".to_string(),
            desc: "ASPSP sends push notification to PSU device".to_string(),
            strength: ScaStrength::High,
            flow: ScaFlow::Decoupled,
            recommended: true,
        },
        ScaMethod {
            method: "Embedded".to_string(),
            desc: "TPP collects credentials and forwards to ASPSP".to_string(),
            strength: ScaStrength::Medium,
            flow: ScaFlow::Embedded,
            recommended: false,
        },
    ]
}

fn section(area: &str, items: &[(&str, ChecklistStatus)]) -> ComplianceSection {
    ComplianceSection {
        area: area.to_string(),
        items: items
            .iter()
            .map(|(req, status)| ComplianceItem {
                req: req.to_string(),
                status: *status,
            })
            .collect(),
    }
}

fn compliance_sections() -> Vec<ComplianceSection> {
    use ChecklistStatus::*;

    vec![
        section(
            "Consent Management",
            &[
                ("90-day consent validity maximum", Done),
                ("Explicit consent scope (accounts, balances, transactions)", Done),
                ("Consent revocation via DELETE /consents/{id}", Done),
                ("Consent status tracking (received → valid → expired)", Done),
                ("Re-authentication every 90 days for AIS", Done),
            ],
        ),
        section(
            "Strong Customer Authentication",
            &[
                ("SCA for payment initiation (always)", Done),
                ("SCA for first AIS access", Done),
                ("SCA exemption for subsequent AIS (4x/day)", Done),
                ("Device binding for SCA factors", InProgress),
                ("Dynamic linking for payment amount + payee", Done),
            ],
        ),
        section(
            "API Standards",
            &[
                ("Berlin Group NextGenPSD2 v1.3.x endpoints", Done),
                ("ASPSP Gateway integration", Done),
                ("POST /confirmation routing via ASPSP Gateway", Done),
                ("Payment cancellation (DELETE /payments)", InProgress),
                ("Funds confirmation (PIIS) endpoint", InProgress),
            ],
        ),
        section(
            "Regulatory & Operational",
            &[
                ("CSSF (Luxembourg) reporting compliance", Done),
                ("CBI (Ireland) regulatory alignment", Planned),
                ("Fallback mechanism (screen scraping alternative)", Done),
                ("TPP certificate validation (eIDAS QWAC/QSealC)", Done),
                ("Incident reporting within 4 hours", Done),
            ],
        ),
    ]
}

fn phase(title: &str, period: &str, status: ChecklistStatus, scope: &str) -> RoadmapPhase {
    RoadmapPhase {
        phase: title.to_string(),
        period: period.to_string(),
        status,
        scope: scope.to_string(),
    }
}

#[rustfmt::skip]
fn roadmap() -> Vec<RoadmapPhase> {
    use ChecklistStatus::*;

    vec![
        phase("Phase 1: Foundation", "Oct–Dec 2025", Done, "ASPSP Gateway connectivity, consent APIs, AIS endpoints"),
        phase("Phase 2: Payments", "Jan–Feb 2026", Done, "PIS initiation, status tracking, SCA integration"),
        phase("Phase 3: Compliance", "Mar 2026", InProgress, "Payment cancellation, PIIS, device binding"),
        phase("Phase 4: Go-Live", "Apr 2026", Planned, "Production deployment, regulatory sign-off, monitoring"),
        phase("Phase 5: Ireland", "Q3 2026", Planned, "CBI entity, card accounts, signing baskets"),
    ]
}

/// Build the built-in catalog.
pub fn sample_catalog() -> Catalog {
    Catalog {
        standard: "v1.3.12 · Berlin Group".to_string(),
        go_live: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap_or(NaiveDate::MIN),
        endpoints: endpoints(),
        consent_stages: consent_stages(),
        sca_methods: sca_methods(),
        compliance: compliance_sections(),
        roadmap: roadmap(),
    }
}
