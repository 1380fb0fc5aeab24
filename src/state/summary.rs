// Aggregate figures for the overview tab.
// Pure functions over the catalog; cheap enough to recompute on every frame.

use chrono::NaiveDate;

use crate::catalog::{ApiGroup, ChecklistStatus, ComplianceSection, Endpoint, EndpointStatus};

/// Latency SLA from the Berlin Group implementation guidelines.
pub const LATENCY_SLA_MS: u32 = 500;

/// Platform uptime target, percent.
pub const UPTIME_TARGET: f64 = 99.95;

/// Round `100 * part / whole` to the nearest integer, halves up.
///
/// An empty whole yields 0.
pub fn round_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Endpoint counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub compliant: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl StatusCounts {
    pub fn get(&self, status: EndpointStatus) -> usize {
        match status {
            EndpointStatus::Compliant => self.compliant,
            EndpointStatus::InProgress => self.in_progress,
            EndpointStatus::Planned => self.planned,
        }
    }

    pub fn total(&self) -> usize {
        self.compliant + self.in_progress + self.planned
    }
}

pub fn total_endpoints(endpoints: &[Endpoint]) -> usize {
    endpoints.len()
}

pub fn status_counts(endpoints: &[Endpoint]) -> StatusCounts {
    endpoints
        .iter()
        .fold(StatusCounts::default(), |mut counts, e| {
            match e.status {
                EndpointStatus::Compliant => counts.compliant += 1,
                EndpointStatus::InProgress => counts.in_progress += 1,
                EndpointStatus::Planned => counts.planned += 1,
            }
            counts
        })
}

/// Share of endpoints that are compliant, as a rounded percentage.
pub fn compliance_percent(endpoints: &[Endpoint]) -> u32 {
    round_percent(status_counts(endpoints).compliant, endpoints.len())
}

/// Compliant vs. total endpoints within one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRatio {
    pub group: ApiGroup,
    pub compliant: usize,
    pub total: usize,
}

impl GroupRatio {
    pub fn percent(&self) -> u32 {
        round_percent(self.compliant, self.total)
    }
}

pub fn group_ratio(endpoints: &[Endpoint], group: ApiGroup) -> GroupRatio {
    let in_group = endpoints.iter().filter(|e| e.group == group);
    let (compliant, total) = in_group.fold((0, 0), |(c, t), e| {
        let c = if e.status == EndpointStatus::Compliant {
            c + 1
        } else {
            c
        };
        (c, t + 1)
    });
    GroupRatio {
        group,
        compliant,
        total,
    }
}

/// Done vs. total checklist items across all sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub done: usize,
    pub total: usize,
}

impl ChecklistProgress {
    pub fn percent(&self) -> u32 {
        round_percent(self.done, self.total)
    }
}

pub fn checklist_progress(sections: &[ComplianceSection]) -> ChecklistProgress {
    let items = sections.iter().flat_map(|s| s.items.iter());
    let (done, total) = items.fold((0, 0), |(d, t), item| {
        let d = if item.status == ChecklistStatus::Done {
            d + 1
        } else {
            d
        };
        (d, t + 1)
    });
    ChecklistProgress { done, total }
}

/// Mean latency over endpoints that report one.
pub fn average_latency_ms(endpoints: &[Endpoint]) -> Option<f64> {
    let samples: Vec<f64> = endpoints
        .iter()
        .filter_map(|e| e.latency)
        .map(f64::from)
        .collect();
    mean(&samples)
}

/// Mean uptime over endpoints that report one.
pub fn average_uptime(endpoints: &[Endpoint]) -> Option<f64> {
    let samples: Vec<f64> = endpoints.iter().filter_map(|e| e.uptime).collect();
    mean(&samples)
}

fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        None
    } else {
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }
}

/// Whole days from `today` until `target`; negative once passed.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(9, 13), 69);
        assert_eq!(round_percent(1, 2), 50);
        assert_eq!(round_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(0, 0), 0);
        assert_eq!(round_percent(4, 4), 100);
    }

    #[test]
    fn test_sample_status_counts() {
        let catalog = sample_catalog();
        let counts = status_counts(&catalog.endpoints);
        assert_eq!(
            counts,
            StatusCounts {
                compliant: 9,
                in_progress: 2,
                planned: 2,
            }
        );
        assert_eq!(counts.total(), total_endpoints(&catalog.endpoints));
        assert_eq!(counts.get(EndpointStatus::Planned), 2);
    }

    #[test]
    fn test_compliance_percent_is_deterministic() {
        let catalog = sample_catalog();
        let first = compliance_percent(&catalog.endpoints);
        assert_eq!(first, 69);
        for _ in 0..10 {
            assert_eq!(compliance_percent(&catalog.endpoints), first);
        }
    }

    #[test]
    fn test_group_ratios() {
        let catalog = sample_catalog();
        let ais = group_ratio(&catalog.endpoints, ApiGroup::Ais);
        assert_eq!((ais.compliant, ais.total), (7, 8));

        let pis = group_ratio(&catalog.endpoints, ApiGroup::Pis);
        assert_eq!((pis.compliant, pis.total), (2, 4));
        assert_eq!(pis.percent(), 50);

        let piis = group_ratio(&catalog.endpoints, ApiGroup::Piis);
        assert_eq!((piis.compliant, piis.total), (0, 1));
        assert_eq!(piis.percent(), 0);
    }

    #[test]
    fn test_checklist_progress() {
        let catalog = sample_catalog();
        let progress = checklist_progress(&catalog.compliance);
        assert_eq!(progress, ChecklistProgress { done: 16, total: 20 });
        assert_eq!(progress.percent(), 80);
    }

    #[test]
    fn test_averages_skip_missing_figures() {
        let catalog = sample_catalog();
        let latency = average_latency_ms(&catalog.endpoints).unwrap();
        assert!((latency - 1295.0 / 9.0).abs() < 1e-9);
        assert!(latency < f64::from(LATENCY_SLA_MS));

        let uptime = average_uptime(&catalog.endpoints).unwrap();
        assert!(uptime > UPTIME_TARGET);

        assert!(average_latency_ms(&[]).is_none());
    }

    #[test]
    fn test_days_until() {
        let go_live = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 22).unwrap();
        assert_eq!(days_until(go_live, today), 10);
        assert_eq!(days_until(today, go_live), -10);
    }
}
