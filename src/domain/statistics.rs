// Status statistics for the summary chart
use super::reading::ThermographyReading;
use super::status::StatusCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub normal: usize,
    pub alert: usize,
    pub critical: usize,
    pub maintenance: usize,
    pub off: usize,
}

impl StatusCounts {
    pub fn tally(readings: &[ThermographyReading]) -> Self {
        readings.iter().fold(Self::default(), |mut acc, r| {
            *acc.slot(r.category()) += 1;
            acc
        })
    }

    pub fn get(&self, category: StatusCategory) -> usize {
        match category {
            StatusCategory::Normal => self.normal,
            StatusCategory::Alert => self.alert,
            StatusCategory::Critical => self.critical,
            StatusCategory::Maintenance => self.maintenance,
            StatusCategory::Off => self.off,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.alert + self.critical + self.maintenance + self.off
    }

    fn slot(&mut self, category: StatusCategory) -> &mut usize {
        match category {
            StatusCategory::Normal => &mut self.normal,
            StatusCategory::Alert => &mut self.alert,
            StatusCategory::Critical => &mut self.critical,
            StatusCategory::Maintenance => &mut self.maintenance,
            StatusCategory::Off => &mut self.off,
        }
    }
}

/// One bar of the summary chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub category: StatusCategory,
    pub label: &'static str,
    pub percentage: u32,
    pub color: &'static str,
}

/// Five shares in presentation order. Each percentage is rounded on its
/// own, so the sum may be off 100 by a point or two.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatisticsSummary {
    pub shares: Vec<StatusShare>,
}

pub fn aggregate(readings: &[ThermographyReading]) -> StatisticsSummary {
    let counts = StatusCounts::tally(readings);
    let total = counts.total().max(1) as f64;

    let shares = StatusCategory::PRESENTATION_ORDER
        .iter()
        .map(|&category| StatusShare {
            category,
            label: category.chart_label(),
            percentage: (counts.get(category) as f64 / total * 100.0).round() as u32,
            color: category.color_tag(),
        })
        .collect();

    StatisticsSummary { shares }
}
