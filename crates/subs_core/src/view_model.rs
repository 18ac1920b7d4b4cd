use serde::Serialize;

use crate::{Platform, PlatformShare};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetStatus {
    Finished,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub platform: Platform,
    pub color: &'static str,
    pub digits: String,
    pub last_updated: String,
    pub status: WidgetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardView {
    pub generated_at: String,
    pub widgets: Vec<WidgetView>,
    pub shares: Vec<PlatformShare>,
}

impl DashboardView {
    pub fn widget(&self, platform: Platform) -> Option<&WidgetView> {
        self.widgets.iter().find(|w| w.platform == platform)
    }

    pub fn failed_count(&self) -> usize {
        self.widgets
            .iter()
            .filter(|w| w.status == WidgetStatus::Failed)
            .count()
    }
}
