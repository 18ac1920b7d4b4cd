use std::fmt;
use std::sync::Arc;

use chrono::Local;
use futures_util::future::join_all;
use subs_core::{
    format_long, platform_shares, ConfigError, CounterAnimator, CounterConfig, DashboardView,
    Platform, SlotRow, TimestampFormatter, WidgetStatus, WidgetView, FALLBACK_TEXT,
    LOAD_ERROR_TEXT,
};
use subs_logging::{subs_error, subs_info};
use tokio_util::sync::CancellationToken;

use crate::driver::{run_counter, DisplaySink};
use crate::{read_widget, AnimationOutcome, DisplayEvent, EngineError, Page};

#[derive(Clone)]
pub struct DashboardSettings {
    pub counter: CounterConfig,
    pub fallback_text: String,
    pub platforms: Vec<Platform>,
    /// Produces the "generated at" caption of the finished view.
    pub generated_at: Arc<dyn Fn() -> String + Send + Sync>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            counter: CounterConfig::default(),
            fallback_text: FALLBACK_TEXT.to_string(),
            platforms: Platform::ALL.to_vec(),
            generated_at: Arc::new(|| format_long(&Local::now())),
        }
    }
}

impl fmt::Debug for DashboardSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardSettings")
            .field("counter", &self.counter)
            .field("fallback_text", &self.fallback_text)
            .field("platforms", &self.platforms)
            .finish_non_exhaustive()
    }
}

struct CounterJob {
    index: usize,
    platform: Platform,
    animator: CounterAnimator,
    slots: SlotRow,
    last_updated: String,
}

/// Initializes every widget on a page and animates their counters side by side.
///
/// Widgets are isolated: one whose markup is missing is reported as failed
/// and the rest still animate.
#[derive(Debug)]
pub struct Dashboard {
    settings: DashboardSettings,
    formatter: TimestampFormatter,
}

impl Dashboard {
    pub fn new(settings: DashboardSettings) -> Result<Self, ConfigError> {
        settings.counter.step_count()?;
        let formatter = TimestampFormatter::with_fallback(settings.fallback_text.clone());
        Ok(Self {
            settings,
            formatter,
        })
    }

    pub async fn run(
        &self,
        page: &Page,
        sink: &dyn DisplaySink,
        cancel: &CancellationToken,
    ) -> DashboardView {
        let mut views: Vec<(usize, WidgetView)> = Vec::new();
        let mut jobs: Vec<CounterJob> = Vec::new();

        for (index, platform) in self.settings.platforms.iter().copied().enumerate() {
            match self.prepare(page, platform, sink) {
                Ok((animator, slots, last_updated)) => jobs.push(CounterJob {
                    index,
                    platform,
                    animator,
                    slots,
                    last_updated,
                }),
                Err(message) => {
                    subs_error!("{} widget failed to initialize: {}", platform, message);
                    sink.emit(DisplayEvent::WidgetFailed {
                        platform,
                        message: message.clone(),
                    });
                    views.push((index, failed_view(platform, message)));
                }
            }
        }

        let outcomes = join_all(jobs.iter_mut().map(|job| {
            run_counter(
                job.platform,
                &mut job.animator,
                &mut job.slots,
                sink,
                cancel,
            )
        }))
        .await;

        let mut counts = Vec::with_capacity(jobs.len());
        for (job, outcome) in jobs.into_iter().zip(outcomes) {
            counts.push((job.index, job.platform, job.animator.target()));
            views.push((
                job.index,
                WidgetView {
                    platform: job.platform,
                    color: job.platform.color(),
                    digits: job.slots.text(),
                    last_updated: job.last_updated,
                    status: match outcome {
                        AnimationOutcome::Completed => WidgetStatus::Finished,
                        AnimationOutcome::Cancelled => WidgetStatus::Cancelled,
                    },
                    error: None,
                },
            ));
        }

        views.sort_by_key(|(index, _)| *index);
        counts.sort_by_key(|(index, _, _)| *index);
        let counts: Vec<(Platform, u64)> = counts
            .into_iter()
            .map(|(_, platform, count)| (platform, count))
            .collect();

        let view = DashboardView {
            generated_at: (self.settings.generated_at)(),
            widgets: views.into_iter().map(|(_, view)| view).collect(),
            shares: platform_shares(&counts),
        };
        subs_info!(
            "dashboard rendered: {} widgets, {} failed",
            view.widgets.len(),
            view.failed_count()
        );
        view
    }

    fn prepare(
        &self,
        page: &Page,
        platform: Platform,
        sink: &dyn DisplaySink,
    ) -> Result<(CounterAnimator, SlotRow, String), String> {
        let input = read_widget(page, platform).map_err(|err| err.to_string())?;
        let animator = CounterAnimator::new(input.target, &self.settings.counter)
            .map_err(|err| err.to_string())?;

        let last_updated = match input.raw_timestamp.as_deref() {
            Some(raw) => self.formatter.format(raw),
            None => self.formatter.fallback().to_string(),
        };
        sink.emit(DisplayEvent::TimestampRendered {
            platform,
            text: last_updated.clone(),
        });
        Ok((animator, input.slots, last_updated))
    }
}

fn failed_view(platform: Platform, message: String) -> WidgetView {
    WidgetView {
        platform,
        color: platform.color(),
        digits: String::new(),
        last_updated: LOAD_ERROR_TEXT.to_string(),
        status: WidgetStatus::Failed,
        error: Some(message),
    }
}

/// Runs a dashboard to completion on a single-threaded runtime.
pub fn run_dashboard_blocking(
    settings: DashboardSettings,
    page: &Page,
    sink: &dyn DisplaySink,
    cancel: &CancellationToken,
) -> Result<DashboardView, EngineError> {
    let dashboard = Dashboard::new(settings)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(EngineError::Runtime)?;
    Ok(runtime.block_on(dashboard.run(page, sink, cancel)))
}
