use subs_core::{DashboardView, WidgetStatus, WidgetView, LOAD_ERROR_TEXT};
use subs_engine::{AnimationOutcome, DisplayEvent};

const NAME_WIDTH: usize = 10;

/// One progress line for a display event, if it is worth printing.
pub fn render_event(event: &DisplayEvent, show_frames: bool) -> Option<String> {
    let platform = event.platform();
    match event {
        DisplayEvent::Frame { tick, digits, .. } if show_frames => {
            Some(format!("[{platform}] #{tick:<3} {digits}"))
        }
        DisplayEvent::Frame { .. } | DisplayEvent::TimestampRendered { .. } => None,
        DisplayEvent::CounterStopped {
            outcome: AnimationOutcome::Cancelled,
            digits,
            ..
        } => Some(format!("[{platform}] cancelled at {}", blank_as_dash(digits))),
        DisplayEvent::CounterStopped { .. } => None,
        DisplayEvent::WidgetFailed { message, .. } => {
            Some(format!("[{platform}] {LOAD_ERROR_TEXT}: {message}"))
        }
    }
}

/// Plain-text table of the finished dashboard.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = format!("Статистика подписчиков ({})\n", view.generated_at);
    for widget in &view.widgets {
        out.push_str(&widget_line(widget));
        out.push('\n');
    }
    if !view.shares.is_empty() {
        out.push_str("\nДоля аудитории\n");
        for share in &view.shares {
            out.push_str(&format!(
                "{:<width$} {:>6}%  ({})\n",
                share.platform.display_name(),
                share.percentage,
                share.formatted_count,
                width = NAME_WIDTH
            ));
        }
    }
    out
}

fn widget_line(widget: &WidgetView) -> String {
    let marker = match widget.status {
        WidgetStatus::Finished => "",
        WidgetStatus::Cancelled => " (остановлено)",
        WidgetStatus::Failed => " (!)",
    };
    format!(
        "{:<width$} {} {} {}{}",
        widget.platform.display_name(),
        widget.color,
        blank_as_dash(&widget.digits),
        widget.last_updated,
        marker,
        width = NAME_WIDTH
    )
}

fn blank_as_dash(digits: &str) -> &str {
    if digits.is_empty() {
        "-"
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use subs_core::{
        platform_shares, DashboardView, Platform, WidgetStatus, WidgetView, LOAD_ERROR_TEXT,
    };
    use subs_engine::{AnimationOutcome, DisplayEvent};

    use super::{render_dashboard, render_event};

    fn view() -> DashboardView {
        DashboardView {
            generated_at: "1 мая 2025 г. в 10:00".to_string(),
            widgets: vec![
                WidgetView {
                    platform: Platform::LinkedIn,
                    color: Platform::LinkedIn.color(),
                    digits: "01204".to_string(),
                    last_updated: "26 февр. 2025 г. 09:37".to_string(),
                    status: WidgetStatus::Finished,
                    error: None,
                },
                WidgetView {
                    platform: Platform::YouTube,
                    color: Platform::YouTube.color(),
                    digits: String::new(),
                    last_updated: LOAD_ERROR_TEXT.to_string(),
                    status: WidgetStatus::Failed,
                    error: Some("element #youtube-clock not found".to_string()),
                },
            ],
            shares: platform_shares(&[(Platform::LinkedIn, 1204)]),
        }
    }

    #[test]
    fn dashboard_table_lists_widgets_and_shares() {
        let text = render_dashboard(&view());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Статистика подписчиков (1 мая 2025 г. в 10:00)");
        assert_eq!(lines[1], "Linkedin   #0077B5 01204 26 февр. 2025 г. 09:37");
        assert_eq!(
            lines[2],
            "Youtube    #FF0000 - Ошибка загрузки данных (!)"
        );
        assert_eq!(lines[5], "Linkedin    100.0%  (1\u{a0}204)");
    }

    #[test]
    fn frames_are_printed_only_on_request() {
        let frame = DisplayEvent::Frame {
            platform: Platform::Medium,
            tick: 7,
            digits: "00042".to_string(),
        };
        assert_eq!(render_event(&frame, false), None);
        assert_eq!(
            render_event(&frame, true).as_deref(),
            Some("[medium] #7   00042")
        );
    }

    #[test]
    fn cancellation_and_failures_are_reported() {
        let cancelled = DisplayEvent::CounterStopped {
            platform: Platform::Instagram,
            outcome: AnimationOutcome::Cancelled,
            digits: "00104".to_string(),
        };
        assert_eq!(
            render_event(&cancelled, false).as_deref(),
            Some("[instagram] cancelled at 00104")
        );
        let completed = DisplayEvent::CounterStopped {
            platform: Platform::Instagram,
            outcome: AnimationOutcome::Completed,
            digits: "00209".to_string(),
        };
        assert_eq!(render_event(&completed, false), None);
    }
}
