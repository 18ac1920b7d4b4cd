use subs_core::{parse_count, Platform, SlotRow};
use subs_logging::subs_warn;

use crate::{MarkupError, Page};

/// Everything one widget needs, read from the page before animation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetInput {
    pub platform: Platform,
    pub target: u64,
    pub slots: SlotRow,
    /// `None` when the element exists but carries no `data-timestamp`.
    pub raw_timestamp: Option<String>,
}

pub fn read_widget(page: &Page, platform: Platform) -> Result<WidgetInput, MarkupError> {
    let count_text = page.element_text(&platform.count_element_id())?;
    let cells = page.descendant_texts(&platform.clock_element_id(), ".digit")?;
    let raw_timestamp = match page.data_attribute(&platform.updated_element_id(), "timestamp") {
        Ok(raw) => Some(raw),
        Err(MarkupError::MissingAttribute { id, .. }) => {
            subs_warn!("#{} has no data-timestamp", id);
            None
        }
        Err(err) => return Err(err),
    };

    if cells.is_empty() {
        subs_warn!("#{} has no .digit cells", platform.clock_element_id());
    }

    Ok(WidgetInput {
        platform,
        target: parse_count(&count_text),
        slots: SlotRow::from_cells(cells.iter().map(String::as_str)),
        raw_timestamp,
    })
}
