use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} has no data-{attribute} attribute")]
    MissingAttribute { id: String, attribute: String },
    #[error("invalid selector {0:?}")]
    InvalidSelector(String),
}

/// Read-only view of the dashboard markup: element lookup by id, text
/// content, `data-*` attributes and child digit cells.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    fn element_by_id(&self, id: &str) -> Result<ElementRef<'_>, MarkupError> {
        let selector = parse_selector(&format!("[id=\"{id}\"]"))?;
        self.doc
            .select(&selector)
            .next()
            .ok_or_else(|| MarkupError::MissingElement(id.to_string()))
    }

    /// Concatenated text content of the element, like `textContent`.
    pub fn element_text(&self, id: &str) -> Result<String, MarkupError> {
        self.element_by_id(id)
            .map(|element| element.text().collect::<String>())
    }

    /// Value of `data-<key>`, where `key` uses dataset naming (`lastUpdated`
    /// reads `data-last-updated`).
    pub fn data_attribute(&self, id: &str, key: &str) -> Result<String, MarkupError> {
        let attribute = dataset_attribute_name(key);
        let element = self.element_by_id(id)?;
        element
            .value()
            .attr(&attribute)
            .map(ToOwned::to_owned)
            .ok_or_else(|| MarkupError::MissingAttribute {
                id: id.to_string(),
                attribute: attribute.trim_start_matches("data-").to_string(),
            })
    }

    /// Text of every descendant matching `selector`, in document order.
    pub fn descendant_texts(&self, id: &str, selector: &str) -> Result<Vec<String>, MarkupError> {
        let element = self.element_by_id(id)?;
        let selector = parse_selector(selector)?;
        Ok(element
            .select(&selector)
            .map(|cell| cell.text().collect::<String>())
            .collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, MarkupError> {
    Selector::parse(selector).map_err(|_| MarkupError::InvalidSelector(selector.to_string()))
}

fn dataset_attribute_name(key: &str) -> String {
    let mut name = String::from("data-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}
