use serde::{Deserialize, Serialize};

/// Raw spreadsheet cell as it arrives from the parsing layer.
///
/// Untagged so that JSON rows round-trip directly: `null` maps to [`Null`],
/// numbers to [`Number`], everything else to [`Text`]. Missing cells are
/// represented by the ingestion layer as empty text.
///
/// [`Null`]: CellValue::Null
/// [`Number`]: CellValue::Number
/// [`Text`]: CellValue::Text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// True for cells that carry no category information: `null` and the
    /// empty string. Whitespace-only text is a real (if odd) category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Number(_) => false,
            CellValue::Text(text) => text.is_empty(),
        }
    }

    /// Display label used as a grouping key, or `None` for empty cells.
    ///
    /// Text labels are used verbatim so that categories match what the
    /// sheet actually contains.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Number(value) => Some(value.to_string()),
            CellValue::Text(text) => {
                if text.is_empty() {
                    None
                } else {
                    Some(text.clone())
                }
            }
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}
