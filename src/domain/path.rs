use serde::Serialize;

/// Human-oriented decomposition of a nested change path such as
/// `items[id=1,label=Home].label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    pub root: String,
    pub root_human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop_human: Option<String>,
    pub human_title: String,
    pub human_field: String,
}

impl ParsedPath {
    /// Item display text; the label wins over the id.
    pub fn item(&self) -> Option<&str> {
        self.item_label.as_deref().or(self.item_id.as_deref())
    }

    /// Bucket key used when grouping updates by owning item.
    pub fn group_key(&self) -> (String, String) {
        let item = self
            .item_id
            .as_deref()
            .or(self.item_label.as_deref())
            .unwrap_or_default();
        (self.root.clone(), item.to_string())
    }

    /// Header shown above grouped updates of the same item.
    pub fn group_header(&self) -> String {
        match (&self.item_label, &self.item_id) {
            (Some(label), _) => format!("{}: {label}", self.root_human),
            (None, Some(id)) => format!("{}: ID {id}", self.root_human),
            (None, None) => self.root_human.clone(),
        }
    }
}
