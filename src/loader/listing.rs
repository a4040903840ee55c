use serde::Deserialize;

/// The subset of a listing file that carries item titles:
/// `{"data": {"children": [{"data": {"title": "..."}}]}}`.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct ListingData {
    pub children: Vec<Child>,
}

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct Child {
    pub data: ChildData,
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize)]
pub struct ChildData {
    #[serde(default)]
    pub title: Option<String>,
}

impl Listing {
    /// All child titles joined by a single space; untitled children contribute "".
    pub fn titles(&self) -> String {
        self.data
            .children
            .iter()
            .map(|child| child.data.title.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
