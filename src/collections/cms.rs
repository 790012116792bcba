use crate::entity::{Collection, Record};
use crate::filter::Searchable;
use crate::ids;
use serde::{Deserialize, Serialize};

pub const CMS_STATUSES: &[&str] = &["draft", "published", "archived"];

/// Content page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CmsPage {
    /// New page created and updated today. Ids follow the list length, so
    /// pass the current number of pages.
    pub fn new(
        existing_len: usize,
        title: impl Into<String>,
        slug: impl Into<String>,
        status: impl Into<String>,
        author: impl Into<String>,
        content: Option<String>,
    ) -> Self {
        let today = ids::today();
        CmsPage {
            id: ids::sequence_id(existing_len),
            title: title.into(),
            slug: slug.into(),
            status: status.into(),
            author: author.into(),
            created_at: today.clone(),
            updated_at: today,
            content,
        }
    }

    /// Set `updated_at` to today.
    pub fn touch(&mut self) {
        self.updated_at = ids::today();
    }
}

impl Record for CmsPage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection for CmsPage {
    const NAME: &'static str = "cms";
}

impl Searchable for CmsPage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.slug.as_str(), self.author.as_str()]
    }

    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page() {
        let page = CmsPage::new(2, "About", "about", "draft", "Ivy", None);
        assert_eq!(page.id, "3");
        assert_eq!(page.created_at, page.updated_at);
    }

    #[test]
    fn test_search_by_slug() {
        let page = CmsPage::new(0, "Shipping policy", "shipping", "published", "Jo", None);
        assert!(page.matches_search("SHIP"));
        assert!(!page.matches_search("returns"));
    }
}
