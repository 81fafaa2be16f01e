//! Article data structures.

use serde::{Deserialize, Serialize};

/// An article as listed on the archive page, before its detail page is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStub {
    /// Section label from the metadata line
    pub tag: String,

    /// Anchor text
    pub title: String,

    /// Detail page link, as found in `href`
    pub url: String,

    /// Listing date from the metadata line
    pub date: String,
}

/// Fields read from an article's own page. Missing elements yield empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub author: String,
    pub content: String,
    pub date: String,
}

/// A complete article record.
///
/// Field order is the JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub tag: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub content: String,
    pub date: String,
}

impl Article {
    /// Merge a listing stub with its detail page fields.
    ///
    /// The detail page date wins unless it is blank, in which case the
    /// listing date is kept.
    pub fn from_stub(stub: ArticleStub, detail: DetailFields) -> Self {
        let date = if detail.date.trim().is_empty() {
            stub.date
        } else {
            detail.date
        };

        Self {
            tag: stub.tag,
            title: stub.title,
            author: detail.author,
            url: stub.url,
            content: detail.content,
            date,
        }
    }

    /// Column names of the CSV layout. `date` precedes `content` here, unlike JSON.
    pub const CSV_HEADER: [&'static str; 6] = ["tag", "title", "author", "url", "date", "content"];

    /// Field values in `CSV_HEADER` order.
    pub fn csv_row(&self) -> [&str; 6] {
        [
            &self.tag,
            &self.title,
            &self.author,
            &self.url,
            &self.date,
            &self.content,
        ]
    }

    /// Rebuild an article from a row in `CSV_HEADER` order.
    #[cfg(test)]
    pub fn from_csv_row(row: &[String]) -> Option<Self> {
        match row {
            [tag, title, author, url, date, content] => Some(Self {
                tag: tag.clone(),
                title: title.clone(),
                author: author.clone(),
                url: url.clone(),
                content: content.clone(),
                date: date.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stub() -> ArticleStub {
        ArticleStub {
            tag: "News".to_string(),
            title: "Title A".to_string(),
            url: "/a1".to_string(),
            date: "A".to_string(),
        }
    }

    #[test]
    fn test_detail_date_replaces_listing_date() {
        let detail = DetailFields {
            date: "B".to_string(),
            ..DetailFields::default()
        };
        let article = Article::from_stub(sample_stub(), detail);
        assert_eq!(article.date, "B");
    }

    #[test]
    fn test_blank_detail_date_keeps_listing_date() {
        let detail = DetailFields {
            author: "Jane Doe".to_string(),
            content: "Body text".to_string(),
            date: " \n ".to_string(),
        };
        let article = Article::from_stub(sample_stub(), detail);
        assert_eq!(article.date, "A");
        assert_eq!(article.author, "Jane Doe");
        assert_eq!(article.content, "Body text");
    }

    #[test]
    fn test_csv_row_order() {
        let article = Article {
            tag: "t".into(),
            title: "ti".into(),
            author: "au".into(),
            url: "u".into(),
            content: "c".into(),
            date: "d".into(),
        };
        assert_eq!(article.csv_row(), ["t", "ti", "au", "u", "d", "c"]);

        let row: Vec<String> = article.csv_row().iter().map(|s| s.to_string()).collect();
        assert_eq!(Article::from_csv_row(&row), Some(article));
        assert_eq!(Article::from_csv_row(&row[..5]), None);
    }
}
