// src/storage/json.rs

use std::io::Write;

use crate::error::Result;
use crate::models::Article;

/// Write articles as a pretty-printed JSON array (2-space indent) and a final newline.
pub fn write_articles<W: Write>(w: &mut W, articles: &[Article]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, articles)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Article> {
        vec![Article {
            tag: "News".into(),
            title: "Title A".into(),
            author: "Jane Doe".into(),
            url: "/a1".into(),
            content: "Body \"text\"\n".into(),
            date: "2024-01-01".into(),
        }]
    }

    #[test]
    fn test_layout_and_key_order() {
        let mut buf = Vec::new();
        write_articles(&mut buf, &sample()).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let expected = r#"[
  {
    "tag": "News",
    "title": "Title A",
    "author": "Jane Doe",
    "url": "/a1",
    "content": "Body \"text\"\n",
    "date": "2024-01-01"
  }
]
"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_round_trip() {
        let mut buf = Vec::new();
        write_articles(&mut buf, &sample()).unwrap();
        let parsed: Vec<Article> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_key_order_does_not_matter_when_reading() {
        let text = r#"[{"date":"d","content":"c","url":"u","author":"a","title":"t","tag":"g"}]"#;
        let parsed: Vec<Article> = serde_json::from_str(text).unwrap();
        assert_eq!(parsed[0].tag, "g");
        assert_eq!(parsed[0].date, "d");
    }
}
