//! Post catalog
//!
//! Joins the loaded posts with their comments. Every function here is pure:
//! it consumes freshly loaded records and builds new output records, so the
//! loaded values are never mutated in place.

use serde::Serialize;
use std::collections::HashMap;

use super::models::{Comment, Post};

/// A post as it appears in the listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    #[serde(flatten)]
    pub post: Post,
    /// Number of comments whose `post_id` equals this post's `id`
    pub comments_count: usize,
}

/// A single post with every comment that references it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Annotate every post with its comment count, keeping the posts' order
///
/// Comments pointing at a post that does not exist are counted into a bucket
/// nobody reads.
pub fn summarize_posts(posts: Vec<Post>, comments: &[Comment]) -> Vec<PostSummary> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for comment in comments {
        *counts.entry(comment.post_id).or_default() += 1;
    }

    posts
        .into_iter()
        .map(|post| {
            let comments_count = counts.get(&post.id).copied().unwrap_or(0);
            PostSummary {
                post: post.without_field("comments_count"),
                comments_count,
            }
        })
        .collect()
}

/// Find the first post with `post_id` and attach its comments in source order
///
/// Returns `None` when no post has that id.
pub fn find_post(posts: Vec<Post>, comments: Vec<Comment>, post_id: i64) -> Option<PostDetail> {
    let post = posts.into_iter().find(|post| post.id == post_id)?;
    let comments = comments
        .into_iter()
        .filter(|comment| comment.post_id == post_id)
        .collect();

    Some(PostDetail {
        post: post.without_field("comments"),
        comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn post(id: i64, title: &str) -> Post {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "body": format!("body of {title}"),
            "author": "author",
            "created_at": "2022-01-01"
        }))
        .unwrap()
    }

    fn comment(post_id: i64, text: &str) -> Comment {
        serde_json::from_value(json!({
            "user": "user",
            "post_id": post_id,
            "comment": text,
            "created_at": "2022-01-02"
        }))
        .unwrap()
    }

    #[test]
    fn test_summaries_count_matching_comments() {
        let posts = vec![post(1, "one"), post(2, "two"), post(3, "three")];
        let comments = vec![
            comment(1, "a"),
            comment(3, "b"),
            comment(1, "c"),
            comment(42, "dangling"),
        ];

        let summaries = summarize_posts(posts, &comments);
        let counts: Vec<(i64, usize)> = summaries
            .iter()
            .map(|s| (s.post.id, s.comments_count))
            .collect();
        assert_eq!(counts, vec![(1, 2), (2, 0), (3, 1)]);
    }

    #[test]
    fn test_summaries_of_empty_posts() {
        assert!(summarize_posts(Vec::new(), &[comment(1, "orphan")]).is_empty());
    }

    #[test]
    fn test_summary_replaces_source_comments_count() {
        let mut stale = post(1, "one");
        stale.fields.insert("comments_count".to_string(), json!(100));

        let summaries = summarize_posts(vec![stale], &[comment(1, "a")]);
        let value = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(value["comments_count"], json!(1));
    }

    #[test]
    fn test_summary_serializes_flat() {
        let summaries = summarize_posts(vec![post(5, "five")], &[]);
        let value = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 5,
                "title": "five",
                "body": "body of five",
                "author": "author",
                "created_at": "2022-01-01",
                "comments_count": 0
            })
        );
    }

    #[test]
    fn test_find_post_filters_comments_in_order() {
        let posts = vec![post(1, "one"), post(2, "two")];
        let comments = vec![
            comment(2, "first"),
            comment(1, "other"),
            comment(2, "second"),
            comment(2, "third"),
        ];

        let detail = find_post(posts, comments, 2).unwrap();
        assert_eq!(detail.post.fields["title"], json!("two"));
        let texts: Vec<&Value> = detail.comments.iter().map(|c| &c.fields["comment"]).collect();
        assert_eq!(texts, [&json!("first"), &json!("second"), &json!("third")]);
    }

    #[test]
    fn test_find_post_without_comments() {
        let detail = find_post(vec![post(1, "one")], vec![comment(2, "elsewhere")], 1).unwrap();
        assert!(detail.comments.is_empty());
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["comments"], json!([]));
    }

    #[test]
    fn test_find_post_missing_id() {
        assert!(find_post(vec![post(1, "one")], vec![comment(2, "x")], 2).is_none());
        assert!(find_post(Vec::new(), Vec::new(), 0).is_none());
    }

    #[test]
    fn test_find_post_first_duplicate_wins() {
        let posts = vec![post(7, "original"), post(7, "duplicate")];
        let detail = find_post(posts, Vec::new(), 7).unwrap();
        assert_eq!(detail.post.fields["title"], json!("original"));
    }

    #[test]
    fn test_find_post_keeps_extra_fields() {
        let mut tagged = post(1, "one");
        tagged.fields.insert("tags".to_string(), json!(["a"]));

        let detail = find_post(vec![tagged], vec![comment(1, "hi")], 1).unwrap();
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["tags"], json!(["a"]));
        assert_eq!(value["comments"][0]["comment"], json!("hi"));
    }

    #[test]
    fn test_detail_replaces_source_comments() {
        let mut stale = post(1, "one");
        stale.fields.insert("comments".to_string(), json!("stale"));

        let detail = find_post(
            vec![stale],
            vec![comment(1, "kept"), comment(2, "elsewhere")],
            1,
        )
        .unwrap();
        let text = serde_json::to_string(&detail).unwrap();
        assert_eq!(text.matches("\"comments\"").count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["comments"].as_array().unwrap().len(), 1);
        assert_eq!(value["comments"][0]["comment"], json!("kept"));
    }

    #[test]
    fn test_sparse_records_are_served() {
        let sparse: Post = serde_json::from_value(json!({ "id": 1, "title": "A" })).unwrap();
        let odd: Comment =
            serde_json::from_value(json!({ "post_id": 1, "created_at": null })).unwrap();

        let summaries = summarize_posts(vec![sparse.clone()], std::slice::from_ref(&odd));
        assert_eq!(
            serde_json::to_value(&summaries[0]).unwrap(),
            json!({ "id": 1, "title": "A", "comments_count": 1 })
        );

        let detail = find_post(vec![sparse], vec![odd], 1).unwrap();
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({
                "id": 1,
                "title": "A",
                "comments": [{ "post_id": 1, "created_at": null }]
            })
        );
    }
}
