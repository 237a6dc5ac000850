use crate::entities::Post;

/// Sum of vote and comment counters across a set of posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub votes: i64,
    pub comments: i64,
}

impl Totals {
    /// Fold every post's counters into a single pair
    pub fn from_posts(posts: &[Post]) -> Self {
        posts.iter().fold(Self::default(), |acc, post| Self {
            votes: acc.votes + post.vote_count,
            comments: acc.comments + post.comment_count,
        })
    }
}
