//! Feed data for the anonymous-until-revealed timeline.
//! Posts come from a `FeedSource`; vote tallies live next to them in
//! `FeedState` and only change through `FeedAction::Apply`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;
use yew::Reducible;

use crate::state::{GestureOutcome, VoteState};

pub const MAX_POST_LEN: usize = 500;
pub const DEFAULT_VOTE_THRESHOLD: u32 = 100;
pub const CURRENT_USER_ID: &str = "current-user";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub is_revealed: bool,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Votes needed before the author's identity is shown.
    pub vote_threshold: u32,
    pub current_votes: u32,
}

impl Author {
    pub fn anonymous(id: &str) -> Self {
        Self {
            id: id.to_string(),
            is_revealed: false,
            name: None,
            avatar_url: None,
            vote_threshold: DEFAULT_VOTE_THRESHOLD,
            current_votes: 0,
        }
    }

    /// Percentage of the reveal threshold reached, capped at 100.
    pub fn reveal_progress(&self) -> f64 {
        if self.vote_threshold == 0 {
            return 100.0;
        }
        (self.current_votes as f64 / self.vote_threshold as f64 * 100.0).min(100.0)
    }

    pub fn display_name(&self) -> &str {
        if !self.is_revealed {
            return "Anonymous";
        }
        self.name.as_deref().unwrap_or("Anonymous User")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub votes: i64,
    pub comment_count: u32,
    /// ISO-8601 timestamp.
    pub created_at: String,
    pub author: Author,
}

impl Post {
    pub fn vote_state(&self) -> VoteState {
        VoteState::new(self.votes)
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Malformed feed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Post is empty")]
    Empty,
    #[error("Post is {len} characters, the limit is {}", MAX_POST_LEN)]
    TooLong { len: usize },
}

/// Trims a draft and checks it against the length limit.
pub fn validate_draft(content: &str) -> Result<String, DraftError> {
    let trimmed = content.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(DraftError::Empty);
    }
    if len > MAX_POST_LEN {
        return Err(DraftError::TooLong { len });
    }
    Ok(trimmed.to_string())
}

pub trait FeedSource {
    fn load(&self) -> Result<Vec<Post>, FeedError>;
}

/// Fixed feed shipped with the app, read from a JSON document.
pub struct SeedFeed {
    raw: &'static str,
}

impl SeedFeed {
    pub fn bundled() -> Self {
        Self {
            raw: include_str!("seed_feed.json"),
        }
    }

    #[cfg(test)]
    pub fn from_json(raw: &'static str) -> Self {
        Self { raw }
    }
}

impl FeedSource for SeedFeed {
    fn load(&self) -> Result<Vec<Post>, FeedError> {
        Ok(serde_json::from_str(self.raw)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub posts: Vec<Post>,
    /// Parallel to `posts`.
    pub votes: Vec<VoteState>,
    /// Bumped on every effective change.
    pub version: u64,
}

impl FeedState {
    pub fn index_of(&self, post_id: &str) -> Option<usize> {
        self.posts.iter().position(|p| p.id == post_id)
    }

    #[cfg(test)]
    pub fn vote_for(&self, post_id: &str) -> Option<VoteState> {
        self.index_of(post_id).and_then(|i| self.votes.get(i).copied())
    }
}

pub enum FeedAction {
    Load { posts: Vec<Post> },
    Apply { post_id: String, outcome: GestureOutcome },
    /// `content` must already have passed `validate_draft`.
    Publish { id: String, content: String, created_at: String },
}

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use FeedAction::*;
        let mut new = (*self).clone();
        match action {
            Load { posts } => {
                new.votes = posts.iter().map(Post::vote_state).collect();
                new.posts = posts;
            }
            Apply { post_id, outcome } => {
                let Some(vote) = new.index_of(&post_id).and_then(|i| new.votes.get_mut(i)) else {
                    return self;
                };
                if vote.apply(outcome).is_none() {
                    return self;
                }
            }
            Publish { id, content, created_at } => {
                let Ok(content) = validate_draft(&content) else { return self; };
                let post = Post {
                    id,
                    content,
                    votes: 0,
                    comment_count: 0,
                    created_at,
                    author: Author::anonymous(CURRENT_USER_ID),
                };
                new.votes.insert(0, post.vote_state());
                new.posts.insert(0, post);
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Rc<FeedState> {
        let posts = SeedFeed::bundled().load().unwrap();
        Rc::new(FeedState::default()).reduce(FeedAction::Load { posts })
    }

    #[test]
    fn bundled_feed_parses() {
        let posts = SeedFeed::bundled().load().unwrap();
        assert_eq!(posts.len(), 5);
        assert_eq!(posts[1].author.display_name(), "Sam Rivera");
        assert_eq!(posts[0].author.display_name(), "Anonymous");
    }

    #[test]
    fn malformed_feed_is_an_error() {
        let err = SeedFeed::from_json("[{\"id\": 3}]").load().unwrap_err();
        assert!(matches!(err, FeedError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed feed document"));
    }

    #[test]
    fn reveal_progress_is_capped() {
        let mut a = Author::anonymous("a");
        a.current_votes = 63;
        assert_eq!(a.reveal_progress(), 63.0);
        a.current_votes = 140;
        assert_eq!(a.reveal_progress(), 100.0);
        a.vote_threshold = 0;
        assert_eq!(a.reveal_progress(), 100.0);
    }

    #[test]
    fn revealed_without_name() {
        let mut a = Author::anonymous("a");
        a.is_revealed = true;
        assert_eq!(a.display_name(), "Anonymous User");
    }

    #[test]
    fn load_seeds_votes() {
        let feed = seeded();
        assert_eq!(feed.votes.len(), feed.posts.len());
        assert_eq!(feed.vote_for("post-0"), Some(VoteState { count: 42, boosted: false }));
        assert_eq!(feed.version, 1);
    }

    #[test]
    fn apply_updates_one_post() {
        let feed = seeded();
        let feed = feed.reduce(FeedAction::Apply {
            post_id: "post-3".into(),
            outcome: GestureOutcome::Boost,
        });
        assert_eq!(feed.vote_for("post-3"), Some(VoteState { count: 4, boosted: true }));
        assert_eq!(feed.vote_for("post-2"), Some(VoteState { count: 87, boosted: false }));
        let feed = feed.reduce(FeedAction::Apply {
            post_id: "post-3".into(),
            outcome: GestureOutcome::Deboost,
        });
        assert_eq!(feed.vote_for("post-3"), Some(VoteState { count: 3, boosted: false }));
        assert_eq!(feed.version, 3);
    }

    #[test]
    fn apply_noops_keep_version() {
        let feed = seeded();
        let same = feed.clone().reduce(FeedAction::Apply {
            post_id: "missing".into(),
            outcome: GestureOutcome::Boost,
        });
        assert!(Rc::ptr_eq(&feed, &same));
        let same = feed.clone().reduce(FeedAction::Apply {
            post_id: "post-0".into(),
            outcome: GestureOutcome::None,
        });
        assert!(Rc::ptr_eq(&feed, &same));
    }

    #[test]
    fn publish_prepends_anonymous_post() {
        let feed = seeded().reduce(FeedAction::Publish {
            id: "post-new".into(),
            content: "  hello there  ".into(),
            created_at: "2025-03-15T10:00:00Z".into(),
        });
        let first = &feed.posts[0];
        assert_eq!(first.content, "hello there");
        assert_eq!(first.votes, 0);
        assert_eq!(first.author.id, CURRENT_USER_ID);
        assert!(!first.author.is_revealed);
        assert_eq!(feed.votes[0], VoteState::new(0));
        assert_eq!(feed.posts.len(), 6);
    }

    #[test]
    fn publish_rejects_bad_drafts() {
        let feed = seeded();
        let same = feed.clone().reduce(FeedAction::Publish {
            id: "x".into(),
            content: "   ".into(),
            created_at: String::new(),
        });
        assert!(Rc::ptr_eq(&feed, &same));
    }

    #[test]
    fn apply_with_missing_tally_is_a_noop() {
        let posts = SeedFeed::bundled().load().unwrap();
        let feed = Rc::new(FeedState {
            posts,
            votes: Vec::new(),
            version: 7,
        });
        let same = feed.clone().reduce(FeedAction::Apply {
            post_id: "post-1".into(),
            outcome: GestureOutcome::Deboost,
        });
        assert!(Rc::ptr_eq(&feed, &same));
        assert_eq!(same.version, 7);
    }

    #[test]
    fn draft_validation() {
        assert_eq!(validate_draft(" hi "), Ok("hi".to_string()));
        assert_eq!(validate_draft("\n\t"), Err(DraftError::Empty));
        assert!(validate_draft(&"a".repeat(400)).is_ok());
        assert!(validate_draft(&"é".repeat(500)).is_ok());
        assert_eq!(validate_draft(&"a".repeat(501)), Err(DraftError::TooLong { len: 501 }));
        assert_eq!(
            DraftError::TooLong { len: 501 }.to_string(),
            "Post is 501 characters, the limit is 500"
        );
    }
}
