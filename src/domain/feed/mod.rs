pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod rank;
pub mod service;
pub mod summary;

pub use error::FeedServiceError;
pub use filter::filter;
pub use model::{
    CategoryFilter, FilterCriteria, KindFilter, Post, PostBody, PostKey, PostKind, Viewer,
    ViewerRole,
};
pub use normalize::{excerpt_of, normalize};
pub use rank::{rank, stable_partition};
pub use service::{FeedPage, FeedService, FeedServiceApi};
pub use summary::{summarize, CategoryCount, FeedSummary};
