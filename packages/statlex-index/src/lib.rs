mod error;
pub mod models;
pub mod qdrant;

pub use error::{Error, Result};
pub use models::CandidateMatch;
pub use qdrant::{IndexStats, QdrantStore};
