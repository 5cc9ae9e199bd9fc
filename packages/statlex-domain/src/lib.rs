pub mod corpus;
pub mod scenario;
pub mod section;
pub mod style;
