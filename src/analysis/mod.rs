// Comment analysis modules for sentimen
pub mod aggregate;
pub mod classifier;
pub mod corpus;
pub mod decision;
pub mod lexicon;
pub mod themes;
pub mod tokenize;

pub use aggregate::summarize;
pub use classifier::train;
pub use corpus::bundled_corpus;
pub use decision::decide;
pub use themes::tag_themes;
pub use tokenize::tokenize;
