// textsim: TF-IDF vectorization and cosine-similarity comparison.
//
// This is the library root. Each module corresponds to one stage of the
// vectorize-then-compare pipeline.

pub mod corpus;
pub mod output;
pub mod similarity;
pub mod tfidf;
