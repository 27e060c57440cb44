// TF-IDF vectorization — tokenization, vocabulary, and the weight matrix.

pub mod tokenize;
pub mod vectorizer;
