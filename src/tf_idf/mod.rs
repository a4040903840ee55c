pub mod inverse_document_frequency;
pub mod scorer;
pub mod term_frequency;
pub mod types;

pub use inverse_document_frequency::compute_idf;
pub use scorer::score;
pub use term_frequency::compute_tf;
