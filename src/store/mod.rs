// Read path over digest directories populated by the ingestion pipeline.

pub mod digest_store;
pub mod validate;
