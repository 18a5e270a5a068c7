use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid publication year '{input}': {source}")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
