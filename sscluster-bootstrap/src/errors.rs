use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomizeError {
    #[error(
        "Cannot place locus {locus} ({length} bp): no chromosome is longer than it (longest is {longest} bp)"
    )]
    NoSuitableChromosome {
        locus: String,
        length: u64,
        longest: u64,
    },

    #[error("Failed to build the bootstrap thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, RandomizeError>;
