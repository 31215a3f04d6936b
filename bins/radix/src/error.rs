use mapper::MapperError;

#[derive(Debug, thiserror::Error)]
pub enum RadixError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Mapper(#[from] MapperError),
}
