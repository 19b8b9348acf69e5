use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {0}")]
    TruncatedInput(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Record data of {remaining} bytes does not divide into records of {record_size} bytes")]
    MisalignedRecordCount { remaining: usize, record_size: usize },

    #[error("Field \"{0}\" is an enum, which this reader does not support")]
    UnsupportedFieldType(String),
}
