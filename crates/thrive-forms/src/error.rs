use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("the form already has the maximum of {max} rows")]
    RowLimit { max: usize },

    #[error("the form must keep at least {min} row(s)")]
    MinRows { min: usize },

    #[error("no row at index {index}")]
    NoSuchRow { index: usize },

    #[error("row {number} is incomplete")]
    IncompleteRow { number: u32 },

    #[error("no rating recorded for goal {number}")]
    MissingRating { number: u32 },

    #[error("rating must be between 0 and {max}, got {value}")]
    RatingOutOfRange { value: u8, max: u8 },
}
