use thiserror::Error;

/// Failure while loading or reading a record table.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in table '{table}': {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },
    #[error("table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },
    #[error("table '{table}' has no column '{column}'")]
    UnknownColumn { table: String, column: String },
    #[error("table '{table}', row {row}: '{value}' in column '{column}' is not a number")]
    InvalidNumber {
        table: String,
        column: String,
        row: usize,
        value: String,
    },
}

/// A parameter control holds no usable value.
#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("no value selected for '{0}'")]
    Missing(&'static str),
    #[error("empty value selected for '{0}'")]
    Empty(&'static str),
    #[error("'{value}' is not a valid choice for '{control}'")]
    Invalid {
        control: &'static str,
        value: String,
    },
}

/// Anything that stops a renderer from producing a chart, other than a
/// lookup miss.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Data(#[from] DataError),
}
