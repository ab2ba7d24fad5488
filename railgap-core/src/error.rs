use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("No usable rail ridership data found in the provided files")]
    NoRailData,
    #[error("No rail station could be located from the bus stop data")]
    NoStationsLocated,
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
