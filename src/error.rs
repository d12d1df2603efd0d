use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error(
        "Trigger configuration is incorrect length: expected {expected} signals, got {actual}"
    )]
    InvalidLength { expected: usize, actual: usize },

    #[error(
        "Trigger configuration contains invalid character {symbol:?} at position {position}"
    )]
    InvalidSymbol { position: usize, symbol: char },
}
