use thiserror::Error;

/// The central error type for ringlist.
///
/// List operations return [`ListError`] directly; the workload driver and
/// CLI lift everything into this enum.
#[derive(Error, Debug)]
pub enum RinglistError {
    #[error("List error: {0}")]
    List(#[from] ListError),

    #[error("Workload error: {0}")]
    Workload(#[from] WorkloadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Contract violations raised by [`RingList`](crate::RingList) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("capacity exhausted: cannot grow beyond {capacity} slots")]
    CapacityExhausted { capacity: usize },

    #[error("invalid initial capacity {requested} (must be between 1 and {max})")]
    InvalidCapacity { requested: usize, max: usize },

    #[error("destination too small: need {required} slots, have {available}")]
    DestinationTooSmall { required: usize, available: usize },
}

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Lists diverged at step {step} after {operation} (index {index})")]
    Divergence {
        step: usize,
        operation: String,
        index: usize,
    },

    #[error("Invalid workload parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, RinglistError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_DIVERGENCE: u8 = 3;
pub const EXIT_LIST_ERROR: u8 = 4;

/// Check if an anyhow error is a differential divergence.
pub fn is_divergence(e: &anyhow::Error) -> bool {
    if let Some(RinglistError::Workload(WorkloadError::Divergence { .. })) =
        e.downcast_ref::<RinglistError>()
    {
        return true;
    }
    matches!(
        e.downcast_ref::<WorkloadError>(),
        Some(WorkloadError::Divergence { .. })
    )
}

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if is_divergence(e) {
        return EXIT_DIVERGENCE;
    }

    if let Some(err) = e.downcast_ref::<RinglistError>() {
        return match err {
            RinglistError::Config(_) => EXIT_CONFIG_ERROR,
            RinglistError::List(_) => EXIT_LIST_ERROR,
            _ => EXIT_ERROR,
        };
    }

    if e.downcast_ref::<ListError>().is_some() {
        return EXIT_LIST_ERROR;
    }

    // Fallback string matching for errors that only carry context text
    let msg = e.to_string().to_lowercase();
    if msg.contains("config") {
        return EXIT_CONFIG_ERROR;
    }

    EXIT_ERROR
}
