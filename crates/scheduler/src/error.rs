use thiserror::Error;

/// Reasons a queue operation is rejected.
///
/// None of these are fatal: the queue is unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("A job with the name \"{0}\" already exists.")]
    DuplicateName(String),

    #[error("No job found with the name \"{0}\".")]
    NotFound(String),

    #[error("No jobs in the queue.")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_job() {
        assert_eq!(
            SchedulerError::DuplicateName("flyer".to_string()).to_string(),
            "A job with the name \"flyer\" already exists."
        );
        assert_eq!(
            SchedulerError::NotFound("memo".to_string()).to_string(),
            "No job found with the name \"memo\"."
        );
        assert_eq!(SchedulerError::EmptyQueue.to_string(), "No jobs in the queue.");
    }
}
