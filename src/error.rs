use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("queue is full and cannot be inserted into (capacity {0})")]
    QueueFullError(usize),

    #[error("queue is empty and no piece can be removed")]
    QueueEmptyError,
}
