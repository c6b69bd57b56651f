use num::{PrimInt, Signed};

use crate::error::{QueueError, QueueResult};

/// What to do with a negative priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativePriority {
    /// Fail the operation with `QueueError::InvalidPriority`
    Reject,
    /// Leave the queue untouched and report success
    Drop,
}

impl Default for NegativePriority {
    fn default() -> Self {
        NegativePriority::Reject
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueConfig {
    pub negative_priority: NegativePriority,
}

impl QueueConfig {
    pub fn new(negative_priority: NegativePriority) -> Self {
        QueueConfig { negative_priority }
    }

    /// Config that silently ignores negative priorities
    pub fn dropping() -> Self {
        QueueConfig::new(NegativePriority::Drop)
    }

    /// Decide whether `priority` may be stored.
    /// Ok(true) means store it, Ok(false) means drop it, Err means reject the call.
    pub(crate) fn admit<P: PrimInt + Signed>(&self, priority: P) -> QueueResult<bool> {
        if !priority.is_negative() {
            return Ok(true);
        }
        match self.negative_priority {
            NegativePriority::Reject => Err(QueueError::InvalidPriority),
            NegativePriority::Drop => {
                log::debug!("dropping element with negative priority");
                Ok(false)
            }
        }
    }
}
