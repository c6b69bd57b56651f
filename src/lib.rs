pub mod config;
pub mod error;
pub mod heap;
pub mod queue;

pub use config::{NegativePriority, QueueConfig};
pub use error::{QueueError, QueueResult};
pub use heap::{HeapNode, MinHeap};
pub use queue::PriorityQueue;
