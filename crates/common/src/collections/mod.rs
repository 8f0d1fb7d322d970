//! Specialized data structures
//!
//! - **[`ring_buffer`]**: Fixed-capacity ring that evicts its oldest entry
//!
//! ## Usage
//!
//! ```rust
//! use querytap_common::collections::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(10);
//! buffer.push(1);
//! assert_eq!(buffer.tail(1).copied().collect::<Vec<_>>(), vec![1]);
//! ```

pub mod ring_buffer;

// Re-export commonly used types
pub use ring_buffer::RingBuffer;
