//! Batch planning for channel-limited delivery

use crate::core::error::DomainError;

/// Maximum items per delivery call (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    pub fn new(size: usize) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::ZeroBatchSize);
        }
        Ok(Self(size))
    }

    /// Clamp to a valid size; zero becomes one
    pub fn at_least_one(size: usize) -> Self {
        Self(size.max(1))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Where a batch goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTarget {
    /// Direct answer, spends the event's reply token
    Reply,
    /// Out-of-band push to the user
    Push,
}

impl BatchTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchTarget::Reply => "reply",
            BatchTarget::Push => "push",
        }
    }
}

/// One delivery call's worth of items
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryBatch<T> {
    /// Zero-based position in the call sequence
    pub index: usize,
    pub target: BatchTarget,
    pub items: Vec<T>,
}

/// Split `items` into consecutive chunks of at most `size`, in order.
///
/// The first chunk targets the reply token, the rest are pushes. Produces
/// `ceil(n / size)` batches and none for an empty input.
pub fn plan_batches<T>(items: Vec<T>, size: BatchSize) -> Vec<DeliveryBatch<T>> {
    let mut batches = Vec::with_capacity(items.len().div_ceil(size.get()));
    let mut iter = items.into_iter().peekable();
    let mut index = 0;

    while iter.peek().is_some() {
        let chunk: Vec<T> = iter.by_ref().take(size.get()).collect();
        let target = if index == 0 {
            BatchTarget::Reply
        } else {
            BatchTarget::Push
        };
        batches.push(DeliveryBatch {
            index,
            target,
            items: chunk,
        });
        index += 1;
    }

    batches
}
