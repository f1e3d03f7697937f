use crate::error::CreateError;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeapOptions {
    /// Maximum number of retained nodes. Zero rejects every insertion.
    #[serde(default = "HeapOptions::default_capacity")]
    #[validate(range(max = 16_777_216u32))]
    pub capacity: u32,
    /// Drop NaN priorities when streaming instead of storing them.
    #[serde(default = "HeapOptions::default_reject_unordered")]
    pub reject_unordered: bool,
}

impl HeapOptions {
    fn default_capacity() -> u32 {
        10
    }
    fn default_reject_unordered() -> bool {
        true
    }
    pub fn check(&self) -> Result<(), CreateError> {
        self.validate()
            .map_err(|e| CreateError::InvalidHeapOptions {
                reason: e.to_string(),
            })
    }
}

impl Default for HeapOptions {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
            reject_unordered: Self::default_reject_unordered(),
        }
    }
}
