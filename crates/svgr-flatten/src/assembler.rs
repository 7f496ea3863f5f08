//! Assembler
//!
//! Output slots are reserved in chunk order before any worker starts. Each
//! worker fills the slot of its own rank exactly once; the final document is
//! the header followed by the slots in rank order, whatever order the
//! workers finished in.

use std::sync::Arc;
use svgr_core::{thread_safe_vec, OutputDocument, OutputError, ThreadSafeVec};

/// Rank-indexed, write-once result slots shared between workers
#[derive(Debug, Clone)]
pub struct OutputSlots {
    slots: ThreadSafeVec<Option<String>>,
}

impl OutputSlots {
    /// Reserve `count` empty slots
    pub fn reserve(count: usize) -> Self {
        let slots = thread_safe_vec();
        slots.lock().resize(count, None);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of handles sharing these slots
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.slots)
    }

    /// Store the rendered text of chunk `rank`
    pub fn fill(&self, rank: usize, text: String) -> Result<(), OutputError> {
        let mut slots = self.slots.lock();
        let count = slots.len();
        let slot = slots
            .get_mut(rank)
            .ok_or(OutputError::UnknownSlot { rank, count })?;
        if slot.is_some() {
            return Err(OutputError::SlotAlreadyFilled { rank });
        }
        *slot = Some(text);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.lock().iter().all(Option::is_some)
    }

    /// Concatenate the header and every slot in rank order
    pub fn assemble(&self, document: &OutputDocument) -> Result<String, OutputError> {
        let slots = self.slots.lock();
        let mut out = document.header();
        out.reserve(slots.iter().flatten().map(String::len).sum());
        for (rank, slot) in slots.iter().enumerate() {
            let text = slot.as_deref().ok_or(OutputError::SlotNotFilled { rank })?;
            out.push_str(text);
        }
        Ok(out)
    }
}
