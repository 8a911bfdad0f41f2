//! List Summary
//!
//! Completion counts derived from the current items. Always recomputed,
//! never stored.

use crate::config::Messages;
use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub item_count: usize,
    pub completed_count: usize,
}

/// Which footer message to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStatus {
    Empty,
    AllDone,
    Progress { completed: usize, total: usize },
}

impl Summary {
    pub fn of(items: &[Item]) -> Self {
        Self {
            item_count: items.len(),
            completed_count: items.iter().filter(|item| item.completed).count(),
        }
    }

    pub fn status(&self) -> SummaryStatus {
        if self.item_count == 0 {
            SummaryStatus::Empty
        } else if self.completed_count == self.item_count {
            SummaryStatus::AllDone
        } else {
            SummaryStatus::Progress {
                completed: self.completed_count,
                total: self.item_count,
            }
        }
    }

    pub fn message(&self, messages: &Messages) -> String {
        match self.status() {
            SummaryStatus::Empty => messages.start_list.to_string(),
            SummaryStatus::AllDone => messages.all_done.to_string(),
            SummaryStatus::Progress { completed, total } => messages.progress(completed, total),
        }
    }
}
