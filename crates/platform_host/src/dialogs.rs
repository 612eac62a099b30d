//! Modal dialog contracts: confirmations, notices, and free-text prompts.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Host service for blocking user dialogs.
pub trait DialogService {
    /// Asks the user to confirm `message`; `false` when declined or unsupported.
    fn confirm(&self, message: &str) -> bool;

    /// Shows an informational notice.
    fn notify(&self, message: &str);

    /// Asks the user for a line of text; `None` when cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
}

impl<D: DialogService + ?Sized> DialogService for Rc<D> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service for unsupported targets: declines confirmations and cancels prompts.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn confirm(&self, _message: &str) -> bool {
        false
    }

    fn notify(&self, _message: &str) {}

    fn prompt(&self, _message: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
struct ScriptedDialogState {
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
    asked: Vec<String>,
    notices: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Dialog service answering from queued responses and recording everything it was shown.
///
/// An empty confirm queue answers `true`; an empty prompt queue answers `None`.
pub struct ScriptedDialogService {
    inner: Rc<RefCell<ScriptedDialogState>>,
}

impl ScriptedDialogService {
    /// Queues the answer for the next confirmation.
    pub fn push_confirm(&self, answer: bool) -> &Self {
        self.inner.borrow_mut().confirms.push_back(answer);
        self
    }

    /// Queues the answer for the next prompt.
    pub fn push_prompt(&self, answer: Option<&str>) -> &Self {
        self.inner
            .borrow_mut()
            .prompts
            .push_back(answer.map(str::to_string));
        self
    }

    /// Confirmation and prompt messages shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.inner.borrow().asked.clone()
    }

    /// Notices shown so far, in order.
    pub fn notices(&self) -> Vec<String> {
        self.inner.borrow().notices.clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn confirm(&self, message: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        inner.asked.push(message.to_string());
        inner.confirms.pop_front().unwrap_or(true)
    }

    fn notify(&self, message: &str) {
        self.inner.borrow_mut().notices.push(message.to_string());
    }

    fn prompt(&self, message: &str) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        inner.asked.push(message.to_string());
        inner.prompts.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_dialogs_answer_in_order_and_record() {
        let dialogs = ScriptedDialogService::default();
        dialogs.push_confirm(false).push_confirm(true);
        dialogs.push_prompt(Some(".pdf"));

        assert!(!dialogs.confirm("first?"));
        assert!(dialogs.confirm("second?"));
        assert!(dialogs.confirm("unscripted?"));
        assert_eq!(dialogs.prompt("suffix?"), Some(".pdf".to_string()));
        assert_eq!(dialogs.prompt("again?"), None);
        dialogs.notify("done");

        assert_eq!(
            dialogs.asked(),
            vec!["first?", "second?", "unscripted?", "suffix?", "again?"]
        );
        assert_eq!(dialogs.notices(), vec!["done"]);
    }

    #[test]
    fn noop_dialogs_decline() {
        let dialogs = NoopDialogService;
        assert!(!dialogs.confirm("delete?"));
        assert_eq!(dialogs.prompt("suffix?"), None);
    }
}
