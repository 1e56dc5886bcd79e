use std::cell::RefCell;

use crate::constants::{NOTICE_INVALID_SELECTION, NOTICE_LOGIN_OK, NOTICE_PASSWORD_MISMATCH};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }

    pub fn login_ok() -> Self {
        Self::info(NOTICE_LOGIN_OK)
    }

    pub fn account_created(country: &str, region: &str) -> Self {
        Self::info(format!("Account Created for {country}, {region}! Please Log In."))
    }

    pub fn invalid_selection() -> Self {
        Self::error(NOTICE_INVALID_SELECTION)
    }

    pub fn password_mismatch() -> Self {
        Self::error(NOTICE_PASSWORD_MISMATCH)
    }
}

pub trait NoticeSink {
    fn notify(&self, notice: Notice);
}

impl NoticeSink for RefCell<Vec<Notice>> {
    fn notify(&self, notice: Notice) {
        self.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_created_names_the_selection() {
        let notice = Notice::account_created("Chile", "Biobío");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.text, "Account Created for Chile, Biobío! Please Log In.");
    }

    #[test]
    fn queue_keeps_order() {
        let queue = RefCell::new(vec![]);
        queue.notify(Notice::login_ok());
        queue.notify(Notice::invalid_selection());
        let levels = queue.borrow().iter().map(|n| n.level).collect::<Vec<_>>();
        assert_eq!(levels, vec![NoticeLevel::Info, NoticeLevel::Error]);
    }
}
