//! Modal dialog identifiers shared by the auth flows.

use crate::config::{MODAL_LOGIN, MODAL_SIGNUP, MODAL_USER_MENU};

/// Modals the client can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalType {
    Login,
    Signup,
    UserMenu,
}

impl ModalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalType::Login => MODAL_LOGIN,
            ModalType::Signup => MODAL_SIGNUP,
            ModalType::UserMenu => MODAL_USER_MENU,
        }
    }
}

impl TryFrom<&str> for ModalType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            MODAL_LOGIN => Ok(ModalType::Login),
            MODAL_SIGNUP => Ok(ModalType::Signup),
            MODAL_USER_MENU => Ok(ModalType::UserMenu),
            other => Err(format!("unknown modal `{}`", other)),
        }
    }
}

impl std::fmt::Display for ModalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
