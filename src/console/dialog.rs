use serde::Serialize;

/// A mutating action waiting for the operator's go-ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PendingAction {
    SetAdminStatus { user_id: i64, make_admin: bool },
    DeleteUser { user_id: i64, username: String },
    DeleteAsset { item_id: i64, name: String },
}

impl PendingAction {
    /// Question shown in the confirmation dialog.
    pub fn describe(&self) -> String {
        match self {
            PendingAction::SetAdminStatus { make_admin, .. } => {
                let action = if *make_admin {
                    "grant admin privileges to"
                } else {
                    "remove admin privileges from"
                };
                format!("Are you sure you want to {} this user?", action)
            }
            PendingAction::DeleteUser { username, .. } => format!(
                "Are you sure you want to delete user \"{}\"? This action cannot be undone and will delete all their data.",
                username
            ),
            PendingAction::DeleteAsset { name, .. } => {
                format!("Are you sure you want to delete asset \"{}\"?", name)
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            PendingAction::SetAdminStatus { .. } => "Admin status updated successfully",
            PendingAction::DeleteUser { .. } => "User deleted successfully",
            PendingAction::DeleteAsset { .. } => "Asset deleted successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            PendingAction::SetAdminStatus { .. } => "Failed to update admin status",
            PendingAction::DeleteUser { .. } => "Failed to delete user",
            PendingAction::DeleteAsset { .. } => "Failed to delete asset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<A> {
    Hidden,
    Shown { message: String, action: A },
}

impl<A> Default for DialogState<A> {
    fn default() -> Self {
        DialogState::Hidden
    }
}

/// The single confirmation dialog. It owns one action slot: every request
/// overwrites whatever was bound before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog<A = PendingAction> {
    state: DialogState<A>,
}

impl<A> Default for ConfirmDialog<A> {
    fn default() -> Self {
        Self { state: DialogState::Hidden }
    }
}

impl<A> ConfirmDialog<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog with `message` bound to `action`, discarding any prior pending action.
    pub fn request(&mut self, message: impl Into<String>, action: A) {
        if self.is_shown() {
            tracing::debug!("Replacing pending confirmation");
        }
        self.state = DialogState::Shown {
            message: message.into(),
            action,
        };
    }

    /// Hide the dialog and hand back the bound action, if any.
    pub fn confirm(&mut self) -> Option<A> {
        match std::mem::take(&mut self.state) {
            DialogState::Shown { action, .. } => Some(action),
            DialogState::Hidden => None,
        }
    }

    /// Hide the dialog and drop the bound action. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        let was_shown = self.is_shown();
        self.state = DialogState::Hidden;
        was_shown
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, DialogState::Shown { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            DialogState::Shown { message, .. } => Some(message),
            DialogState::Hidden => None,
        }
    }

    pub fn pending(&self) -> Option<&A> {
        match &self.state {
            DialogState::Shown { action, .. } => Some(action),
            DialogState::Hidden => None,
        }
    }

    pub fn state(&self) -> &DialogState<A> {
        &self.state
    }
}
