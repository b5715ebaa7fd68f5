//! Toast notification state.

use serde::Serialize;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Blank,
    Visible,
    Fading,
}

/// Snapshot of the single toast slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastState {
    pub visible: bool,
    pub fade_out: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<ToastKind>,
}

impl ToastState {
    /// Nothing shown.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Freshly shown, not yet fading.
    pub fn shown(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            visible: true,
            fade_out: false,
            message: message.into(),
            kind: Some(kind),
        }
    }

    /// Same toast, now fading out.
    pub fn fading(mut self) -> Self {
        self.fade_out = true;
        self
    }

    pub fn phase(&self) -> ToastPhase {
        match (self.visible, self.fade_out) {
            (false, _) => ToastPhase::Blank,
            (true, false) => ToastPhase::Visible,
            (true, true) => ToastPhase::Fading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_flags() {
        let shown = ToastState::shown(ToastKind::Warning, "careful");
        assert_eq!(ToastState::blank().phase(), ToastPhase::Blank);
        assert_eq!(shown.phase(), ToastPhase::Visible);
        assert_eq!(shown.clone().fading().phase(), ToastPhase::Fading);
        assert_eq!(shown.message, "careful");
    }

    #[test]
    fn serializes_kind_as_type() {
        let json = serde_json::to_value(ToastState::shown(ToastKind::Error, "boom")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "visible": true, "fadeOut": false, "message": "boom", "type": "error" })
        );
    }
}
