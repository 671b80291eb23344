// About dialog
use super::{DialogKind, DialogState, Notice};

#[derive(Debug, Default)]
pub struct AboutDialog {
    state: DialogState,
}

impl AboutDialog {
    pub const KIND: DialogKind = DialogKind::About;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn notice(&self) -> Notice {
        Notice::new(
            Self::KIND.title(),
            format!(
                "Student Management System\nVersion {}.{}",
                env!("CARGO_PKG_VERSION_MAJOR"),
                env!("CARGO_PKG_VERSION_MINOR")
            ),
        )
    }

    pub fn acknowledge(&mut self) {
        self.state = DialogState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_names_app_and_version() {
        let notice = AboutDialog::new().notice();
        assert_eq!(notice.title, "About");
        assert_eq!(notice.text, "Student Management System\nVersion 1.0");
    }

    #[test]
    fn test_acknowledge_closes() {
        let mut dialog = AboutDialog::new();
        dialog.acknowledge();
        assert_eq!(dialog.state(), DialogState::Closed);
    }
}
