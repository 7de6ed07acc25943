//! Bulk action dispatch: phases, confirmation copy and outcome messages.
//!
//! One dispatcher lock covers every task kind. While a confirmation or an
//! execution is up, all other bulk entry points reject, so "delete" and
//! "restore" can never race on overlapping rows.

/// Bulk mutations the grid can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Move rows to the trash, or remove them permanently when forced
    Delete,
    /// Bring trashed rows back to the active table
    Restore,
    /// Permanently remove everything in the trash
    EmptyTrash,
    /// Turn rows off instead of deleting them (conflict fallback)
    Deactivate,
}

/// A task occupying the dispatcher, export included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTask {
    Bulk(BulkAction),
    Export,
}

/// Dispatcher state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPhase {
    #[default]
    Idle,
    /// A confirmation or parameter dialog is up
    Confirming(GridTask),
    /// The request is in flight
    Executing(GridTask),
}

impl DispatchPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, DispatchPhase::Idle)
    }

    /// True while the named task is in flight
    pub fn is_executing(&self, task: GridTask) -> bool {
        *self == DispatchPhase::Executing(task)
    }
}

/// Whether a new task may begin
pub fn can_begin(phase: DispatchPhase) -> bool {
    phase.is_idle()
}

/// Copy of a confirmation dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmCopy {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub danger: bool,
}

/// What the rows are called in dialog and notification copy
///
/// A single row is named by its display name, several rows by their count.
pub fn subject_label(count: usize, single_label: Option<&str>) -> String {
    match (count, single_label) {
        (1, Some(name)) => format!("\"{}\"", name),
        _ => format!("{} data", count),
    }
}

/// Build the confirmation copy of a bulk action
pub fn confirm_copy(
    action: BulkAction,
    count: usize,
    single_label: Option<&str>,
    is_trash: bool,
    can_force: bool,
) -> ConfirmCopy {
    let subject = subject_label(count, single_label);
    match action {
        BulkAction::Delete => {
            if is_trash {
                ConfirmCopy {
                    title: "Hapus permanen".into(),
                    message: format!(
                        "{} akan dihapus permanen. Tindakan ini tidak dapat dibatalkan.",
                        subject
                    ),
                    confirm_label: "Hapus permanen".into(),
                    danger: true,
                }
            } else if can_force {
                ConfirmCopy {
                    title: "Hapus data".into(),
                    message: format!("{} akan dipindahkan ke sampah.", subject),
                    confirm_label: "Hapus".into(),
                    danger: true,
                }
            } else {
                ConfirmCopy {
                    title: "Hapus data".into(),
                    message: format!("{} akan dihapus dari tabel.", subject),
                    confirm_label: "Hapus".into(),
                    danger: true,
                }
            }
        }
        BulkAction::Restore => ConfirmCopy {
            title: "Pulihkan data".into(),
            message: format!("{} akan dipulihkan dari sampah.", subject),
            confirm_label: "Pulihkan".into(),
            danger: false,
        },
        BulkAction::EmptyTrash => ConfirmCopy {
            title: "Kosongkan sampah".into(),
            message: "Seluruh isi sampah akan dihapus permanen. Tindakan ini tidak dapat dibatalkan."
                .into(),
            confirm_label: "Kosongkan".into(),
            danger: true,
        },
        BulkAction::Deactivate => ConfirmCopy {
            title: "Nonaktifkan data".into(),
            message: format!(
                "{} tidak dapat dihapus karena masih dipakai dokumen lain. Nonaktifkan data tersebut?",
                subject
            ),
            confirm_label: "Nonaktifkan".into(),
            danger: false,
        },
    }
}

/// Success message after a fully completed bulk action
pub fn success_message(
    action: BulkAction,
    count: usize,
    single_label: Option<&str>,
    is_trash: bool,
) -> String {
    let subject = subject_label(count, single_label);
    match action {
        BulkAction::Delete if is_trash => format!("{} dihapus permanen", subject),
        BulkAction::Delete => format!("{} dihapus", subject),
        BulkAction::Restore => format!("{} dipulihkan", subject),
        BulkAction::EmptyTrash => "Sampah dikosongkan".into(),
        BulkAction::Deactivate => format!("{} dinonaktifkan", subject),
    }
}

/// Error message for a partly failed bulk action
pub fn partial_failure_message(failures: usize, total: usize) -> String {
    format!("{}/{} data gagal", failures, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_rejects_while_busy() {
        assert!(can_begin(DispatchPhase::Idle));
        assert!(!can_begin(DispatchPhase::Confirming(GridTask::Bulk(
            BulkAction::Delete
        ))));
        assert!(!can_begin(DispatchPhase::Executing(GridTask::Export)));
        assert!(!can_begin(DispatchPhase::Confirming(GridTask::Export)));
    }

    #[test]
    fn test_subject_label_counts_and_names() {
        assert_eq!(subject_label(2, None), "2 data");
        assert_eq!(subject_label(1, Some("Kabel HDMI 2m")), "\"Kabel HDMI 2m\"");
        // A missing display name falls back to the count
        assert_eq!(subject_label(1, None), "1 data");
        assert_eq!(subject_label(5, Some("ignored")), "5 data");
    }

    #[test]
    fn test_delete_confirmation_names_two_rows() {
        let copy = confirm_copy(BulkAction::Delete, 2, None, false, true);
        assert!(copy.message.contains("2 data"));
        assert!(copy.message.contains("dipindahkan ke sampah"));
        assert!(copy.danger);
    }

    #[test]
    fn test_delete_copy_varies_by_mode() {
        let in_trash = confirm_copy(BulkAction::Delete, 3, None, true, true);
        assert!(in_trash.message.contains("dihapus permanen"));

        let plain = confirm_copy(BulkAction::Delete, 3, None, false, false);
        assert!(plain.message.contains("dihapus dari tabel"));
    }

    #[test]
    fn test_single_row_confirmation_uses_display_name() {
        let copy = confirm_copy(BulkAction::Delete, 1, Some("Elektronik"), false, true);
        assert!(copy.message.contains("\"Elektronik\""));
        assert!(!copy.message.contains("1 data"));
    }

    #[test]
    fn test_empty_trash_copy_ignores_selection() {
        let copy = confirm_copy(BulkAction::EmptyTrash, 0, None, true, true);
        assert!(copy.message.contains("Seluruh isi sampah"));
        assert!(copy.danger);
    }

    #[test]
    fn test_deactivate_copy_explains_the_conflict() {
        let copy = confirm_copy(BulkAction::Deactivate, 3, None, false, true);
        assert!(copy.message.contains("3 data"));
        assert!(copy.message.contains("masih dipakai"));
        assert_eq!(copy.confirm_label, "Nonaktifkan");
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(success_message(BulkAction::Delete, 5, None, false), "5 data dihapus");
        assert_eq!(
            success_message(BulkAction::Delete, 5, None, true),
            "5 data dihapus permanen"
        );
        assert_eq!(
            success_message(BulkAction::Restore, 1, Some("Elektronik"), true),
            "\"Elektronik\" dipulihkan"
        );
        assert_eq!(
            success_message(BulkAction::EmptyTrash, 0, None, true),
            "Sampah dikosongkan"
        );
    }

    #[test]
    fn test_partial_failure_ratio() {
        assert_eq!(partial_failure_message(2, 5), "2/5 data gagal");
    }
}
