// SPDX-License-Identifier: MPL-2.0
//! Native confirmation prompt.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Asks the user to confirm `message` with a Yes/No dialog.
///
/// Resolves to `true` only when the user picks "Yes". Closing the dialog
/// counts as a refusal.
pub async fn confirm_action(title: String, message: String) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    is_confirmation(&result)
}

fn is_confirmation(result: &MessageDialogResult) -> bool {
    matches!(result, MessageDialogResult::Yes | MessageDialogResult::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_affirmative_answers_confirm() {
        assert!(is_confirmation(&MessageDialogResult::Yes));
        assert!(is_confirmation(&MessageDialogResult::Ok));
        assert!(!is_confirmation(&MessageDialogResult::No));
        assert!(!is_confirmation(&MessageDialogResult::Cancel));
    }
}
