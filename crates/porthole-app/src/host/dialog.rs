//! Native confirmation dialog for `show-dialog`.

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use porthole_bridge::{DialogChoice, DialogOutcome};
use porthole_common::HandlerError;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use winit::window::Window;

/// Shows a two-button (`OK`, `Cancel`) modal and reports the choice.
#[async_trait]
pub trait DialogPresenter: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> Result<DialogOutcome, HandlerError>;
}

/// The window dialogs attach to. Filled in and cleared by whoever owns the
/// main window; presenters only read it.
pub struct DialogParent<W = Window>(Arc<RwLock<Option<Arc<W>>>>);

impl<W> DialogParent<W> {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(None)))
    }

    pub fn set(&self, window: Option<Arc<W>>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = window;
    }

    pub fn get(&self) -> Option<Arc<W>> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<W> Clone for DialogParent<W> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<W> Default for DialogParent<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform dialogs through `rfd`, modal to the main window when there is
/// one. Awaiting does not block the event loop.
pub struct NativeDialogs {
    parent: DialogParent,
}

impl NativeDialogs {
    pub fn new(parent: DialogParent) -> Self {
        Self { parent }
    }
}

#[async_trait]
impl DialogPresenter for NativeDialogs {
    async fn confirm(&self, title: &str, message: &str) -> Result<DialogOutcome, HandlerError> {
        let parent = self.parent.get();
        let pending = {
            let mut dialog = AsyncMessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title(title)
                .set_description(message)
                .set_buttons(MessageButtons::OkCancel);
            if let Some(window) = &parent {
                dialog = dialog.set_parent(window.as_ref());
            }
            dialog.show()
        };
        let result = pending.await;
        tracing::debug!(?result, "dialog closed");
        Ok(DialogOutcome::new(choice_from(&result)))
    }
}

fn choice_from(result: &MessageDialogResult) -> DialogChoice {
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => DialogChoice::Confirm,
        MessageDialogResult::Custom(label) if label == DialogChoice::BUTTONS[0] => {
            DialogChoice::Confirm
        }
        _ => DialogChoice::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_maps_to_confirm() {
        assert_eq!(choice_from(&MessageDialogResult::Ok), DialogChoice::Confirm);
        assert_eq!(choice_from(&MessageDialogResult::Yes), DialogChoice::Confirm);
        assert_eq!(
            choice_from(&MessageDialogResult::Custom("OK".into())),
            DialogChoice::Confirm
        );
    }

    #[test]
    fn parent_slot_is_shared_between_clones() {
        let owner: DialogParent<u32> = DialogParent::new();
        let reader = owner.clone();
        assert!(reader.get().is_none());

        owner.set(Some(Arc::new(7)));
        assert_eq!(reader.get().as_deref(), Some(&7));

        owner.set(None);
        assert!(reader.get().is_none());
    }

    #[test]
    fn everything_else_is_cancel() {
        assert_eq!(choice_from(&MessageDialogResult::Cancel), DialogChoice::Cancel);
        assert_eq!(choice_from(&MessageDialogResult::No), DialogChoice::Cancel);
        assert_eq!(
            choice_from(&MessageDialogResult::Custom("Later".into())),
            DialogChoice::Cancel
        );
    }
}
