use dioxus::prelude::*;

pub const TOAST_MS: u32 = 1800;

/// Transient message with a generation counter. Every `show` bumps the
/// generation, so the pending hide of an earlier call finds itself stale
/// and does nothing: rapid calls reset the timer instead of stacking
/// dismissals.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    /// Makes `message` visible and returns the token the eventual
    /// dismissal must present.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.generation += 1;
        self.generation
    }

    /// Hides the toast, but only if no newer `show` happened since the
    /// token was handed out. Returns whether anything was dismissed.
    pub fn dismiss(&mut self, token: u64) -> bool {
        if self.generation == token && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

pub static TOAST: GlobalSignal<ToastState> = Signal::global(ToastState::default);

pub fn show_toast(message: &str) {
    let token = TOAST.write().show(message);
    spawn(async move {
        crate::utils::sleep_ms(TOAST_MS).await;
        TOAST.write().dismiss(token);
    });
}

#[component]
pub fn ToastOverlay() -> Element {
    let toast = TOAST.read();

    match toast.message() {
        Some(msg) => rsx! {
            div {
                class: "fixed bottom-4 right-4 bg-gray-900 text-white px-4 py-2 rounded-md shadow-lg",
                "{msg}"
            }
        },
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_dismiss() {
        let mut toast = ToastState::default();
        let token = toast.show("Book added to your library");
        assert_eq!(toast.message(), Some("Book added to your library"));

        assert!(toast.dismiss(token));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn second_show_invalidates_first_dismissal() {
        let mut toast = ToastState::default();
        let first = toast.show("Book added to your library");
        let second = toast.show("Book removed");

        // the first call's timer fires but must not hide the newer message
        assert!(!toast.dismiss(first));
        assert_eq!(toast.message(), Some("Book removed"));

        // exactly one dismissal happens, on the latest token
        assert!(toast.dismiss(second));
        assert_eq!(toast.message(), None);
        assert!(!toast.dismiss(second));
    }

    #[test]
    fn stale_token_after_dismissal_is_a_noop() {
        let mut toast = ToastState::default();
        let token = toast.show("Book removed");
        assert!(toast.dismiss(token));

        let newer = toast.show("Book added to your library");
        assert!(!toast.dismiss(token));
        assert_eq!(toast.message(), Some("Book added to your library"));
        assert!(toast.dismiss(newer));
    }
}
