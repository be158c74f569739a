use rand::Rng;
use serde::Serialize;

const REFERENCE_PREFIX: &str = "DEMO-REF-";
const REFERENCE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REFERENCE_LEN: usize = 6;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn booking_complete() -> Self {
        Toast {
            title: "Thank you!".to_string(),
            description: "Your demo booking is complete.".to_string(),
        }
    }

    pub fn reference_copied() -> Self {
        Toast {
            title: "Reference copied".to_string(),
            description: "We copied your demo reference to clipboard.".to_string(),
        }
    }
}

/// Fire-and-forget sink for user-facing notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: &Toast) {
        log::info!("toast: {} ({})", toast.title, toast.description);
    }
}

/// Display-only booking reference. Nothing is stored against it.
pub fn generate_reference() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("{}{}", REFERENCE_PREFIX, suffix)
}
