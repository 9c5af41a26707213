mod cancel;

pub use self::cancel::{RequestCancellation, cancel_on_disconnect};
