//! SMTP connection management.

mod session;
mod stream;

pub use session::Session;
pub use stream::{SmtpStream, connect};
