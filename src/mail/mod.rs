pub mod send_email;
pub mod template;
