pub mod contact;
pub mod faq;
pub mod navbar;
pub mod newsletter;
pub mod notification;
pub mod search;
