pub mod contact;
pub mod enquiry;
pub mod home;
