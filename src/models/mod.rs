pub mod email_record;
pub mod franchise_request;
