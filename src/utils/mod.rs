mod build_resp;
mod token;

pub use build_resp::{build_err_resp, build_rejection_resp, build_resp, ErrorResp};
pub use token::{decode_token, issue_token};
