//! Environment values for the hosted-login integration that consumes these fixtures.
//! Nothing in this crate reads them.

// User pool (hosted login)
pub const USERPOOL_DOMAIN: &str = "nakayama-test";
pub const USERPOOL_REGION: &str = "ap-northeast-1";
pub const USERPOOL_CLIENT_ID: &str = "1f1me4mbcq5kuk6e834k9eenn9";
pub const USERPOOL_RESPONSE_TYPE: &str = "code";
pub const USERPOOL_SCOPE: &str = "openid";

// API gateway
pub const EXECUTE_API_STAGE: &str = "/dev";
