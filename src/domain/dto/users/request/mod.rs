//! 사용자 요청 DTO

pub mod create_user_request;
pub mod update_profile_request;

pub use create_user_request::CreateUserRequest;
pub use update_profile_request::UpdateProfileRequest;
