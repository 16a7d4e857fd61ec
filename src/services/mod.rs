pub mod activities_service;
pub mod signup_service;
pub mod slug_service;
