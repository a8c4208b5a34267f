//! Shared fixtures for service tests

use std::sync::Arc;

use chirpy_common::auth::JwtService;
use chirpy_common::Environment;
use chirpy_db::memory::MemoryStore;

use crate::dto::{CreateUserRequest, UserResponse};

use super::{ServiceContext, ServiceContextBuilder, UserService};

pub const TEST_POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

pub fn context(environment: Environment) -> ServiceContext {
    ServiceContextBuilder::new()
        .in_memory(MemoryStore::new())
        .jwt_service(Arc::new(JwtService::new("service-test-secret", 3600, 5_184_000)))
        .polka_key(TEST_POLKA_KEY)
        .environment(environment)
        .build()
        .unwrap()
}

pub async fn register(ctx: &ServiceContext, email: &str, password: &str) -> UserResponse {
    UserService::new(ctx)
        .register(CreateUserRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap()
}
