//! # Credo - Credential Issuance & Verification Service
//!
//! This is a facade crate that re-exports the public APIs of the service
//! components. Use this crate to get access to the whole pipeline in one
//! place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `Blocklist`
//! - **Port traits**: `AccountStore`, `MxResolver`, `CredentialHasher`,
//!   `TokenService`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`
//! - **Adapters**: `HashMapAccountStore`, `HickoryMxResolver`,
//!   `Argon2CredentialHasher`, `JwtTokenService`
//! - **Service**: `AuthService` - router assembly and server entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use credo_core::*;
}

// Re-export most commonly used core types at the root level
pub use credo_core::{
    Account, Blocklist, Claims, Email, EmailError, MAX_FAILED_ATTEMPTS, MIN_PASSWORD_LEN, Password,
    PasswordError, Role,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use credo_core::{
        AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, MxResolveError,
        MxResolver, TokenError, TokenService,
    };
}

pub use credo_core::{
    AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, MxResolveError,
    MxResolver, TokenError, TokenService,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use credo_application::*;
}

pub use credo_application::{LoginError, LoginUseCase, RegisterError, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use credo_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use credo_adapters::persistence::*;
    }

    /// Token and password-hash implementations
    pub mod auth {
        pub use credo_adapters::auth::*;
    }

    /// Mail-exchange resolvers
    pub mod dns {
        pub use credo_adapters::dns::*;
    }

    /// Configuration
    pub mod config {
        pub use credo_adapters::config::*;
    }
}

pub use credo_adapters::{
    Argon2CredentialHasher, HashMapAccountStore, HickoryMxResolver, JwtTokenService, Settings,
    StaticMxResolver,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use credo_service::AuthService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
