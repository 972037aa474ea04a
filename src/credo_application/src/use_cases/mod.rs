pub mod login;
pub mod register;

pub use login::LoginUseCase;
pub use register::RegisterUseCase;

#[cfg(test)]
pub(crate) mod test_support;
