pub mod bridge;
pub mod message_types;
pub mod session;
#[cfg(test)]
mod tests;
