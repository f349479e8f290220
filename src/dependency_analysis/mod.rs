/// Domain layer - dependency models, health scoring policy and the pure
/// services (manifest parsing, import matching, batch scheduling)
pub mod domain;
pub mod policies;
pub mod services;
