/// Use cases module containing application business logic orchestration
mod calculate_size;

pub use calculate_size::CalculateSizeUseCase;
