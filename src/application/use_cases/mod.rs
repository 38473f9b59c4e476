/// Use cases - Application services orchestrating the domain
mod screen_opportunities;

pub use screen_opportunities::ScreenOpportunitiesUseCase;
