pub mod analyze_history;
pub mod analyze_vulnerability;
pub mod generate_scenario;

pub use analyze_history::AnalyzeHistoryUseCase;
pub use analyze_vulnerability::AnalyzeVulnerabilityUseCase;
pub use generate_scenario::GenerateScenarioUseCase;
