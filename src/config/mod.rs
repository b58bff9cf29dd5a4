mod settings;

pub use settings::AgentConfig;
