use console::style;
use walknav_core::WalknavError;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn display(&self) {
        eprintln!(
            "{} {}\n",
            style("✗").red().bold(),
            style(&self.message).red().bold()
        );

        if let Some(ref context) = self.context {
            eprintln!("  {}\n", style(context).dim());
        }

        if !self.suggestions.is_empty() {
            eprintln!("  {}", style("Suggestions:").bold());
            for suggestion in &self.suggestions {
                eprintln!("    • {}", suggestion);
            }
            eprintln!();
        }
    }
}

/// Translate startup configuration failures into actionable CLI errors.
pub fn config_error(err: &WalknavError) -> CliError {
    match err {
        WalknavError::ConfigMissing { key } if key == "api_key" => {
            CliError::new("No mapping service API key configured")
                .with_context("The map, geolocation, and directions requests all need a credential.")
                .with_suggestion("Set the WALKNAV_API_KEY environment variable")
                .with_suggestion("Pass --api-key <KEY>")
                .with_suggestion("Add api_key = \"...\" to your config file")
        }
        other => CliError::new(other.to_string()),
    }
}
