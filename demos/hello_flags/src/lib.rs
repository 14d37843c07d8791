//! Library half of the `hello_flags` demo.
//!
//! [`GreetConfig`] derives [`FieldBinder`] so every field can be set from the
//! command line, and [`render`] turns the bound configuration into the text
//! the binary prints.

pub mod error;

use flagbind::FieldBinder;

/// Options understood by the demo.
#[derive(Debug, Clone, PartialEq, FieldBinder)]
pub struct GreetConfig {
    /// Who to greet. Several values are joined.
    pub name: String,
    /// Salutation placed before the name.
    pub greeting: String,
    /// How many times the greeting line is printed.
    pub repeat: u8,
    /// Ports to list, accepting `0x`/`0o`/`0b` literals.
    #[flagbind(name = "port")]
    pub ports: Vec<u16>,
    /// Weights to list.
    pub weights: Vec<f64>,
    /// Switches to list, as `true`/`false`.
    pub switches: Vec<bool>,
}

impl Default for GreetConfig {
    fn default() -> Self {
        Self {
            name: "World".to_owned(),
            greeting: "Hello".to_owned(),
            repeat: 1,
            ports: Vec::new(),
            weights: Vec::new(),
            switches: Vec::new(),
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the greeting followed by any list options that were supplied.
///
/// Trailing whitespace left by multi-value joins is trimmed from the name.
#[must_use]
pub fn render(config: &GreetConfig) -> String {
    let greeting = config.greeting.trim_end();
    let name = config.name.trim_end();
    let mut lines: Vec<String> = (0..config.repeat)
        .map(|_| format!("{greeting}, {name}!"))
        .collect();
    if !config.ports.is_empty() {
        lines.push(format!("ports: {}", join(&config.ports)));
    }
    if !config.weights.is_empty() {
        lines.push(format!("weights: {}", join(&config.weights)));
    }
    if !config.switches.is_empty() {
        lines.push(format!("switches: {}", join(&config.switches)));
    }
    lines.into_iter().map(|line| line + "\n").collect()
}
