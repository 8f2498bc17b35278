//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a one-line status headline.
    fn headline(&mut self, text: &str);

    /// Render a ` (key) => value` detail line.
    fn detail(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a failure headline and its message.
    fn failure(&mut self, headline: &str, message: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Failures go to stderr, everything else to stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn headline(&mut self, text: &str) {
        println!("{}", text);
    }

    fn detail(&mut self, key: &str, value: &str) {
        println!(" ({}) => {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("   - {}", text);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn failure(&mut self, headline: &str, message: &str) {
        eprintln!("{}", headline);
        eprintln!(" (error) => {}", message);
    }
}

/// Records rendered lines, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn headline(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn detail(&mut self, key: &str, value: &str) {
        self.stdout.push(format!(" ({}) => {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("   - {}", text));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push(text.to_string());
    }

    fn failure(&mut self, headline: &str, message: &str) {
        self.stderr.push(headline.to_string());
        self.stderr.push(format!(" (error) => {}", message));
    }
}
