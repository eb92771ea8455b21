use crossterm::style::Color;

/// Semantic colors for console output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Bracketed tags that prefix every console line.
pub mod tags {
    pub const SUCCESS: &str = "[success]";
    pub const ERROR: &str = "[error]";
    pub const WARNING: &str = "[warn]";
    pub const INFO: &str = "[info]";
    pub const DEBUG: &str = "[debug]";
}
