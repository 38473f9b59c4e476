/// Formatter adapters for the report output formats
mod json_formatter;
mod markdown_formatter;
mod payload_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use payload_formatter::PayloadFormatter;
