/// Identifier meaning stdin for sources and stdout for sinks.
pub const STDIO_IDENTIFIER: &str = "-";

/// Extension that switches on gzip (de)compression.
pub const GZIP_EXTENSION: &str = "gz";
