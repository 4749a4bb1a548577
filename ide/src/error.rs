/// Request-level failures. "No completion" is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeError {
    InvalidCursor,
    InvalidConfig,
}

impl IdeError {
    pub fn message(self) -> &'static str {
        match self {
            IdeError::InvalidCursor => "Invalid cursor",
            IdeError::InvalidConfig => "Invalid completion config",
        }
    }
}

impl std::fmt::Display for IdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for IdeError {}

/// Checks that `cursor` is inside `source` and on a char boundary.
pub(crate) fn validate_cursor(source: &str, cursor: usize) -> Result<u32, IdeError> {
    if cursor > source.len() || !source.is_char_boundary(cursor) {
        return Err(IdeError::InvalidCursor);
    }
    u32::try_from(cursor).map_err(|_| IdeError::InvalidCursor)
}
