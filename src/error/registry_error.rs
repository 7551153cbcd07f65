#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while populating a function registry.
pub enum RegistryError {
    /// A function with this name is already registered.
    AlreadyExists {
        /// The conflicting name.
        name: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists { name } => {
                write!(f, "A function named '{name}' is already registered.")
            },
        }
    }
}

impl std::error::Error for RegistryError {}
