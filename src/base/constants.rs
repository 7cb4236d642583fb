//! Naming constants used when tagging, qualifying and rendering elements.

/// Separator between the segments of a fully-qualified name.
pub const FQN_SEPARATOR: &str = ".";

/// Delimiter between a base name and its disambiguation suffix (`name@3_1`).
pub const NAME_TAG_DELIMITER: char = '@';

/// Delimiter between the index and the parent index inside a suffix.
pub const INDEX_DELIMITER: char = '_';

/// Base name given to elements that carry no identifier of their own.
pub const UNNAMED_ELEMENT_NAME: &str = "GENERATED_NAME";

/// Spelling of a missing parent index inside generated names and suffixes.
pub const NO_PARENT: &str = "None";

/// Name of the synthetic root that owns all top-level elements.
pub const ROOT_NODE_NAME: &str = "root";

/// Separator between the segments of a dotted endpoint (`owner.feature`).
pub const ENDPOINT_SEPARATOR: &str = ".";

/// Role labels prefixed to connect endpoints.
pub const SOURCE_LABEL: &str = "Source";
pub const TARGET_LABEL: &str = "Target";

/// Role labels prefixed to message participants.
pub const OF_LABEL: &str = "Of";
pub const FROM_LABEL: &str = "From";
pub const TO_LABEL: &str = "To";
