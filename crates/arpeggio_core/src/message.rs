//! Message types for composed prompts.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One role-tagged entry in a composed prompt.
///
/// # Examples
///
/// ```
/// use arpeggio_core::{Message, Role};
///
/// let message = Message {
///     role: Role::User,
///     content: "Hello!".to_string(),
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}
