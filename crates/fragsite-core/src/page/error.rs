//! Page binding errors.

/// The markup lacks an element the page needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no element with id {id:?} in page template")]
    ContainerMissing { id: String },
    #[error("element with id {id:?} is a <{tag}> and cannot hold content")]
    VoidContainer { id: String, tag: String },
    #[error("no element with id {id:?}")]
    ElementMissing { id: String },
    /// Nothing follows the element to take text from.
    #[error("element with id {id:?} has no next sibling element")]
    SiblingMissing { id: String },
}
