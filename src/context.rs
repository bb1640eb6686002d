//! The traversal-context seam consumed by [`Pointer::for_path`].
//!
//! A streaming reader or tree walker that wants to describe "where am I right
//! now" as a JSON Pointer keeps a parent-linked stack of frames, one per open
//! container. This module defines the minimal view of such a stack that
//! [`Pointer::for_path`] needs; it imposes nothing else on the collaborator.
//!
//! [`Pointer::for_path`]: crate::Pointer::for_path

/// The kind of container a traversal frame is positioned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Outside any container, at the top level of the document stream.
    Root,
    /// Inside a JSON object.
    Object,
    /// Inside a JSON array.
    Array,
}

/// One frame of a parent-linked traversal stack.
///
/// Implementations report which container the cursor is in and where within
/// it the cursor currently sits. Object frames expose the field name most
/// recently read; array and root frames expose a zero-based entry index.
/// `None` from either accessor means the cursor has not advanced that far
/// yet; for example, an object frame between the `{` and its first key has
/// no current name.
pub trait TraversalContext {
    /// The enclosing frame, or `None` for the outermost frame.
    fn parent(&self) -> Option<&Self>;

    /// The container kind of this frame.
    fn kind(&self) -> ContainerKind;

    /// The field name most recently read in an object frame.
    fn current_name(&self) -> Option<&str>;

    /// The zero-based position of the cursor within an array or root frame.
    fn current_index(&self) -> Option<usize>;

    /// Whether this frame has advanced far enough to contribute a path
    /// segment: an object frame needs a name, an array frame needs an index,
    /// a root frame never contributes on its own.
    fn has_path_segment(&self) -> bool {
        match self.kind() {
            ContainerKind::Object => self.current_name().is_some(),
            ContainerKind::Array => self.current_index().is_some(),
            ContainerKind::Root => false,
        }
    }
}
