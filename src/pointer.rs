
use crate::{
    context::{ContainerKind, TraversalContext},
    index, token,
    token::Tokens,
    ParseError,
};
use alloc::{
    borrow::Cow,
    boxed::Box,
    string::{String, ToString},
    sync::Arc,
    vec::Vec,
};
use core::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    mem,
    str::FromStr,
    sync::atomic::{self, AtomicU32},
};
use once_cell::race::OnceBox;

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Pointer                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An immutable JSON Pointer: a chain of reference tokens, each prefixed by a
/// `'/'` character, identifying a location inside a JSON-like structure.
///
/// See [RFC 6901 for more
/// information](https://datatracker.ietf.org/doc/html/rfc6901).
///
/// A `Pointer` is a singly linked chain of segments. Every segment of one
/// chain shares a single backing string, differing only by offset into it, so
/// [`tail`](Self::tail) is free and [`as_str`](Self::as_str) is a view rather
/// than a copy. The empty pointer, which has no segments and addresses the
/// current value itself, is a first-class value, not a null.
///
/// Chains are never mutated. [`append`](Self::append),
/// [`append_property`](Self::append_property) and [`head`](Self::head)
/// produce new values; `Clone` is a reference-count bump. `Pointer` is `Send`
/// and `Sync`.
///
/// ## Example
/// ```rust
/// use chainptr::Pointer;
///
/// let ptr = Pointer::parse("/foo/0").unwrap();
/// assert_eq!(ptr.property(), Some("foo"));
///
/// let rest = ptr.match_property("foo").unwrap();
/// assert_eq!(rest.index(), Some(0));
/// assert_eq!(rest.property(), Some("0"));
///
/// let rest = rest.match_element(0).unwrap();
/// assert!(rest.matches());
/// ```
#[derive(Clone)]
pub struct Pointer {
    segment: Option<Arc<Segment>>,
}

impl Pointer {
    /// Returns the empty pointer, which has no segments and matches the
    /// current value.
    ///
    /// The empty pointer is the terminator of every chain; its string form is
    /// `""`.
    pub fn empty() -> Self {
        Self { segment: None }
    }

    /// Returns the empty pointer.
    ///
    /// alias for [`empty`](Self::empty), as an empty pointer addresses the
    /// whole document.
    pub fn root() -> Self {
        Self::empty()
    }

    /// Parses a pointer expression into a chain of segments.
    ///
    /// An empty expression yields the empty pointer. Any other expression
    /// must start with `'/'`; beyond that, every input is accepted. Empty
    /// tokens (`"//"`), numeric lookalikes with leading zeros, and invalid
    /// escape pairs (kept literally) all produce well-defined pointers.
    ///
    /// ## Example
    /// ```rust
    /// use chainptr::Pointer;
    ///
    /// let ptr = Pointer::parse("/a~1b/c").unwrap();
    /// assert_eq!(ptr.property(), Some("a/b"));
    /// assert_eq!(ptr.as_str(), "/a~1b/c");
    ///
    /// assert!(Pointer::parse("").unwrap().matches());
    /// assert!(Pointer::parse("missing/slash").is_err());
    /// ```
    ///
    /// ## Errors
    /// Returns [`ParseError::NoLeadingSlash`] if the expression is non-empty
    /// and does not start with `'/'`.
    pub fn parse(expr: impl AsRef<str>) -> Result<Self, ParseError> {
        let expr = expr.as_ref();
        if expr.is_empty() {
            return Ok(Self::empty());
        }
        if !expr.starts_with('/') {
            return Err(ParseError::NoLeadingSlash(expr.into()));
        }
        Ok(Self::compile(expr))
    }

    /// Compiles an expression known to start with `'/'`.
    fn compile(expr: &str) -> Self {
        let backing: Arc<str> = Arc::from(expr);
        let bytes = expr.as_bytes();
        // first pass: locate each token and decode any escape sequences,
        // accumulating on an explicit stack so pointer depth never becomes
        // recursion depth
        let mut tokens: Vec<(usize, Option<Arc<str>>)> = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let mut i = pos + 1;
            let mut decoded: Option<Vec<u8>> = None;
            while i < bytes.len() {
                let b = bytes[i];
                if b == b'/' {
                    break;
                }
                if b == token::ENC_PREFIX {
                    // switch to escape decoding: copy the clean prefix, then
                    // transcode the rest of the token. An escape pair
                    // consumes the character after the tilde even when that
                    // character is a slash, so `~/` does not end the token.
                    let buf = decoded.get_or_insert_with(|| bytes[pos + 1..i].to_vec());
                    i += 1;
                    if i < bytes.len() {
                        match bytes[i] {
                            token::TILDE_ENC => buf.push(b'~'),
                            token::SLASH_ENC => buf.push(b'/'),
                            other => {
                                buf.push(b'~');
                                buf.push(other);
                            }
                        }
                        i += 1;
                    } else {
                        buf.push(b'~');
                    }
                } else {
                    if let Some(buf) = decoded.as_mut() {
                        buf.push(b);
                    }
                    i += 1;
                }
            }
            // SAFETY: escape decoding only collapses or copies ASCII bytes;
            // multi-byte sequences pass through wholesale, so the buffer is
            // valid UTF-8.
            let decoded =
                decoded.map(|buf| unsafe { String::from_utf8_unchecked(buf) }.into());
            tokens.push((pos, decoded));
            pos = i;
        }
        // second pass: materialize the chain innermost-outward, every node
        // sharing the original expression as backing
        let mut ptr = Self::empty();
        for (offset, decoded) in tokens.into_iter().rev() {
            ptr = Self::from_segment(Segment::new(backing.clone(), offset, decoded, ptr));
        }
        ptr
    }

    /// Builds a pointer describing where a traversal currently is, from a
    /// parent-linked stack of [`TraversalContext`] frames.
    ///
    /// Object frames contribute their current field name (the empty string
    /// when a name is expected but absent); array frames contribute their
    /// current index. Root frames contribute an index only when
    /// `include_root` is set, for streams of multiple top-level values. An
    /// innermost frame that has not yet produced a path segment (e.g. an
    /// object between its `{` and the first key) describes its parent's
    /// location and is skipped.
    ///
    /// Returns the empty pointer when no frame qualifies.
    pub fn for_path<C>(context: Option<&C>, include_root: bool) -> Self
    where
        C: TraversalContext,
    {
        enum Record<'c> {
            Name(&'c str),
            Index(usize),
        }

        let Some(mut frame) = context else {
            return Self::empty();
        };
        if !frame.has_path_segment()
            && !(include_root
                && frame.kind() == ContainerKind::Root
                && frame.current_index().is_some())
        {
            match frame.parent() {
                Some(parent) => frame = parent,
                None => return Self::empty(),
            }
        }
        // innermost-to-outermost sweep over the frame stack
        let mut records: Vec<(Record<'_>, usize, Option<Arc<str>>)> = Vec::new();
        let mut cursor = Some(frame);
        while let Some(frame) = cursor {
            match frame.kind() {
                ContainerKind::Object => {
                    // a missing field name is recorded as the empty string
                    let name = frame.current_name().unwrap_or("");
                    records.push((Record::Name(name), 0, None));
                }
                ContainerKind::Array => {
                    let index = frame.current_index().unwrap_or(0);
                    records.push((Record::Index(index), 0, None));
                }
                ContainerKind::Root => {
                    if include_root {
                        let index = frame.current_index().unwrap_or(0);
                        records.push((Record::Index(index), 0, None));
                    }
                }
            }
            cursor = frame.parent();
        }
        if records.is_empty() {
            return Self::empty();
        }
        // root-to-leaf sweep: lay the escaped text into a single buffer,
        // fixing each record's offset within the final backing string
        let mut buf = String::new();
        for (record, offset, decoded) in records.iter_mut().rev() {
            *offset = buf.len();
            buf.push('/');
            match record {
                Record::Name(name) => match token::encode(*name) {
                    Cow::Borrowed(clean) => buf.push_str(clean),
                    Cow::Owned(escaped) => {
                        buf.push_str(&escaped);
                        *decoded = Some(Arc::from(*name));
                    }
                },
                Record::Index(index) => buf.push_str(index.to_string().as_str()),
            }
        }
        // leaf-to-root sweep: build the chain innermost-first onto the empty
        // terminator, all nodes sharing the buffer
        let backing: Arc<str> = buf.into();
        let mut ptr = Self::empty();
        for (_, offset, decoded) in records {
            ptr = Self::from_segment(Segment::new(backing.clone(), offset, decoded, ptr));
        }
        ptr
    }

    /// Returns `true` if this pointer has no remaining segments, i.e. it
    /// addresses the current value itself.
    pub fn matches(&self) -> bool {
        self.segment.is_none()
    }

    /// Returns the property-name form of this pointer's first segment, or
    /// `None` for the empty pointer.
    ///
    /// Every segment has a property form, including numeric ones:
    /// `Pointer::parse("/0")?.property()` is `Some("0")`.
    pub fn property(&self) -> Option<&str> {
        self.segment.as_deref().map(Segment::property)
    }

    /// Returns the array-index form of this pointer's first segment, if it
    /// has one.
    ///
    /// A segment has an index form only when its text is the canonical
    /// decimal rendering of a value in `0..=2^31-1`: no leading zeros, no
    /// sign, at most ten digits.
    pub fn index(&self) -> Option<u32> {
        self.segment.as_deref().and_then(|seg| seg.index)
    }

    /// Returns `true` if this pointer has a segment to match against an
    /// object property, i.e. it is not empty.
    pub fn may_match_property(&self) -> bool {
        self.segment.is_some()
    }

    /// Returns `true` if this pointer's first segment is usable as an array
    /// index.
    pub fn may_match_element(&self) -> bool {
        self.index().is_some()
    }

    /// Returns `true` if this pointer's first segment matches the given
    /// property name. Always `false` for the empty pointer.
    pub fn matches_property(&self, name: &str) -> bool {
        self.property() == Some(name)
    }

    /// Matches the first segment against a property name, returning the
    /// remainder of the pointer on success.
    ///
    /// ```rust
    /// # use chainptr::Pointer;
    /// let ptr = Pointer::parse("/foo/bar").unwrap();
    /// assert_eq!(ptr.match_property("foo").unwrap().as_str(), "/bar");
    /// assert!(ptr.match_property("qux").is_none());
    /// ```
    pub fn match_property(&self, name: &str) -> Option<&Pointer> {
        let seg = self.segment.as_deref()?;
        (seg.property() == name).then_some(&seg.next)
    }

    /// Returns `true` if this pointer's first segment matches the given
    /// array index.
    pub fn matches_element(&self, index: u32) -> bool {
        self.index() == Some(index)
    }

    /// Matches the first segment against an array index, returning the
    /// remainder of the pointer on success.
    pub fn match_element(&self, index: u32) -> Option<&Pointer> {
        let seg = self.segment.as_deref()?;
        (seg.index == Some(index)).then_some(&seg.next)
    }

    /// Returns the remainder of this pointer past its first segment, or
    /// `None` for the empty pointer.
    ///
    /// This is O(1) and allocation-free: the tail is part of this chain.
    pub fn tail(&self) -> Option<&Pointer> {
        self.segment.as_deref().map(|seg| &seg.next)
    }

    /// Returns the final single-segment pointer of this chain, or `None` for
    /// the empty pointer.
    ///
    /// ```rust
    /// # use chainptr::Pointer;
    /// let ptr = Pointer::parse("/a/b/c").unwrap();
    /// assert_eq!(ptr.last().unwrap().as_str(), "/c");
    /// ```
    pub fn last(&self) -> Option<&Pointer> {
        let mut found = None;
        let mut cursor = self;
        while let Some(seg) = cursor.segment.as_deref() {
            found = Some(cursor);
            cursor = &seg.next;
        }
        found
    }

    /// Returns this pointer with its final segment removed, or `None` for
    /// the empty pointer.
    ///
    /// The head of a single-segment pointer is the empty pointer. The result
    /// is computed on first use and cached; later calls return the cached
    /// chain.
    ///
    /// ```rust
    /// # use chainptr::Pointer;
    /// let ptr = Pointer::parse("/a/b/c").unwrap();
    /// assert_eq!(ptr.head().unwrap().as_str(), "/a/b");
    /// ```
    pub fn head(&self) -> Option<&Pointer> {
        let seg = self.segment.as_deref()?;
        Some(seg.head.get_or_init(|| Box::new(self.construct_head())))
    }

    /// Builds the head chain: every segment but the last, rebuilt onto a
    /// truncated copy of the backing string. Token text and index verdicts
    /// are reused; nothing is re-parsed.
    fn construct_head(&self) -> Pointer {
        let mut segments = self.collect();
        let Some(last) = segments.pop() else {
            return Self::empty();
        };
        if segments.is_empty() {
            return Self::empty();
        }
        let base = segments[0].offset;
        let backing: Arc<str> = Arc::from(&last.backing[base..last.offset]);
        Self::rebuild(&segments, &backing, base, Self::empty())
    }

    /// Concatenates two pointers.
    ///
    /// If either operand is empty the other is returned unchanged (a
    /// reference-count bump, no new chain). Otherwise the two string forms
    /// are joined and recompiled, which costs O(n) in the combined length;
    /// the chain is linked head-first, so a true in-place tail append would
    /// cost the same while being considerably easier to get wrong.
    pub fn append(&self, other: &Pointer) -> Pointer {
        if self.matches() {
            return other.clone();
        }
        if other.matches() {
            return self.clone();
        }
        let mut buf = String::with_capacity(self.len() + other.len());
        buf.push_str(self.as_str());
        buf.push_str(other.as_str());
        Self::compile(&buf)
    }

    /// Returns a new pointer with one more segment matching the given
    /// property name.
    ///
    /// The name is escaped as needed. Existing segments are carried over onto
    /// the extended backing string without re-parsing.
    ///
    /// ```rust
    /// # use chainptr::Pointer;
    /// let ptr = Pointer::empty().append_property("a/b");
    /// assert_eq!(ptr.as_str(), "/a~1b");
    /// assert_eq!(ptr.property(), Some("a/b"));
    /// ```
    pub fn append_property(&self, name: &str) -> Pointer {
        let encoded = token::encode(name);
        let mut buf = String::with_capacity(self.len() + encoded.len() + 1);
        buf.push_str(self.as_str());
        buf.push('/');
        buf.push_str(&encoded);
        let decoded = match &encoded {
            Cow::Borrowed(_) => None,
            Cow::Owned(_) => Some(Arc::from(name)),
        };
        self.extend(buf, decoded)
    }

    /// Returns a new pointer with one more segment matching the given array
    /// index.
    ///
    /// Decimal digits never need escaping. Indices above `2^31 - 1` still
    /// build a valid pointer, but the new segment matches as a property
    /// only, the same verdict compiling those digits would produce.
    pub fn append_index(&self, index: u32) -> Pointer {
        let digits = index.to_string();
        let mut buf = String::with_capacity(self.len() + digits.len() + 1);
        buf.push_str(self.as_str());
        buf.push('/');
        buf.push_str(&digits);
        self.extend(buf, None)
    }

    /// Grows this chain by one trailing segment whose text is already in
    /// place at the end of `buf`.
    fn extend(&self, buf: String, decoded: Option<Arc<str>>) -> Pointer {
        let tip_offset = self.len();
        let backing: Arc<str> = buf.into();
        let tip = Self::from_segment(Segment::new(
            backing.clone(),
            tip_offset,
            decoded,
            Self::empty(),
        ));
        let segments = self.collect();
        let base = segments.first().map_or(0, |seg| seg.offset);
        Self::rebuild(&segments, &backing, base, tip)
    }

    /// Extracts a string slice containing the entire encoded pointer.
    ///
    /// This is a view into the shared backing string, not a copy.
    pub fn as_str(&self) -> &str {
        self.segment.as_deref().map_or("", Segment::as_str)
    }

    /// Returns the length in bytes of the pointer's string form.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Returns `true` if the pointer's string form is `""`, i.e. it is the
    /// empty pointer.
    pub fn is_empty(&self) -> bool {
        self.segment.is_none()
    }

    /// Returns the number of segments in the pointer.
    pub fn count(&self) -> usize {
        self.tokens().count()
    }

    /// Returns an iterator over the decoded tokens of the pointer.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    pub(crate) fn split_first(&self) -> Option<(&str, &Pointer)> {
        self.segment
            .as_deref()
            .map(|seg| (seg.property(), &seg.next))
    }

    fn from_segment(segment: Arc<Segment>) -> Self {
        Self {
            segment: Some(segment),
        }
    }

    fn collect(&self) -> Vec<&Arc<Segment>> {
        let mut segments = Vec::new();
        let mut cursor = self;
        while let Some(seg) = cursor.segment.as_ref() {
            segments.push(seg);
            cursor = &seg.next;
        }
        segments
    }

    /// Rebuilds `segments` onto `backing`, terminating with `tip`. Offsets
    /// are shifted down by `base` so the outermost segment starts at zero.
    fn rebuild(
        segments: &[&Arc<Segment>],
        backing: &Arc<str>,
        base: usize,
        tip: Pointer,
    ) -> Pointer {
        let mut ptr = tip;
        for seg in segments.iter().rev() {
            ptr = Self::from_segment(seg.rebuilt(backing, base, ptr));
        }
        ptr
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Segment                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// One reference token plus the remainder of the pointer.
///
/// Invariant: `backing[offset..]` is exactly this node's own string form, for
/// every node of a chain. The raw token text is the byte range between this
/// node's slash and the start of the next node's string form; it is never
/// copied out of `backing`.
struct Segment {
    backing: Arc<str>,
    offset: usize,
    /// Decoded token text, present only when escape decoding changed it.
    decoded: Option<Arc<str>>,
    index: Option<u32>,
    next: Pointer,
    /// Chain with the final token removed, built on first use. Racing
    /// readers may build it twice; one box wins the compare-and-set and the
    /// other is dropped.
    head: OnceBox<Pointer>,
    /// FNV-1a of the string form; `0` means "not yet computed".
    hash: AtomicU32,
}

impl Segment {
    fn new(
        backing: Arc<str>,
        offset: usize,
        decoded: Option<Arc<str>>,
        next: Pointer,
    ) -> Arc<Self> {
        let mut segment = Self {
            backing,
            offset,
            decoded,
            index: None,
            next,
            head: OnceBox::new(),
            hash: AtomicU32::new(0),
        };
        segment.index = index::parse_index(segment.property());
        Arc::new(segment)
    }

    /// Shallow copy onto a different backing string, reusing the decoded
    /// token and index verdict.
    fn rebuilt(&self, backing: &Arc<str>, base: usize, next: Pointer) -> Arc<Self> {
        Arc::new(Self {
            backing: backing.clone(),
            offset: self.offset - base,
            decoded: self.decoded.clone(),
            index: self.index,
            next,
            head: OnceBox::new(),
            hash: AtomicU32::new(0),
        })
    }

    fn raw_token(&self) -> &str {
        let end = self
            .next
            .segment
            .as_deref()
            .map_or(self.backing.len(), |next| next.offset);
        &self.backing[self.offset + 1..end]
    }

    fn property(&self) -> &str {
        match &self.decoded {
            Some(decoded) => decoded,
            None => self.raw_token(),
        }
    }

    fn as_str(&self) -> &str {
        &self.backing[self.offset..]
    }

    fn hash_value(&self) -> u32 {
        let cached = self.hash.load(atomic::Ordering::Relaxed);
        if cached != 0 {
            return cached;
        }
        let hash = chain_hash(self.as_str());
        // the value is pure and the store is a single atomic publish, so a
        // racing reader at worst recomputes the same number
        self.hash.store(hash, atomic::Ordering::Relaxed);
        hash
    }
}

impl Drop for Segment {
    fn drop(&mut self) {
        // unlink the chain iteratively so deeply nested pointers cannot
        // overflow the stack on drop
        let mut next = mem::take(&mut self.next);
        while let Some(seg) = next.segment.take() {
            match Arc::try_unwrap(seg) {
                Ok(mut seg) => next = mem::take(&mut seg.next),
                // still shared; the remaining handle unlinks it later
                Err(_) => break,
            }
        }
    }
}

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a of the pointer's string form, with a computed `0` remapped
/// to `1` so that `0` stays free as the cache's "not yet computed" marker.
fn chain_hash(s: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in s.as_bytes() {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    if hash == 0 {
        1
    } else {
        hash
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 Trait impls                                  ║
║                                ¯¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

impl Default for Pointer {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Pointer {
    fn eq(&self, other: &Pointer) -> bool {
        // effective string forms only; backing buffers and offsets of equal
        // pointers routinely differ
        self.as_str() == other.as_str()
    }
}
impl Eq for Pointer {}

impl PartialOrd for Pointer {
    fn partial_cmp(&self, other: &Pointer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pointer {
    fn cmp(&self, other: &Pointer) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialEq<str> for Pointer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}
impl PartialEq<&str> for Pointer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
impl PartialEq<String> for Pointer {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}
impl PartialEq<Pointer> for str {
    fn eq(&self, other: &Pointer) -> bool {
        self == other.as_str()
    }
}
impl PartialEq<Pointer> for String {
    fn eq(&self, other: &Pointer) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialOrd<&str> for Pointer {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.as_str(), *other)
    }
}
impl PartialOrd<String> for Pointer {
    fn partial_cmp(&self, other: &String) -> Option<Ordering> {
        PartialOrd::partial_cmp(self.as_str(), other.as_str())
    }
}

impl Hash for Pointer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let value = match self.segment.as_deref() {
            Some(seg) => seg.hash_value(),
            None => chain_hash(""),
        };
        state.write_u32(value);
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Pointer {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
impl TryFrom<&str> for Pointer {
    type Error = ParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
impl TryFrom<String> for Pointer {
    type Error = ParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    serde                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "serde")]
impl serde::Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::{de::Error, Deserialize};
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}
