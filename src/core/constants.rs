//! A collection of constants.

/// Returned by out-of-bounds grid reads; never a connector.
pub const SENTINEL: char = '\0';

/// Rows are separated by this and nothing else.
pub const LINE_BREAK: char = '\n';

/// Square-corner junction marker
pub const PLUS: char = '+';
/// Rounded-corner junction marker
pub const STAR: char = '*';
/// Horizontal segment marker
pub const DASH: char = '-';
/// Vertical segment marker
pub const PIPE: char = '|';

/// `─`
pub const HORIZONTAL: char = '\u{2500}';
/// `│`
pub const VERTICAL: char = '\u{2502}';

/// First and last scalar of the Unicode "Box Drawing" block.
pub const BOX_DRAWING_FIRST: char = '\u{2500}';
pub const BOX_DRAWING_LAST: char = '\u{257F}';
