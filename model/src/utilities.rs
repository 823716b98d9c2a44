use std::fmt;

/// A string of constant capacity that implements the Copy-trait.
/// Used for all identifiers read from the schedule data (stop ids, route ids,
/// service ids), so that nodes and edges stay cheap to copy around.
#[derive(Hash, Eq, PartialEq, Copy, Clone, PartialOrd, Ord)]
pub struct CopyStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> CopyStr<N> {
    pub fn from(string: &str) -> Self {
        let raw = string.as_bytes();
        let len = raw.len();
        if len > N {
            panic!("identifier is too long: {}", string);
        }

        let mut writable: [u8; N] = [0; N];
        let (writearea, _) = writable.split_at_mut(len);
        writearea.copy_from_slice(raw);

        CopyStr {
            bytes: writable,
            len,
        }
    }

    pub fn as_str(&self) -> &str {
        let (s, _) = self.bytes.split_at(self.len);
        std::str::from_utf8(s).expect("invalid utf8")
    }
}

impl<const N: usize> fmt::Display for CopyStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> fmt::Debug for CopyStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
