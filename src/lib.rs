//! Package implement ordered-set indexes backed by binary search
//! trees.
//!
//! Following types implement an ordered-set for specific use cases:
//!
//! * [OTree] implements a plain ordered binary-search-tree, with no
//!   self-balancing.
//! * [OSet] implements a self-balancing ordered-set, using a
//!   [red-black tree][wiki-rbt].
//!
//! Red-black ordered-set for single threaded use case
//! --------------------------------------------------
//!
//! - Each entry in OSet instance correspond to a key.
//! - Parametrised over `key-type`.
//! - Insert and membership operations, via insert(), contains() api.
//! - Full table scan, to iterate over all keys in sort order.
//! - Tree stays balanced after every insert, height is bound by
//!   2·log2(n+1).
//! - Uses ownership model and borrow semantics to ensure safety.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Constructing a new [OSet] instance and using its API:
//!
//! ```
//! use oset::OSet;
//!
//! let mut index: OSet<u64> = OSet::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! index.insert(10);
//! index.insert(20);
//!
//! let n = index.len();
//! assert_eq!(n, 2);
//!
//! assert_eq!(index.contains(&10), true);
//! assert_eq!(index.contains(&30), false);
//!
//! let keys: Vec<u64> = index.iter().cloned().collect();
//! assert_eq!(keys, vec![10, 20]);
//! ```
//!
//! Rotations are driven by the rebalancing logic alone. Asking a
//! red-black index to rotate is always rejected, the operation would
//! silently break its coloring invariants:
//!
//! ```
//! use oset::OSet;
//!
//! let mut index: OSet<u64> = OSet::new();
//! index.insert(10);
//!
//! let root = index.root().unwrap();
//! assert_eq!(index.rotate_left(root).is_err(), true);
//! assert_eq!(index.rotate_right(root).is_err(), true);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red-black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(UnsupportedOp, msg: format!("rotation"));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, std::io::read(buf));
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err(Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

mod oset;
mod otree;
mod vertex;

pub use crate::oset::OSet;
pub use crate::otree::{Iter, OTree};
pub use crate::vertex::{Color, VertexId};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
    InvalidVertex(String, String),
    UnsupportedOp(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            InvalidVertex(p, msg) => write!(f, "{} InvalidVertex: {}", p, msg),
            UnsupportedOp(p, msg) => write!(f, "{} UnsupportedOp: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
