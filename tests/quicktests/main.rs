//! Property tests against the public API of the tree.

mod tree;
