//! Workspace-level golden tests for the `seqsort` crates.
