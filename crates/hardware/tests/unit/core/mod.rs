//! Datapath core tests.
