//! Imperative DOM widgets created at runtime.

pub mod notification;
